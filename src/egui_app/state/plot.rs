/// Interaction state for the scatter canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotUiState {
    /// Training point under the pointer, by index.
    pub hovered_point: Option<usize>,
    /// Draw lines from the query to each selected neighbor.
    pub show_neighbor_links: bool,
}

impl Default for PlotUiState {
    fn default() -> Self {
        Self {
            hovered_point: None,
            show_neighbor_links: true,
        }
    }
}
