use super::EguiApp;
use super::plot_math::{self, PlotTransform};
use super::style;
use eframe::egui::{self, Align2, FontId, StrokeKind};

const POINT_RADIUS: f32 = 8.0;
const QUERY_RADIUS: f32 = 10.0;
const NEIGHBOR_RING_RADIUS: f32 = 12.0;
const HOVER_RADIUS: f32 = 10.0;
const POINT_ALPHA: u8 = 178;

impl EguiApp {
    pub(super) fn render_plot(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let available = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(available, egui::Sense::click());
        let transform = PlotTransform::fit(rect, self.controller.canvas_size());
        let world_rect = transform.world_rect();
        let painter = ui.painter_at(rect);

        painter.rect_filled(world_rect, 0.0, palette.bg_primary);
        painter.rect_stroke(world_rect, 0.0, style::canvas_border(), StrokeKind::Outside);

        if response.clicked() {
            if let Some((x, y)) = response
                .interact_pointer_pos()
                .and_then(|pos| transform.to_world(pos))
            {
                self.controller.place_query(x, y);
            }
        }

        let screen_points: Vec<egui::Pos2> = self
            .controller
            .training_set()
            .iter()
            .map(|point| transform.to_screen(point.x, point.y))
            .collect();
        self.controller.ui.plot.hovered_point = plot_math::find_hover_point(
            screen_points.iter().copied(),
            response.hover_pos(),
            HOVER_RADIUS,
        );

        let query_pos = self
            .controller
            .query()
            .map(|query| (transform.to_screen(query.x, query.y), query.label));

        if let (Some((query_screen, _)), true) =
            (query_pos, self.controller.ui.plot.show_neighbor_links)
        {
            for &idx in self.controller.neighbors() {
                if let Some(pos) = screen_points.get(idx) {
                    painter.line_segment([query_screen, *pos], style::neighbor_link());
                }
            }
        }

        for (point, pos) in self.controller.training_set().iter().zip(&screen_points) {
            let color = style::label_color(&palette, Some(point.label));
            let fill = style::with_alpha(color, POINT_ALPHA);
            painter.circle_filled(*pos, POINT_RADIUS, fill);
            painter.circle_stroke(*pos, POINT_RADIUS, style::point_outline());
        }

        for &idx in self.controller.neighbors() {
            if let Some(pos) = screen_points.get(idx) {
                painter.circle_stroke(*pos, NEIGHBOR_RING_RADIUS, style::neighbor_ring());
            }
        }

        if let Some((pos, label)) = query_pos {
            painter.circle_filled(pos, QUERY_RADIUS, style::label_color(&palette, label));
            painter.circle_stroke(pos, QUERY_RADIUS, style::query_outline());
        }

        self.render_hover_readout(&painter, &screen_points, palette.text_primary);

        if self.controller.query().is_none() {
            painter.text(
                world_rect.center_bottom() - egui::vec2(0.0, 12.0),
                Align2::CENTER_BOTTOM,
                "Click to place a query point",
                FontId::proportional(13.0),
                palette.text_muted,
            );
        }
    }

    fn render_hover_readout(
        &self,
        painter: &egui::Painter,
        screen_points: &[egui::Pos2],
        color: egui::Color32,
    ) {
        let Some(idx) = self.controller.ui.plot.hovered_point else {
            return;
        };
        let (Some(point), Some(pos)) = (
            self.controller.training_set().get(idx),
            screen_points.get(idx),
        ) else {
            return;
        };
        let rank = self
            .controller
            .neighbors()
            .iter()
            .position(|&neighbor| neighbor == idx)
            .map(|rank| format!(", neighbor #{}", rank + 1))
            .unwrap_or_default();
        painter.text(
            *pos + egui::vec2(POINT_RADIUS + 4.0, -POINT_RADIUS - 4.0),
            Align2::LEFT_BOTTOM,
            format!("#{idx} class {} ({:.0}, {:.0}){rank}", point.label, point.x, point.y),
            FontId::monospace(12.0),
            color,
        );
    }
}
