use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::knn::Label;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub class_a: Color32,
    pub class_b: Color32,
    pub query_unknown: Color32,
    pub highlight: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        panel_outline: Color32::from_rgb(38, 42, 48),
        grid_soft: Color32::from_rgb(30, 32, 36),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        class_a: Color32::from_rgb(222, 84, 72),
        class_b: Color32::from_rgb(72, 132, 232),
        query_unknown: Color32::from_rgb(102, 196, 120),
        highlight: Color32::from_rgb(250, 214, 92),
    }
}

/// Fill color for a point; `None` is an unclassified query.
pub fn label_color(palette: &Palette, label: Option<Label>) -> Color32 {
    match label {
        Some(Label::A) => palette.class_a,
        Some(Label::B) => palette.class_b,
        None => palette.query_unknown,
    }
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.highlight);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn canvas_border() -> Stroke {
    Stroke::new(2.0, palette().panel_outline)
}

pub fn point_outline() -> Stroke {
    Stroke::new(1.0, Color32::from_rgb(51, 51, 51))
}

pub fn query_outline() -> Stroke {
    Stroke::new(2.0, Color32::from_rgb(17, 17, 17))
}

pub fn neighbor_ring() -> Stroke {
    Stroke::new(2.0, palette().highlight)
}

pub fn neighbor_link() -> Stroke {
    Stroke::new(1.0, with_alpha(palette().highlight, 140))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_to_distinct_colors() {
        let palette = palette();
        let a = label_color(&palette, Some(Label::A));
        let b = label_color(&palette, Some(Label::B));
        let unknown = label_color(&palette, None);
        assert_ne!(a, b);
        assert_ne!(a, unknown);
        assert_ne!(b, unknown);
    }
}
