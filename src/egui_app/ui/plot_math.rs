use eframe::egui;

/// Maps the square world `[0, world_size]²` onto the largest centered square in a rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PlotTransform {
    pub origin: egui::Pos2,
    pub scale: f32,
    pub world_size: f64,
}

impl PlotTransform {
    pub(crate) fn fit(rect: egui::Rect, world_size: f64) -> Self {
        let side = rect.width().min(rect.height()).max(1.0);
        let world = world_size.max(f64::EPSILON);
        let origin = egui::pos2(
            rect.center().x - side * 0.5,
            rect.center().y - side * 0.5,
        );
        Self {
            origin,
            scale: side / world as f32,
            world_size: world,
        }
    }

    /// Screen rect covered by the world square.
    pub(crate) fn world_rect(&self) -> egui::Rect {
        let side = self.world_size as f32 * self.scale;
        egui::Rect::from_min_size(self.origin, egui::vec2(side, side))
    }

    pub(crate) fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + x as f32 * self.scale,
            self.origin.y + y as f32 * self.scale,
        )
    }

    /// World coordinates for a screen position, or `None` outside the world square.
    pub(crate) fn to_world(&self, pos: egui::Pos2) -> Option<(f64, f64)> {
        if !self.world_rect().contains(pos) {
            return None;
        }
        let x = f64::from((pos.x - self.origin.x) / self.scale);
        let y = f64::from((pos.y - self.origin.y) / self.scale);
        Some((x, y))
    }
}

/// Index of the point closest to `pointer` within `radius` screen pixels.
pub(crate) fn find_hover_point(
    screen_points: impl Iterator<Item = egui::Pos2>,
    pointer: Option<egui::Pos2>,
    radius: f32,
) -> Option<usize> {
    let pointer = pointer?;
    let limit = radius * radius;
    screen_points
        .enumerate()
        .map(|(idx, pos)| (idx, pos.distance_sq(pointer)))
        .filter(|(_, dist)| *dist <= limit)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(idx, _)| idx)
}
