use super::EguiApp;
use super::style;
use eframe::egui::{self, Frame, RichText};

impl EguiApp {
    pub(super) fn render_controls(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("controls_bar")
            .frame(Frame::new().fill(palette.bg_tertiary).inner_margin(6.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("KNN Visualizer").strong());
                    ui.separator();
                    self.render_k_selector(ui);
                    let classify = ui
                        .add_enabled(self.controller.can_classify(), egui::Button::new("Classify"))
                        .on_hover_text("Label the query by majority vote (Enter)");
                    if classify.clicked() {
                        self.controller.classify();
                    }
                    if ui
                        .button("Re-scatter")
                        .on_hover_text("Generate a new training set (R)")
                        .clicked()
                    {
                        self.controller.rescatter();
                    }
                    ui.separator();
                    ui.checkbox(&mut self.controller.ui.plot.show_neighbor_links, "Links");
                    self.render_legend(ui);
                });
            });
    }

    fn render_k_selector(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.controller.selected_k();
        let options = self.controller.k_options().to_vec();
        ui.label("k");
        egui::ComboBox::from_id_salt("k_select")
            .selected_text(selected.to_string())
            .width(48.0)
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(&mut selected, option, option.to_string());
                }
            });
        self.controller.set_k(selected);
    }

    fn render_legend(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(result) = self.controller.last_classification() {
                let color = style::label_color(&palette, Some(result.label));
                ui.label(
                    RichText::new(format!(
                        "{} wins {}-{}",
                        result.label,
                        result.tally.a.max(result.tally.b),
                        result.tally.a.min(result.tally.b)
                    ))
                    .color(color)
                    .strong(),
                );
                ui.separator();
            }
            ui.label(RichText::new("● B").color(palette.class_b));
            ui.label(RichText::new("● A").color(palette.class_a));
        });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(4.0))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(" {} ", status.badge_label))
                            .background_color(status.badge_color)
                            .color(egui::Color32::WHITE),
                    );
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let points = self.controller.training_set().len();
                        let k = self.controller.selected_k();
                        ui.label(
                            RichText::new(format!("{points} points · k = {k}"))
                                .color(palette.text_muted),
                        );
                    });
                });
            });
    }

    pub(super) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (classify, rescatter) =
            ctx.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::R)));
        if classify && self.controller.can_classify() {
            self.controller.classify();
        }
        if rescatter {
            self.controller.rescatter();
        }
    }
}
