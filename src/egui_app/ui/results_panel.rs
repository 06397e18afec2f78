use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, ResultAreaView, ResultPanelView};
use eframe::egui::{self, Frame, Margin, RichText, Stroke};

impl EguiApp {
    /// Render the error banner or the two model verdicts, if any.
    pub(super) fn render_results(&mut self, ui: &mut egui::Ui) {
        match view_model::result_area(&self.controller.ui.prediction) {
            ResultAreaView::Empty => {}
            ResultAreaView::Error(message) => render_error_banner(ui, &message),
            ResultAreaView::Prediction(panels) => render_result_card(ui, &panels),
        }
    }
}

fn render_error_banner(ui: &mut egui::Ui, message: &str) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.danger_fill)
        .stroke(Stroke::new(1.0, palette.danger))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(palette.danger).strong());
        });
}

fn render_result_card(ui: &mut egui::Ui, panels: &[ResultPanelView; 2]) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_tertiary)
        .stroke(style::section_border())
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(RichText::new("Prediction Results").color(palette.text_primary));
            ui.add_space(8.0);
            ui.columns(panels.len(), |columns| {
                for (column, panel) in columns.iter_mut().zip(panels.iter()) {
                    render_result_panel(column, panel);
                }
            });
        });
}

fn render_result_panel(ui: &mut egui::Ui, panel: &ResultPanelView) {
    let (accent, fill) = style::risk_colors(panel.tone);
    Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, accent))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(panel.model_label).strong());
                ui.add_space(4.0);
                ui.label(RichText::new(panel.verdict).size(20.0).strong().color(accent));
            });
        });
}
