//! egui renderer for the prediction form.

mod form_panel;
mod glossary_panel;
mod results_panel;
pub mod style;

use std::time::Duration;

use crate::config::BackendConfig;
use crate::egui_app::controller::PredictorController;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText};

/// Minimum window size that keeps the form grid readable.
pub const MIN_VIEWPORT_SIZE: [f32; 2] = [640.0, 560.0];
const CONTENT_MAX_WIDTH: f32 = 880.0;
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: PredictorController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and kick off the optional launch status check.
    pub fn new(config: &BackendConfig) -> Self {
        let mut controller = PredictorController::new(config);
        controller.check_backend_status_on_launch();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::same(4)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 8.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(view_model::backend_caption(
                                self.controller.backend_url(),
                                self.controller.backend_url_source(),
                            ))
                            .color(palette.text_muted),
                        );
                    });
                });
            });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(
                RichText::new("Heart Disease Prediction")
                    .size(26.0)
                    .strong()
                    .color(palette.accent_ice),
            );
            ui.label(
                RichText::new("Enter patient details below to get a prediction.")
                    .color(palette.text_muted),
            );
            ui.add_space(12.0);
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        if self.controller.poll_jobs() > 0 {
            ctx.request_repaint();
        }
        if self.controller.is_prediction_in_progress()
            || self.controller.is_status_check_in_progress()
        {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }

        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            self.render_header(ui);
                            self.render_form(ui);
                            ui.add_space(12.0);
                            self.render_results(ui);
                            ui.add_space(16.0);
                            self.render_glossary(ui);
                            ui.add_space(16.0);
                        });
                    });
                });
        });
    }
}
