use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use crate::form::{FieldDescriptor, FieldKind};
use eframe::egui::{self, Frame, Margin, RichText};

const INPUT_WIDTH: f32 = 260.0;

impl EguiApp {
    /// Render the field grid and the submit button.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_tertiary)
            .stroke(style::section_border())
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let mut edits: Vec<(&'static str, String)> = Vec::new();
                egui::Grid::new("patient_form_grid")
                    .num_columns(3)
                    .spacing([12.0, 10.0])
                    .show(ui, |ui| {
                        for (descriptor, value) in self.controller.form().iter() {
                            if let Some(edited) = render_field(ui, descriptor, value) {
                                edits.push((descriptor.name, edited));
                            }
                            ui.end_row();
                        }
                    });
                for (name, value) in edits {
                    self.controller.set_field(name, value).ok();
                }

                ui.add_space(14.0);
                let loading = self.controller.ui.prediction.loading;
                let button = egui::Button::new(
                    RichText::new(view_model::submit_button_label(loading))
                        .size(16.0)
                        .strong(),
                )
                .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add_enabled(!loading, button).clicked() {
                    self.controller.submit();
                }
            });
    }
}

/// Draw one labeled input. Returns the new raw value when the user changed it.
fn render_field(ui: &mut egui::Ui, descriptor: &FieldDescriptor, value: &str) -> Option<String> {
    let palette = style::palette();
    ui.label(RichText::new(descriptor.label).color(palette.text_primary));
    ui.label(RichText::new(view_model::FIELD_INFO_MARKER).color(palette.text_muted))
        .on_hover_text(descriptor.description);

    let mut current = value.to_string();
    let changed = match descriptor.kind {
        FieldKind::Numeric => ui
            .add(
                egui::TextEdit::singleline(&mut current)
                    .hint_text(view_model::numeric_hint(descriptor))
                    .desired_width(INPUT_WIDTH),
            )
            .changed(),
        FieldKind::Enumerated => {
            egui::ComboBox::from_id_salt(descriptor.name)
                .selected_text(view_model::selected_option_label(descriptor, value))
                .width(INPUT_WIDTH)
                .show_ui(ui, |ui| {
                    for option in descriptor.options {
                        ui.selectable_value(&mut current, option.value.to_string(), option.label);
                    }
                });
            current != value
        }
    };
    changed.then_some(current)
}
