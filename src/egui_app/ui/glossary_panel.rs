use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use eframe::egui::{self, RichText};

const GLOSSARY_COLUMNS: usize = 2;

impl EguiApp {
    /// Always-visible explanations of every form field.
    pub(super) fn render_glossary(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Medical Terms Explained").color(palette.text_primary));
        ui.add_space(8.0);
        let entries = view_model::glossary_entries();
        for row in entries.chunks(GLOSSARY_COLUMNS) {
            ui.columns(GLOSSARY_COLUMNS, |columns| {
                for (column, entry) in columns.iter_mut().zip(row) {
                    column.label(RichText::new(entry.label).strong().color(palette.accent_ice));
                    column.label(RichText::new(entry.description).color(palette.text_muted));
                }
            });
            ui.add_space(8.0);
        }
    }
}
