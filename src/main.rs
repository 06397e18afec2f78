#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based heart disease prediction form.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use heartcheck::config;
use heartcheck::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use heartcheck::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let backend = config::load_backend_config();
    match &backend {
        Ok(config) => tracing::info!(
            "Prediction backend: {} ({:?})",
            config.base_url,
            config.url_source
        ),
        Err(err) => tracing::error!("Invalid backend configuration: {err}"),
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Heart Disease Prediction")
        .with_inner_size([960.0, 860.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Heart Disease Prediction",
        native_options,
        Box::new(move |_cc| match backend {
            Ok(config) => Ok(Box::new(EguiApp::new(&config))),
            Err(err) => Ok(Box::new(LaunchError {
                message: format!("Failed to load config: {err}"),
            })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
