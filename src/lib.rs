//! Library exports shared by the desktop app, the CLI and the tests.
/// Application directory resolution.
pub mod app_dirs;
/// Backend settings from `config.toml` and the environment.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Clinical field catalog, form state and submission encoding.
pub mod form;
mod http_client;
/// Tracing setup.
pub mod logging;
/// Client for the remote prediction service.
pub mod prediction_gateway;
