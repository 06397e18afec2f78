//! Desktop front end: controller, UI state, view models and the egui renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
