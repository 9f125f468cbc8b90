//! GUI module - User interface components

mod app;
mod control_panel;
mod pages;

pub use app::SkylineApp;
pub use control_panel::{ControlPanel, Page, UserSettings};
