//! UI components.

pub mod canvas_host;
pub mod status_bar;
pub mod toolbar;
