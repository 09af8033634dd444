// UI module
// Contains layout and reusable dashboard components

pub mod components;
pub mod layout;

pub use components::*;
pub use layout::render_dashboard;
