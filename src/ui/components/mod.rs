//! Reusable UI components

mod button;
mod dialog;
mod render_badge;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::render_alert_dialog;
pub use render_badge::render_render_badge;
