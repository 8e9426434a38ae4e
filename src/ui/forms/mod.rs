//! Form rendering module
//!
//! - `field_renderer`: input and inline error rendering
//! - `panel`: a whole form panel with badge, inputs and submit button

mod field_renderer;
mod panel;

pub use panel::{draw_panel, PANEL_HEIGHT};
