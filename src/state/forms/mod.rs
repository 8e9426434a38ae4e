//! Form domain layer
//!
//! Field types, the shared length rule, render counting, and the five
//! input-handling variants mounted as panels.

mod controlled;
mod field;
mod form_data;
mod library;
mod panel;
mod render_count;
mod schema;
mod uncontrolled;
mod validation;
mod variant;

pub use field::{Field, FieldValues};
pub use panel::FormPanel;
pub use render_count::{uses_light_text, Shade};
pub use validation::MIN_LENGTH;
pub use variant::{Acknowledgement, FormSettings, SubmitOutcome, VariantKind};
