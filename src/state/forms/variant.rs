//! The contract shared by the five form variants

use super::field::{Field, FieldValues, HostInputs};
use std::fmt;
use std::time::Duration;

/// Which input-handling strategy a form demonstrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Controlled,
    Uncontrolled,
    Schema,
    Library,
    FormData,
}

impl VariantKind {
    /// Display order on screen
    pub const ALL: [VariantKind; 5] = [
        VariantKind::Controlled,
        VariantKind::Uncontrolled,
        VariantKind::Schema,
        VariantKind::Library,
        VariantKind::FormData,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Controlled => "Controlled Inputs Form",
            Self::Uncontrolled => "Uncontrolled Inputs Form",
            Self::Schema => "Schema Form / Field Subscriptions",
            Self::Library => "Form-State Library",
            Self::FormData => "FormData()",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Controlled => "These inputs will cause rerenders on every keystroke",
            Self::Schema => "These inputs will have minimum rerenders",
            Self::Uncontrolled | Self::Library | Self::FormData => {
                "These inputs will not cause rerenders"
            }
        }
    }

    /// Reference documentation for the technique
    pub fn doc_url(&self) -> &'static str {
        match self {
            Self::Controlled => "https://legacy.reactjs.org/docs/forms.html#controlled-components",
            Self::Uncontrolled => "https://legacy.reactjs.org/docs/uncontrolled-components.html",
            Self::Schema => "https://react-hook-form.com/get-started",
            Self::Library => "https://formik.org/docs/overview",
            Self::FormData => "https://developer.mozilla.org/en-US/docs/Web/API/FormData/FormData",
        }
    }

    /// Whether Enter inside an input submits. Only inputs wrapped in a form
    /// element get implicit submission.
    pub fn submits_on_enter(&self) -> bool {
        matches!(self, Self::Schema | Self::Library | Self::FormData)
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Successful submission, surfaced to the user as an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub username: String,
    pub password: String,
}

impl Acknowledgement {
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            username: values.get(Field::Username).to_string(),
            password: values.get(Field::Password).to_string(),
        }
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}, Password: {}", self.username, self.password)
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Acknowledgement),
    Rejected,
    /// Valid, but the acknowledgement arrives after `delay`
    Deferred { values: FieldValues, delay: Duration },
    /// Submit is disabled right now
    Ignored,
}

/// Pending re-render flag, set by state setters and consumed by the render pass
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderRequest(bool);

impl RenderRequest {
    pub fn schedule(&mut self) {
        self.0 = true;
    }

    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }
}

/// Knobs shared by every variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub min_length: usize,
    pub submit_delay: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            min_length: super::validation::MIN_LENGTH,
            submit_delay: Duration::from_millis(400),
        }
    }
}

/// One input-handling strategy. The panel owns the host inputs and forwards
/// events; the variant decides what state to keep and when to re-render.
pub trait FormVariant: fmt::Debug + Send {
    fn kind(&self) -> VariantKind;

    /// The host input for `field` changed
    fn on_change(&mut self, field: Field, inputs: &HostInputs);

    /// Focus left the host input for `field`
    fn on_blur(&mut self, _field: Field, _inputs: &HostInputs) {}

    fn on_submit(&mut self, inputs: &HostInputs) -> SubmitOutcome;

    /// Complete a submission that returned `Deferred`
    fn finish_submission(&mut self, _values: FieldValues) -> Option<Acknowledgement> {
        None
    }

    /// Message currently shown under `field`
    fn visible_error(&self, field: Field) -> Option<&str>;

    fn is_submitting(&self) -> bool {
        false
    }

    /// Whether a re-render was scheduled since the last render pass
    fn take_render_request(&mut self) -> bool;
}
