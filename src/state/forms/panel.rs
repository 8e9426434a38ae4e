//! One mounted form: host inputs, a variant and its render counter

use super::controlled::ControlledForm;
use super::field::{Field, FieldValues, HostInputs};
use super::form_data::FormDataForm;
use super::library::LibraryForm;
use super::render_count::RenderCounter;
use super::schema::SchemaForm;
use super::uncontrolled::UncontrolledForm;
use super::variant::{Acknowledgement, FormSettings, FormVariant, SubmitOutcome, VariantKind};

/// Build the variant implementing `kind`
pub fn build_variant(kind: VariantKind, settings: &FormSettings) -> Box<dyn FormVariant> {
    match kind {
        VariantKind::Controlled => Box::new(ControlledForm::new(settings)),
        VariantKind::Uncontrolled => Box::new(UncontrolledForm::new(settings)),
        VariantKind::Schema => Box::new(SchemaForm::new(settings)),
        VariantKind::Library => Box::new(LibraryForm::new(settings)),
        VariantKind::FormData => Box::new(FormDataForm::new(settings)),
    }
}

/// A form component instance as it sits on screen
#[derive(Debug)]
pub struct FormPanel {
    inputs: HostInputs,
    variant: Box<dyn FormVariant>,
    counter: RenderCounter,
    /// The first render after mount is always due
    mount_pending: bool,
}

impl FormPanel {
    pub fn mount(kind: VariantKind, settings: &FormSettings) -> Self {
        Self {
            inputs: HostInputs::new(),
            variant: build_variant(kind, settings),
            counter: RenderCounter::new(),
            mount_pending: true,
        }
    }

    pub fn kind(&self) -> VariantKind {
        self.variant.kind()
    }

    pub fn counter(&self) -> &RenderCounter {
        &self.counter
    }

    pub fn value(&self, field: Field) -> &str {
        self.inputs.value(field)
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        self.variant.visible_error(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.variant.is_submitting()
    }

    pub fn type_char(&mut self, field: Field, c: char) {
        self.inputs.get_mut(field).push_char(c);
        self.variant.on_change(field, &self.inputs);
    }

    /// Delete the last character; no change event when the input was empty
    pub fn backspace(&mut self, field: Field) {
        if self.inputs.get_mut(field).pop_char() {
            self.variant.on_change(field, &self.inputs);
        }
    }

    pub fn blur(&mut self, field: Field) {
        self.variant.on_blur(field, &self.inputs);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.variant.on_submit(&self.inputs)
    }

    pub fn finish_submission(&mut self, values: FieldValues) -> Option<Acknowledgement> {
        self.variant.finish_submission(values)
    }

    /// Run this panel's part of a render pass. Returns true when it rendered.
    pub fn render_pass(&mut self) -> bool {
        let requested = self.variant.take_render_request();
        let due = std::mem::take(&mut self.mount_pending) || requested;
        if due {
            self.counter.commit();
        }
        due
    }
}
