//! Schema-validated form with per-field subscriptions
//!
//! Field values live in a store owned by the form rather than in component
//! state. The component only hears about a field when its error changes, or
//! when the form is submitted, which keeps re-renders to a minimum.

use super::field::{Field, FieldErrors, FieldValues, HostInputs};
use super::validation::{rule_set, FieldRule};
use super::variant::{
    Acknowledgement, FormSettings, FormVariant, RenderRequest, SubmitOutcome, VariantKind,
};

#[derive(Debug)]
pub struct SchemaForm {
    store: FieldValues,
    rules: Vec<FieldRule>,
    errors: FieldErrors,
    submit_count: u32,
    render: RenderRequest,
}

impl SchemaForm {
    pub fn new(settings: &FormSettings) -> Self {
        Self::with_rules(rule_set(settings.min_length))
    }

    pub fn with_rules(rules: Vec<FieldRule>) -> Self {
        Self {
            store: FieldValues::new(),
            rules,
            errors: FieldErrors::cleared(),
            submit_count: 0,
            render: RenderRequest::default(),
        }
    }

    #[allow(dead_code)]
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    fn evaluate(&self, field: Field) -> Option<String> {
        let value = self.store.get(field);
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .find_map(|rule| rule.check(value))
            .map(str::to_string)
    }

    fn resolve(&self) -> FieldErrors {
        let mut errors = FieldErrors::cleared();
        for field in Field::ALL {
            if let Some(message) = self.evaluate(field) {
                errors.set(field, message);
            }
        }
        errors
    }
}

impl FormVariant for SchemaForm {
    fn kind(&self) -> VariantKind {
        VariantKind::Schema
    }

    fn on_change(&mut self, field: Field, inputs: &HostInputs) {
        self.store.set(field, inputs.value(field));

        // Re-validation on change only starts after the first submit
        if self.submit_count == 0 {
            return;
        }
        let next = self.evaluate(field);
        if next.as_deref() != self.errors.message(field) {
            self.errors.set(field, next.unwrap_or_default());
            self.render.schedule();
        }
    }

    fn on_submit(&mut self, _inputs: &HostInputs) -> SubmitOutcome {
        self.submit_count += 1;
        self.errors = self.resolve();
        self.render.schedule();

        if self.errors.is_clean() {
            SubmitOutcome::Accepted(Acknowledgement::from_values(&self.store))
        } else {
            SubmitOutcome::Rejected
        }
    }

    fn visible_error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    fn take_render_request(&mut self) -> bool {
        self.render.take()
    }
}
