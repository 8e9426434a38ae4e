//! Controlled inputs: every keystroke is mirrored into component state

use super::field::{Field, FieldErrors, FieldValues, HostInputs};
use super::validation::validate;
use super::variant::{
    Acknowledgement, FormSettings, FormVariant, RenderRequest, SubmitOutcome, VariantKind,
};

/// Mirrors both inputs into `form_data` on change, so the whole component
/// re-renders per keystroke. Inputs keep showing the host text; the state
/// mirror only drives validation.
#[derive(Debug)]
pub struct ControlledForm {
    form_data: FieldValues,
    errors: FieldErrors,
    min_length: usize,
    render: RenderRequest,
}

impl ControlledForm {
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            form_data: FieldValues::new(),
            errors: FieldErrors::cleared(),
            min_length: settings.min_length,
            render: RenderRequest::default(),
        }
    }

    #[allow(dead_code)]
    pub fn form_data(&self) -> &FieldValues {
        &self.form_data
    }

    fn set_form_data(&mut self, field: Field, value: &str) {
        self.form_data.set(field, value);
        self.render.schedule();
    }

    fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
        self.render.schedule();
    }
}

impl FormVariant for ControlledForm {
    fn kind(&self) -> VariantKind {
        VariantKind::Controlled
    }

    fn on_change(&mut self, field: Field, inputs: &HostInputs) {
        self.set_form_data(field, inputs.value(field));
    }

    fn on_submit(&mut self, _inputs: &HostInputs) -> SubmitOutcome {
        let errors = validate(&self.form_data, self.min_length);
        let is_valid = errors.is_clean();
        self.set_errors(errors);
        if is_valid {
            SubmitOutcome::Accepted(Acknowledgement::from_values(&self.form_data))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut ControlledForm, inputs: &mut HostInputs, field: Field, text: &str) {
        for c in text.chars() {
            inputs.get_mut(field).push_char(c);
            form.on_change(field, inputs);
        }
    }

    #[test]
    fn test_each_keystroke_schedules_render() {
        let mut form = ControlledForm::new(&FormSettings::default());
        let mut inputs = HostInputs::new();
        inputs.username.push_char('a');
        form.on_change(Field::Username, &inputs);
        assert!(form.take_render_request());
        assert!(!form.take_render_request());
    }

    #[test]
    fn test_state_mirrors_host_input() {
        let mut form = ControlledForm::new(&FormSettings::default());
        let mut inputs = HostInputs::new();
        type_into(&mut form, &mut inputs, Field::Password, "secret");
        assert_eq!(form.form_data().get(Field::Password), "secret");
    }

    #[test]
    fn test_valid_submit_acknowledges_state_values() {
        let mut form = ControlledForm::new(&FormSettings::default());
        let mut inputs = HostInputs::new();
        type_into(&mut form, &mut inputs, Field::Username, "admin");
        type_into(&mut form, &mut inputs, Field::Password, "admin");

        let outcome = form.on_submit(&inputs);

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted(Acknowledgement {
                username: "admin".to_string(),
                password: "admin".to_string(),
            })
        );
        assert!(form.visible_error(Field::Username).is_none());
        assert!(form.visible_error(Field::Password).is_none());
    }

    #[test]
    fn test_short_username_rejected() {
        let mut form = ControlledForm::new(&FormSettings::default());
        let mut inputs = HostInputs::new();
        type_into(&mut form, &mut inputs, Field::Username, "abcd");
        type_into(&mut form, &mut inputs, Field::Password, "abcde");
        form.take_render_request();

        assert_eq!(form.on_submit(&inputs), SubmitOutcome::Rejected);
        assert_eq!(
            form.visible_error(Field::Username),
            Some("Username must be at least 5 characters long")
        );
        assert!(form.visible_error(Field::Password).is_none());
        assert!(form.take_render_request());
    }
}
