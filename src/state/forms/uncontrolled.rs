//! Uncontrolled inputs: values are read from the input handles at submit

use super::field::{Field, FieldErrors, FieldValues, HostInputs};
use super::validation::validate;
use super::variant::{
    Acknowledgement, FormSettings, FormVariant, RenderRequest, SubmitOutcome, VariantKind,
};

#[derive(Debug)]
pub struct UncontrolledForm {
    errors: FieldErrors,
    min_length: usize,
    render: RenderRequest,
}

impl UncontrolledForm {
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            errors: FieldErrors::cleared(),
            min_length: settings.min_length,
            render: RenderRequest::default(),
        }
    }

    fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
        self.render.schedule();
    }
}

impl FormVariant for UncontrolledForm {
    fn kind(&self) -> VariantKind {
        VariantKind::Uncontrolled
    }

    fn on_change(&mut self, _field: Field, _inputs: &HostInputs) {}

    fn on_submit(&mut self, inputs: &HostInputs) -> SubmitOutcome {
        // Read straight from the handles; nothing was mirrored while typing
        let values = FieldValues::from_inputs(inputs);
        let errors = validate(&values, self.min_length);
        let is_valid = errors.is_clean();
        self.set_errors(errors);
        tracing::debug!("uncontrolled form valid: {is_valid}");

        if is_valid {
            SubmitOutcome::Accepted(Acknowledgement::from_values(&values))
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

    #[test]
    fn test_typing_does_not_schedule_render() {
        let mut form = UncontrolledForm::new(&FormSettings::default());
        let mut inputs = HostInputs::new();
        for c in "hello".chars() {
            inputs.username.push_char(c);
            form.on_change(Field::Username, &inputs);
        }
        form.on_blur(Field::Username, &inputs);
        assert!(!form.take_render_request());
    }

    #[test]
    fn test_submit_reads_handles() {
        let mut form = UncontrolledForm::new(&FormSettings::default());
        let mut inputs = HostInputs::new();
        inputs.username.set_value("admin");
        inputs.password.set_value("admin");

        match form.on_submit(&inputs) {
            SubmitOutcome::Accepted(ack) => {
                assert_eq!(ack.to_string(), "Username: admin, Password: admin")
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert!(form.take_render_request());
    }

    #[test]
    fn test_both_fields_short() {
        let mut form = UncontrolledForm::new(&FormSettings::default());
        let inputs = HostInputs::new();
        assert_eq!(form.on_submit(&inputs), SubmitOutcome::Rejected);
        assert!(form.visible_error(Field::Username).is_some());
        assert_eq!(
            form.visible_error(Field::Password),
            Some("Password must be at least 5 characters long")
        );
    }

    #[test]
    fn test_errors_clear_after_valid_resubmit() {
        let mut form = UncontrolledForm::new(&FormSettings::default());
        let mut inputs = HostInputs::new();
        inputs.username.set_value("abc");
        inputs.password.set_value("abcdef");
        form.on_submit(&inputs);
        assert!(form.visible_error(Field::Username).is_some());

        inputs.username.set_value("abcdef");
        form.on_submit(&inputs);
        assert!(form.visible_error(Field::Username).is_none());
    }
}
