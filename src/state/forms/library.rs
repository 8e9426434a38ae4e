//! Library-managed form state
//!
//! `FormLibrary` owns values, errors, touched flags and the submitting flag,
//! and validates through a user-supplied pure function. The host component
//! hands everything to the library, so the host itself never re-renders after
//! mount. A valid submit is acknowledged only after a simulated delay, which
//! the app runs as a cancellable task.

use super::field::{Field, FieldErrors, FieldValues, HostInputs};
use super::validation::validate;
use super::variant::{Acknowledgement, FormSettings, FormVariant, SubmitOutcome, VariantKind};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

/// Pure validation: field values in, per-field messages out
pub type ValidateFn = Box<dyn Fn(&FieldValues) -> FieldErrors + Send>;

pub struct FormLibrary {
    values: FieldValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    is_submitting: bool,
    validate: ValidateFn,
}

impl fmt::Debug for FormLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormLibrary")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("is_submitting", &self.is_submitting)
            .finish_non_exhaustive()
    }
}

impl FormLibrary {
    pub fn new(validate: ValidateFn) -> Self {
        Self {
            values: FieldValues::new(),
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            is_submitting: false,
            validate,
        }
    }

    #[allow(dead_code)]
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Error for a field regardless of whether it was touched
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    fn run_validation(&mut self) {
        self.errors = (self.validate)(&self.values);
    }

    pub fn handle_change(&mut self, field: Field, value: &str) {
        self.values.set(field, value);
        self.run_validation();
    }

    pub fn handle_blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.run_validation();
    }

    /// Touch every field and validate. On success the form enters the
    /// submitting state and the values to submit are returned.
    pub fn handle_submit(&mut self) -> Result<FieldValues, FieldErrors> {
        self.touched.extend(Field::ALL);
        self.run_validation();
        if self.errors.is_clean() {
            self.is_submitting = true;
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }
}

/// Host component wrapping a `FormLibrary`
#[derive(Debug)]
pub struct LibraryForm {
    library: FormLibrary,
    submit_delay: Duration,
}

impl LibraryForm {
    pub fn new(settings: &FormSettings) -> Self {
        let min_length = settings.min_length;
        Self {
            library: FormLibrary::new(Box::new(move |values: &FieldValues| {
                validate(values, min_length)
            })),
            submit_delay: settings.submit_delay,
        }
    }

    #[allow(dead_code)]
    pub fn library(&self) -> &FormLibrary {
        &self.library
    }
}

impl FormVariant for LibraryForm {
    fn kind(&self) -> VariantKind {
        VariantKind::Library
    }

    fn on_change(&mut self, field: Field, inputs: &HostInputs) {
        self.library.handle_change(field, inputs.value(field));
    }

    fn on_blur(&mut self, field: Field, _inputs: &HostInputs) {
        self.library.handle_blur(field);
    }

    fn on_submit(&mut self, _inputs: &HostInputs) -> SubmitOutcome {
        if self.library.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        match self.library.handle_submit() {
            Ok(values) => SubmitOutcome::Deferred {
                values,
                delay: self.submit_delay,
            },
            Err(_) => SubmitOutcome::Rejected,
        }
    }

    fn finish_submission(&mut self, values: FieldValues) -> Option<Acknowledgement> {
        self.library.set_submitting(false);
        Some(Acknowledgement::from_values(&values))
    }

    fn visible_error(&self, field: Field) -> Option<&str> {
        if self.library.is_touched(field) {
            self.library.error(field)
        } else {
            None
        }
    }

    fn is_submitting(&self) -> bool {
        self.library.is_submitting()
    }

    fn take_render_request(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut LibraryForm, inputs: &mut HostInputs, field: Field, text: &str) {
        for c in text.chars() {
            inputs.get_mut(field).push_char(c);
            form.on_change(field, inputs);
        }
    }

    mod form_library {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validates_on_change_with_supplied_function() {
            let mut library = FormLibrary::new(Box::new(|values: &FieldValues| {
                let mut errors = FieldErrors::default();
                if values.get(Field::Username) == "root" {
                    errors.set(Field::Username, "reserved");
                }
                errors
            }));
            library.handle_change(Field::Username, "root");
            assert_eq!(library.error(Field::Username), Some("reserved"));
            library.handle_change(Field::Username, "rooty");
            assert_eq!(library.error(Field::Username), None);
        }

        #[test]
        fn test_blur_marks_touched() {
            let mut library = FormLibrary::new(Box::new(|v: &FieldValues| validate(v, 5)));
            assert!(!library.is_touched(Field::Password));
            library.handle_blur(Field::Password);
            assert!(library.is_touched(Field::Password));
            assert!(library.error(Field::Password).is_some());
        }

        #[test]
        fn test_submit_touches_everything() {
            let mut library = FormLibrary::new(Box::new(|v: &FieldValues| validate(v, 5)));
            assert!(library.handle_submit().is_err());
            assert!(library.is_touched(Field::Username));
            assert!(library.is_touched(Field::Password));
            assert!(!library.is_submitting());
        }
    }

    mod library_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_hidden_until_touched() {
            let mut form = LibraryForm::new(&FormSettings::default());
            let mut inputs = HostInputs::new();
            type_into(&mut form, &mut inputs, Field::Username, "ab");
            assert!(form.library().error(Field::Username).is_some());
            assert!(form.visible_error(Field::Username).is_none());

            form.on_blur(Field::Username, &inputs);
            assert_eq!(
                form.visible_error(Field::Username),
                Some("Username must be at least 5 characters long")
            );
        }

        #[test]
        fn test_host_never_rerenders() {
            let mut form = LibraryForm::new(&FormSettings::default());
            let mut inputs = HostInputs::new();
            type_into(&mut form, &mut inputs, Field::Username, "abcd");
            form.on_blur(Field::Username, &inputs);
            form.on_submit(&inputs);
            assert!(!form.take_render_request());
        }

        #[test]
        fn test_valid_submit_is_deferred() {
            let settings = FormSettings::default();
            let mut form = LibraryForm::new(&settings);
            let mut inputs = HostInputs::new();
            type_into(&mut form, &mut inputs, Field::Username, "admin");
            type_into(&mut form, &mut inputs, Field::Password, "admin");

            let outcome = form.on_submit(&inputs);

            assert_eq!(
                outcome,
                SubmitOutcome::Deferred {
                    values: FieldValues::from_pairs([
                        (Field::Username, "admin"),
                        (Field::Password, "admin")
                    ]),
                    delay: settings.submit_delay,
                }
            );
            assert!(form.is_submitting());
            assert_eq!(form.on_submit(&inputs), SubmitOutcome::Ignored);
        }

        #[test]
        fn test_finish_submission_acknowledges_and_resets() {
            let mut form = LibraryForm::new(&FormSettings::default());
            let mut inputs = HostInputs::new();
            type_into(&mut form, &mut inputs, Field::Username, "admin");
            type_into(&mut form, &mut inputs, Field::Password, "admin");
            let SubmitOutcome::Deferred { values, .. } = form.on_submit(&inputs) else {
                panic!("expected deferred submission");
            };

            let ack = form.finish_submission(values);

            assert_eq!(
                ack.map(|a| a.to_string()),
                Some("Username: admin, Password: admin".to_string())
            );
            assert!(!form.is_submitting());
        }

        #[test]
        fn test_short_username_rejected_on_submit() {
            let mut form = LibraryForm::new(&FormSettings::default());
            let mut inputs = HostInputs::new();
            type_into(&mut form, &mut inputs, Field::Username, "abcd");
            type_into(&mut form, &mut inputs, Field::Password, "abcde");

            assert_eq!(form.on_submit(&inputs), SubmitOutcome::Rejected);
            assert!(form.visible_error(Field::Username).is_some());
            assert!(form.visible_error(Field::Password).is_none());
            assert!(!form.is_submitting());
        }
    }
}
