//! Native form-data extraction: nothing is tracked until submit

use super::field::{Field, FieldErrors, FieldValues, FormData, HostInputs};
use super::validation::validate;
use super::variant::{
    Acknowledgement, FormSettings, FormVariant, RenderRequest, SubmitOutcome, VariantKind,
};

#[derive(Debug)]
pub struct FormDataForm {
    errors: FieldErrors,
    min_length: usize,
    render: RenderRequest,
}

impl FormDataForm {
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            errors: FieldErrors::cleared(),
            min_length: settings.min_length,
            render: RenderRequest::default(),
        }
    }

    fn read(data: &FormData) -> FieldValues {
        FieldValues::from_pairs(Field::ALL.map(|f| (f, data.get(f.name()).unwrap_or(""))))
    }
}

impl FormVariant for FormDataForm {
    fn kind(&self) -> VariantKind {
        VariantKind::FormData
    }

    fn on_change(&mut self, _field: Field, _inputs: &HostInputs) {}

    fn on_submit(&mut self, inputs: &HostInputs) -> SubmitOutcome {
        let data = inputs.form_data();
        let values = Self::read(&data);
        self.errors = validate(&values, self.min_length);
        self.render.schedule();

        if self.errors.is_clean() {
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
