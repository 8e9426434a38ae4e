//! Form fields, host input handles and per-field value maps

use std::collections::BTreeMap;
use std::fmt;

/// The fields every demo form carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 2] = [Field::Username, Field::Password];

    /// Input name, as used for form-data lookups
    pub fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    /// Capitalized label shown above the input and in messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A host text input, the thing the user actually types into.
///
/// Forms may mirror its value into their own state (controlled) or read it
/// only when they need it (uncontrolled).
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character. Returns false when already empty.
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    #[allow(dead_code)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// The host inputs belonging to one form panel
#[derive(Debug, Clone)]
pub struct HostInputs {
    pub username: TextInput,
    pub password: TextInput,
}

impl HostInputs {
    pub fn new() -> Self {
        Self {
            username: TextInput::new(),
            password: TextInput::new(),
        }
    }

    pub fn get(&self, field: Field) -> &TextInput {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.get(field).value()
    }

    /// Serialize the named inputs the way a submitted form element would
    pub fn form_data(&self) -> FormData {
        let mut data = FormData::default();
        for field in Field::ALL {
            data.append(field.name(), self.value(field));
        }
        data
    }
}

impl Default for HostInputs {
    fn default() -> Self {
        Self::new()
    }
}

/// Current value of every field, owned by a single form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<Field, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self(Field::ALL.into_iter().map(|f| (f, String::new())).collect())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (Field, &'a str)>) -> Self {
        let mut values = Self::new();
        for (field, value) in pairs {
            values.set(field, value);
        }
        values
    }

    /// Snapshot every host input
    pub fn from_inputs(inputs: &HostInputs) -> Self {
        Self::from_pairs(Field::ALL.map(|f| (f, inputs.value(f))))
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }
}

/// Error message per field; an empty string means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Every field present with an empty message
    pub fn cleared() -> Self {
        Self(Field::ALL.into_iter().map(|f| (f, String::new())).collect())
    }

    /// The message for a field, if it has a non-empty one
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// True when no field carries a message
    pub fn is_clean(&self) -> bool {
        self.0.values().all(|m| m.is_empty())
    }
}

/// Name/value pairs read from a form's named inputs at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn append(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
