use crate::form::validators::{Validator, run_validators};

pub type FieldId = String;

/// A single text field: current value, label, and the validator chain
/// that produces its inline error message.
pub struct TextField {
    id: FieldId,
    label: String,
    value: String,
    error: Option<String>,
    validators: Vec<Validator>,
}

impl TextField {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: String::new(),
            error: None,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the value and revalidate immediately, so the inline error
    /// always reflects the current text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.revalidate();
    }

    /// Recompute the inline error from the current value. Returns true
    /// when the field is valid.
    pub fn revalidate(&mut self) -> bool {
        self.error = run_validators(&self.validators, &self.value).err();
        self.error.is_none()
    }

    /// Clear value and error without revalidating. Used after a successful
    /// submission, where an empty field must not show "required" again.
    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }
}
