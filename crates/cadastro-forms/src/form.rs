//! Form trait and field definitions.

use std::collections::HashMap;

use crate::error::{Result, ValidationError};
use crate::record::Field;
use crate::validation::Validator;

/// Definition of a form field.
pub struct FormFieldDef {
    /// The field this definition describes.
    pub field: Field,
    /// Field label.
    pub label: String,
    /// Whether the field must be non-empty at submit time.
    pub required: bool,
    /// Admission rules, checked on every edit.
    pub validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition labelled after the field.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            required: false,
            validators: Vec::new(),
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Runs the admission rules in order and stops at the first failure.
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(value))
    }
}

/// Trait for form types.
pub trait Form: Sized {
    /// Returns the field definitions for this form.
    fn fields() -> &'static [FormFieldDef];

    /// Runs the pre-submission checks.
    fn validate(&self) -> std::result::Result<(), ValidationError>;

    /// Creates a form instance from submitted data.
    fn from_data(data: &HashMap<String, String>) -> Result<Self>;
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field definitions.
    pub fn build(self) -> Vec<FormFieldDef> {
        self.fields
    }
}
