//! The job-role record and its fields.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::error::{FormError, Result, ValidationError};
use crate::fields::{digits_field, letters_field};
use crate::form::{Form, FormBuilder, FormFieldDef};
use crate::validation::{MinLengthValidator, Validator};

/// Longest salary the form accepts, in digits.
pub const MAX_SALARY_DIGITS: usize = 10;

/// Shortest salary that may be submitted, in digits.
pub const MIN_SALARY_DIGITS: usize = 2;

static FIELDS: Lazy<Vec<FormFieldDef>> = Lazy::new(|| {
    FormBuilder::new()
        .field(letters_field(Field::Name, true))
        .field(letters_field(Field::Description, false))
        .field(digits_field(Field::Salary, MAX_SALARY_DIGITS, true))
        .field(letters_field(Field::Company, true))
        .build()
});

/// A field of [`JobRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Salary,
    Company,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Description, Self::Salary, Self::Company];

    /// Returns the name used on the wire and in submitted data.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Description => "descricao",
            Self::Salary => "salario",
            Self::Company => "empresa",
        }
    }

    /// Returns the label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Description => "Descrição",
            Self::Salary => "Salário",
            Self::Company => "Empresa",
        }
    }

    /// Returns this field's definition.
    pub fn def(self) -> &'static FormFieldDef {
        // FIELDS is built in declaration order.
        &FIELDS[self as usize]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A job role being entered.
///
/// Values only change through [`JobRole::apply_edit`], so the text fields hold
/// letters and whitespace only and the salary holds at most
/// [`MAX_SALARY_DIGITS`] ASCII digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobRole {
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "descricao")]
    description: String,
    #[serde(rename = "salario")]
    salary: String,
    #[serde(rename = "empresa")]
    company: String,
}

impl JobRole {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the role name (`nome`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description (`descricao`).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the salary digits (`salario`).
    pub fn salary(&self) -> &str {
        &self.salary
    }

    /// Returns the hiring company (`empresa`).
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Salary => &self.salary,
            Field::Company => &self.company,
        }
    }

    /// Returns whether every field is blank.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }

    /// Resets every field to blank.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Applies a proposed value if the field's rules admit it.
    ///
    /// Returns whether the value was applied. A refused value leaves the field
    /// as it was.
    pub fn apply_edit(&mut self, field: Field, value: &str) -> bool {
        if let Err(reason) = field.def().check(value) {
            debug!(%field, %reason, "edit rejected");
            return false;
        }

        let slot = match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Salary => &mut self.salary,
            Field::Company => &mut self.company,
        };
        value.clone_into(slot);
        true
    }
}

impl Form for JobRole {
    fn fields() -> &'static [FormFieldDef] {
        &FIELDS
    }

    /// Salary length is checked first, then the required fields.
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        MinLengthValidator::new(MIN_SALARY_DIGITS)
            .validate(&self.salary)
            .map_err(|_| ValidationError::SalaryTooShort {
                len: self.salary.chars().count(),
                min: MIN_SALARY_DIGITS,
            })?;

        let missing: Vec<&'static str> = Self::fields()
            .iter()
            .filter(|def| def.required && self.get(def.field).is_empty())
            .map(|def| def.field.wire_name())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequiredFields(missing))
        }
    }

    fn from_data(data: &HashMap<String, String>) -> Result<Self> {
        let mut record = Self::new();
        for (name, value) in data {
            let field: Field = name.parse()?;
            field
                .def()
                .check(value)
                .map_err(|message| FormError::InvalidValue {
                    field: name.clone(),
                    message,
                })?;
            record.apply_edit(field, value);
        }
        Ok(record)
    }
}
