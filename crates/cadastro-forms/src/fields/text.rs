//! Text field types.

use crate::form::FormFieldDef;
use crate::record::Field;
use crate::validation::{MaxLengthValidator, RegexValidator};

/// Creates a field that admits letters and whitespace only.
pub fn letters_field(field: Field, required: bool) -> FormFieldDef {
    let def = FormFieldDef::new(field).validator(RegexValidator::letters());

    if required {
        def.required()
    } else {
        def
    }
}

/// Creates a field that admits up to `max_length` ASCII digits.
pub fn digits_field(field: Field, max_length: usize, required: bool) -> FormFieldDef {
    let def = FormFieldDef::new(field)
        .validator(RegexValidator::digits())
        .validator(MaxLengthValidator::new(max_length));

    if required {
        def.required()
    } else {
        def
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    #[test]
    fn test_letters_field() {
        let def = letters_field(Field::Company, true);
        assert_eq!(def.field, Field::Company);
        assert!(def.required);
        assert_eq!(def.validators.len(), 1);
        assert!(def.check("Acme").is_ok());
        assert!(def.check("Acme 2").is_err());
    }

    #[test]
    fn test_digits_field() {
        let def = digits_field(Field::Salary, 10, false);
        assert!(!def.required);
        assert_eq!(def.validators.len(), 2); // Digits + MaxLength
        assert_eq!(def.validators[0].message(), "Enter digits only.");
        assert!(def.check("1234567890").is_ok());
        assert!(def.check("12345678901").is_err());
        assert!(def.check("1e3").is_err());
    }
}
