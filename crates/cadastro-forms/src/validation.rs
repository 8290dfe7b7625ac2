//! Field validators.

use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII letters, Latin-1 accented letters and whitespace. `×` (U+00D7) and
/// `÷` (U+00F7) sit inside the accented block but are not letters.
static LETTERS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{FF}\s]*$").expect("valid letters regex")
});

/// ASCII digits only. `\d` would also accept other Unicode digits.
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").expect("valid digits regex"));

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that enforces a maximum length, counted in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length, counted in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a regex pattern that must match the whole value.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Accepts only letters (ASCII or accented Latin) and whitespace.
    pub fn letters() -> Self {
        Self {
            pattern: LETTERS_RE.clone(),
            message: "Enter letters and spaces only.".to_string(),
        }
    }

    /// Accepts only ASCII decimal digits.
    pub fn digits() -> Self {
        Self {
            pattern: DIGITS_RE.clone(),
            message: "Enter digits only.".to_string(),
        }
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
