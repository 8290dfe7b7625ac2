//! # cadastro-forms
//!
//! A job-role registration form: per-field admission rules and submission to
//! a job-roles service over HTTP.
//!
//! This crate provides:
//! - The [`JobRole`] record and its field definitions
//! - An edit filter that silently drops inadmissible values
//! - Pre-submission checks with user-facing messages
//! - A submission flow that posts the record as JSON and reports the outcome
//!
//! ## Editing
//!
//! ```rust
//! use cadastro_forms::{Field, JobRole};
//!
//! let mut record = JobRole::new();
//! assert!(record.apply_edit(Field::Name, "Ana"));
//!
//! // Digits never reach a text field.
//! assert!(!record.apply_edit(Field::Name, "Ana1"));
//! assert_eq!(record.name(), "Ana");
//!
//! // Salaries are at most 10 digits.
//! assert!(record.apply_edit(Field::Salary, "1500"));
//! assert!(!record.apply_edit(Field::Salary, "15000000000"));
//! assert_eq!(record.salary(), "1500");
//! ```
//!
//! ## Submitting
//!
//! ```rust,no_run
//! use cadastro_forms::{
//!     ConsoleNotifier, Field, FormConfig, HttpTransport, JobRoleForm,
//! };
//!
//! # async fn run() -> cadastro_forms::Result<()> {
//! let transport = HttpTransport::new(&FormConfig::default())?;
//! let mut form = JobRoleForm::new(transport, ConsoleNotifier);
//!
//! form.on_field_change(Field::Name, "Ana");
//! form.on_field_change(Field::Salary, "1500");
//! form.on_field_change(Field::Company, "Acme");
//!
//! let outcome = form.submit().await;
//! if outcome.is_success() {
//!     assert!(form.record().is_empty());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use cadastro_forms::{Field, Form, JobRole, ValidationError};
//!
//! let mut record = JobRole::new();
//! record.apply_edit(Field::Salary, "5");
//!
//! let err = record.validate().unwrap_err();
//! assert_eq!(err, ValidationError::SalaryTooShort { len: 1, min: 2 });
//! assert_eq!(err.user_message(), "O salário deve conter no mínimo 2 dígitos.");
//! ```

mod config;
mod controller;
mod error;
pub mod fields;
mod form;
mod notify;
mod record;
mod transport;
pub mod validation;

pub use config::{FormConfig, DEFAULT_ENDPOINT};
pub use controller::{JobRoleForm, Outcome, SubmitPhase};
pub use error::{
    FormError, Result, SubmitError, TransportError, ValidationError, REQUIRED_FIELDS_MESSAGE,
    RETRY_MESSAGE, SALARY_TOO_SHORT_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
pub use form::{Form, FormBuilder, FormFieldDef};
pub use futures::future::BoxFuture;
pub use notify::{ConsoleNotifier, MemoryNotifier, Notifier};
pub use record::{Field, JobRole, MAX_SALARY_DIGITS, MIN_SALARY_DIGITS};
pub use transport::{HttpTransport, Reply, Transport};
