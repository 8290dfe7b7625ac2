//! Error types for the registration form.

use thiserror::Error;

/// Shown when the salary has fewer digits than required.
pub const SALARY_TOO_SHORT_MESSAGE: &str = "O salário deve conter no mínimo 2 dígitos.";

/// Shown when a required field is empty at submit time.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Todos os campos obrigatórios devem ser preenchidos.";

/// Shown for any transport or parse failure. The detail only goes to the log.
pub const RETRY_MESSAGE: &str = "Ocorreu um erro. Por favor, tente novamente.";

/// Used when a rejection carries no usable `message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Erro desconhecido";

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name that the form does not define.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A value the field's admission rules refuse.
    #[error("invalid value for field {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Local pre-submission failures. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The salary has fewer digits than the minimum.
    #[error("salary too short: {len} digit(s), at least {min} required")]
    SalaryTooShort { len: usize, min: usize },

    /// `nome` or `empresa` is empty.
    #[error("required fields missing: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}

impl ValidationError {
    /// Returns the message presented to the user.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::SalaryTooShort { .. } => SALARY_TOO_SHORT_MESSAGE,
            Self::MissingRequiredFields(_) => REQUIRED_FIELDS_MESSAGE,
        }
    }
}

/// Network, timeout and malformed-response failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP exchange itself failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The peer could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Every way a submission can fail.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Rejected locally before any request was made.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("service rejected the record with status {status}: {message}")]
    Application { status: u16, message: String },

    /// The exchange did not complete.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Returns the message presented to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.user_message().to_string(),
            Self::Application { message, .. } => format!("Erro: {message}"),
            Self::Transport(_) => RETRY_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
