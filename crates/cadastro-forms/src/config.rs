//! Submission settings.

use std::time::Duration;

/// Where job roles are created when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/profissoes";

/// Settings for the HTTP submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Job-roles creation endpoint.
    pub endpoint: String,
    /// Overall request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl FormConfig {
    /// Creates a config with the default endpoint and no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
