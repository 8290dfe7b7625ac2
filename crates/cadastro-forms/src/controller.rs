//! Form state and the submission flow.
//!
//! A submission moves through these phases:
//!
//! ```text
//! Idle -> Validating -> ValidationFailed -> Idle
//!                    -> Submitting -> Succeeded -> Idle (record cleared)
//!                                  -> Failed    -> Idle (record kept)
//! ```
//!
//! [`JobRoleForm::submit`] borrows the form mutably until the reply has been
//! handled, so a second submit or an edit cannot interleave with one that is
//! in flight.

use std::fmt;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::{Result, SubmitError, TransportError, UNKNOWN_ERROR_MESSAGE};
use crate::form::Form;
use crate::notify::Notifier;
use crate::record::{Field, JobRole};
use crate::transport::{Reply, Transport};

/// Where a submission currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    ValidationFailed,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for SubmitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::ValidationFailed => "validation_failed",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// How a submission ended.
#[derive(Debug)]
pub enum Outcome {
    /// The service accepted the record. Holds the message it returned.
    Succeeded { message: String },
    /// The record was not created.
    Failed(SubmitError),
}

impl Outcome {
    /// Returns whether the record was created.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Returns the message presented to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Succeeded { message } => message.clone(),
            Self::Failed(err) => err.user_message(),
        }
    }

    /// Returns the failure, if any.
    pub const fn error(&self) -> Option<&SubmitError> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// A job-role form: the record being edited plus the means to submit it.
#[derive(Debug)]
pub struct JobRoleForm<T, N> {
    record: JobRole,
    transport: T,
    notifier: N,
}

impl<T: Transport, N: Notifier> JobRoleForm<T, N> {
    /// Creates a form with an empty record.
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            record: JobRole::new(),
            transport,
            notifier,
        }
    }

    /// Returns the record as currently entered.
    pub fn record(&self) -> &JobRole {
        &self.record
    }

    /// Returns the transport used for submissions.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the notifier that receives user messages.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handles a change event. Inadmissible values are dropped silently.
    pub fn on_field_change(&mut self, field: Field, value: &str) -> &JobRole {
        self.record.apply_edit(field, value);
        &self.record
    }

    /// Handles a change event addressed by wire name (`"nome"`, `"salario"`, ...).
    pub fn on_named_field_change(&mut self, name: &str, value: &str) -> Result<&JobRole> {
        let field: Field = name.parse()?;
        Ok(self.on_field_change(field, value))
    }

    /// Validates and submits the record, then tells the user how it went.
    ///
    /// The record is cleared only when the service accepts it. Every failure
    /// is reported through the notifier and the returned [`Outcome`].
    pub async fn submit(&mut self) -> Outcome {
        debug!(phase = %SubmitPhase::Validating, "submit requested");
        if let Err(err) = self.record.validate() {
            debug!(phase = %SubmitPhase::ValidationFailed, %err, "submission blocked");
            return self.finish(Outcome::Failed(err.into()));
        }

        debug!(phase = %SubmitPhase::Submitting, "posting job role");
        let outcome = match self.transport.post_json(&self.record).await {
            Ok(reply) => resolve(&reply),
            Err(err) => Outcome::Failed(err.into()),
        };

        match &outcome {
            Outcome::Succeeded { message } => {
                info!(phase = %SubmitPhase::Succeeded, %message, "job role created");
                self.record.clear();
            }
            Outcome::Failed(SubmitError::Application { status, message }) => {
                warn!(phase = %SubmitPhase::Failed, status, %message, "job role rejected");
            }
            Outcome::Failed(err) => {
                error!(phase = %SubmitPhase::Failed, error = %err, "failed to register job role");
            }
        }

        self.finish(outcome)
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.notifier.notify(&outcome.user_message());
        debug!(phase = %SubmitPhase::Idle, success = outcome.is_success(), "submission finished");
        outcome
    }
}

/// Maps a reply to an outcome. A body that is not JSON counts as a
/// transport failure whatever the status.
fn resolve(reply: &Reply) -> Outcome {
    let body: Value = match serde_json::from_slice(&reply.body) {
        Ok(body) => body,
        Err(err) => return Outcome::Failed(TransportError::from(err).into()),
    };
    let message = message_of(&body);

    if reply.is_success() {
        Outcome::Succeeded {
            message: message.unwrap_or_default(),
        }
    } else {
        Outcome::Failed(SubmitError::Application {
            status: reply.status,
            message: message.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        })
    }
}

/// Extracts a non-empty string `message` from a JSON object.
fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
