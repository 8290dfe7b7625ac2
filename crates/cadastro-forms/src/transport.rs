//! HTTP transport for submitting records.

use futures::future::BoxFuture;
use reqwest::Client;

use crate::config::FormConfig;
use crate::error::{FormError, Result, TransportError};
use crate::record::JobRole;

/// A raw response from the job-roles service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl Reply {
    /// Creates a reply.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a record to the job-roles service.
///
/// Implementations make exactly one request per call and never retry.
///
/// # Example
///
/// ```ignore
/// struct Offline;
///
/// impl Transport for Offline {
///     fn post_json<'a>(
///         &'a self,
///         _record: &'a JobRole,
///     ) -> BoxFuture<'a, Result<Reply, TransportError>> {
///         Box::pin(async move {
///             Err(TransportError::Connection("offline".to_string()))
///         })
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// POSTs the record as JSON and returns the raw reply.
    fn post_json<'a>(
        &'a self,
        record: &'a JobRole,
    ) -> BoxFuture<'a, std::result::Result<Reply, TransportError>>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Builds a client from the config.
    pub fn new(config: &FormConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FormError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Returns the endpoint records are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn post_json<'a>(
        &'a self,
        record: &'a JobRole,
    ) -> BoxFuture<'a, std::result::Result<Reply, TransportError>> {
        Box::pin(async move {
            // `json` sets `Content-Type: application/json`.
            let response = self
                .client
                .post(&self.endpoint)
                .json(record)
                .send()
                .await
                .map_err(classify)?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok(Reply::new(status, body.to_vec()))
        })
    }
}

/// Separates "could not reach the service" from other request failures.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        // Keep the cause chain; the top-level message only names the URL.
        let mut detail = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        TransportError::Connection(detail)
    } else {
        TransportError::Http(err)
    }
}
