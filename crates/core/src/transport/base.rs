//! Base Transport trait and supporting types.

use async_trait::async_trait;
use pf_protocol::ContactFormData;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Transport not available: {0}")]
    NotAvailable(String),
    #[error("Delivery rejected: {0}")]
    Rejected(String),
    #[error("Delivery timed out after {0} ms")]
    TimedOut(u64),
}

/// Delivers a validated contact form somewhere.
///
/// This is the only asynchronous seam of the page. Implementations decide
/// how long delivery takes and whether it fails; the form pipeline only
/// looks at the result.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, data: &ContactFormData) -> Result<(), TransportError>;
}
