//! Mock transport implementation for testing.

use crate::transport::base::{Transport, TransportError};
use async_trait::async_trait;
use pf_protocol::ContactFormData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Transport with a fixed outcome that remembers what it was asked to send.
#[derive(Clone)]
pub struct MockTransport {
    outcome: Result<(), TransportError>,
    delay: Duration,
    delivered: Arc<Mutex<Vec<ContactFormData>>>,
}

impl MockTransport {
    pub fn new(outcome: Result<(), TransportError>, delay: Duration) -> Self {
        Self {
            outcome,
            delay,
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn success() -> Self {
        Self::new(Ok(()), Duration::ZERO)
    }

    pub fn failing() -> Self {
        Self::new(
            Err(TransportError::Rejected("Mock failure".to_string())),
            Duration::ZERO,
        )
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Every payload handed to `deliver`, in call order.
    pub fn delivered(&self) -> Vec<ContactFormData> {
        self.delivered
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn deliver(&self, data: &ContactFormData) -> Result<(), TransportError> {
        if let Ok(mut delivered) = self.delivered.lock() {
            delivered.push(data.clone());
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}
