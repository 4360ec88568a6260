//! Simulated transport: waits out a fixed round-trip, then succeeds.
//!
//! Stands in for a real backend call. No I/O happens.

use crate::transport::base::{Transport, TransportError};
use async_trait::async_trait;
use pf_protocol::ContactFormData;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn deliver(&self, data: &ContactFormData) -> Result<(), TransportError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulating delivery");
        tokio::time::sleep(self.delay).await;
        debug!(message_len = data.message.len(), "simulated delivery done");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_then_succeeds() {
        let transport = SimulatedTransport::new(Duration::from_millis(1000));
        let start = Instant::now();

        let result = transport.deliver(&ContactFormData::default()).await;

        assert!(result.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
