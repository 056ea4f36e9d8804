//! Outbound message transport
//!
//! The pipeline itself never sends anything; it hands the rendered
//! response back to its caller. Hosts that relay responses to a chat
//! platform implement [`MessageSender`] and drive it outside the core.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Receipt returned by a transport after a delivery attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Recipient the message was addressed to
    pub recipient: String,
    /// Transport-assigned message identifier
    pub message_id: String,
    pub delivered_at: DateTime<Utc>,
}

/// Capability to deliver a rendered response to a recipient
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver `text` to `recipient`, returning a receipt on success
    async fn deliver(&self, recipient: &str, text: &str) -> Result<DeliveryReceipt>;
}
