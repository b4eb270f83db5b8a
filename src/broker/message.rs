use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A message as tracked by the broker.
///
/// The broker treats the payload as opaque UTF-8 text; whether it parses as
/// a structured log record is the consumer's concern. Every envelope gets a
/// broker-assigned id, which is what publishers see in the publish
/// acknowledgment and what consumers reference when acking.
///
/// # Fields
///
/// - `message_id` - Broker-assigned unique identifier for the message.
/// - `data` - The raw payload as published, unmodified.
/// - `publish_time` - Unix timestamp in milliseconds at which the broker
///   accepted the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub message_id: String,
    pub data: String,
    pub publish_time: i64,
}

impl Envelope {
    /// Wraps a payload in a fresh envelope with a new id and the current
    /// publish time.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            message_id: uuid::Uuid::new_v4().to_string(),
            data: data.into(),
            publish_time: Utc::now().timestamp_millis(),
        }
    }
}
