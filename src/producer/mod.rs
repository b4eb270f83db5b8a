//! The `producer` module builds the fixed demonstration sequence and
//! publishes it: a batch of well-formed log records followed by a batch of
//! deliberately malformed payloads.
//!
//! Publishing is strictly sequential, one publish-and-wait per record. A
//! failed publish is reported on stderr and the sequence continues; one bad
//! message never blocks the rest.

pub mod record;

pub use record::LogRecord;

use std::time::Duration;

use crate::client::Publisher;
use crate::config::ProducerSettings;

/// Number of well-formed records in the demonstration sequence.
pub const VALID_RECORD_COUNT: usize = 10;

/// Payloads published after the valid batch to exercise the consumer's
/// failure paths. None of them parse as JSON.
pub const MALFORMED_PAYLOADS: [&str; 3] = [
    "invalid non-JSON string",
    r#"{"timestamp": "2023-10-27", "service_name": "auth-service""#,
    "just another bad payload",
];

/// Publishes the full demonstration sequence through the given handle.
///
/// Runs to completion regardless of individual publish failures.
pub async fn run(publisher: &mut Publisher, settings: &ProducerSettings) {
    let pace = Duration::from_millis(settings.publish.pace);

    for seq in 0..VALID_RECORD_COUNT {
        let record = LogRecord::demo(seq);
        match serde_json::to_string(&record) {
            Ok(data) => publish_one(publisher, &settings.topic, &data).await,
            Err(e) => eprintln!("Failed to encode record {}: {e}", record.request_id),
        }
        tokio::time::sleep(pace).await;
    }

    for data in MALFORMED_PAYLOADS {
        publish_one(publisher, &settings.topic, data).await;
        tokio::time::sleep(pace).await;
    }
}

async fn publish_one(publisher: &mut Publisher, topic: &str, data: &str) {
    match publisher.publish(topic, data).await {
        Ok(message_id) => println!("Published message ID: {message_id}"),
        Err(e) => eprintln!("Failed to publish message: {e}"),
    }
}
