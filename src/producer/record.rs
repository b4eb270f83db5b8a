use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A structured log record as emitted by the demo producer.
///
/// The consumer does not enforce this shape; it accepts any JSON document.
/// The struct exists so the producer emits realistic, well-formed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// ISO-8601 timestamp of the event.
    pub timestamp: String,
    pub service_name: String,
    pub log_level: String,
    pub message: String,
    pub request_id: String,
}

impl LogRecord {
    /// Builds the `seq`-th record of the fixed demonstration sequence.
    pub fn demo(seq: usize) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            service_name: "auth-service".to_string(),
            log_level: "INFO".to_string(),
            message: format!("User 'john.doe_{seq}' logged in successfully"),
            request_id: format!("req-valid-{seq}"),
        }
    }
}
