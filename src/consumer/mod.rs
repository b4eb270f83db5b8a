//! The `consumer` module receives payloads from a subscription, validates
//! each one and tallies the outcomes.
//!
//! Acknowledgment is handled by the subscriber loop and is unconditional:
//! a payload that fails validation is an application-level problem logged
//! for operators, not a delivery failure, and must never cause a
//! redelivery loop.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::MessageHandler;
use crate::processor::{ValidationOutcome, process_message};

/// The message handler the consumer binary plugs into the subscriber.
///
/// Prints the raw receipt line, runs the validator, and keeps atomic
/// valid/invalid counters so it can be driven from concurrent delivery
/// tasks.
#[derive(Debug, Default)]
pub struct LogHandler {
    valid: AtomicU64,
    invalid: AtomicU64,
}

impl LogHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(valid, invalid)` counts seen so far.
    pub fn tally(&self) -> (u64, u64) {
        (
            self.valid.load(Ordering::Relaxed),
            self.invalid.load(Ordering::Relaxed),
        )
    }
}

impl MessageHandler for LogHandler {
    fn handle(&self, payload: &[u8]) {
        println!("Received raw message: {}", String::from_utf8_lossy(payload));
        match process_message(payload) {
            ValidationOutcome::Valid(_) => {
                self.valid.fetch_add(1, Ordering::Relaxed);
            }
            ValidationOutcome::Invalid(_) => {
                self.invalid.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
