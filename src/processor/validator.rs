use serde_json::Value;
use serde_json::error::Category;
use thiserror::Error;

/// The result of interpreting one raw payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The payload parsed as a JSON document; the parsed value is carried
    /// so callers can inspect its fields.
    Valid(Value),
    /// The payload did not parse; the reason says why.
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Why a payload failed validation.
///
/// Deterministic parse failures (bad syntax, truncated input) are kept
/// apart from everything else so operators can tell bad data from
/// environment problems such as non-UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidReason {
    #[error("malformed JSON: {0}")]
    MalformedSyntax(String),

    #[error("processing error: {0}")]
    ProcessingError(String),
}

/// Classifies a raw payload as parseable JSON or not.
///
/// Any JSON document is accepted: object, array or scalar. No schema is
/// enforced on the shape; field-level validation of log records is not this
/// function's job.
///
/// Every call emits one diagnostic line: the pretty-printed document on
/// stdout on success, or an error line on stderr naming the failure class
/// and showing the payload as (lossily decoded) text. The function never
/// panics and never returns an error to its caller; any input byte
/// sequence, including non-UTF-8, yields an outcome.
pub fn process_message(payload: &[u8]) -> ValidationOutcome {
    let text = match std::str::from_utf8(payload) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "ERROR processing message: {} - Data: {}",
                e,
                String::from_utf8_lossy(payload)
            );
            return ValidationOutcome::Invalid(InvalidReason::ProcessingError(e.to_string()));
        }
    };

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            return match e.classify() {
                Category::Syntax | Category::Eof => {
                    eprintln!("ERROR: Malformed JSON received: {text}");
                    ValidationOutcome::Invalid(InvalidReason::MalformedSyntax(e.to_string()))
                }
                _ => {
                    eprintln!("ERROR processing message: {e} - Data: {text}");
                    ValidationOutcome::Invalid(InvalidReason::ProcessingError(e.to_string()))
                }
            };
        }
    };

    match serde_json::to_string_pretty(&value) {
        Ok(rendered) => {
            println!("Processed valid log: {rendered}");
            ValidationOutcome::Valid(value)
        }
        Err(e) => {
            eprintln!("ERROR processing message: {e} - Data: {text}");
            ValidationOutcome::Invalid(InvalidReason::ProcessingError(e.to_string()))
        }
    }
}
