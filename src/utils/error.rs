//! The `error` module defines the error types used within the `logsub`
//! application.
//!
//! Errors are split by boundary: `BrokerError` covers failures inside the
//! broker engine and is reported back to the offending client as a protocol
//! reply, while `TransportError` covers everything that can go wrong on a
//! client connection (handshake, wire encoding, publish deadline).

use thiserror::Error;

/// Failures raised by the broker engine.
#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("topic '{0}' does not exist")]
    TopicNotFound(String),

    #[error("subscription '{0}' does not exist")]
    SubscriptionNotFound(String),

    #[error("subscription '{0}' is already bound to a different topic")]
    SubscriptionExists(String),
}

/// Failures raised by the client-side handles (`Publisher`, `Subscriber`).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("websocket error: {0}")]
    Ws(#[from] tungstenite::Error),

    #[error("invalid wire message: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("publish not acknowledged within the deadline")]
    DeadlineElapsed,

    #[error("broker rejected publish: {0}")]
    PublishRejected(String),

    #[error("broker rejected subscribe: {0}")]
    SubscribeRejected(String),

    #[error("connection closed by broker")]
    ConnectionClosed,
}
