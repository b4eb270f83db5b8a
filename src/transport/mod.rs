//! The `transport` module is the broker's network face: the JSON wire
//! protocol spoken over WebSockets and the server that routes client
//! frames to the engine.
//!
//! The wire payload itself is plain UTF-8 text with no envelope, schema
//! version or compression; the protocol frames around it carry topic,
//! subscription and acknowledgment identities.

pub mod message;
pub mod websocket;

#[cfg(test)]
mod tests;
