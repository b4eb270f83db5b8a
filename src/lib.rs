//! # logsub
//!
//! `logsub` is a minimal publish/subscribe demonstration for structured log
//! records: a producer publishes a fixed sequence of valid and deliberately
//! malformed payloads onto a topic, and a consumer receives each one from a
//! subscription, validates it as JSON, reports the outcome, and
//! acknowledges it unconditionally. A small in-process broker served over
//! WebSockets stands in for the managed message queue the pipeline would
//! normally run against.
//!
//! ## Core Modules
//!
//! - `broker`: in-memory topic/subscription engine with at-least-once
//!   delivery and explicit acknowledgment.
//! - `transport`: the JSON-over-WebSocket wire protocol and the broker
//!   server.
//! - `client`: the `Publisher` and `Subscriber` handles processes use to
//!   talk to the broker, and the `MessageHandler` seam deliveries are
//!   dispatched through.
//! - `processor`: the payload validator, the one piece of decision logic in
//!   the pipeline.
//! - `producer`: the demonstration publish sequence.
//! - `consumer`: the receiving handler that validates and tallies.
//! - `config`: environment-driven configuration of the transport
//!   identities.
//! - `utils`: shared error types.

pub mod broker;
pub mod client;
pub mod config;
pub mod consumer;
pub mod processor;
pub mod producer;
pub mod transport;
pub mod utils;
