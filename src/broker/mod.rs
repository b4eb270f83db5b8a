//! The `broker` module is the in-process stand-in for a managed message
//! queue: topics, subscriptions bound to them, fan-out on publish, and
//! explicit per-message acknowledgment with redelivery of whatever was
//! never acked.

pub mod engine;
pub mod message;
pub mod subscription;
pub mod topic;

pub use engine::Broker;
