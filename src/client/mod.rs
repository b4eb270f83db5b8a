//! The `client` module provides the handles a process uses to talk to the
//! broker: a sequential publish-and-wait `Publisher` and a callback-driven
//! `Subscriber`.
//!
//! Both are plain values created at startup and injected into the
//! producer/consumer logic; there are no process-global singletons.

pub mod handler;
pub mod publisher;
pub mod subscriber;

pub use handler::MessageHandler;
pub use publisher::Publisher;
pub use subscriber::Subscriber;
