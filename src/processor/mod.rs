//! The `processor` module holds the one piece of decision logic in the
//! pipeline: payload validation.
//!
//! The validator is a pure, synchronous function over a byte slice (apart
//! from its diagnostic output) with no shared state, so the transport may
//! invoke it from any number of delivery tasks concurrently. It is
//! independently testable with literal byte inputs; nothing in it knows
//! about topics, subscriptions or acks.

pub mod validator;

pub use validator::{InvalidReason, ValidationOutcome, process_message};

#[cfg(test)]
mod tests;
