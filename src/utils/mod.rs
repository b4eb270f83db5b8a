//! The `utils` module provides shared definitions used across the `logsub`
//! application, currently the error types for the broker and transport
//! boundaries.

pub mod error;
