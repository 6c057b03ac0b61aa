//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the pure reducer in a stateful facade for UI callers.
//! - Own side effects the reducer must not perform (scheduling, logging).

pub mod store;
