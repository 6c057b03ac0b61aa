//! Entity state core.
//!
//! # Responsibility
//! - Express every workspace/member/project/task operation as a pure
//!   `(state, action) -> state` transform.
//! - Keep the failure policy local: rejected actions never partially apply.
//!
//! # Invariants
//! - State values are never mutated after being handed out.
//! - Lookups by id that miss are reported, never panicked on.

pub mod action;
pub mod app_state;
pub mod error;
