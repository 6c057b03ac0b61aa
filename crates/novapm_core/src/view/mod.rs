//! Derived read views.
//!
//! # Responsibility
//! - Compute what the presentation layer renders from a state snapshot:
//!   search hits, filtered project lists, analytics and board columns.
//!
//! # Invariants
//! - Views borrow from the state and never mutate it.
//! - Views tolerate orphaned assignee references.

pub mod analytics;
pub mod board;
pub mod filter;
pub mod search;
