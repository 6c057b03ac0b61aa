//! Delayed invite acceptance.
//!
//! # Responsibility
//! - Provide the time source seam (`Clock`) used by the store.
//! - Track pending acceptances keyed by `(workspace_id, email)`.
//!
//! # Invariants
//! - Acceptance is two-phase: invite now, promote after a fixed delay.
//! - Removing the member or deleting the workspace cancels the entry.

pub mod clock;
pub mod scheduler;
