//! Domain model for workspaces, members, projects and tasks.
//!
//! # Responsibility
//! - Define the canonical entity shapes shared by the reducer and views.
//! - Define explicit partial-update structs for project and task edits.
//!
//! # Invariants
//! - Every workspace, project and task is identified by a stable UUID.
//! - Ownership is strictly nested: workspace -> projects -> tasks, and
//!   workspace -> members. Task assignees are soft references by email.

pub mod label;
pub mod member;
pub mod project;
pub mod task;
pub mod workspace;
