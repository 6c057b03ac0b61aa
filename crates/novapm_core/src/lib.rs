//! Core domain logic for NovaPM.
//! This crate is the single source of truth for workspace/project/task
//! invariants; presentation layers only read its snapshots and call its
//! operations.

pub mod config;
pub mod invite;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod state;
pub mod view;

pub use config::{ConfigError, CoreConfig, DEFAULT_INVITE_ACCEPT_DELAY_MS};
pub use invite::clock::{Clock, ManualClock, SystemClock};
pub use invite::scheduler::{InviteScheduler, PendingInvite};
pub use logging::{
    default_log_level, init_logging, logging_status, redact_email, LogTarget, LoggingConfig,
};
pub use model::label::ParseLabelError;
pub use model::member::{email_local_part, Member, MemberRole};
pub use model::project::{Project, ProjectId, ProjectPatch, ProjectStatus};
pub use model::task::{Task, TaskId, TaskPatch, TaskPriority, TaskStatus};
pub use model::workspace::{Workspace, WorkspaceId};
pub use seed::demo_state;
pub use service::store::WorkspaceStore;
pub use state::action::Action;
pub use state::app_state::{reduce, AppState};
pub use state::error::ActionError;
pub use view::analytics::{
    completion_percent, Analytics, MemberLoad, ProjectCompletion, StatusCount,
};
pub use view::board::{assignee_label, board_columns, BoardColumn};
pub use view::filter::ProjectFilter;
pub use view::search::global_search;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
