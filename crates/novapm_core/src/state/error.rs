//! Reducer failure taxonomy.

use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use crate::model::workspace::WorkspaceId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why an action left the state untouched.
///
/// None of these are fatal. The reducer treats every variant as a no-op;
/// callers that need the result flag get it from `AppState::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Target workspace does not exist.
    WorkspaceNotFound(WorkspaceId),
    /// Target member email is not in the workspace.
    MemberNotFound {
        workspace_id: WorkspaceId,
        email: String,
    },
    /// Target project is not in the workspace.
    ProjectNotFound {
        workspace_id: WorkspaceId,
        project_id: ProjectId,
    },
    /// Target task is not in the project.
    TaskNotFound {
        project_id: ProjectId,
        task_id: TaskId,
    },
    /// A required text field was blank after trim; the action was dropped.
    ValidationSkipped(&'static str),
    /// Invite targets an email that is already a member.
    DuplicateMember {
        workspace_id: WorkspaceId,
        email: String,
    },
}

impl ActionError {
    /// Returns whether this is one of the lookup-by-id failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WorkspaceNotFound(_)
                | Self::MemberNotFound { .. }
                | Self::ProjectNotFound { .. }
                | Self::TaskNotFound { .. }
        )
    }

    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WorkspaceNotFound(_) => "workspace_not_found",
            Self::MemberNotFound { .. } => "member_not_found",
            Self::ProjectNotFound { .. } => "project_not_found",
            Self::TaskNotFound { .. } => "task_not_found",
            Self::ValidationSkipped(_) => "validation_skipped",
            Self::DuplicateMember { .. } => "duplicate_member",
        }
    }
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkspaceNotFound(id) => write!(f, "workspace not found: {id}"),
            Self::MemberNotFound {
                workspace_id,
                email,
            } => write!(f, "member `{email}` not found in workspace {workspace_id}"),
            Self::ProjectNotFound {
                workspace_id,
                project_id,
            } => write!(
                f,
                "project {project_id} not found in workspace {workspace_id}"
            ),
            Self::TaskNotFound {
                project_id,
                task_id,
            } => write!(f, "task {task_id} not found in project {project_id}"),
            Self::ValidationSkipped(field) => write!(f, "{field} must not be blank"),
            Self::DuplicateMember {
                workspace_id,
                email,
            } => write!(
                f,
                "member `{email}` already exists in workspace {workspace_id}"
            ),
        }
    }
}

impl Error for ActionError {}
