//! Actions accepted by the reducer.
//!
//! # Invariants
//! - Actions that create entities carry their ids, so applying the same
//!   action to the same state always yields the same result.
//! - Constructors on `Action` are the only place ids are generated.

use crate::model::member::MemberRole;
use crate::model::project::{ProjectId, ProjectPatch, ProjectStatus};
use crate::model::task::{Task, TaskId, TaskPatch};
use crate::model::workspace::WorkspaceId;
use uuid::Uuid;

/// One state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateWorkspace {
        workspace_id: WorkspaceId,
        name: String,
    },
    RenameWorkspace {
        workspace_id: WorkspaceId,
        name: String,
    },
    DeleteWorkspace {
        workspace_id: WorkspaceId,
    },
    SelectWorkspace {
        workspace_id: WorkspaceId,
    },
    /// Adds a pending member. `role` is what acceptance will grant.
    InviteMember {
        workspace_id: WorkspaceId,
        email: String,
        role: MemberRole,
    },
    AcceptInvite {
        workspace_id: WorkspaceId,
        email: String,
        role: MemberRole,
    },
    ChangeMemberRole {
        workspace_id: WorkspaceId,
        email: String,
        role: MemberRole,
    },
    RemoveMember {
        workspace_id: WorkspaceId,
        email: String,
    },
    CreateProject {
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        name: String,
        status: ProjectStatus,
    },
    UpdateProject {
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        patch: ProjectPatch,
    },
    DeleteProject {
        workspace_id: WorkspaceId,
        project_id: ProjectId,
    },
    AddTask {
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        task: Task,
    },
    UpdateTask {
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
    },
    DeleteTask {
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        task_id: TaskId,
    },
}

impl Action {
    /// Create-workspace action with a freshly generated id.
    pub fn create_workspace(name: impl Into<String>) -> Self {
        Self::CreateWorkspace {
            workspace_id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Create-project action with a freshly generated id.
    pub fn create_project(
        workspace_id: WorkspaceId,
        name: impl Into<String>,
        status: ProjectStatus,
    ) -> Self {
        Self::CreateProject {
            workspace_id,
            project_id: Uuid::new_v4(),
            name: name.into(),
            status,
        }
    }

    /// Stable snake_case name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateWorkspace { .. } => "create_workspace",
            Self::RenameWorkspace { .. } => "rename_workspace",
            Self::DeleteWorkspace { .. } => "delete_workspace",
            Self::SelectWorkspace { .. } => "select_workspace",
            Self::InviteMember { .. } => "invite_member",
            Self::AcceptInvite { .. } => "accept_invite",
            Self::ChangeMemberRole { .. } => "change_member_role",
            Self::RemoveMember { .. } => "remove_member",
            Self::CreateProject { .. } => "create_project",
            Self::UpdateProject { .. } => "update_project",
            Self::DeleteProject { .. } => "delete_project",
            Self::AddTask { .. } => "add_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
        }
    }

    /// Workspace the action targets.
    pub fn workspace_id(&self) -> WorkspaceId {
        match self {
            Self::CreateWorkspace { workspace_id, .. }
            | Self::RenameWorkspace { workspace_id, .. }
            | Self::DeleteWorkspace { workspace_id }
            | Self::SelectWorkspace { workspace_id }
            | Self::InviteMember { workspace_id, .. }
            | Self::AcceptInvite { workspace_id, .. }
            | Self::ChangeMemberRole { workspace_id, .. }
            | Self::RemoveMember { workspace_id, .. }
            | Self::CreateProject { workspace_id, .. }
            | Self::UpdateProject { workspace_id, .. }
            | Self::DeleteProject { workspace_id, .. }
            | Self::AddTask { workspace_id, .. }
            | Self::UpdateTask { workspace_id, .. }
            | Self::DeleteTask { workspace_id, .. } => *workspace_id,
        }
    }
}
