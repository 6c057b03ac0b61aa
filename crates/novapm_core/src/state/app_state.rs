//! Whole-application state and the pure reducer over it.
//!
//! # Responsibility
//! - Hold the workspace list and the current-workspace pointer.
//! - Apply `Action`s as pure transforms producing a new state value.
//!
//! # Invariants
//! - `apply` never mutates `self`; on `Err` no change is observable.
//! - When the current workspace is deleted, the next workspace in
//!   pre-deletion order becomes current, wrapping to the first.
//! - An empty workspace list always has `current_workspace_id == None`.

use crate::model::member::Member;
use crate::model::project::{Project, ProjectId};
use crate::model::workspace::{Workspace, WorkspaceId};
use crate::state::action::Action;
use crate::state::error::ActionError;
use serde::{Deserialize, Serialize};

/// Snapshot of every workspace plus the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    workspaces: Vec<Workspace>,
    current_workspace_id: Option<WorkspaceId>,
}

impl AppState {
    /// Builds a state whose current workspace is the first one, if any.
    pub fn new(workspaces: Vec<Workspace>) -> Self {
        let current_workspace_id = workspaces.first().map(|workspace| workspace.id);
        Self {
            workspaces,
            current_workspace_id,
        }
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    /// Raw current pointer. May be stale; prefer `current_workspace`.
    pub fn current_workspace_id(&self) -> Option<WorkspaceId> {
        self.current_workspace_id
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn workspace(&self, workspace_id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces
            .iter()
            .find(|workspace| workspace.id == workspace_id)
    }

    /// Resolves the current workspace, falling back to the first one when
    /// the pointer is unset or stale.
    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.current_workspace_id
            .and_then(|id| self.workspace(id))
            .or_else(|| self.workspaces.first())
    }

    /// Applies one action and returns the resulting state.
    ///
    /// # Errors
    /// - `*NotFound` when a referenced workspace/member/project/task is absent.
    /// - `ValidationSkipped` when a required name, email or title is blank.
    /// - `DuplicateMember` when inviting an email that is already a member.
    pub fn apply(&self, action: &Action) -> Result<AppState, ActionError> {
        let mut next = self.clone();
        next.apply_in_place(action)?;
        Ok(next)
    }

    fn apply_in_place(&mut self, action: &Action) -> Result<(), ActionError> {
        match action {
            Action::CreateWorkspace { workspace_id, name } => {
                let name = required(name, "workspace name")?;
                self.workspaces.push(Workspace::with_id(*workspace_id, name));
                self.current_workspace_id = Some(*workspace_id);
            }
            Action::RenameWorkspace { workspace_id, name } => {
                let name = required(name, "workspace name")?;
                self.workspace_mut(*workspace_id)?.name = name;
            }
            Action::DeleteWorkspace { workspace_id } => {
                self.delete_workspace(*workspace_id)?;
            }
            Action::SelectWorkspace { workspace_id } => {
                if self.workspace(*workspace_id).is_none() {
                    return Err(ActionError::WorkspaceNotFound(*workspace_id));
                }
                self.current_workspace_id = Some(*workspace_id);
            }
            Action::InviteMember {
                workspace_id,
                email,
                role: _,
            } => {
                let email = required(email, "member email")?;
                let workspace = self.workspace_mut(*workspace_id)?;
                if workspace.member(&email).is_some() {
                    return Err(ActionError::DuplicateMember {
                        workspace_id: *workspace_id,
                        email,
                    });
                }
                workspace.members.push(Member::invited(email));
            }
            Action::AcceptInvite {
                workspace_id,
                email,
                role,
            } => {
                self.member_mut(*workspace_id, email)?.role = *role;
            }
            Action::ChangeMemberRole {
                workspace_id,
                email,
                role,
            } => {
                self.member_mut(*workspace_id, email)?.role = *role;
            }
            Action::RemoveMember {
                workspace_id,
                email,
            } => {
                let workspace = self.workspace_mut(*workspace_id)?;
                let index = workspace
                    .members
                    .iter()
                    .position(|member| &member.email == email)
                    .ok_or_else(|| ActionError::MemberNotFound {
                        workspace_id: *workspace_id,
                        email: email.clone(),
                    })?;
                workspace.members.remove(index);
            }
            Action::CreateProject {
                workspace_id,
                project_id,
                name,
                status,
            } => {
                let name = required(name, "project name")?;
                self.workspace_mut(*workspace_id)?
                    .projects
                    .push(Project::with_id(*project_id, name, *status));
            }
            Action::UpdateProject {
                workspace_id,
                project_id,
                patch,
            } => {
                if let Some(name) = &patch.name {
                    required(name, "project name")?;
                }
                patch.apply_to(self.project_mut(*workspace_id, *project_id)?);
            }
            Action::DeleteProject {
                workspace_id,
                project_id,
            } => {
                let workspace = self.workspace_mut(*workspace_id)?;
                let index = workspace
                    .projects
                    .iter()
                    .position(|project| project.id == *project_id)
                    .ok_or(ActionError::ProjectNotFound {
                        workspace_id: *workspace_id,
                        project_id: *project_id,
                    })?;
                workspace.projects.remove(index);
            }
            Action::AddTask {
                workspace_id,
                project_id,
                task,
            } => {
                let title = required(&task.title, "task title")?;
                let project = self.project_mut(*workspace_id, *project_id)?;
                let mut task = task.clone();
                task.title = title;
                project.tasks.insert(0, task);
            }
            Action::UpdateTask {
                workspace_id,
                project_id,
                task_id,
                patch,
            } => {
                if let Some(title) = &patch.title {
                    required(title, "task title")?;
                }
                let project = self.project_mut(*workspace_id, *project_id)?;
                let task = project
                    .task_mut(*task_id)
                    .ok_or(ActionError::TaskNotFound {
                        project_id: *project_id,
                        task_id: *task_id,
                    })?;
                patch.apply_to(task);
            }
            Action::DeleteTask {
                workspace_id,
                project_id,
                task_id,
            } => {
                let project = self.project_mut(*workspace_id, *project_id)?;
                let index = project
                    .tasks
                    .iter()
                    .position(|task| task.id == *task_id)
                    .ok_or(ActionError::TaskNotFound {
                        project_id: *project_id,
                        task_id: *task_id,
                    })?;
                project.tasks.remove(index);
            }
        }
        Ok(())
    }

    fn delete_workspace(&mut self, workspace_id: WorkspaceId) -> Result<(), ActionError> {
        let index = self
            .workspaces
            .iter()
            .position(|workspace| workspace.id == workspace_id)
            .ok_or(ActionError::WorkspaceNotFound(workspace_id))?;
        let was_current =
            self.current_workspace().map(|workspace| workspace.id) == Some(workspace_id);

        self.workspaces.remove(index);

        if self.workspaces.is_empty() {
            self.current_workspace_id = None;
        } else if was_current {
            // Whatever slid into `index` was next in pre-deletion order.
            self.current_workspace_id = self
                .workspaces
                .get(index)
                .or_else(|| self.workspaces.first())
                .map(|workspace| workspace.id);
        }
        Ok(())
    }

    fn workspace_mut(&mut self, workspace_id: WorkspaceId) -> Result<&mut Workspace, ActionError> {
        self.workspaces
            .iter_mut()
            .find(|workspace| workspace.id == workspace_id)
            .ok_or(ActionError::WorkspaceNotFound(workspace_id))
    }

    fn member_mut(
        &mut self,
        workspace_id: WorkspaceId,
        email: &str,
    ) -> Result<&mut Member, ActionError> {
        self.workspace_mut(workspace_id)?
            .member_mut(email)
            .ok_or_else(|| ActionError::MemberNotFound {
                workspace_id,
                email: email.to_string(),
            })
    }

    fn project_mut(
        &mut self,
        workspace_id: WorkspaceId,
        project_id: ProjectId,
    ) -> Result<&mut Project, ActionError> {
        self.workspace_mut(workspace_id)?
            .project_mut(project_id)
            .ok_or(ActionError::ProjectNotFound {
                workspace_id,
                project_id,
            })
    }
}

/// Reducer with the no-op failure policy: any rejected action yields a
/// state equal to the input.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    state.apply(action).unwrap_or_else(|_| state.clone())
}

fn required(value: &str, field: &'static str) -> Result<String, ActionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ActionError::ValidationSkipped(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{reduce, AppState};
    use crate::model::member::MemberRole;
    use crate::model::workspace::Workspace;
    use crate::state::action::Action;
    use crate::state::error::ActionError;
    use uuid::Uuid;

    fn three_workspaces() -> AppState {
        AppState::new(vec![
            Workspace::new("A"),
            Workspace::new("B"),
            Workspace::new("C"),
        ])
    }

    #[test]
    fn apply_leaves_input_snapshot_untouched() {
        let before = three_workspaces();
        let after = before.apply(&Action::create_workspace("D")).unwrap();

        assert_eq!(before.workspaces().len(), 3);
        assert_eq!(after.workspaces().len(), 4);
        assert_eq!(after.current_workspace().unwrap().name, "D");
    }

    #[test]
    fn blank_workspace_name_is_skipped() {
        let state = three_workspaces();
        let err = state.apply(&Action::create_workspace("   ")).unwrap_err();
        assert_eq!(err, ActionError::ValidationSkipped("workspace name"));
        assert_eq!(reduce(&state, &Action::create_workspace("   ")), state);
    }

    #[test]
    fn deleting_current_middle_workspace_selects_next() {
        let state = three_workspaces();
        let ids: Vec<_> = state.workspaces().iter().map(|w| w.id).collect();
        let state = state
            .apply(&Action::SelectWorkspace {
                workspace_id: ids[1],
            })
            .unwrap();

        let next = state
            .apply(&Action::DeleteWorkspace {
                workspace_id: ids[1],
            })
            .unwrap();
        assert_eq!(next.current_workspace_id(), Some(ids[2]));
    }

    #[test]
    fn deleting_current_last_workspace_wraps_to_first() {
        let state = three_workspaces();
        let ids: Vec<_> = state.workspaces().iter().map(|w| w.id).collect();
        let state = state
            .apply(&Action::SelectWorkspace {
                workspace_id: ids[2],
            })
            .unwrap();

        let next = state
            .apply(&Action::DeleteWorkspace {
                workspace_id: ids[2],
            })
            .unwrap();
        assert_eq!(next.current_workspace_id(), Some(ids[0]));
    }

    #[test]
    fn deleting_other_workspace_keeps_current() {
        let state = three_workspaces();
        let ids: Vec<_> = state.workspaces().iter().map(|w| w.id).collect();

        let next = state
            .apply(&Action::DeleteWorkspace {
                workspace_id: ids[2],
            })
            .unwrap();
        assert_eq!(next.current_workspace_id(), Some(ids[0]));
        assert_eq!(next.workspaces().len(), 2);
    }

    #[test]
    fn stale_pointer_falls_back_to_first_workspace() {
        let state = three_workspaces();
        let first = state.workspaces()[0].id;
        let stale = Uuid::new_v4();
        let err = state
            .apply(&Action::SelectWorkspace {
                workspace_id: stale,
            })
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(state.current_workspace().unwrap().id, first);
    }

    #[test]
    fn accept_invite_sets_requested_role_after_manual_change() {
        let state = three_workspaces();
        let workspace_id = state.workspaces()[0].id;
        let email = "nina@novapm.io".to_string();
        let state = state
            .apply(&Action::InviteMember {
                workspace_id,
                email: email.clone(),
                role: MemberRole::Admin,
            })
            .unwrap()
            .apply(&Action::ChangeMemberRole {
                workspace_id,
                email: email.clone(),
                role: MemberRole::Member,
            })
            .unwrap();

        let accepted = state
            .apply(&Action::AcceptInvite {
                workspace_id,
                email: email.clone(),
                role: MemberRole::Admin,
            })
            .unwrap();

        let member = accepted.workspace(workspace_id).unwrap().member(&email).unwrap();
        assert_eq!(member.role, MemberRole::Admin);
    }

    #[test]
    fn accept_invite_for_removed_member_is_not_found() {
        let state = three_workspaces();
        let workspace_id = state.workspaces()[0].id;
        let err = state
            .apply(&Action::AcceptInvite {
                workspace_id,
                email: "gone@novapm.io".to_string(),
                role: MemberRole::Owner,
            })
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn serialized_state_uses_camel_case_keys() {
        let state = three_workspaces();
        let json = serde_json::to_value(&state).unwrap();
        assert!(json["currentWorkspaceId"].is_string());
        assert_eq!(json["workspaces"].as_array().unwrap().len(), 3);

        let decoded: AppState = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, state);
    }
}
