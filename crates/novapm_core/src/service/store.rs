//! Workspace store use-case service.
//!
//! # Responsibility
//! - Own the current `AppState` and replace it atomically per action.
//! - Schedule, cancel and fire delayed invite acceptances.
//! - Expose one method per user-facing operation for the presentation layer.
//!
//! # Invariants
//! - A rejected action leaves the held state untouched.
//! - Firing an acceptance re-validates through the reducer; a removed member
//!   or deleted workspace is never resurrected.
//! - Removing a member or deleting a workspace cancels its pending invites.

use crate::config::CoreConfig;
use crate::invite::clock::{Clock, SystemClock};
use crate::invite::scheduler::InviteScheduler;
use crate::logging::redact_email;
use crate::model::member::MemberRole;
use crate::model::project::{Project, ProjectId, ProjectPatch, ProjectStatus};
use crate::model::task::{Task, TaskId, TaskPatch};
use crate::model::workspace::{Workspace, WorkspaceId};
use crate::seed::demo_state;
use crate::state::action::Action;
use crate::state::app_state::AppState;
use crate::state::error::ActionError;
use crate::view::analytics::Analytics;
use crate::view::search::global_search;
use log::{debug, info};
use uuid::Uuid;

/// Stateful facade over the pure reducer.
pub struct WorkspaceStore<C: Clock = SystemClock> {
    state: AppState,
    invites: InviteScheduler,
    clock: C,
}

impl WorkspaceStore<SystemClock> {
    /// Creates a wall-clock store over `state`.
    pub fn new(state: AppState, config: &CoreConfig) -> Self {
        Self::with_clock(state, config, SystemClock)
    }

    /// Creates a wall-clock store seeded with the demo workspaces.
    pub fn demo(config: &CoreConfig) -> Self {
        Self::new(demo_state(), config)
    }
}

impl<C: Clock> WorkspaceStore<C> {
    /// Creates a store driven by a caller-provided clock.
    pub fn with_clock(state: AppState, config: &CoreConfig, clock: C) -> Self {
        Self {
            state,
            invites: InviteScheduler::new(config.invite_accept_delay()),
            clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Owned copy of the current state; later actions never change it.
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.state.current_workspace()
    }

    pub fn invites(&self) -> &InviteScheduler {
        &self.invites
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Applies one action.
    ///
    /// # Errors
    /// Returns the reducer's `ActionError` unchanged; state is untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        match self.state.apply(&action) {
            Ok(next) => {
                self.state = next;
                self.after_applied(&action);
                info!(
                    "event=action_applied module=store status=ok action={} workspace_id={}",
                    action.kind(),
                    action.workspace_id()
                );
                Ok(())
            }
            Err(err) => {
                debug!(
                    "event=action_skipped module=store status=skipped action={} workspace_id={} reason={}",
                    action.kind(),
                    action.workspace_id(),
                    err.code()
                );
                Err(err)
            }
        }
    }

    /// Creates a workspace and makes it current.
    pub fn create_workspace(&mut self, name: impl Into<String>) -> Result<WorkspaceId, ActionError> {
        let action = Action::create_workspace(name);
        let workspace_id = action.workspace_id();
        self.dispatch(action)?;
        Ok(workspace_id)
    }

    pub fn rename_workspace(
        &mut self,
        workspace_id: WorkspaceId,
        name: impl Into<String>,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::RenameWorkspace {
            workspace_id,
            name: name.into(),
        })
    }

    pub fn delete_workspace(&mut self, workspace_id: WorkspaceId) -> Result<(), ActionError> {
        self.dispatch(Action::DeleteWorkspace { workspace_id })
    }

    pub fn select_workspace(&mut self, workspace_id: WorkspaceId) -> Result<(), ActionError> {
        self.dispatch(Action::SelectWorkspace { workspace_id })
    }

    /// Adds a pending member and schedules promotion to `role`.
    pub fn invite_member(
        &mut self,
        workspace_id: WorkspaceId,
        email: impl Into<String>,
        role: MemberRole,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::InviteMember {
            workspace_id,
            email: email.into(),
            role,
        })
    }

    pub fn change_member_role(
        &mut self,
        workspace_id: WorkspaceId,
        email: impl Into<String>,
        role: MemberRole,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::ChangeMemberRole {
            workspace_id,
            email: email.into(),
            role,
        })
    }

    /// Moves a member to the next role in the cycle and returns it.
    pub fn cycle_member_role(
        &mut self,
        workspace_id: WorkspaceId,
        email: &str,
    ) -> Result<MemberRole, ActionError> {
        let current = self
            .state
            .workspace(workspace_id)
            .ok_or(ActionError::WorkspaceNotFound(workspace_id))?
            .member(email)
            .ok_or_else(|| ActionError::MemberNotFound {
                workspace_id,
                email: email.to_string(),
            })?
            .role;
        let next = current.cycled();
        self.change_member_role(workspace_id, email, next)?;
        Ok(next)
    }

    pub fn remove_member(
        &mut self,
        workspace_id: WorkspaceId,
        email: impl Into<String>,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::RemoveMember {
            workspace_id,
            email: email.into(),
        })
    }

    /// Appends an empty project and returns its id.
    pub fn create_project(
        &mut self,
        workspace_id: WorkspaceId,
        name: impl Into<String>,
        status: ProjectStatus,
    ) -> Result<ProjectId, ActionError> {
        let project_id = Uuid::new_v4();
        self.dispatch(Action::CreateProject {
            workspace_id,
            project_id,
            name: name.into(),
            status,
        })?;
        Ok(project_id)
    }

    pub fn update_project(
        &mut self,
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        patch: ProjectPatch,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::UpdateProject {
            workspace_id,
            project_id,
            patch,
        })
    }

    /// Deletes a project together with all of its tasks.
    pub fn delete_project(
        &mut self,
        workspace_id: WorkspaceId,
        project_id: ProjectId,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::DeleteProject {
            workspace_id,
            project_id,
        })
    }

    /// Prepends `task` to the project's task list and returns its id.
    pub fn add_task(
        &mut self,
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        task: Task,
    ) -> Result<TaskId, ActionError> {
        let task_id = task.id;
        self.dispatch(Action::AddTask {
            workspace_id,
            project_id,
            task,
        })?;
        Ok(task_id)
    }

    pub fn update_task(
        &mut self,
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::UpdateTask {
            workspace_id,
            project_id,
            task_id,
            patch,
        })
    }

    pub fn delete_task(
        &mut self,
        workspace_id: WorkspaceId,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> Result<(), ActionError> {
        self.dispatch(Action::DeleteTask {
            workspace_id,
            project_id,
            task_id,
        })
    }

    /// Fires every acceptance that is due by the store's clock.
    ///
    /// Returns how many invites were actually accepted; entries whose member
    /// or workspace vanished are dropped as no-ops.
    pub fn poll_invites(&mut self) -> usize {
        let due = self.invites.take_due(self.clock.now_millis());
        let mut accepted = 0;
        for invite in due {
            let accept = Action::AcceptInvite {
                workspace_id: invite.workspace_id,
                email: invite.email,
                role: invite.role,
            };
            if self.dispatch(accept).is_ok() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Projects of the current workspace matching the global search box.
    pub fn search(&self, query: &str) -> Vec<&Project> {
        self.current_workspace()
            .map(|workspace| global_search(&workspace.projects, query))
            .unwrap_or_default()
    }

    /// Dashboard aggregates for the current workspace.
    pub fn analytics(&self) -> Analytics {
        self.current_workspace()
            .map(Analytics::for_workspace)
            .unwrap_or_default()
    }

    fn after_applied(&mut self, action: &Action) {
        match action {
            Action::InviteMember {
                workspace_id,
                email,
                role,
            } => {
                let email = email.trim();
                let due_at = self.invites.schedule(
                    *workspace_id,
                    email,
                    *role,
                    self.clock.now_millis(),
                );
                debug!(
                    "event=invite_scheduled module=store status=ok workspace_id={} email={} role={} due_at={}",
                    workspace_id,
                    redact_email(email),
                    role,
                    due_at
                );
            }
            Action::RemoveMember {
                workspace_id,
                email,
            } => {
                if self.invites.cancel(*workspace_id, email) {
                    debug!(
                        "event=invite_cancelled module=store status=ok workspace_id={} email={}",
                        workspace_id,
                        redact_email(email)
                    );
                }
            }
            Action::DeleteWorkspace { workspace_id } => {
                let cancelled = self.invites.cancel_workspace(*workspace_id);
                if cancelled > 0 {
                    debug!(
                        "event=invite_cancelled module=store status=ok workspace_id={} count={}",
                        workspace_id, cancelled
                    );
                }
            }
            _ => {}
        }
    }
}
