//! Workspace aggregate.
//!
//! # Responsibility
//! - Group members and projects under one tenant.
//! - Provide lookup helpers used by the reducer and read views.
//!
//! # Invariants
//! - Destroying a workspace destroys its projects and their tasks.
//! - `members` is unique by email.

use crate::model::member::Member;
use crate::model::project::{Project, ProjectId};
use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a workspace.
pub type WorkspaceId = Uuid;

/// Top-level tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub members: Vec<Member>,
    pub projects: Vec<Project>,
}

impl Workspace {
    /// Creates an empty workspace with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            members: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Looks up a member by exact email.
    pub fn member(&self, email: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.email == email)
    }

    pub(crate) fn member_mut(&mut self, email: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.email == email)
    }

    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }

    pub(crate) fn project_mut(&mut self, project_id: ProjectId) -> Option<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id == project_id)
    }

    /// Iterates every task of every project, in project then task order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.projects.iter().flat_map(|project| project.tasks.iter())
    }
}
