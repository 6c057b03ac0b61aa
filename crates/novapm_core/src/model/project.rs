//! Project domain model.
//!
//! # Responsibility
//! - Define the named unit of work that owns tasks and epic labels.
//! - Provide the partial-update merge used by project edits.
//!
//! # Invariants
//! - A project belongs to exactly one workspace and owns its tasks.
//! - `tasks` is ordered newest-first; additions are prepended.

use crate::model::label::{parse_label, ParseLabelError};
use crate::model::task::{Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a project.
pub type ProjectId = Uuid;

/// Project lifecycle label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::OnHold, Self::Completed];

    /// Returns the stable display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("project status", s, &Self::ALL, Self::as_str)
    }
}

/// Named unit of work inside a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    /// Free-form grouping labels with no behavior of their own.
    pub epics: Vec<String>,
    /// Newest first.
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project with a generated id.
    pub fn new(name: impl Into<String>, status: ProjectStatus) -> Self {
        Self::with_id(Uuid::new_v4(), name, status)
    }

    /// Creates an empty project with a caller-provided id.
    pub fn with_id(id: ProjectId, name: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            status,
            epics: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Builder-style epic list override for fixtures.
    pub fn with_epics<I, S>(mut self, epics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.epics = epics.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style task list override for fixtures. Order is kept as given.
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub(crate) fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }

    /// Number of tasks in `status`.
    pub fn count_with_status(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|task| task.status == status).count()
    }
}

/// Partial update for a project.
///
/// Only `Some` fields overwrite; `None` fields leave the project untouched.
/// Tasks are never part of a project patch; they have their own actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub epics: Option<Vec<String>>,
}

impl ProjectPatch {
    /// Patch that renames and re-labels a project, as the edit prompt does.
    pub fn rename(name: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status),
            epics: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.epics.is_none()
    }

    /// Shallow-merges present fields into `project`.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.trim().to_string();
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(epics) = &self.epics {
            project.epics = epics.clone();
        }
    }
}
