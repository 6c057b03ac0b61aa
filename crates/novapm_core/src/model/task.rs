//! Task domain model.
//!
//! # Responsibility
//! - Define the atomic work item owned by exactly one project.
//! - Provide the partial-update merge used by task edits.
//!
//! # Invariants
//! - `id` is generated once and never reassigned.
//! - `assignee` is a soft reference to a member email; it is never checked
//!   against the member list.
//! - `status` is always one of the three board columns.

use crate::model::label::{parse_label, ParseLabelError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = Uuid;

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started.
    #[serde(rename = "To Do")]
    ToDo,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [TaskStatus; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the stable display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("task status", s, &Self::ALL, Self::as_str)
    }
}

/// Task urgency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// All priorities from least to most urgent.
    pub const ALL: [TaskPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Returns the stable display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("task priority", s, &Self::ALL, Self::as_str)
    }
}

/// Atomic work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id, unique across the whole state.
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Member email. May point at a member that no longer exists.
    pub assignee: String,
    pub notes: String,
    /// Serialized as an RFC 3339 timestamp or `null`.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a quick-add task with a generated id.
    ///
    /// # Invariants
    /// - `title` is trimmed.
    /// - Starts in `To Do` with empty notes and no due date.
    pub fn new(
        title: impl Into<String>,
        priority: TaskPriority,
        assignee: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, priority, assignee)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by seed fixtures and tests where identity must be known upfront.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        priority: TaskPriority,
        assignee: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into().trim().to_string(),
            status: TaskStatus::ToDo,
            priority,
            assignee: assignee.into(),
            notes: String::new(),
            due_date: None,
        }
    }

    /// Builder-style status override for fixtures.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder-style due date override for fixtures.
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Partial update for a task.
///
/// Only `Some` fields overwrite; `None` fields leave the task untouched.
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Patch that only moves the task to another column.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.notes.is_none()
            && self.due_date.is_none()
    }

    /// Shallow-merges present fields into `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.trim().to_string();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = assignee.clone();
        }
        if let Some(notes) = &self.notes {
            task.notes = notes.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskPatch, TaskPriority, TaskStatus};
    use chrono::{TimeZone, Utc};

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn new_task_uses_quick_add_defaults() {
        let task = Task::new("  Write changelog ", TaskPriority::High, "mia@novapm.io");
        assert!(!task.id.is_nil());
        assert_eq!(task.title, "Write changelog");
        assert_eq!(task.status, TaskStatus::ToDo);
        assert!(task.notes.is_empty());
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut task = Task::new("Audit", TaskPriority::Low, "alex@novapm.io");
        let original = task.clone();

        TaskPatch::status(TaskStatus::Done).apply_to(&mut task);

        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.title, original.title);
        assert_eq!(task.priority, original.priority);
        assert_eq!(task.assignee, original.assignee);
    }

    #[test]
    fn patch_can_clear_due_date() {
        let due = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut task = Task::new("Ship", TaskPriority::Urgent, "sam@novapm.io").with_due_date(due);

        let patch = TaskPatch {
            due_date: Some(None),
            ..TaskPatch::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut task);

        assert_eq!(task.due_date, None);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
        assert_eq!("urgent".parse::<TaskPriority>(), Ok(TaskPriority::Urgent));
        assert!("Blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn serialization_uses_display_labels_and_camel_case() {
        let task = Task::new("Adopt OTEL", TaskPriority::High, "sam@novapm.io")
            .with_status(TaskStatus::InProgress);
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["status"], "In Progress");
        assert_eq!(json["priority"], "High");
        assert!(json["dueDate"].is_null());
    }
}
