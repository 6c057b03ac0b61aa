//! Per-project board columns and assignee labels.

use crate::model::member::Member;
use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};

/// Tasks of one status, in project order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// Splits a project's tasks into the three status columns.
pub fn board_columns(project: &Project) -> Vec<BoardColumn<'_>> {
    TaskStatus::ALL
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            tasks: project
                .tasks
                .iter()
                .filter(|task| task.status == *status)
                .collect(),
        })
        .collect()
}

/// Label for a task assignee; the raw email when no member matches.
pub fn assignee_label<'a>(members: &'a [Member], email: &'a str) -> &'a str {
    members
        .iter()
        .find(|member| member.email == email)
        .map_or(email, Member::display_name)
}
