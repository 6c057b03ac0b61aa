//! Dashboard aggregates.
//!
//! # Invariants
//! - Pure function of projects and members; nothing is cached.
//! - Member rows follow the member list. Tasks assigned to unknown emails
//!   count toward totals but get no row of their own.
//! - Completion never divides by zero: an empty project reports 0%.

use crate::model::member::Member;
use crate::model::project::{Project, ProjectId};
use crate::model::task::TaskStatus;
use crate::model::workspace::Workspace;
use serde::Serialize;
use std::collections::HashMap;

/// Task count in one status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: TaskStatus,
    pub count: usize,
}

/// Task count for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberLoad {
    pub email: String,
    /// Chart label: the member's name, or the full email when it is blank.
    pub label: String,
    pub count: usize,
}

/// Completion of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCompletion {
    pub project_id: ProjectId,
    pub name: String,
    /// `0..=100`.
    pub percent: u8,
}

/// Aggregates shown on the analytics overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub total_tasks: usize,
    /// Always three rows in `To Do, In Progress, Done` order.
    pub by_status: Vec<StatusCount>,
    pub by_member: Vec<MemberLoad>,
    pub completion: Vec<ProjectCompletion>,
}

impl Analytics {
    pub fn compute(projects: &[Project], members: &[Member]) -> Self {
        let mut by_status: Vec<StatusCount> = TaskStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: 0,
            })
            .collect();
        let mut by_assignee: HashMap<&str, usize> = HashMap::new();
        let mut total_tasks = 0;

        for task in projects.iter().flat_map(|project| project.tasks.iter()) {
            total_tasks += 1;
            if let Some(bucket) = by_status.iter_mut().find(|row| row.status == task.status) {
                bucket.count += 1;
            }
            *by_assignee.entry(task.assignee.as_str()).or_default() += 1;
        }

        let by_member = members
            .iter()
            .map(|member| MemberLoad {
                email: member.email.clone(),
                label: chart_label(member).to_string(),
                count: by_assignee
                    .get(member.email.as_str())
                    .copied()
                    .unwrap_or(0),
            })
            .collect();

        let completion = projects
            .iter()
            .map(|project| ProjectCompletion {
                project_id: project.id,
                name: project.name.clone(),
                percent: completion_percent(project),
            })
            .collect();

        Self {
            total_tasks,
            by_status,
            by_member,
            completion,
        }
    }

    pub fn for_workspace(workspace: &Workspace) -> Self {
        Self::compute(&workspace.projects, &workspace.members)
    }

    /// Count for one status; zero when `self` is the empty default.
    pub fn status_count(&self, status: TaskStatus) -> usize {
        self.by_status
            .iter()
            .find(|row| row.status == status)
            .map_or(0, |row| row.count)
    }
}

fn chart_label(member: &Member) -> &str {
    if member.name.trim().is_empty() {
        &member.email
    } else {
        &member.name
    }
}

/// `round(100 * done / max(1, total))`, rounding halves up.
pub fn completion_percent(project: &Project) -> u8 {
    let total = project.tasks.len().max(1);
    let done = project.count_with_status(TaskStatus::Done);
    let percent = (200 * done + total) / (2 * total);
    u8::try_from(percent.min(100)).unwrap_or(100)
}
