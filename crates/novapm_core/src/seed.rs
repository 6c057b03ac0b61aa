//! Demo fixtures used as the initial state.
//!
//! Two workspaces with members, projects, epics and tasks. Ids are freshly
//! generated on every call; names and labels are fixed.

use crate::model::member::{Member, MemberRole};
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::model::workspace::Workspace;
use crate::state::app_state::AppState;
use chrono::Utc;

/// Seeded state; the first workspace is current.
pub fn demo_state() -> AppState {
    AppState::new(vec![growth_team(), platform_engineering()])
}

fn growth_team() -> Workspace {
    Workspace::new("Growth Team")
        .with_members(vec![
            Member::new("alex@novapm.io", "Alex", MemberRole::Owner),
            Member::new("jamie@novapm.io", "Jamie", MemberRole::Admin),
            Member::new("mia@novapm.io", "Mia", MemberRole::Member),
        ])
        .with_projects(vec![
            Project::new("Website Revamp", ProjectStatus::Active)
                .with_epics(["Design system", "Marketing pages"])
                .with_tasks(vec![
                    Task::new("Audit current pages", TaskPriority::Medium, "alex@novapm.io"),
                    Task::new("Build new Navbar", TaskPriority::High, "jamie@novapm.io")
                        .with_status(TaskStatus::InProgress)
                        .with_due_date(Utc::now()),
                    Task::new("Migrate blog", TaskPriority::Low, "mia@novapm.io")
                        .with_status(TaskStatus::Done),
                ]),
            Project::new("Product Launch Q4", ProjectStatus::OnHold)
                .with_epics(["Beta program", "PR kit"])
                .with_tasks(vec![
                    Task::new("Recruit beta users", TaskPriority::Urgent, "mia@novapm.io"),
                    Task::new("Draft announcement", TaskPriority::Medium, "alex@novapm.io"),
                ]),
        ])
}

fn platform_engineering() -> Workspace {
    Workspace::new("Platform Engineering")
        .with_members(vec![
            Member::new("sam@novapm.io", "Sam", MemberRole::Owner),
            Member::new("alex@novapm.io", "Alex", MemberRole::Admin),
        ])
        .with_projects(vec![
            Project::new("Observability Upgrade", ProjectStatus::Active)
                .with_epics(["Tracing", "Dashboards"])
                .with_tasks(vec![Task::new(
                    "Adopt OTEL",
                    TaskPriority::High,
                    "sam@novapm.io",
                )
                .with_status(TaskStatus::InProgress)]),
            Project::new("CI Speedup", ProjectStatus::Completed)
                .with_epics(["Caching", "Parallelism"])
                .with_tasks(vec![Task::new(
                    "Shard test suites",
                    TaskPriority::Medium,
                    "alex@novapm.io",
                )
                .with_status(TaskStatus::Done)]),
        ])
}

#[cfg(test)]
mod tests {
    use super::demo_state;
    use std::collections::HashSet;

    #[test]
    fn demo_state_selects_first_workspace() {
        let state = demo_state();
        assert_eq!(state.workspaces().len(), 2);
        assert_eq!(state.current_workspace().unwrap().name, "Growth Team");
    }

    #[test]
    fn demo_ids_are_unique() {
        let state = demo_state();
        let mut ids = HashSet::new();
        for workspace in state.workspaces() {
            assert!(ids.insert(workspace.id));
            for project in &workspace.projects {
                assert!(ids.insert(project.id));
                for task in &project.tasks {
                    assert!(ids.insert(task.id));
                }
            }
        }
        assert_eq!(ids.len(), 2 + 4 + 7);
    }
}
