//! Project list filter.
//!
//! # Invariants
//! - Every predicate defaults to "match all".
//! - Predicates are ANDed.
//! - Priority and assignee predicates match when at least one task matches.

use crate::model::project::{Project, ProjectStatus};
use crate::model::task::TaskPriority;
use crate::view::search::contains_folded;

/// Combinable project list predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring of the project name. Blank matches all.
    pub query: String,
    pub status: Option<ProjectStatus>,
    /// Project has at least one task with this priority.
    pub priority: Option<TaskPriority>,
    /// Project has at least one task assigned to this email.
    pub assignee: Option<String>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.query.trim().to_lowercase();
        self.matches_with_needle(project, &needle)
    }

    /// Keeps matching projects in input order.
    ///
    /// Accepts either a project slice or the output of another view, so it
    /// composes with `global_search`.
    pub fn apply<'a, I>(&self, projects: I) -> Vec<&'a Project>
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let needle = self.query.trim().to_lowercase();
        projects
            .into_iter()
            .filter(|project| self.matches_with_needle(project, &needle))
            .collect()
    }

    fn matches_with_needle(&self, project: &Project, needle: &str) -> bool {
        let name_match = needle.is_empty() || contains_folded(&project.name, needle);
        let status_match = self.status.map_or(true, |status| project.status == status);
        let priority_match = self.priority.map_or(true, |priority| {
            project.tasks.iter().any(|task| task.priority == priority)
        });
        let assignee_match = self.assignee.as_deref().map_or(true, |assignee| {
            project.tasks.iter().any(|task| task.assignee == assignee)
        });
        name_match && status_match && priority_match && assignee_match
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectFilter;
    use crate::model::project::{Project, ProjectStatus};
    use crate::model::task::{Task, TaskPriority};

    fn fixtures() -> Vec<Project> {
        vec![
            Project::new("Website Revamp", ProjectStatus::Active).with_tasks(vec![
                Task::new("Audit", TaskPriority::Medium, "alex@novapm.io"),
                Task::new("Navbar", TaskPriority::High, "jamie@novapm.io"),
            ]),
            Project::new("Product Launch Q4", ProjectStatus::OnHold).with_tasks(vec![
                Task::new("Recruit beta users", TaskPriority::Urgent, "mia@novapm.io"),
            ]),
            Project::new("Empty", ProjectStatus::Active),
        ]
    }

    #[test]
    fn default_filter_matches_everything() {
        let projects = fixtures();
        assert_eq!(ProjectFilter::new().apply(&projects).len(), 3);
    }

    #[test]
    fn predicates_are_anded() {
        let projects = fixtures();
        let filter = ProjectFilter::new()
            .with_status(ProjectStatus::Active)
            .with_priority(TaskPriority::High);
        let hits = filter.apply(&projects);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Website Revamp");

        let none = filter.with_assignee("mia@novapm.io").apply(&projects);
        assert!(none.is_empty());
    }

    #[test]
    fn task_predicates_exclude_projects_without_tasks() {
        let projects = fixtures();
        let hits = ProjectFilter::new()
            .with_assignee("alex@novapm.io")
            .apply(&projects);
        assert_eq!(hits.len(), 1);
        assert!(!ProjectFilter::new()
            .with_priority(TaskPriority::Low)
            .matches(&projects[2]));
    }

    #[test]
    fn name_query_ignores_task_titles() {
        let projects = fixtures();
        assert!(ProjectFilter::new()
            .with_query("navbar")
            .apply(&projects)
            .is_empty());
        assert_eq!(ProjectFilter::new().with_query("LAUNCH").apply(&projects).len(), 1);
    }
}
