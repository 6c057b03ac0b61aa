//! Global search over the current workspace's projects.

use crate::model::project::Project;

/// Returns projects whose name, or any task title, contains `query`.
///
/// Matching is a case-insensitive substring test on the trimmed query.
/// A blank query returns every project, in list order.
pub fn global_search<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| project_matches(project, &needle))
        .collect()
}

fn project_matches(project: &Project, needle: &str) -> bool {
    contains_folded(&project.name, needle)
        || project
            .tasks
            .iter()
            .any(|task| contains_folded(&task.title, needle))
}

/// `needle` must already be lowercase.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::global_search;
    use crate::model::project::{Project, ProjectStatus};
    use crate::model::task::{Task, TaskPriority};

    fn fixtures() -> Vec<Project> {
        vec![
            Project::new("Website Revamp", ProjectStatus::Active).with_tasks(vec![Task::new(
                "Build new Navbar",
                TaskPriority::High,
                "jamie@novapm.io",
            )]),
            Project::new("CI Speedup", ProjectStatus::Completed),
        ]
    }

    #[test]
    fn blank_query_returns_everything() {
        let projects = fixtures();
        assert_eq!(global_search(&projects, "  ").len(), 2);
    }

    #[test]
    fn task_title_match_includes_project() {
        let projects = fixtures();
        let hits = global_search(&projects, "NAVBAR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Website Revamp");
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let projects = fixtures();
        let hits = global_search(&projects, " speed");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "CI Speedup");
    }
}
