use novapm_core::{
    assignee_label, board_columns, demo_state, global_search, Analytics, CoreConfig,
    ManualClock, Member, MemberRole, Project, ProjectFilter, ProjectStatus, Task, TaskPriority,
    TaskStatus, WorkspaceStore,
};

#[test]
fn search_finds_project_through_task_title() {
    let state = demo_state();
    let workspace = state.current_workspace().unwrap();

    let hits = global_search(&workspace.projects, "Navbar");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Website Revamp");
}

#[test]
fn blank_search_returns_all_current_projects() {
    let store = WorkspaceStore::with_clock(
        demo_state(),
        &CoreConfig::default(),
        ManualClock::new(0),
    );
    assert_eq!(store.search(" \t").len(), 2);
    assert!(store.search("kubernetes").is_empty());
}

#[test]
fn search_follows_current_workspace() {
    let mut store = WorkspaceStore::with_clock(
        demo_state(),
        &CoreConfig::default(),
        ManualClock::new(0),
    );
    assert!(store.search("otel").is_empty());

    let platform = store.state().workspaces()[1].id;
    store.select_workspace(platform).unwrap();

    let hits = store.search("otel");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Observability Upgrade");
}

#[test]
fn filter_composes_with_search_results() {
    let state = demo_state();
    let workspace = state.current_workspace().unwrap();

    let searched = global_search(&workspace.projects, "a");
    let filtered = ProjectFilter::new()
        .with_status(ProjectStatus::OnHold)
        .with_priority(TaskPriority::Urgent)
        .apply(searched);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Product Launch Q4");
}

#[test]
fn filter_by_assignee_matches_any_task() {
    let state = demo_state();
    let workspace = state.current_workspace().unwrap();

    let jamie = ProjectFilter::new()
        .with_assignee("jamie@novapm.io")
        .apply(&workspace.projects);
    assert_eq!(jamie.len(), 1);
    assert_eq!(jamie[0].name, "Website Revamp");

    let alex = ProjectFilter::new()
        .with_assignee("alex@novapm.io")
        .apply(&workspace.projects);
    assert_eq!(alex.len(), 2);
}

#[test]
fn demo_analytics_for_growth_team() {
    let state = demo_state();
    let analytics = Analytics::for_workspace(state.current_workspace().unwrap());

    assert_eq!(analytics.total_tasks, 5);
    assert_eq!(analytics.status_count(TaskStatus::ToDo), 3);
    assert_eq!(analytics.status_count(TaskStatus::InProgress), 1);
    assert_eq!(analytics.status_count(TaskStatus::Done), 1);

    let loads: Vec<_> = analytics
        .by_member
        .iter()
        .map(|row| (row.label.as_str(), row.count))
        .collect();
    assert_eq!(loads, vec![("Alex", 2), ("Jamie", 1), ("Mia", 2)]);

    let completion: Vec<_> = analytics
        .completion
        .iter()
        .map(|row| (row.name.as_str(), row.percent))
        .collect();
    assert_eq!(
        completion,
        vec![("Website Revamp", 33), ("Product Launch Q4", 0)]
    );
}

#[test]
fn member_without_name_is_charted_by_full_email() {
    let members = vec![
        Member::new("alex@novapm.io", "Alex", MemberRole::Owner),
        Member::new("kai@novapm.io", " ", MemberRole::Member),
    ];
    let projects = vec![Project::new("Docs", ProjectStatus::Active).with_tasks(vec![
        Task::new("Write guide", TaskPriority::Low, "kai@novapm.io"),
    ])];

    let analytics = Analytics::compute(&projects, &members);

    let labels: Vec<_> = analytics
        .by_member
        .iter()
        .map(|row| (row.label.as_str(), row.count))
        .collect();
    assert_eq!(labels, vec![("Alex", 0), ("kai@novapm.io", 1)]);
}

#[test]
fn analytics_of_empty_store_is_default() {
    let mut store = WorkspaceStore::with_clock(
        demo_state(),
        &CoreConfig::default(),
        ManualClock::new(0),
    );
    let ids: Vec<_> = store.state().workspaces().iter().map(|w| w.id).collect();
    for id in ids {
        store.delete_workspace(id).unwrap();
    }

    assert_eq!(store.analytics(), Analytics::default());
    assert!(store.search("anything").is_empty());
}

#[test]
fn board_and_labels_render_demo_project() {
    let state = demo_state();
    let workspace = state.current_workspace().unwrap();
    let project = &workspace.projects[0];

    let columns = board_columns(project);
    let titles: Vec<Vec<&str>> = columns
        .iter()
        .map(|column| column.tasks.iter().map(|task| task.title.as_str()).collect())
        .collect();
    assert_eq!(
        titles,
        vec![
            vec!["Audit current pages"],
            vec!["Build new Navbar"],
            vec!["Migrate blog"],
        ]
    );

    assert_eq!(assignee_label(&workspace.members, "jamie@novapm.io"), "Jamie");
    assert_eq!(
        assignee_label(&workspace.members, "sam@novapm.io"),
        "sam@novapm.io"
    );
}

#[test]
fn snapshot_serializes_for_presentation_layer() {
    let state = demo_state();
    let json = serde_json::to_value(&state).unwrap();

    let first = &json["workspaces"][0];
    assert_eq!(first["name"], "Growth Team");
    assert_eq!(first["members"][0]["role"], "Owner");
    assert_eq!(first["projects"][1]["status"], "On Hold");
    assert_eq!(first["projects"][0]["tasks"][0]["status"], "To Do");
    assert!(first["projects"][0]["tasks"][1]["dueDate"].is_string());
    assert_eq!(json["currentWorkspaceId"], first["id"]);
}
