//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `novapm_core` linkage.
//! - Print a deterministic summary of the demo state: workspaces, analytics
//!   and, when a query argument is given, global search hits.
//!
//! Config is read from the JSON file named by `NOVAPM_CONFIG`, if set.

use novapm_core::{
    core_version, init_logging, CoreConfig, TaskStatus, WorkspaceStore,
};
use std::process::ExitCode;

const CONFIG_ENV: &str = "NOVAPM_CONFIG";

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("novapm: {message}");
            return ExitCode::from(2);
        }
    };
    if let Err(message) = init_logging(&config.logging_config(None)) {
        eprintln!("novapm: {message}");
        return ExitCode::from(2);
    }

    let store = WorkspaceStore::demo(&config);
    println!("novapm_core version={}", core_version());

    let current_id = store.current_workspace().map(|workspace| workspace.id);
    for workspace in store.state().workspaces() {
        println!(
            "workspace name={:?} members={} projects={} tasks={} current={}",
            workspace.name,
            workspace.members.len(),
            workspace.projects.len(),
            workspace.tasks().count(),
            Some(workspace.id) == current_id
        );
    }

    let analytics = store.analytics();
    println!(
        "analytics total={} todo={} in_progress={} done={}",
        analytics.total_tasks,
        analytics.status_count(TaskStatus::ToDo),
        analytics.status_count(TaskStatus::InProgress),
        analytics.status_count(TaskStatus::Done)
    );
    for row in &analytics.completion {
        println!("project name={:?} completion={}%", row.name, row.percent);
    }

    if let Some(query) = std::env::args().nth(1) {
        for project in store.search(&query) {
            println!("match query={:?} project={:?}", query, project.name);
        }
    }

    log::debug!("event=cli_done module=cli status=ok");
    ExitCode::SUCCESS
}

fn load_config() -> Result<CoreConfig, String> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return Ok(CoreConfig::default());
    };
    let raw = std::fs::read_to_string(&path).map_err(|err| {
        format!(
            "failed to read {CONFIG_ENV} `{}`: {err}",
            std::path::Path::new(&path).display()
        )
    })?;
    CoreConfig::from_json_str(&raw).map_err(|err| err.to_string())
}
