// apps/dashboard/src/command/list.rs
//! List the procedures visible to the caller

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::Result;
use search_core::{Caller, Permissions, ProcedureMeta};
use serde::Serialize;

pub struct ListCommand {
    config: Config,
    caller: Caller,
    json: bool,
}

/// A visible procedure with what the caller may do to it
#[derive(Debug, Serialize)]
pub struct ListEntry {
    #[serde(flatten)]
    pub procedure: ProcedureMeta,
    #[serde(flatten)]
    pub permissions: Permissions,
}

impl ListCommand {
    pub fn new(config: Config, caller: Caller, json: bool) -> Self {
        Self { config, caller, json }
    }
}

pub fn entries(dashboard: &Dashboard) -> Vec<ListEntry> {
    dashboard
        .visible()
        .into_iter()
        .map(|procedure| ListEntry {
            permissions: dashboard.caller.permissions(&procedure),
            procedure,
        })
        .collect()
}

fn render(entry: &ListEntry) -> String {
    let mut flags = Vec::new();
    if !entry.procedure.is_public {
        flags.push("private");
    }
    if entry.permissions.can_edit {
        flags.push("edit");
    }
    if entry.permissions.can_delete {
        flags.push("delete");
    }

    let mut line = format!(
        "{:>4}  {} {}",
        entry.procedure.id, entry.procedure.icon, entry.procedure.name
    );
    if !entry.procedure.description.is_empty() {
        line.push_str(&format!(" - {}", entry.procedure.description));
    }
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

#[async_trait::async_trait]
impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        let dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let entries = entries(&dashboard);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("No procedures available. Run `procdash init-samples` to add examples.");
            return Ok(());
        }
        for entry in &entries {
            println!("{}", render(entry));
        }
        Ok(())
    }
}
