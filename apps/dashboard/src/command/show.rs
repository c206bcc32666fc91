// apps/dashboard/src/command/show.rs
//! Render one procedure as sections and commands

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::Result;
use procedure::Document;
use search_core::{Caller, ProcedureMeta};

pub struct ShowCommand {
    config: Config,
    caller: Caller,
    id: u64,
    json: bool,
}

impl ShowCommand {
    pub fn new(config: Config, caller: Caller, id: u64, json: bool) -> Self {
        Self { config, caller, id, json }
    }
}

pub fn load(dashboard: &Dashboard, id: u64) -> Result<(ProcedureMeta, Document)> {
    let meta = dashboard.procedure(id)?.clone();
    let text = dashboard.read(&meta)?;
    Ok((meta, procedure::parse(&text)))
}

pub fn render(meta: &ProcedureMeta, doc: &Document) -> String {
    let mut out = format!("{} {}\n", meta.icon, meta.name);
    if !meta.description.is_empty() {
        out.push_str(&format!("{}\n", meta.description));
    }

    for section in &doc.sections {
        out.push_str(&format!("\n== {} ==\n", section.title));
        if !section.description.is_empty() {
            out.push_str(&format!("{}\n", section.description));
        }
        for command in &section.commands {
            out.push_str(&format!("\n  > {}\n", command.label));
            for line in command.body.lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }
    out
}

#[async_trait::async_trait]
impl Command for ShowCommand {
    async fn execute(&self) -> Result<()> {
        let dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let (meta, doc) = load(&dashboard, self.id)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            print!("{}", render(&meta, &doc));
        }
        Ok(())
    }
}
