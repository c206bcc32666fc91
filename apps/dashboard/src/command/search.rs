// apps/dashboard/src/command/search.rs
//! Search the procedures visible to the caller

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::Result;
use search_core::{Caller, Match, MatchKind, SearchOutcome};

pub struct SearchCommand {
    config: Config,
    caller: Caller,
    query: String,
    json: bool,
}

impl SearchCommand {
    pub fn new(config: Config, caller: Caller, query: String, json: bool) -> Self {
        Self { config, caller, query, json }
    }
}

pub fn run(dashboard: &Dashboard, query: &str) -> SearchOutcome {
    let visible = dashboard.visible();
    search_core::search_with_config(query, &visible, &dashboard.store, &dashboard.search)
}

fn render_match(m: &Match) -> String {
    let mut out = format!(
        "[{}] {:>4}  {} {}\n",
        m.kind, m.procedure.id, m.procedure.icon, m.procedure.name
    );
    if m.kind == MatchKind::Content {
        for hit in &m.sections {
            out.push_str(&format!("        #{} {}", hit.index, hit.title));
            if hit.matching_commands > 0 {
                out.push_str(&format!(" ({} matching commands)", hit.matching_commands));
            }
            out.push('\n');
        }
    }
    out
}

pub fn render(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::QueryTooShort { min_len } => {
            format!("Query must be at least {} characters long.\n", min_len)
        }
        SearchOutcome::Matches { results } if results.is_empty() => "No matches.\n".to_string(),
        SearchOutcome::Matches { results } => results.iter().map(render_match).collect(),
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let outcome = run(&dashboard, &self.query);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print!("{}", render(&outcome));
        }
        Ok(())
    }
}
