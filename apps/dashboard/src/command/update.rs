// apps/dashboard/src/command/update.rs
//! Change catalog fields of a procedure

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::Result;
use search_core::{Caller, ProcedureMeta, ProcedureUpdate};

pub struct UpdateCommand {
    config: Config,
    caller: Caller,
    id: u64,
    update: ProcedureUpdate,
}

impl UpdateCommand {
    pub fn new(config: Config, caller: Caller, id: u64, update: ProcedureUpdate) -> Self {
        Self { config, caller, id, update }
    }
}

pub fn update(dashboard: &mut Dashboard, id: u64, update: ProcedureUpdate) -> Result<ProcedureMeta> {
    dashboard.editable(id)?;
    if update.is_empty() {
        tracing::info!("nothing to update for procedure {}", id);
    }

    let record = dashboard.catalog.update(id, update)?;
    dashboard.save()?;
    Ok(record)
}

#[async_trait::async_trait]
impl Command for UpdateCommand {
    async fn execute(&self) -> Result<()> {
        let mut dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let record = update(&mut dashboard, self.id, self.update.clone())?;
        println!(
            "✅ Updated {} {} ({})",
            record.icon,
            record.name,
            if record.is_public { "public" } else { "private" }
        );
        Ok(())
    }
}
