// apps/dashboard/src/command/delete.rs
//! Remove a procedure file and its catalog record

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::Result;
use search_core::{Caller, ProcedureMeta};

pub struct DeleteCommand {
    config: Config,
    caller: Caller,
    id: u64,
}

impl DeleteCommand {
    pub fn new(config: Config, caller: Caller, id: u64) -> Self {
        Self { config, caller, id }
    }
}

pub fn delete(dashboard: &mut Dashboard, id: u64) -> Result<ProcedureMeta> {
    let procedure = dashboard.deletable(id)?;

    if !dashboard.store.delete(&procedure.filename)? {
        tracing::warn!("file {} of procedure {} was already gone", procedure.filename, id);
    }
    let record = dashboard.catalog.remove(id)?;
    dashboard.save()?;
    Ok(record)
}

#[async_trait::async_trait]
impl Command for DeleteCommand {
    async fn execute(&self) -> Result<()> {
        let mut dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let record = delete(&mut dashboard, self.id)?;
        println!("🗑️  Deleted {} {}", record.icon, record.name);
        Ok(())
    }
}
