// apps/dashboard/src/command/download.rs
//! Copy the file behind a procedure out of the store

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_core::Caller;
use std::path::PathBuf;

pub struct DownloadCommand {
    config: Config,
    caller: Caller,
    id: u64,
    output: Option<PathBuf>,
}

impl DownloadCommand {
    pub fn new(config: Config, caller: Caller, id: u64, output: Option<PathBuf>) -> Self {
        Self { config, caller, id, output }
    }
}

/// Raw bytes and file name of a visible procedure
pub fn fetch(dashboard: &Dashboard, id: u64) -> Result<(String, Vec<u8>)> {
    let procedure = dashboard.procedure(id)?;
    let bytes = dashboard.store.read_bytes(&procedure.filename)?;
    Ok((procedure.filename.clone(), bytes))
}

#[async_trait::async_trait]
impl Command for DownloadCommand {
    async fn execute(&self) -> Result<()> {
        let dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let (filename, bytes) = fetch(&dashboard, self.id)?;

        let output = self.output.clone().unwrap_or_else(|| PathBuf::from(&filename));
        tokio::fs::write(&output, &bytes)
            .await
            .with_context(|| format!("Write {:?}", output))?;

        println!("⬇️  Saved {} to {:?} ({} bytes)", filename, output, bytes.len());
        Ok(())
    }
}
