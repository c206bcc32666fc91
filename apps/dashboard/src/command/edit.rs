// apps/dashboard/src/command/edit.rs
//! Replace the content of an existing procedure

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_core::store::PROCEDURE_EXTENSION;
use search_core::{decode_text, Caller, ProcedureMeta, StoreError};
use std::path::PathBuf;

pub struct EditCommand {
    config: Config,
    caller: Caller,
    id: u64,
    path: PathBuf,
    markup: bool,
}

impl EditCommand {
    pub fn new(config: Config, caller: Caller, id: u64, path: PathBuf, markup: bool) -> Self {
        Self { config, caller, id, path, markup }
    }
}

/// What the new content of a procedure is given as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSource {
    /// Procedure text, stored as is
    Text,
    /// Rich text editor markup, converted to procedure text first
    Markup,
}

pub fn edit(
    dashboard: &Dashboard,
    id: u64,
    content: &[u8],
    source: EditSource,
) -> Result<ProcedureMeta> {
    let record = dashboard.editable(id)?;

    match source {
        EditSource::Text => dashboard.store.write(&record.filename, content)?,
        EditSource::Markup => {
            let text = procedure::convert_markup_to_text(&decode_text(content));
            dashboard.store.write(&record.filename, text.as_bytes())?;
        }
    }

    tracing::info!("{} edited procedure {}", dashboard.caller.username, id);
    Ok(record)
}

#[async_trait::async_trait]
impl Command for EditCommand {
    async fn execute(&self) -> Result<()> {
        let source = if self.markup { EditSource::Markup } else { EditSource::Text };
        if source == EditSource::Text
            && !self.path.to_string_lossy().ends_with(PROCEDURE_EXTENSION)
        {
            return Err(StoreError::InvalidFileName {
                name: self.path.display().to_string(),
                reason: "only .txt files are accepted",
            }
            .into());
        }

        let dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let content = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Read {:?}", self.path))?;

        let record = edit(&dashboard, self.id, &content, source)?;
        println!("✅ Updated content of {} {}", record.icon, record.name);
        Ok(())
    }
}
