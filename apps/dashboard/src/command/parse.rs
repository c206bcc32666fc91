// apps/dashboard/src/command/parse.rs
//! Parse a procedure file and print it as JSON

use super::Command;
use crate::error::{Result, WrapErr};
use std::path::PathBuf;

pub struct ParseCommand {
    path: PathBuf,
    pretty: bool,
}

impl ParseCommand {
    pub fn new(path: PathBuf, pretty: bool) -> Self {
        Self { path, pretty }
    }
}

/// Parse raw file bytes into the JSON form of the document
pub fn parse_to_json(bytes: &[u8], pretty: bool) -> Result<String> {
    let doc = procedure::parse(&search_core::decode_text(bytes));
    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(json)
}

#[async_trait::async_trait]
impl Command for ParseCommand {
    async fn execute(&self) -> Result<()> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Read procedure file {:?}", self.path))?;
        println!("{}", parse_to_json(&bytes, self.pretty)?);
        Ok(())
    }
}
