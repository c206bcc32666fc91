// apps/dashboard/src/command/convert.rs
//! Convert rich text editor markup into procedure text

use super::Command;
use crate::error::{Result, WrapErr};
use std::path::PathBuf;

pub struct ConvertCommand {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl ConvertCommand {
    pub fn new(input: PathBuf, output: Option<PathBuf>) -> Self {
        Self { input, output }
    }
}

#[async_trait::async_trait]
impl Command for ConvertCommand {
    async fn execute(&self) -> Result<()> {
        let markup = tokio::fs::read(&self.input)
            .await
            .with_context(|| format!("Read markup file {:?}", self.input))?;
        let text = procedure::convert_markup_to_text(&search_core::decode_text(&markup));

        match &self.output {
            Some(output) => {
                tokio::fs::write(output, &text)
                    .await
                    .with_context(|| format!("Write procedure file {:?}", output))?;
                tracing::info!("converted {:?} to {:?}", self.input, output);
            }
            None => print!("{}", text),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_convert_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.html");
        let output = dir.path().join("out.txt");
        std::fs::write(
            &input,
            "<h2>Base</h2><p>Container</p><h3>Lista</h3><pre><code>docker ps</code></pre>",
        )
        .unwrap();

        ConvertCommand::new(input, Some(output.clone()))
            .execute()
            .await
            .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text, "[Base]\nContainer\n\nCOMANDO: Lista\ndocker ps\n");
    }
}
