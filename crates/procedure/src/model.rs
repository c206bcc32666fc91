//! Parsed representation of a procedure file.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed procedure file: sections in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub sections: Vec<Section>,
}

/// A titled group of commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    pub title: String,
    /// Single line of free text following the title, may be empty
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    pub description: String,
    pub commands: Vec<Command>,
}

/// A labelled command body. The body keeps its internal newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(rename = "cmd"))]
    pub body: String,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of commands across all sections
    pub fn command_count(&self) -> usize {
        self.sections.iter().map(|s| s.commands.len()).sum()
    }
}

impl Section {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            commands: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Append a command unless its trimmed body is empty.
    ///
    /// Returns whether the command was kept.
    pub fn push_command(&mut self, command: Command) -> bool {
        if command.body.trim().is_empty() {
            return false;
        }
        self.commands.push(command);
        true
    }
}

impl Command {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_command_drops_blank_body() {
        let mut section = Section::new("S", "");
        assert!(!section.push_command(Command::new("empty", "  \n\t")));
        assert!(section.push_command(Command::new("real", "ls")));
        assert_eq!(section.commands, vec![Command::new("real", "ls")]);
    }

    #[test]
    fn test_command_count() {
        let doc = Document::new(vec![
            Section::new("A", "")
                .with_command(Command::new("a", "1"))
                .with_command(Command::new("b", "2")),
            Section::new("B", ""),
            Section::new("C", "").with_command(Command::new("c", "3")),
        ]);
        assert_eq!(doc.command_count(), 3);
        assert!(!doc.is_empty());
        assert!(Document::default().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_field_names() {
        let doc = Document::new(vec![
            Section::new("Git", "Version control").with_command(Command::new("Init", "git init")),
        ]);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["sections"][0]["desc"], "Version control");
        assert_eq!(json["sections"][0]["commands"][0]["cmd"], "git init");
    }
}
