//! Canonical text form of a [`Document`], the inverse of [`crate::parse`].

use std::fmt;

use crate::model::Document;
use crate::parser::COMMAND_KEYWORD;

/// Serialize a document into the procedure text format.
pub fn serialize(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();
    for section in &doc.sections {
        // `[]` is not a header, a blank title is written padded
        let title = section.title.trim();
        lines.push(if title.is_empty() {
            "[ ]".to_string()
        } else {
            format!("[{}]", title)
        });
        lines.push(section.description.clone());
        lines.push(String::new());

        for command in &section.commands {
            lines.push(format!("{} {}", COMMAND_KEYWORD, command.label));
            lines.push(command.body.clone());
            lines.push(String::new());
        }
    }
    lines.join("\n")
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
