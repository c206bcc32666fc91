//! Line oriented parser for procedure files.
//!
//! ```text
//! [Section title]
//! Section description
//!
//! COMANDO: Command label
//! command line 1
//! command line 2
//!
//! COMANDO: Another command
//! another command
//! ```
//!
//! A command body runs until the next section or command header, so bodies may span
//! several lines without an explicit end marker. The parser never fails: anything it
//! does not recognise is skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Command, Document, Section};

pub const COMMAND_KEYWORD: &str = "COMANDO:";

static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.+)\]$").expect("section header pattern"));

static COMMAND_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^COMANDO:\s*(.*)$").expect("command header pattern"));

/// Classification of a single physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[title]`, title already trimmed
    SectionHeader(&'a str),
    /// `COMANDO: label`, label already trimmed
    CommandHeader(&'a str),
    Blank,
    /// Any other line, trimmed
    Text(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Line::Blank;
        }
        if let Some(caps) = SECTION_HEADER.captures(line) {
            if let Some(title) = caps.get(1) {
                return Line::SectionHeader(title.as_str().trim());
            }
        }
        if let Some(caps) = COMMAND_HEADER.captures(line) {
            let label = caps.get(1).map_or("", |m| m.as_str().trim());
            return Line::CommandHeader(label);
        }
        Line::Text(line)
    }
}

enum State<'a> {
    /// Outside of any command body
    Idle,
    /// Just read a section header, the next non-blank line is its description
    AwaitingDescription,
    InCommandBody { label: &'a str, lines: Vec<&'a str> },
}

struct Parser<'a> {
    sections: Vec<Section>,
    current: Option<Section>,
    state: State<'a>,
}

impl<'a> Parser<'a> {
    fn new() -> Self {
        Self {
            sections: Vec::new(),
            current: None,
            state: State::Idle,
        }
    }

    fn feed(&mut self, raw: &'a str) {
        match Line::classify(raw) {
            Line::SectionHeader(title) => {
                self.finish_command();
                if let Some(section) = self.current.take() {
                    self.sections.push(section);
                }
                self.current = Some(Section::new(title, ""));
                self.state = State::AwaitingDescription;
            }
            Line::CommandHeader(label) => {
                self.finish_command();
                self.state = State::InCommandBody {
                    label,
                    lines: Vec::new(),
                };
            }
            line => {
                if let State::InCommandBody { lines, .. } = &mut self.state {
                    lines.push(raw.trim_end());
                } else if matches!(self.state, State::AwaitingDescription) {
                    if let Line::Text(description) = line {
                        if let Some(section) = self.current.as_mut() {
                            section.description = description.to_string();
                        }
                        self.state = State::Idle;
                    }
                }
            }
        }
    }

    fn finish_command(&mut self) {
        let State::InCommandBody { label, lines } =
            std::mem::replace(&mut self.state, State::Idle)
        else {
            return;
        };

        let body = lines.join("\n");
        let command = Command::new(label, body.trim());
        match self.current.as_mut() {
            Some(section) => {
                if !section.push_command(command) {
                    tracing::trace!("dropping command '{}' with empty body", label);
                }
            }
            None => tracing::debug!("dropping command '{}' outside of any section", label),
        }
    }

    fn finish(mut self) -> Document {
        self.finish_command();
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        Document::new(self.sections)
    }
}

/// Parse procedure file text into a [`Document`].
pub fn parse(text: &str) -> Document {
    let mut parser = Parser::new();
    for raw in text.trim().split('\n') {
        parser.feed(raw);
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[Git]", Line::SectionHeader("Git"))]
    #[case("  [Base commands]  ", Line::SectionHeader("Base commands"))]
    #[case("[]", Line::Text("[]"))]
    #[case("[ ]", Line::SectionHeader(""))]
    #[case("[  Remote ops ]", Line::SectionHeader("Remote ops"))]
    #[case("COMANDO: List files", Line::CommandHeader("List files"))]
    #[case("COMANDO:   padded  ", Line::CommandHeader("padded"))]
    #[case("COMANDO:", Line::CommandHeader(""))]
    #[case("comando: lower", Line::Text("comando: lower"))]
    #[case("   ", Line::Blank)]
    #[case("  docker ps", Line::Text("docker ps"))]
    fn test_classify(#[case] input: &str, #[case] expected: Line) {
        assert_eq!(Line::classify(input), expected);
    }

    #[test]
    fn test_multiline_command() {
        let doc = parse("[S]\ndesc\n\nCOMANDO: x\nline1\nline2\n");
        assert_eq!(
            doc,
            Document::new(vec![
                Section::new("S", "desc").with_command(Command::new("x", "line1\nline2"))
            ])
        );
    }

    #[test]
    fn test_empty_command_discarded() {
        let doc = parse("[S]\ndesc\n\nCOMANDO: empty\n\nCOMANDO: real\nbody\n");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].commands, vec![Command::new("real", "body")]);
    }

    #[test]
    fn test_trailing_section_without_commands() {
        let doc = parse("[S]\ndesc\n");
        assert_eq!(doc, Document::new(vec![Section::new("S", "desc")]));
    }

    #[test]
    fn test_description_skips_blank_lines() {
        let doc = parse("[S]\n\n\n   described later  \nCOMANDO: a\nls");
        assert_eq!(doc.sections[0].description, "described later");
        assert_eq!(doc.sections[0].commands.len(), 1);
    }

    #[test]
    fn test_header_is_not_taken_as_description() {
        let doc = parse("[A]\n\nCOMANDO: first\necho 1\n[B]\n[C]\nthird");
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(doc.sections[0].description, "");
        assert_eq!(doc.sections[0].commands, vec![Command::new("first", "echo 1")]);
        assert_eq!(doc.sections[1].description, "");
        assert_eq!(doc.sections[2].description, "third");
    }

    #[test]
    fn test_body_keeps_indentation_and_inner_blank_lines() {
        let text = "[S]\nd\nCOMANDO: loop\nfor f in *; do\n    echo \"$f\"   \n\ndone\n\n\n";
        let doc = parse(text);
        assert_eq!(
            doc.sections[0].commands[0].body,
            "for f in *; do\n    echo \"$f\"\n\ndone"
        );
    }

    #[test]
    fn test_command_before_any_section_is_dropped() {
        let doc = parse("COMANDO: orphan\nls\n[S]\nd\nCOMANDO: kept\npwd");
        assert_eq!(doc.command_count(), 1);
        assert_eq!(doc.sections[0].commands[0].label, "kept");
    }

    #[test]
    fn test_inert_lines_between_commands() {
        // Only the first non-blank line after the title is a description.
        let doc = parse("[S]\nfirst\nsecond\nthird\nCOMANDO: c\nx");
        assert_eq!(doc.sections[0].description, "first");
        assert_eq!(doc.sections[0].commands, vec![Command::new("c", "x")]);
    }

    #[test]
    fn test_crlf_input() {
        let doc = parse("[S]\r\ndesc\r\n\r\nCOMANDO: x\r\nline1\r\nline2\r\n");
        assert_eq!(doc.sections[0].title, "S");
        assert_eq!(doc.sections[0].description, "desc");
        assert_eq!(doc.sections[0].commands[0].body, "line1\nline2");
    }

    #[rstest]
    #[case("")]
    #[case("   \n\n  ")]
    #[case("just some text\nwithout headers")]
    fn test_no_sections(#[case] input: &str) {
        assert!(parse(input).is_empty());
    }
}
