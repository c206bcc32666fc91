//! Conversion of rich text editor markup into the procedure text format.
//!
//! The editor emits a restricted HTML subset:
//!
//! ```text
//! <h2>Section title</h2>
//! <p>Section description</p>
//! <h3>Command label</h3>
//! <pre>command body</pre>
//! ```
//!
//! Anything else is ignored. The markup is parsed into a DOM with `html5ever` and walked
//! in document order; a recognised element consumes its whole subtree.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::model::{Command, Document, Section};
use crate::serializer::serialize;

/// The construct a recognised element opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Construct {
    SectionTitle,
    Description,
    CommandLabel,
    CommandBody,
}

impl Construct {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h2" => Some(Construct::SectionTitle),
            "p" => Some(Construct::Description),
            "h3" => Some(Construct::CommandLabel),
            "pre" | "code" => Some(Construct::CommandBody),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Converter {
    sections: Vec<Section>,
    current: Option<Section>,
    /// Label of a command still waiting for its body
    pending_label: Option<String>,
}

impl Converter {
    fn walk(&mut self, handle: &Handle) {
        if let NodeData::Element { name, .. } = &handle.data {
            if let Some(construct) = Construct::from_tag(&name.local) {
                if self.open(construct, handle) {
                    return;
                }
            }
        }
        for child in handle.children.borrow().iter() {
            self.walk(child);
        }
    }

    /// Handle a recognised element. Returns false when the element does not apply in the
    /// current state, in which case its children are walked like any other element.
    fn open(&mut self, construct: Construct, handle: &Handle) -> bool {
        match construct {
            Construct::SectionTitle => {
                let title = inline_text(handle);
                if title.is_empty() {
                    tracing::trace!("empty section title, keeping the current section open");
                    return false;
                }
                self.close_section();
                self.current = Some(Section::new(title, ""));
                true
            }
            Construct::Description => match self.current.as_mut() {
                Some(section) if section.description.is_empty() => {
                    section.description = inline_text(handle);
                    true
                }
                _ => false,
            },
            Construct::CommandLabel => {
                if let Some(dropped) = self.pending_label.replace(inline_text(handle)) {
                    tracing::trace!("command '{}' has no body, dropping", dropped);
                }
                true
            }
            Construct::CommandBody => {
                let Some(label) = self.pending_label.take() else {
                    return false;
                };
                let mut body = String::new();
                collect_raw_text(handle, &mut body);
                match self.current.as_mut() {
                    Some(section) => {
                        if !section.push_command(Command::new(label.as_str(), body.trim())) {
                            tracing::trace!("command '{}' has an empty body, dropping", label);
                        }
                    }
                    None => tracing::debug!("command '{}' outside of any section, dropping", label),
                }
                true
            }
        }
    }

    fn close_section(&mut self) {
        self.pending_label = None;
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Document {
        self.close_section();
        Document::new(self.sections)
    }
}

/// Text of an inline element: nested chunks concatenated and whitespace runs collapsed,
/// so the result always fits on a single line of the text format.
fn inline_text(handle: &Handle) -> String {
    let mut raw = String::new();
    collect_raw_text(handle, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_raw_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, .. } if &*name.local == "br" => out.push('\n'),
        NodeData::Element { .. } => {
            for child in handle.children.borrow().iter() {
                collect_raw_text(child, out);
            }
        }
        _ => {}
    }
}

/// Build a [`Document`] from editor markup.
pub fn markup_to_document(markup: &str) -> Document {
    let dom = parse_document(RcDom::default(), Default::default()).one(markup);
    let mut converter = Converter::default();
    converter.walk(&dom.document);
    let doc = converter.finish();
    tracing::debug!(
        "converted markup into {} sections, {} commands",
        doc.sections.len(),
        doc.command_count()
    );
    doc
}

/// Convert editor markup straight to procedure text.
pub fn convert_markup_to_text(markup: &str) -> String {
    serialize(&markup_to_document(markup))
}
