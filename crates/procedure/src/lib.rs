//! Procedure files: short runbooks of labelled commands grouped into sections.
//!
//! - [`parse`] turns procedure text into a [`Document`]
//! - [`serialize`] turns a [`Document`] back into text
//! - [`convert_markup_to_text`] turns rich text editor markup into procedure text

pub mod markup;
pub mod model;
pub mod parser;
pub mod serializer;

pub use markup::{convert_markup_to_text, markup_to_document};
pub use model::{Command, Document, Section};
pub use parser::{parse, Line};
pub use serializer::serialize;
