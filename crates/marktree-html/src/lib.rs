//! Markup scanner, parser and serializer for marktree.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scanner** - a character cursor with line/column/offset tracking
//! - **Parser** - a single pass over the input that keeps an explicit stack of
//!   open tags and builds a [`TagTree`]
//!   - Attributes: quoted, unquoted and boolean-style
//!   - Self-closing tags and raw-text elements (`style`, `script`)
//!   - Comments and `<!DOCTYPE ...>` declarations are skipped
//!   - Custom handlers for tag names with their own grammar
//! - **Serializer** - markup rendering and an indented tree printer
//!
//! # Not Implemented
//!
//! - HTML5 implicit tag closing and other tree-construction quirks
//! - Character references (entities pass through untouched)
//! - Encoding detection and incremental input

/// Parse errors.
pub mod error;
/// Tree construction.
pub mod parser;
/// Character cursor over the source.
pub mod scanner;
/// Markup rendering and tree printing.
pub mod serializer;

pub use error::{ParseError, ParseErrorKind};
pub use marktree_dom::{Attribute, NodeId, Position, TagNode, TagTree};
pub use parser::{HandlerRegistry, HtmlParser, RAW_TEXT_TAGS, TagHandler};
pub use scanner::{Scanner, is_markup_whitespace};
pub use serializer::{format_tree, print_tree, render_html, render_node, render_nodes};

/// Parse `input` with a parser that has no custom handlers.
///
/// # Errors
///
/// Returns the first structural problem in the input.
pub fn parse_html(input: &str) -> Result<TagTree, ParseError> {
    HtmlParser::new().parse(input)
}
