//! Markup parser and tree construction.

/// Attribute parsing.
mod attribute;
/// Document-level driver.
pub mod document;
/// Custom tag handler registry.
pub mod handler;
/// Opening and closing tag parsing.
pub mod tag;

pub use document::HtmlParser;
pub use handler::{HandlerRegistry, TagHandler};
pub use tag::RAW_TEXT_TAGS;
