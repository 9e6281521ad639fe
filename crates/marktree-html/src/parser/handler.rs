//! Custom per-tag parsing hooks.
//!
//! A handler takes over the whole opening tag for one exact (case-sensitive)
//! tag name. The scanner it receives is rewound to the tag's `<`, and the
//! handler must leave it just past whatever it considers the end of that tag.

use std::collections::HashMap;
use std::fmt;

use marktree_common::warning::warn_once;
use marktree_dom::TagNode;

use crate::error::ParseError;
use crate::scanner::Scanner;

/// Parses one opening tag with a non-standard grammar.
pub trait TagHandler {
    /// Consume the tag starting at the scanner's cursor and build its node.
    ///
    /// A node returned with `is_self_closing == false` is opened like any
    /// other tag and must be closed later in the document.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]; it aborts the parse unchanged.
    fn parse_tag(&self, scanner: &mut Scanner<'_>) -> Result<TagNode, ParseError>;
}

impl<F> TagHandler for F
where
    F: Fn(&mut Scanner<'_>) -> Result<TagNode, ParseError>,
{
    fn parse_tag(&self, scanner: &mut Scanner<'_>) -> Result<TagNode, ParseError> {
        self(scanner)
    }
}

/// Tag name to handler mapping, at most one handler per name.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn TagHandler>>,
}

impl HandlerRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `tag_name`, replacing any earlier one.
    ///
    /// Blank names are ignored. Returns whether the handler was stored.
    pub fn insert(&mut self, tag_name: &str, handler: Box<dyn TagHandler>) -> bool {
        if tag_name.trim().is_empty() {
            return false;
        }
        if self.handlers.insert(tag_name.to_string(), handler).is_some() {
            warn_once(
                "HTML Parser",
                &format!("custom handler for <{tag_name}> replaced an earlier registration"),
            );
        }
        true
    }

    /// The handler registered for exactly `tag_name`.
    #[must_use]
    pub fn get(&self, tag_name: &str) -> Option<&dyn TagHandler> {
        self.handlers.get(tag_name).map(Box::as_ref)
    }

    /// True if a handler is registered for exactly `tag_name`.
    #[must_use]
    pub fn contains(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("tags", &names)
            .finish()
    }
}
