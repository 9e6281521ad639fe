//! The document parser: open-tag stack, insertion point and back-fill.

use marktree_dom::{NodeId, TagNode, TagTree};

use super::handler::{HandlerRegistry, TagHandler};
use super::tag::{parse_closing_tag, parse_opening_tag};
use crate::error::ParseError;
use crate::scanner::Scanner;

/// Turns markup text into a [`TagTree`] in a single pass.
///
/// The parser itself only holds configuration (the custom handler registry);
/// each [`HtmlParser::parse`] call gets its own scanner, tree and open-tag
/// stack, so one parser can be reused for many documents.
#[derive(Debug, Default)]
pub struct HtmlParser {
    handlers: HandlerRegistry,
}

impl HtmlParser {
    /// A parser with no custom handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser using an already populated registry.
    #[must_use]
    pub const fn with_handlers(handlers: HandlerRegistry) -> Self {
        Self { handlers }
    }

    /// Builder form of [`HtmlParser::add_custom_handler`].
    #[must_use]
    pub fn with_handler<F>(mut self, tag_name: &str, handler: F) -> Self
    where
        F: Fn(&mut Scanner<'_>) -> Result<TagNode, ParseError> + 'static,
    {
        self.add_custom_handler(tag_name, handler);
        self
    }

    /// Take over parsing of every `<tag_name ...>` opening tag.
    ///
    /// Matching is exact and case-sensitive. A later registration for the same
    /// name replaces the earlier one; blank names are ignored.
    pub fn add_custom_handler<F>(&mut self, tag_name: &str, handler: F)
    where
        F: Fn(&mut Scanner<'_>) -> Result<TagNode, ParseError> + 'static,
    {
        let handler: Box<dyn TagHandler> = Box::new(handler);
        let _stored = self.handlers.insert(tag_name, handler);
    }

    /// The registered custom handlers.
    #[must_use]
    pub const fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Parse `input` into a tree whose roots are the top-level tags.
    ///
    /// Comments and `<!DOCTYPE ...>` declarations are skipped. Text outside
    /// of any tag is dropped.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found; no partial tree is kept.
    pub fn parse(&self, input: &str) -> Result<TagTree, ParseError> {
        DocumentBuilder::new(input, &self.handlers).run()
    }
}

/// A tag on the open-tag stack.
#[derive(Debug)]
struct OpenTag {
    name: String,
    id: NodeId,
    inner_start: Option<usize>,
}

/// Per-call parse state. The top of `open_tags` is the current insertion
/// point; with an empty stack new tags become roots.
struct DocumentBuilder<'a, 'h> {
    scanner: Scanner<'a>,
    handlers: &'h HandlerRegistry,
    tree: TagTree,
    open_tags: Vec<OpenTag>,
}

impl<'a, 'h> DocumentBuilder<'a, 'h> {
    fn new(input: &'a str, handlers: &'h HandlerRegistry) -> Self {
        Self {
            scanner: Scanner::new(input),
            handlers,
            tree: TagTree::new(),
            open_tags: Vec::new(),
        }
    }

    fn run(mut self) -> Result<TagTree, ParseError> {
        loop {
            self.scanner.skip_whitespace();
            if self.scanner.is_eof() {
                break;
            }

            if self.scanner.current() != Some('<') {
                self.text();
            } else if self.scanner.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.scanner.starts_with("<!DOCTYPE") {
                self.skip_doctype()?;
            } else if self.scanner.peek_next() == Some('/') {
                self.close_tag()?;
            } else {
                self.open_tag()?;
            }
        }

        if let Some(open) = self.open_tags.last() {
            return Err(ParseError::UnclosedTag {
                name: open.name.clone(),
                position: self.tree[open.id].position,
            });
        }
        Ok(self.tree)
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        let position = self.scanner.position();
        let _ = self.scanner.consume_until_str("-->");
        if !self.scanner.match_str("-->") {
            return Err(ParseError::UnclosedComment { position });
        }
        Ok(())
    }

    fn skip_doctype(&mut self) -> Result<(), ParseError> {
        let position = self.scanner.position();
        let _ = self.scanner.consume_until(|c| c == '>');
        if !self.scanner.match_char('>') {
            return Err(ParseError::UnclosedDoctype { position });
        }
        Ok(())
    }

    fn open_tag(&mut self) -> Result<(), ParseError> {
        let opening = parse_opening_tag(&mut self.scanner, self.handlers)?;
        let is_self_closing = opening.node.is_self_closing;
        let id = self.tree.alloc(opening.node);

        match self.open_tags.last() {
            Some(parent) => self.tree.append_child(parent.id, id),
            None => self.tree.push_root(id),
        }

        if !is_self_closing {
            self.open_tags.push(OpenTag {
                name: self.tree[id].name.clone(),
                id,
                inner_start: opening.inner_start,
            });
        }
        Ok(())
    }

    fn close_tag(&mut self) -> Result<(), ParseError> {
        let position = self.scanner.position();
        if self.open_tags.is_empty() {
            return Err(ParseError::SuperfluousClosingTag { position });
        }

        let found = parse_closing_tag(&mut self.scanner)?;

        let Some(open) = self.open_tags.pop() else {
            return Err(ParseError::SuperfluousClosingTag { position });
        };

        if open.name != found {
            return Err(ParseError::MismatchedClosingTag {
                expected: open.name,
                found: found.to_string(),
                position,
            });
        }

        if let Some(start) = open.inner_start
            && start < position.offset
        {
            let markup = self.scanner.slice(start, position.offset).trim().to_string();
            if let Some(node) = self.tree.get_mut(open.id) {
                node.inner_markup = markup;
            }
        }
        Ok(())
    }

    fn text(&mut self) {
        let text = self.scanner.consume_until(|c| c == '<').trim();
        if text.is_empty() {
            return;
        }
        if let Some(open) = self.open_tags.last()
            && let Some(node) = self.tree.get_mut(open.id)
        {
            node.inner_text.push_str(text);
        }
    }
}
