//! Opening and closing tags.

use marktree_common::warning::warn_once;
use marktree_dom::TagNode;

use super::attribute::parse_attribute;
use super::handler::HandlerRegistry;
use crate::error::ParseError;
use crate::scanner::{Scanner, is_markup_whitespace};

/// Elements whose body is captured verbatim instead of being parsed.
pub const RAW_TEXT_TAGS: [&str; 2] = ["style", "script"];

/// An opening tag, plus where its inner markup begins if it stays open.
#[derive(Debug)]
pub(crate) struct OpeningTag {
    pub(crate) node: TagNode,
    /// Byte offset just past the opening tag; `None` for self-closing nodes.
    pub(crate) inner_start: Option<usize>,
}

/// Consume an opening tag. The scanner must be on its `<`.
pub(crate) fn parse_opening_tag(
    scanner: &mut Scanner<'_>,
    handlers: &HandlerRegistry,
) -> Result<OpeningTag, ParseError> {
    let start = scanner.position();
    let opened = scanner.match_char('<');
    debug_assert!(opened, "opening tag must start at '<'");

    scanner.skip_whitespace();
    let name = scanner.consume_while(|c| c != '>' && c != '/' && !is_markup_whitespace(c));
    if name.is_empty() {
        return Err(ParseError::EmptyTagName {
            position: scanner.position(),
        });
    }

    if let Some(handler) = handlers.get(name) {
        let rewound = scanner.set_location(start.line, start.column);
        debug_assert!(rewound, "tag start must be a reachable location");
        let node = handler.parse_tag(scanner)?;
        // The parse loop would otherwise re-enter the same tag forever.
        if scanner.offset() <= start.offset {
            return Err(ParseError::Handler {
                tag: name.to_string(),
                message: "handler returned without consuming the tag".to_string(),
                position: start,
            });
        }
        let inner_start = (!node.is_self_closing).then(|| scanner.offset());
        return Ok(OpeningTag { node, inner_start });
    }

    let mut node = TagNode::new(name, start);

    if RAW_TEXT_TAGS.contains(&name) {
        // Anything up to '>' is skipped, including a stray "/".
        let _ = scanner.consume_until(|c| c == '>');
        if !scanner.match_char('>') {
            return Err(ParseError::UnterminatedRawTag {
                name: name.to_string(),
                position: scanner.position(),
            });
        }

        let closing = format!("</{name}>");
        node.inner_markup = scanner.consume_until_str(&closing).to_string();
        if !scanner.match_str(&closing) {
            warn_once(
                "HTML Parser",
                &format!("raw-text element <{name}> opened at {start} is never closed"),
            );
        }
        node.is_self_closing = true;
        return Ok(OpeningTag {
            node,
            inner_start: None,
        });
    }

    scanner.skip_whitespace();
    while let Some(c) = scanner.current() {
        if c == '>' || c == '/' {
            break;
        }
        let attribute = parse_attribute(scanner)?;
        if let Some(previous) = node.insert_attribute(attribute) {
            warn_once(
                "HTML Parser",
                &format!(
                    "duplicate attribute '{}' on <{name}> at {start}; the last value wins",
                    previous.name
                ),
            );
        }
        scanner.skip_whitespace();
    }

    if scanner.match_char('/') {
        node.is_self_closing = true;
    }
    if !scanner.match_char('>') {
        return Err(ParseError::ExpectedTagClose {
            position: scanner.position(),
        });
    }

    let inner_start = (!node.is_self_closing).then(|| scanner.offset());
    Ok(OpeningTag { node, inner_start })
}

/// Consume `</name>` and return the name. The scanner must be on its `<`.
pub(crate) fn parse_closing_tag<'a>(scanner: &mut Scanner<'a>) -> Result<&'a str, ParseError> {
    let opened = scanner.match_str("</");
    debug_assert!(opened, "closing tag must start at '</'");

    scanner.skip_whitespace();
    let name = scanner.consume_while(|c| c != '>' && !is_markup_whitespace(c));
    if name.is_empty() {
        return Err(ParseError::EmptyClosingTagName {
            position: scanner.position(),
        });
    }

    scanner.skip_whitespace();
    if !scanner.match_char('>') {
        return Err(ParseError::ExpectedTagClose {
            position: scanner.position(),
        });
    }
    Ok(name)
}
