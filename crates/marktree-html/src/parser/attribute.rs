//! `name[=value]` pairs inside an opening tag.

use marktree_dom::Attribute;

use crate::error::ParseError;
use crate::scanner::{Scanner, is_markup_whitespace};

/// Consume one attribute starting at (or after whitespace before) its name.
///
/// Quoted values may use `"` or `'` and are trimmed; unquoted values end at
/// whitespace, `>` or `/`. A name with no `=` becomes a boolean-style
/// attribute.
pub(crate) fn parse_attribute(scanner: &mut Scanner<'_>) -> Result<Attribute, ParseError> {
    scanner.skip_whitespace();
    let name =
        scanner.consume_while(|c| c != '=' && c != '>' && c != '/' && !is_markup_whitespace(c));
    if name.is_empty() {
        return Err(ParseError::EmptyAttributeName {
            position: scanner.position(),
        });
    }

    scanner.skip_whitespace();
    if !scanner.match_char('=') {
        return Ok(Attribute::flag(name));
    }
    scanner.skip_whitespace();

    match scanner.current() {
        Some(quote @ ('"' | '\'')) => {
            let _ = scanner.take();
            let value = scanner.consume_until(|c| c == quote);
            if !scanner.match_char(quote) {
                return Err(ParseError::UnclosedAttributeValue {
                    position: scanner.position(),
                });
            }
            Ok(Attribute::new(name, value.trim()))
        }
        _ => {
            let value =
                scanner.consume_while(|c| c != '>' && c != '/' && !is_markup_whitespace(c));
            Ok(Attribute::new(name, value))
        }
    }
}
