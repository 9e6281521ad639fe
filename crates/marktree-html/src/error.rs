//! Parse errors.
//!
//! Every error is fatal to the parse call that raised it and carries the
//! source position it refers to. [`ParseErrorKind`] is the field-less mirror
//! of [`ParseError`] for callers that only care which problem occurred.

use marktree_dom::Position;
use strum_macros::{Display, EnumCount, IntoStaticStr};
use thiserror::Error;

/// The first structural problem found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `<` followed by no tag name.
    #[error("empty tag name at {position}")]
    EmptyTagName {
        /// Where the name was expected.
        position: Position,
    },
    /// `</` followed by no tag name.
    #[error("empty closing tag name at {position}")]
    EmptyClosingTagName {
        /// Where the name was expected.
        position: Position,
    },
    /// An attribute slot that starts with `=` or another non-name character.
    #[error("empty attribute name at {position}")]
    EmptyAttributeName {
        /// Where the name was expected.
        position: Position,
    },
    /// A tag without its terminating `>`.
    #[error("expected '>' at {position}")]
    ExpectedTagClose {
        /// Where `>` was expected.
        position: Position,
    },
    /// A quoted attribute value that runs to end of input.
    #[error("unclosed attribute value at {position}")]
    UnclosedAttributeValue {
        /// End of input, where the closing quote was expected.
        position: Position,
    },
    /// `<!--` without `-->`.
    #[error("unclosed comment opened at {position}")]
    UnclosedComment {
        /// Where the comment starts.
        position: Position,
    },
    /// `<!DOCTYPE` without `>`.
    #[error("unclosed DOCTYPE opened at {position}")]
    UnclosedDoctype {
        /// Where the declaration starts.
        position: Position,
    },
    /// A `style` or `script` open tag without `>`.
    #[error("unterminated <{name}> tag at {position}")]
    UnterminatedRawTag {
        /// `style` or `script`.
        name: String,
        /// End of input, where `>` was expected.
        position: Position,
    },
    /// A closing tag while no tag is open.
    #[error("superfluous closing tag at {position}")]
    SuperfluousClosingTag {
        /// Where the closing tag starts.
        position: Position,
    },
    /// A closing tag that does not match the innermost open tag.
    #[error("invalid closing tag '{found}', expected '{expected}' at {position}")]
    MismatchedClosingTag {
        /// Name of the innermost open tag.
        expected: String,
        /// Name in the closing tag.
        found: String,
        /// Where the closing tag starts.
        position: Position,
    },
    /// End of input reached with a tag still open.
    #[error("unclosed tag '{name}' opened at {position}")]
    UnclosedTag {
        /// Name of the innermost open tag.
        name: String,
        /// Where that tag was opened.
        position: Position,
    },
    /// Raised by a custom tag handler.
    #[error("<{tag}> handler failed at {position}: {message}")]
    Handler {
        /// Tag the handler was registered for.
        tag: String,
        /// What went wrong.
        message: String,
        /// Where the handler gave up.
        position: Position,
    },
}

impl ParseError {
    /// The source position this error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::EmptyTagName { position }
            | Self::EmptyClosingTagName { position }
            | Self::EmptyAttributeName { position }
            | Self::ExpectedTagClose { position }
            | Self::UnclosedAttributeValue { position }
            | Self::UnclosedComment { position }
            | Self::UnclosedDoctype { position }
            | Self::UnterminatedRawTag { position, .. }
            | Self::SuperfluousClosingTag { position }
            | Self::MismatchedClosingTag { position, .. }
            | Self::UnclosedTag { position, .. }
            | Self::Handler { position, .. } => *position,
        }
    }

    /// Which kind of problem this is.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::EmptyTagName { .. } => ParseErrorKind::EmptyTagName,
            Self::EmptyClosingTagName { .. } => ParseErrorKind::EmptyClosingTagName,
            Self::EmptyAttributeName { .. } => ParseErrorKind::EmptyAttributeName,
            Self::ExpectedTagClose { .. } => ParseErrorKind::ExpectedTagClose,
            Self::UnclosedAttributeValue { .. } => ParseErrorKind::UnclosedAttributeValue,
            Self::UnclosedComment { .. } => ParseErrorKind::UnclosedComment,
            Self::UnclosedDoctype { .. } => ParseErrorKind::UnclosedDoctype,
            Self::UnterminatedRawTag { .. } => ParseErrorKind::UnterminatedRawTag,
            Self::SuperfluousClosingTag { .. } => ParseErrorKind::SuperfluousClosingTag,
            Self::MismatchedClosingTag { .. } => ParseErrorKind::MismatchedClosingTag,
            Self::UnclosedTag { .. } => ParseErrorKind::UnclosedTag,
            Self::Handler { .. } => ParseErrorKind::Handler,
        }
    }
}

/// The kind of a [`ParseError`], without its details.
///
/// Displays as the variant name, e.g. `MismatchedClosingTag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumCount)]
pub enum ParseErrorKind {
    /// See [`ParseError::EmptyTagName`].
    EmptyTagName,
    /// See [`ParseError::EmptyClosingTagName`].
    EmptyClosingTagName,
    /// See [`ParseError::EmptyAttributeName`].
    EmptyAttributeName,
    /// See [`ParseError::ExpectedTagClose`].
    ExpectedTagClose,
    /// See [`ParseError::UnclosedAttributeValue`].
    UnclosedAttributeValue,
    /// See [`ParseError::UnclosedComment`].
    UnclosedComment,
    /// See [`ParseError::UnclosedDoctype`].
    UnclosedDoctype,
    /// See [`ParseError::UnterminatedRawTag`].
    UnterminatedRawTag,
    /// See [`ParseError::SuperfluousClosingTag`].
    SuperfluousClosingTag,
    /// See [`ParseError::MismatchedClosingTag`].
    MismatchedClosingTag,
    /// See [`ParseError::UnclosedTag`].
    UnclosedTag,
    /// See [`ParseError::Handler`].
    Handler,
}
