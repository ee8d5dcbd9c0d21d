// Error handling for signature parsing
//
// All failures are raised synchronously to the caller; nothing is recovered
// internally.

use std::fmt;
use std::ops::Range;

/// Message carried by [`ParseError::MissingOutput`].
pub const MISSING_OUTPUT_MESSAGE: &str = "Signature must contain an output declaration";

/// Parse error types
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A registered macro returned something other than a string
    MacroContract { value: String, kind: &'static str },

    /// Strict grammar only: no `=>` stage separator in the signature
    MissingOutput,

    /// A dependent constraint is not exactly `left operator right`.
    /// `span` is the byte range of the trimmed constraint in the parsed text.
    MalformedConstraint {
        constraint: String,
        found: usize,
        span: Range<usize>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MacroContract { value, kind } => write!(
                f,
                "Macro Error: All macros must return a string; got {} of type {}",
                value, kind
            ),
            ParseError::MissingOutput => write!(f, "{}", MISSING_OUTPUT_MESSAGE),
            ParseError::MalformedConstraint {
                constraint, found, ..
            } => write!(
                f,
                "Malformed constraint '{}': expected 'left operator right', found {} token(s)",
                constraint, found
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::MacroContract { .. } => 201,
            ParseError::MissingOutput => 202,
            ParseError::MalformedConstraint { .. } => 203,
        }
    }

    /// Move any span `by` bytes to the right, for errors raised on a slice
    /// of the original text
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            ParseError::MalformedConstraint {
                constraint,
                found,
                span,
            } => ParseError::MalformedConstraint {
                constraint,
                found,
                span: span.start + by..span.end + by,
            },
            other => other,
        }
    }

    /// Diagnostic code shown in reports
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::MacroContract { .. } => "E201",
            ParseError::MissingOutput => "E202",
            ParseError::MalformedConstraint { .. } => "E203",
        }
    }
}

/// Convenient Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
