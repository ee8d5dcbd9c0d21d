//! Parser for signet type signatures.
//!
//! ```text
//! A < B :: A:int, B:int => [string] => tuple<int;int>
//! ```
//!
//! [`SignatureParser`] applies registered macros and memoizes results; the
//! free functions parse structure only.

pub mod ast;
pub mod cache;
pub mod dependent;
pub mod error;
pub mod error_report;
pub mod macros;
pub mod parser;
pub mod signature;
pub mod subtype;
pub mod types;

pub use ast::{DependentConstraint, ParameterList, Signature, TypeDescriptor};
pub use cache::CacheStats;
pub use dependent::parse_dependent_metadata;
pub use error::{MISSING_OUTPUT_MESSAGE, ParseError, ParseResult};
pub use macros::{MacroOutput, MacroRegistry};
pub use parser::{ParserOptions, SignatureParser};
pub use signature::{parse_params, parse_signature};
pub use subtype::parse_subtype;
pub use types::parse_type;

#[cfg(test)]
mod tests;
