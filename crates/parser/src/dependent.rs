// Dependent metadata
//
// `A < B, B < C` -> [(A, <, B), (B, <, C)]

use crate::ast::DependentConstraint;
use crate::error::{ParseError, ParseResult};
use chumsky::prelude::*;

/// Parse a `::` metadata block into constraint triples.
///
/// Operators are opaque text; a constraint that is not exactly three
/// whitespace-separated tokens is rejected, with its span inside `block`.
pub fn parse_dependent_metadata(block: &str) -> ParseResult<Vec<DependentConstraint>> {
    let parser = constraint_parser();
    let mut offset = 0;
    let mut constraints = Vec::new();

    for constraint in block.split(',') {
        let parsed = parser.parse(constraint).map_err(|_| {
            let trimmed = constraint.trim();
            let start = offset + (constraint.len() - constraint.trim_start().len());
            ParseError::MalformedConstraint {
                constraint: trimmed.to_string(),
                found: trimmed.split_whitespace().count(),
                span: start..start + trimmed.len(),
            }
        })?;

        constraints.push(parsed);
        offset += constraint.len() + 1;
    }

    Ok(constraints)
}

fn constraint_parser() -> impl Parser<char, DependentConstraint, Error = Simple<char>> {
    let word = filter::<_, _, Simple<char>>(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>();

    let gap = filter::<_, _, Simple<char>>(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1);

    word.clone()
        .then_ignore(gap.clone())
        .then(word.clone())
        .then_ignore(gap)
        .then(word)
        .padded()
        .then_ignore(end())
        .map(|((left, operator), right)| DependentConstraint {
            left,
            operator,
            right,
        })
}
