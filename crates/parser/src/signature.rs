// Parameter lists and signatures
//
//   [metadata ::] type, type => [metadata ::] type => ...

use crate::ast::{ParameterList, Signature, TypeDescriptor};
use crate::dependent::parse_dependent_metadata;
use crate::error::{ParseError, ParseResult};
use crate::types;
use lexer::{is_arrow, is_comma, is_double_colon, split_on_symbol, split_spanned};
use tracing::trace;

/// Parse one stage without macros or caching. Error spans are relative to
/// `token`.
pub fn parse_params(token: &str) -> ParseResult<ParameterList> {
    parse_params_with(token, |t| Ok(types::parse_type(t)))
}

/// Parse a strict signature without macros or caching.
pub fn parse_signature(signature: &str) -> ParseResult<Signature> {
    parse_signature_with(signature, true, parse_params)
}

pub(crate) fn parse_params_with<F>(token: &str, mut parse_type: F) -> ParseResult<ParameterList>
where
    F: FnMut(&str) -> ParseResult<TypeDescriptor>,
{
    let mut pieces = split_spanned(is_double_colon, token);

    let dependent = if pieces.len() > 1 {
        let block = pieces.remove(0);
        let constraints = parse_dependent_metadata(&block.text)
            .map_err(|e| e.shifted(block.span.start))?;
        Some(constraints)
    } else {
        None
    };

    // Any further `::` belongs to the type text
    let type_text = pieces
        .iter()
        .map(|piece| piece.text.as_str())
        .collect::<Vec<_>>()
        .join("::");

    let types = split_on_symbol(is_comma, &type_text)
        .iter()
        .map(|t| parse_type(t))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(ParameterList { types, dependent })
}

pub(crate) fn parse_signature_with<F>(
    signature: &str,
    require_output: bool,
    mut parse_params: F,
) -> ParseResult<Signature>
where
    F: FnMut(&str) -> ParseResult<ParameterList>,
{
    let stages = split_spanned(is_arrow, signature);
    trace!(stages = stages.len(), "split signature");

    if require_output && stages.len() < 2 {
        return Err(ParseError::MissingOutput);
    }

    let stages = stages
        .iter()
        .map(|stage| parse_params(&stage.text).map_err(|e| e.shifted(stage.span.start)))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Signature { stages })
}
