// Type token parsing
//
//   name:[base<subtype;subtype>]

use crate::ast::TypeDescriptor;
use crate::subtype::{optional_inner, parse_subtype};
use lexer::{Symbol, scan};

/// Parse one type token into its structural description. Macros are not
/// applied here; see [`crate::SignatureParser::parse_type`].
pub fn parse_type(token: &str) -> TypeDescriptor {
    let (name, remainder) = split_name(token);
    let remainder = remainder.trim();

    TypeDescriptor {
        name,
        base: base_type(remainder),
        subtype: parse_subtype(remainder),
        optional: optional_inner(remainder).is_some(),
    }
}

/// Split a `name:` prefix off the token. Only a colon seen before any `<`
/// counts, and both sides must be non-empty.
fn split_name(token: &str) -> (Option<String>, &str) {
    for spanned in scan(token) {
        match spanned.symbol {
            Symbol::LAngle => break,
            Symbol::Colon => {
                let name = token[..spanned.span.start].trim();
                let rest = &token[spanned.span.end..];

                if name.is_empty() || rest.trim().is_empty() {
                    break;
                }
                return (Some(name.to_string()), rest);
            }
            _ => {}
        }
    }

    (None, token)
}

/// Everything before the first `<`, without square brackets.
fn base_type(remainder: &str) -> String {
    let base: String = scan(remainder)
        .iter()
        .take_while(|s| s.symbol != Symbol::LAngle)
        .filter(|s| !matches!(s.symbol, Symbol::LBracket | Symbol::RBracket))
        .map(|s| s.text)
        .collect();

    base.trim().to_string()
}
