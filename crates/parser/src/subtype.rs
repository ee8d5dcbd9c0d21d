// Subtype extraction
//
// `tuple<string; tuple<string;int>>` -> ["string", "tuple<string;int>"]

use lexer::{Spanned, Symbol, is_subtype_delimiter, scan, split_on_symbol};

/// Split the outermost `<...>` clause of a type into its subtype strings.
///
/// Unescaped whitespace at the top level of each subtype is dropped and
/// top-level escapes are resolved. Anything inside a nested generic is kept
/// verbatim, `%` escapes included: `tuple<fmt<a%;b>>` yields `fmt<a%;b>`,
/// not `fmt<a;b>`. The escape is resolved only when that subtype is itself
/// parsed, which keeps `a;b` a single subtype of `fmt`.
pub fn parse_subtype(raw_type: &str) -> Vec<String> {
    let body = raw_type.trim();
    let body = optional_inner(body).unwrap_or(body);

    match generic_interior(body) {
        Some(interior) => split_on_symbol(is_subtype_delimiter, interior)
            .iter()
            .map(|subtype| normalize(subtype))
            .collect(),
        None => Vec::new(),
    }
}

/// Content of a single `[...]` pair wrapping all of `text`. The content
/// must be non-empty and hold no `]` of its own, so `[[a]]` and `[a][b]`
/// are not optional.
pub(crate) fn optional_inner(text: &str) -> Option<&str> {
    let symbols = scan(text);
    let (first, last) = (symbols.first()?, symbols.last()?);

    if first.symbol != Symbol::LBracket || last.symbol != Symbol::RBracket || symbols.len() < 3 {
        return None;
    }

    let closes_early = symbols[1..symbols.len() - 1]
        .iter()
        .any(|s| s.symbol == Symbol::RBracket);
    if closes_early {
        return None;
    }

    Some(&text[first.span.end..last.span.start])
}

/// Text between the first `<` and its matching `>`, or to the end of the
/// input when the clause is never closed.
fn generic_interior(body: &str) -> Option<&str> {
    let symbols = scan(body);
    let open = symbols.iter().position(|s| s.symbol == Symbol::LAngle)?;
    let start = symbols[open].span.end;
    let mut depth = 1usize;

    for spanned in &symbols[open + 1..] {
        match spanned.symbol {
            Symbol::LAngle => depth += 1,
            Symbol::RAngle => {
                depth -= 1;
                if depth == 0 {
                    return Some(&body[start..spanned.span.start]);
                }
            }
            _ => {}
        }
    }

    Some(&body[start..])
}

fn normalize(subtype: &str) -> String {
    let mut depth = 0usize;
    let mut normalized = String::new();

    for spanned in scan(subtype) {
        match spanned.symbol {
            Symbol::LAngle => depth += 1,
            Symbol::RAngle => depth = depth.saturating_sub(1),
            _ => {}
        }

        if depth == 0 {
            push_top_level(&mut normalized, &spanned);
        } else {
            normalized.push_str(spanned.text);
        }
    }

    normalized
}

fn push_top_level(normalized: &mut String, spanned: &Spanned<'_>) {
    match spanned.symbol {
        Symbol::Whitespace => {}
        _ => normalized.push_str(spanned.literal()),
    }
}
