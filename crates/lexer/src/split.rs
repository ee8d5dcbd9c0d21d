// Nesting-aware splitter
//
// Walks the symbol stream with an explicit angle-bracket depth and an
// accumulator, cutting the input only where the split predicate matches at
// depth zero.

use crate::symbol::{scan, Symbol};
use std::ops::Range;

/// A top-level slice of the input produced by [`split_spanned`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub span: Range<usize>,
}

/// Generic-nesting depth of the scan so far.
#[derive(Debug, Default, Clone, Copy)]
struct Depth(usize);

impl Depth {
    fn update(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::LAngle => self.0 += 1,
            Symbol::RAngle => self.0 = self.0.saturating_sub(1),
            // A metadata separator always closes whatever was open before it
            Symbol::DoubleColon => self.0 = 0,
            _ => {}
        }
    }

    fn is_top_level(self) -> bool {
        self.0 == 0
    }
}

pub fn is_arrow(symbol: Symbol) -> bool {
    symbol == Symbol::Arrow
}

pub fn is_double_colon(symbol: Symbol) -> bool {
    symbol == Symbol::DoubleColon
}

pub fn is_comma(symbol: Symbol) -> bool {
    symbol == Symbol::Comma
}

pub fn is_subtype_delimiter(symbol: Symbol) -> bool {
    symbol.is_subtype_delimiter()
}

/// Split `input` on every depth-zero symbol matching `is_split`, keeping the
/// byte range each piece came from.
///
/// Empty pieces between consecutive delimiters are kept; a trailing empty
/// piece is dropped. Escapes are copied verbatim and never split on.
pub fn split_spanned<F>(is_split: F, input: &str) -> Vec<Piece>
where
    F: Fn(Symbol) -> bool,
{
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut depth = Depth::default();

    for spanned in scan(input) {
        depth.update(spanned.symbol);

        if is_split(spanned.symbol) && depth.is_top_level() {
            pieces.push(Piece {
                text: std::mem::take(&mut current),
                span: start..spanned.span.start,
            });
            start = spanned.span.end;
            continue;
        }

        current.push_str(spanned.text);
    }

    if !current.is_empty() {
        pieces.push(Piece {
            text: current,
            span: start..input.len(),
        });
    }

    pieces
}

/// Split `input` on every depth-zero symbol matching `is_split`.
pub fn split_on_symbol<F>(is_split: F, input: &str) -> Vec<String>
where
    F: Fn(Symbol) -> bool,
{
    split_spanned(is_split, input)
        .into_iter()
        .map(|piece| piece.text)
        .collect()
}
