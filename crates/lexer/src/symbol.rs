use logos::Logos;
use std::fmt;
use std::ops::Range;

/// One lexical unit of the signature grammar.
///
/// Two-character sequences (`=>`, `::` and `%`-escapes) are recognised
/// eagerly, so the splitter never sees their halves on their own.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    // --- Sequences ---
    #[token("=>")]
    Arrow, // Stage separator (in => out)

    #[token("::")]
    DoubleColon, // Dependent metadata separator (A < B :: A:int)

    // `%` followed by any character, newline included
    #[regex(r"%[\s\S]")]
    Escape,

    // --- Delimiters ---
    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("[")]
    LBracket, // Optional wrapper

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon, // Name prefix (name:type)

    #[regex(r"\s")]
    Whitespace,

    // Anything else, including a lone `=` or a trailing `%`
    #[regex(r"[^<>\[\],;:\s]")]
    Char,
}

impl Symbol {
    /// Symbols that separate subtypes inside a generic clause.
    pub fn is_subtype_delimiter(self) -> bool {
        matches!(self, Symbol::Comma | Symbol::Semicolon)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A symbol together with the source text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'src> {
    pub symbol: Symbol,
    pub text: &'src str,
    pub span: Range<usize>,
}

impl<'src> Spanned<'src> {
    /// The literal character an escape stands for, or the raw text otherwise.
    pub fn literal(&self) -> &'src str {
        match self.symbol {
            Symbol::Escape => &self.text[1..],
            _ => self.text,
        }
    }
}

/// Scan a string into its symbol stream.
///
/// Every input character belongs to exactly one symbol; the lexer has no
/// error state, so anything logos cannot classify is kept as a plain `Char`.
pub fn scan(input: &str) -> Vec<Spanned<'_>> {
    let mut lexer = Symbol::lexer(input);
    let mut symbols = Vec::new();

    while let Some(result) = lexer.next() {
        symbols.push(Spanned {
            symbol: result.unwrap_or(Symbol::Char),
            text: lexer.slice(),
            span: lexer.span(),
        });
    }

    symbols
}

/// Resolve every `%x` escape in `text` to `x`.
pub fn unescape(text: &str) -> String {
    scan(text).iter().map(Spanned::literal).collect()
}
