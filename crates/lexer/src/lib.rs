pub mod split;
pub mod symbol;

pub use split::{
    is_arrow, is_comma, is_double_colon, is_subtype_delimiter, split_on_symbol, split_spanned,
    Piece,
};
pub use symbol::{scan, unescape, Spanned, Symbol};

#[cfg(test)]
mod tests;
