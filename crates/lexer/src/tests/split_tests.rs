// Splitter Tests
//
// Tests for depth-aware splitting on each delimiter the parser uses.

use crate::split::{
    is_arrow, is_comma, is_double_colon, is_subtype_delimiter, split_on_symbol, split_spanned,
    Piece,
};

// ==================== COMMA TESTS ====================

#[test]
fn test_split_simple_commas() {
    assert_eq!(split_on_symbol(is_comma, "a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn test_split_keeps_surrounding_whitespace() {
    assert_eq!(
        split_on_symbol(is_comma, "name:string, options:[object]"),
        vec!["name:string", " options:[object]"]
    );
}

#[test]
fn test_split_does_not_break_generics() {
    assert_eq!(
        split_on_symbol(is_comma, "definition:tuple<string,tuple<int,int>>, b:int"),
        vec!["definition:tuple<string,tuple<int,int>>", " b:int"]
    );
}

#[test]
fn test_split_without_delimiter() {
    assert_eq!(split_on_symbol(is_comma, "int"), vec!["int"]);
}

// ==================== SUBTYPE DELIMITER TESTS ====================

#[test]
fn test_split_on_semicolons_and_commas() {
    assert_eq!(
        split_on_symbol(is_subtype_delimiter, "string;tuple<string;int>,int"),
        vec!["string", "tuple<string;int>", "int"]
    );
}

#[test]
fn test_split_ignores_escaped_delimiters() {
    assert_eq!(
        split_on_symbol(is_subtype_delimiter, "%;%<%>%%"),
        vec!["%;%<%>%%"]
    );
}

#[test]
fn test_split_escaped_comma_stays_in_piece() {
    assert_eq!(split_on_symbol(is_comma, "a%,b,c"), vec!["a%,b", "c"]);
}

// ==================== ARROW TESTS ====================

#[test]
fn test_split_on_arrows() {
    assert_eq!(
        split_on_symbol(is_arrow, "name:string => * => tuple<int;int>"),
        vec!["name:string ", " * ", " tuple<int;int>"]
    );
}

#[test]
fn test_arrow_inside_generic_is_kept() {
    assert_eq!(
        split_on_symbol(is_arrow, "function<* => boolean> => boolean"),
        vec!["function<* => boolean> ", " boolean"]
    );
}

#[test]
fn test_arrow_after_metadata_comparisons() {
    // `<` in the metadata opens depth, `::` closes it again
    assert_eq!(
        split_on_symbol(is_arrow, "A < B, B < C :: A:int => *"),
        vec!["A < B, B < C :: A:int ", " *"]
    );
}

// ==================== DOUBLE COLON TESTS ====================

#[test]
fn test_split_on_double_colon() {
    assert_eq!(
        split_on_symbol(is_double_colon, "A < B :: A:int, B:int"),
        vec!["A < B ", " A:int, B:int"]
    );
}

#[test]
fn test_single_colon_is_not_double() {
    assert_eq!(split_on_symbol(is_double_colon, "name:int"), vec!["name:int"]);
}

#[test]
fn test_triple_colon_splits_once() {
    assert_eq!(split_on_symbol(is_double_colon, "a:::b"), vec!["a", ":b"]);
}

// ==================== EMPTY PIECE TESTS ====================

#[test]
fn test_consecutive_delimiters_keep_empty_piece() {
    assert_eq!(split_on_symbol(is_comma, "a,,b"), vec!["a", "", "b"]);
}

#[test]
fn test_trailing_delimiter_drops_final_empty_piece() {
    assert_eq!(split_on_symbol(is_comma, "a,b,"), vec!["a", "b"]);
}

#[test]
fn test_leading_delimiter_keeps_empty_piece() {
    assert_eq!(split_on_symbol(is_comma, ",a"), vec!["", "a"]);
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(split_on_symbol(is_comma, "").is_empty());
}

// ==================== SPAN TESTS ====================

#[test]
fn test_piece_spans() {
    assert_eq!(
        split_spanned(is_comma, "ab,cd"),
        vec![
            Piece { text: "ab".to_string(), span: 0..2 },
            Piece { text: "cd".to_string(), span: 3..5 },
        ]
    );
}

#[test]
fn test_piece_spans_skip_arrow() {
    let pieces = split_spanned(is_arrow, "a=>b");
    assert_eq!(pieces[0].span, 0..1);
    assert_eq!(pieces[1].span, 3..4);
}
