// Memoization Tests
//
// Cached results must be structurally equal on every read while staying
// independently mutable.

use crate::cache::{CacheStats, Memo};
use crate::error::ParseError;
use crate::parser::{ParserOptions, SignatureParser};

// ==================== TYPE CACHE ====================

#[test]
fn test_repeated_type_parse_is_equal() {
    let parser = SignatureParser::new();

    let first = parser.parse_type("tuple<string;int>").unwrap();
    let second = parser.parse_type("tuple<string;int>").unwrap();

    assert_eq!(first, second);
    assert_eq!(parser.cache_stats().type_hits, 1);
    assert_eq!(parser.cache_stats().type_misses, 1);
}

#[test]
fn test_type_results_are_independent() {
    let parser = SignatureParser::new();

    let mut first = parser.parse_type("tuple<string;int>").unwrap();
    let second = parser.parse_type("tuple<string;int>").unwrap();
    first.subtype.push("boolean".to_string());
    first.base.push_str("Mutated");

    assert_eq!(second.subtype, vec!["string", "int"]);
    assert_eq!(second.base, "tuple");

    let third = parser.parse_type("tuple<string;int>").unwrap();
    assert_eq!(third, second);
}

// ==================== SIGNATURE CACHE ====================

#[test]
fn test_signature_results_are_independent() {
    let parser = SignatureParser::new();

    let mut first = parser.parse_signature("a:array<int> => *").unwrap();
    let second = parser.parse_signature("a:array<int> => *").unwrap();

    first[0][0].subtype.clear();
    first.stages.pop();

    assert_eq!(second.len(), 2);
    assert_eq!(second[0][0].subtype, vec!["int"]);
    assert_eq!(parser.cache_stats().signature_hits, 1);
}

#[test]
fn test_signature_parse_fills_type_cache() {
    let parser = SignatureParser::new();

    parser.parse_signature("a:int, b:int => int").unwrap();
    let stats = parser.cache_stats();

    assert_eq!(stats.signature_misses, 1);
    assert_eq!(stats.type_misses, 3);
    assert_eq!(stats.type_hits, 0);

    parser.parse_type("a:int").unwrap();
    assert_eq!(parser.cache_stats().type_hits, 1);
}

#[test]
fn test_registering_type_macro_invalidates_signatures() {
    let mut parser = SignatureParser::new();
    assert_eq!(parser.parse_signature("t => *").unwrap()[0][0].base, "t");

    parser.register_type_macro(|t: &str| {
        if t.trim() == "t" {
            "int".to_string()
        } else {
            t.to_string()
        }
    });

    assert_eq!(parser.parse_signature("t => *").unwrap()[0][0].base, "int");
}

#[test]
fn test_errors_are_not_cached() {
    let parser = SignatureParser::new();

    assert_eq!(parser.parse_signature("int"), Err(ParseError::MissingOutput));
    assert_eq!(parser.parse_signature("int"), Err(ParseError::MissingOutput));
    assert_eq!(parser.cache_stats().signature_hits, 0);
}

#[test]
fn test_clear_cache() {
    let parser = SignatureParser::new();

    parser.parse_type("int").unwrap();
    parser.clear_cache();
    parser.parse_type("int").unwrap();

    assert_eq!(parser.cache_stats().type_misses, 2);
    assert_eq!(parser.cache_stats().type_hits, 0);
}

#[test]
fn test_memoization_disabled() {
    let parser = SignatureParser::with_options(ParserOptions::default().memoize(false));

    let first = parser.parse_signature("int => int").unwrap();
    let second = parser.parse_signature("int => int").unwrap();

    assert_eq!(first, second);
    assert_eq!(parser.cache_stats(), CacheStats::default());
}

// ==================== MEMO TABLE ====================

#[test]
fn test_memo_builds_once() {
    let memo: Memo<String> = Memo::new();
    let mut builds = 0;

    for _ in 0..3 {
        let value = memo
            .get_or_try_insert("key", || {
                builds += 1;
                Ok("value".to_string())
            })
            .unwrap();
        assert_eq!(value, "value");
    }

    assert_eq!(builds, 1);
    assert_eq!(memo.hits(), 2);
    assert_eq!(memo.misses(), 1);
}

#[test]
fn test_memo_clear() {
    let memo: Memo<String> = Memo::new();
    memo.get_or_try_insert("key", || Ok(String::new())).unwrap();
    memo.clear();
    memo.get_or_try_insert("key", || Ok(String::new())).unwrap();

    assert_eq!(memo.hits(), 0);
    assert_eq!(memo.misses(), 2);
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(SignatureParser::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = std::sync::Arc::clone(&parser);
            std::thread::spawn(move || parser.parse_signature("a:array<int> => *"))
        })
        .collect();

    for handle in handles {
        let signature = handle.join().unwrap().unwrap();
        assert_eq!(signature[0][0].subtype, vec!["int"]);
    }
}
