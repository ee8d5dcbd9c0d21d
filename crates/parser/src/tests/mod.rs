// Test module for parser
//
// Unit tests for the signet parser, organised by pipeline stage: subtype
// extraction, type tokens, dependent metadata, signatures, macros, caching
// and error reporting.

mod cache_tests;
