// Test module for lexer
//
// This module contains unit tests for the signet symbol scanner and the
// nesting-aware splitter built on top of it.

mod split_tests;
