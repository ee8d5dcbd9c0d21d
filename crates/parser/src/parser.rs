use crate::ast::{ParameterList, Signature, TypeDescriptor};
use crate::cache::{CacheStats, ParseCache};
use crate::error::ParseResult;
use crate::macros::{MacroOutput, MacroRegistry};
use crate::signature::{parse_params_with, parse_signature_with};
use crate::types;
use tracing::debug;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Reject signatures without a `=>` separated output stage
    pub require_output: bool,
    /// Cache results by post-macro input text
    pub memoize: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            require_output: true,
            memoize: true,
        }
    }
}

impl ParserOptions {
    pub fn require_output(mut self, require_output: bool) -> Self {
        self.require_output = require_output;
        self
    }

    pub fn memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

/// Signature parser owning its macro registry and memo tables.
///
/// Macros are registered through `&mut self`, so registration can never
/// interleave with parsing; parsing only needs `&self`.
#[derive(Debug, Default)]
pub struct SignatureParser {
    options: ParserOptions,
    macros: MacroRegistry,
    cache: ParseCache,
}

impl SignatureParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        SignatureParser {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Append a macro applied to every type token before it is parsed
    pub fn register_type_macro<F, R>(&mut self, transform: F)
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<MacroOutput>,
    {
        self.macros.register_type_level(transform);
        debug!(count = self.macros.type_level_count(), "registered type macro");
        // Cached signatures were built with the old type-level chain
        self.cache.signatures.clear();
    }

    /// Append a macro applied to every signature before it is split
    pub fn register_signature_macro<F, R>(&mut self, transform: F)
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<MacroOutput>,
    {
        self.macros.register_signature_level(transform);
        debug!(
            count = self.macros.signature_level_count(),
            "registered signature macro"
        );
    }

    pub fn parse_type(&self, token: &str) -> ParseResult<TypeDescriptor> {
        let text = self.macros.apply_type_level(token)?;

        if !self.options.memoize {
            return Ok(types::parse_type(&text));
        }

        self.cache
            .types
            .get_or_try_insert(&text, || Ok(types::parse_type(&text)))
    }

    pub fn parse_params(&self, token: &str) -> ParseResult<ParameterList> {
        parse_params_with(token, |t| self.parse_type(t))
    }

    pub fn parse_signature(&self, signature: &str) -> ParseResult<Signature> {
        let text = self.macros.apply_signature_level(signature)?;
        debug!(signature = %text, "parsing signature");

        let build = || {
            parse_signature_with(&text, self.options.require_output, |stage| {
                self.parse_params(stage)
            })
        };

        if !self.options.memoize {
            return build();
        }

        self.cache.signatures.get_or_try_insert(&text, build)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
