// Macro registry
//
// Ordered, append-only chains of text rewrites applied before a type token
// or a whole signature is parsed.

use crate::error::{ParseError, ParseResult};
use std::fmt;
use tracing::debug;

/// Value produced by a macro. Only `Text` is a valid result.
#[derive(Debug, Clone, PartialEq)]
pub enum MacroOutput {
    Text(String),
    Null,
    Bool(bool),
    Number(f64),
}

impl MacroOutput {
    /// Runtime type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            MacroOutput::Text(_) => "string",
            MacroOutput::Null => "null",
            MacroOutput::Bool(_) => "boolean",
            MacroOutput::Number(_) => "number",
        }
    }

    fn into_text(self) -> ParseResult<String> {
        match self {
            MacroOutput::Text(text) => Ok(text),
            other => Err(ParseError::MacroContract {
                value: other.to_string(),
                kind: other.kind(),
            }),
        }
    }
}

impl fmt::Display for MacroOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacroOutput::Text(text) => write!(f, "{}", text),
            MacroOutput::Null => write!(f, "null"),
            MacroOutput::Bool(value) => write!(f, "{}", value),
            MacroOutput::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for MacroOutput {
    fn from(text: String) -> Self {
        MacroOutput::Text(text)
    }
}

impl From<&str> for MacroOutput {
    fn from(text: &str) -> Self {
        MacroOutput::Text(text.to_string())
    }
}

impl From<()> for MacroOutput {
    fn from(_: ()) -> Self {
        MacroOutput::Null
    }
}

impl From<bool> for MacroOutput {
    fn from(value: bool) -> Self {
        MacroOutput::Bool(value)
    }
}

impl From<f64> for MacroOutput {
    fn from(value: f64) -> Self {
        MacroOutput::Number(value)
    }
}

impl From<i64> for MacroOutput {
    fn from(value: i64) -> Self {
        MacroOutput::Number(value as f64)
    }
}

impl From<i32> for MacroOutput {
    fn from(value: i32) -> Self {
        MacroOutput::Number(f64::from(value))
    }
}

impl<T: Into<MacroOutput>> From<Option<T>> for MacroOutput {
    fn from(value: Option<T>) -> Self {
        value.map_or(MacroOutput::Null, Into::into)
    }
}

type Macro = Box<dyn Fn(&str) -> MacroOutput + Send + Sync>;

/// Type-level and signature-level macro chains.
#[derive(Default)]
pub struct MacroRegistry {
    type_level: Vec<Macro>,
    signature_level: Vec<Macro>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_type_level<F, R>(&mut self, transform: F)
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<MacroOutput>,
    {
        self.type_level.push(Box::new(move |text| transform(text).into()));
    }

    pub fn register_signature_level<F, R>(&mut self, transform: F)
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<MacroOutput>,
    {
        self.signature_level
            .push(Box::new(move |text| transform(text).into()));
    }

    /// Run `text` through every type-level macro in registration order
    pub fn apply_type_level(&self, text: &str) -> ParseResult<String> {
        apply_chain("type", &self.type_level, text)
    }

    /// Run `text` through every signature-level macro in registration order
    pub fn apply_signature_level(&self, text: &str) -> ParseResult<String> {
        apply_chain("signature", &self.signature_level, text)
    }

    pub fn type_level_count(&self) -> usize {
        self.type_level.len()
    }

    pub fn signature_level_count(&self) -> usize {
        self.signature_level.len()
    }
}

impl fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacroRegistry")
            .field("type_level", &self.type_level.len())
            .field("signature_level", &self.signature_level.len())
            .finish()
    }
}

fn apply_chain(chain: &str, macros: &[Macro], text: &str) -> ParseResult<String> {
    let mut result = text.to_string();

    for (index, transform) in macros.iter().enumerate() {
        let output = transform(&result).into_text()?;
        if output != result {
            debug!(chain, index, from = %result, to = %output, "macro rewrote input");
        }
        result = output;
    }

    Ok(result)
}
