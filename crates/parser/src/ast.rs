// crates/parser/src/ast.rs

use serde::Serialize;
use std::ops::{Deref, DerefMut};

/// One parsed type occurrence, e.g. `test:[tuple<string;int>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub base: String,
    pub subtype: Vec<String>,
    pub optional: bool,
}

/// Relational triple from a dependent metadata block (`A < B`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependentConstraint {
    pub left: String,
    pub operator: String,
    pub right: String,
}

/// One stage of a signature: its types plus any dependent metadata
/// declared before `::`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParameterList {
    pub types: Vec<TypeDescriptor>,
    pub dependent: Option<Vec<DependentConstraint>>,
}

impl Deref for ParameterList {
    type Target = Vec<TypeDescriptor>;

    fn deref(&self) -> &Self::Target {
        &self.types
    }
}

impl DerefMut for ParameterList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.types
    }
}

/// Arrow-separated stages, inputs first and the output stage last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Signature {
    pub stages: Vec<ParameterList>,
}

impl Signature {
    /// Every stage but the last.
    pub fn inputs(&self) -> &[ParameterList] {
        match self.stages.split_last() {
            Some((_, inputs)) => inputs,
            None => &[],
        }
    }

    /// The final (return type) stage.
    pub fn output(&self) -> Option<&ParameterList> {
        self.stages.last()
    }
}

impl Deref for Signature {
    type Target = Vec<ParameterList>;

    fn deref(&self) -> &Self::Target {
        &self.stages
    }
}

impl DerefMut for Signature {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.stages
    }
}
