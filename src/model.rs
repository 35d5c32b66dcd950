//! Data model for packed methods — format-agnostic.
//!
//! Input side: [`MethodEntry`] pairs a [`StaticMethod`] (from source analysis)
//! with a [`DynamicMethod`] (from trace analysis). Output side: a [`Document`]
//! of fully built [`MethodRecord`]s, ready to be serialized.

use serde::Deserialize;

/// A type reference as resolved by the upstream analysers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TypeRef {
    name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name, e.g. `int` or `java.lang.String`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
}

/// Signature of a method. Parameter order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub owner: TypeRef,
}

/// Static-analysis result: signature plus the raw doc comment, if any.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticMethod {
    pub description: MethodDescription,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Dynamic-analysis result: signature plus inferred invariants.
#[derive(Debug, Clone, Deserialize)]
pub struct DynamicMethod {
    pub description: MethodDescription,
    /// Predicates holding on entry
    #[serde(default)]
    pub enter: Vec<String>,
    /// Predicates holding at every exit
    #[serde(default)]
    pub exit: Vec<String>,
    /// Predicates holding at a specific exit point, in insertion order
    #[serde(default)]
    pub exits: Vec<ExitGroup>,
}

/// Predicates tied to one exit point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExitGroup {
    pub id: i32,
    #[serde(default)]
    pub exits: Vec<String>,
}

/// One input pair. At least one side must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MethodEntry {
    #[serde(default, rename = "static")]
    pub static_method: Option<StaticMethod>,
    #[serde(default, rename = "dynamic")]
    pub dynamic_method: Option<DynamicMethod>,
}

/// Semantic tag of a documentation segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTag {
    Head,
    Return,
    Param,
    See,
    Throws,
}

/// A maximal run of comment tokens sharing one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSegment {
    pub tag: DocTag,
    /// Tokens joined with a trailing space each
    pub text: String,
}

/// Tokenized documentation; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationBlock {
    pub segments: Vec<DocSegment>,
}

/// Normalized invariants of a method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contract {
    pub enter: Vec<String>,
    pub exit: Vec<String>,
    pub exits_by_id: Vec<ExitGroup>,
}

/// Everything known about one method, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub description: MethodDescription,
    pub documentation: Option<DocumentationBlock>,
    pub contract: Option<Contract>,
}

/// The packed document, in input order.
#[derive(Debug, Default)]
pub struct Document {
    pub methods: Vec<MethodRecord>,
    /// Entries dropped because their comment held no usable tokens
    pub skipped: usize,
}
