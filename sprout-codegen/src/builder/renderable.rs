//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) turns
//! fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A header line, an indented body and a closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
