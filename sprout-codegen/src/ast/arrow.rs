//! Arrow function builder.

use crate::builder::CodeFragment;

/// A parameterless arrow function with a block body: `() => { ... }`.
#[derive(Debug, Clone, Default)]
pub struct ArrowFn {
    body: Vec<String>,
}

impl ArrowFn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub(crate) fn opening(&self) -> &'static str {
        "() => {"
    }

    pub(crate) fn body_fragments(&self) -> Vec<CodeFragment> {
        self.body.iter().map(CodeFragment::line).collect()
    }
}
