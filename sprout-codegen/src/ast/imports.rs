//! `import` statements.

use crate::builder::{CodeFragment, Renderable};

/// A default import: `import <binding> from "<module>";`.
#[derive(Debug, Clone)]
pub struct Import {
    binding: String,
    module: String,
}

impl Import {
    pub fn new(binding: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            module: module.into(),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {} from \"{}\";",
            self.binding, self.module
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        assert_eq!(
            Import::new("React", "react").to_fragments(),
            vec![CodeFragment::line("import React from \"react\";")]
        );
    }
}
