//! A whole TypeScript source file: an import block followed by declarations.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
};

/// Imports, then top-level declarations separated by blank lines.
///
/// ```
/// use sprout_codegen::{
///     CodeFile,
///     ast::{ArrowFn, Const, Import},
///     builder::Indent,
/// };
///
/// let src = CodeFile::new()
///     .import(Import::new("React", "react"))
///     .add(Const::new("App", ArrowFn::new().body_line("return null;")))
///     .render(Indent::STUB);
/// assert_eq!(
///     src,
///     "import React from \"react\";\n\nexport const App = () => {\n    return null;\n};\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    declarations: Vec<CodeFragment>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Append a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: impl Renderable) -> Self {
        self.declarations
            .push(CodeFragment::sequence(node.to_fragments()));
        self
    }

    pub fn render(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 || !self.imports.is_empty() {
                builder.push_blank();
            }
            builder.apply_fragment(declaration.clone());
        }

        builder.build()
    }
}
