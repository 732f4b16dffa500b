//! Indentation-aware text buffer that AST fragments are emitted into.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines at a tracked indentation depth.
///
/// ```
/// use sprout_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::STUB);
/// builder
///     .push_line("const App = () => {")
///     .push_indent()
///     .push_line("return null;")
///     .push_dedent()
///     .push_line("};");
/// assert_eq!(builder.build(), "const App = () => {\n    return null;\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Append `s` at the current depth, followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write(&mut self.buffer, self.depth);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Step one level out; stays at zero when already there.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Emit every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Write one fragment. Block bodies are indented one level deeper than
    /// their header; the closing line returns to the header's depth.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                body.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent().push_line(&close);
            }
            CodeFragment::Sequence(fragments) => {
                fragments.into_iter().for_each(|f| self.apply_fragment(f));
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
