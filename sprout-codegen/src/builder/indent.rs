//! Indentation configuration for code generation.

/// Width of one indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 4-space indentation, used by scaffolded component stubs.
    pub const STUB: Self = Self::spaces(4);

    const fn spaces(width: usize) -> Self {
        Self { width }
    }

    /// Append the indentation for `depth` levels to `buf`.
    pub(crate) fn write(&self, buf: &mut String, depth: usize) {
        buf.extend(std::iter::repeat_n(' ', self.width * depth));
    }
}
