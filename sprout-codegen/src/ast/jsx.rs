//! Inline JSX element builder.

use std::fmt;

/// A JSX element with text content on a single line, e.g. `<div>Card</div>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
    tag: String,
    text: String,
}

impl JsxElement {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for JsxElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{0}>{1}</{0}>", self.tag, self.text)
    }
}
