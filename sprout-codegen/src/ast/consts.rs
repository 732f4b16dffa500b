//! Exported const declarations.

use super::ArrowFn;
use crate::builder::{CodeFragment, Renderable};

/// `export const <name> = () => { ... };`
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ArrowFn,
}

impl Const {
    pub fn new(name: impl Into<String>, value: ArrowFn) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("export const {} = {}", self.name, self.value.opening()),
            self.value.body_fragments(),
            "};",
        )]
    }
}
