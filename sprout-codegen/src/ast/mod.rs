//! TypeScript/JSX AST builders for imports, declarations and elements.
//!
//! Nodes render to [`CodeFragment`](crate::builder::CodeFragment)s, which
//! a [`CodeBuilder`](crate::builder::CodeBuilder) turns into text.

mod arrow;
mod consts;
mod imports;
mod jsx;

pub use arrow::ArrowFn;
pub use consts::Const;
pub use imports::Import;
pub use jsx::JsxElement;
