//! File naming model: recognized suffixes and derived display names.

use std::fmt;

use thiserror::Error;

use crate::utils::to_pascal_case;

/// The kind of file, determined by its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A typed React component (`.tsx`), scaffolded with a rendering stub.
    Component,
    /// A plain TypeScript module (`.ts`), scaffolded empty.
    Module,
}

impl FileKind {
    /// All recognized kinds, in the order suffixes are matched.
    pub const ALL: [FileKind; 2] = [FileKind::Component, FileKind::Module];

    /// The file suffix for this kind, including the leading dot.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Component => ".tsx",
            Self::Module => ".ts",
        }
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Module => "module",
        }
    }

    /// Detect the kind of a file name from its suffix.
    pub fn detect(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| name.ends_with(kind.suffix()))
    }
}

/// Why a string was rejected as a [`FileName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFileName {
    #[error("'{0}' must end with .tsx or .ts")]
    UnrecognizedSuffix(String),

    #[error("'{0}' has no name before its suffix")]
    EmptyStem(String),

    #[error("'{0}' must be a plain file name without path separators")]
    PathSeparator(String),
}

/// A validated file name ending in a recognized suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName {
    raw: String,
    kind: FileKind,
}

impl FileName {
    /// Validate and create a file name.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidFileName> {
        let raw = name.into();

        if raw.contains(['/', '\\']) {
            return Err(InvalidFileName::PathSeparator(raw));
        }

        let Some(kind) = FileKind::detect(&raw) else {
            return Err(InvalidFileName::UnrecognizedSuffix(raw));
        };

        if raw.len() == kind.suffix().len() {
            return Err(InvalidFileName::EmptyStem(raw));
        }

        Ok(Self { raw, kind })
    }

    /// The full file name, including suffix.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// The file name with its recognized suffix stripped.
    pub fn stem(&self) -> &str {
        &self.raw[..self.raw.len() - self.kind.suffix().len()]
    }

    /// Derive the PascalCase display name (e.g., "navigation-menu.tsx" -> "NavigationMenu").
    pub fn display_name(&self) -> ComponentName {
        ComponentName(to_pascal_case(self.stem()))
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// PascalCase display name derived from a [`FileName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
