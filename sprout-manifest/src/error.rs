use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid file name error.
    pub fn invalid_file_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidFileName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate file error.
    pub fn duplicate_file_error(
        &self,
        name: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateFile {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'sprout init' to create a sprout.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sprout.toml")]
    #[diagnostic(code(sprout::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid file name '{name}'")]
    #[diagnostic(
        code(sprout::invalid_file_name),
        help("use a plain file name ending in .tsx (component) or .ts (module)")
    )]
    InvalidFileName {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("duplicate file '{name}'")]
    #[diagnostic(
        code(sprout::duplicate_file),
        help("each file may only be listed once")
    )]
    DuplicateFile {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: SourceSpan,
        #[label("listed again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(sprout::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
