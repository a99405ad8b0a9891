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
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
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

    pub fn duplicate_id_error(
        &self,
        id: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateId {
            src: self.named_source(),
            first_span,
            second_span,
            id: id.into(),
        })
    }

    pub fn unexpected_children_error(
        &self,
        id: impl Into<String>,
        kind: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnexpectedChildren {
            src: self.named_source(),
            span,
            id: id.into(),
            kind,
        })
    }

    pub fn misplaced_entity_error(
        &self,
        kind: &'static str,
        parent: impl Into<String>,
        expected: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MisplacedEntity {
            src: self.named_source(),
            span,
            kind,
            parent: parent.into(),
            expected,
        })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(synops::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(synops::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(synops::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("duplicate entity id '{id}'")]
    #[diagnostic(
        code(synops::duplicate_id),
        help("set an explicit `id` on one of the entities to tell them apart")
    )]
    DuplicateId {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        id: String,
    },

    #[error("{kind} '{id}' cannot have children")]
    #[diagnostic(
        code(synops::unexpected_children),
        help("only files, namespaces, classes and enums contain other entities")
    )]
    UnexpectedChildren {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        id: String,
        kind: &'static str,
    },

    #[error("{kind} cannot appear in '{parent}'")]
    #[diagnostic(code(synops::misplaced_entity), help("a {kind} must be placed inside {expected}"))]
    MisplacedEntity {
        #[source_code]
        src: NamedSource<String>,
        #[label("misplaced {kind}")]
        span: Option<SourceSpan>,
        kind: &'static str,
        parent: String,
        expected: &'static str,
    },

    #[error("'{name}' is a C++ reserved keyword")]
    #[diagnostic(
        code(synops::reserved_keyword),
        help("a {context} cannot be named '{name}'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(synops::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
