//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and the path of
/// enclosing entities, making it easier to pass validation context through
/// the recursive lowering of the entity tree.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "synops.toml");
/// ctx.validate_name("point", "class")?;
///
/// // For nested validation
/// let nested = ctx.push("geo").push("point");
/// nested.validate_name("x", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Names of the enclosing entities (e.g., ["geo", "point"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// The enclosing entities joined with `::`.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'geo::point'" or just "class" at the top level.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a valid C++ identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_cpp_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// C++ reserved keywords that cannot be used as identifiers
pub(crate) const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

pub(crate) fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for `name = "value"` and `id = "value"`, in tables and inline tables
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    name_patterns(name).find_map(|(pattern, skip)| {
        src.find(&pattern)
            .map(|pos| SourceSpan::from((pos + skip, name.len())))
    })
}

/// Like [`find_name_span`], but finds the last occurrence.
pub(crate) fn find_last_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    name_patterns(name)
        .filter_map(|(pattern, skip)| src.rfind(&pattern).map(|pos| pos + skip))
        .max()
        .map(|start| SourceSpan::from((start, name.len())))
}

fn name_patterns(name: &str) -> impl Iterator<Item = (String, usize)> {
    [
        (format!("id = \"{}\"", name), 6usize),
        (format!("name = \"{}\"", name), 8usize),
        (format!("id = '{}'", name), 6usize),
        (format!("name = '{}'", name), 8usize),
    ]
    .into_iter()
}

/// Validate that a name is a valid C++ identifier
/// Returns None if valid, Some(reason) if invalid
///
/// Destructor names (`~name`) and operator function names (`operator==`) are
/// accepted as well.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if let Some(rest) = name.strip_prefix("operator")
        && !rest.is_empty()
        && !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }

    let name = name.strip_prefix('~').unwrap_or(name);
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("point").is_none());
        assert!(validate_identifier("_Impl").is_none());
        assert!(validate_identifier("vec3").is_none());
        assert!(validate_identifier("~widget").is_none());
        assert!(validate_identifier("operator==").is_none());
        assert!(validate_identifier("operator()").is_none());
        assert!(validate_identifier("operator new").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("3d").is_some());
        assert!(validate_identifier("my-name").is_some());
        assert!(validate_identifier("a::b").is_some());
        assert!(validate_identifier("~").is_some());
        assert!(validate_identifier("operator_like").is_none());
    }

    #[test]
    fn test_keywords() {
        assert!(is_cpp_keyword("class"));
        assert!(is_cpp_keyword("template"));
        assert!(!is_cpp_keyword("point"));
        assert!(!is_cpp_keyword("override"));
    }

    #[test]
    fn test_find_name_span() {
        let src = "[[file.entities]]\nkind = \"class\"\nname = \"point\"\n";
        let span = find_name_span(src, "point").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "point");
        assert!(find_name_span(src, "missing").is_none());
    }

    #[test]
    fn test_find_last_name_span() {
        let src = "name = \"a\"\nname = \"b\"\nid = \"a\"\n";
        let span = find_last_name_span(src, "a").unwrap();
        assert_eq!(span.offset(), src.rfind("\"a\"").unwrap() + 1);
    }

    #[test]
    fn test_context_for_nested() {
        let ctx = ParseContext::new("", "synops.toml");
        assert_eq!(ctx.context_for("class"), "class");
        assert_eq!(ctx.push("geo").push("point").context_for("field"), "field in 'geo::point'");
    }
}
