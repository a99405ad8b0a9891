//! Token classifiers.
//!
//! Each classifier is a borrowed view over some text, tagged with the lexical
//! category it belongs to. Writing a classifier through an [`Output`] calls the
//! matching [`CodeGenerator`] hook, so generators can style each category
//! differently.
//!
//! [`Output`]: crate::Output

use synops_ir::EntityRef;

use crate::CodeGenerator;

/// Something that can be written through an [`Output`](crate::Output).
pub trait Token {
    /// Dispatch to the generator hook for this token's category.
    fn write_to(&self, generator: &mut dyn CodeGenerator);
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Reference,
    Punctuation,
    StrLiteral,
    IntLiteral,
    FloatLiteral,
    Preprocessor,
    TokenSeq,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Reference => "reference",
            Self::Punctuation => "punctuation",
            Self::StrLiteral => "str-literal",
            Self::IntLiteral => "int-literal",
            Self::FloatLiteral => "float-literal",
            Self::Preprocessor => "preprocessor",
            Self::TokenSeq => "token-seq",
        }
    }
}

macro_rules! classifier {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $hook:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<'a>(pub &'a str);

        impl<'a> $name<'a> {
            pub const KIND: TokenKind = TokenKind::$kind;

            pub fn as_str(&self) -> &'a str {
                self.0
            }
        }

        impl Token for $name<'_> {
            fn write_to(&self, generator: &mut dyn CodeGenerator) {
                generator.$hook(self.0);
            }
        }

        impl<'a> From<&'a str> for $name<'a> {
            fn from(s: &'a str) -> Self {
                Self(s)
            }
        }
    };
}

classifier!(
    /// A keyword, e.g. `class` or `const`.
    Keyword, Keyword, write_keyword
);
classifier!(
    /// A declared name.
    Identifier, Identifier, write_identifier
);
classifier!(
    /// Punctuation such as `(`, `::` or `;`.
    Punctuation, Punctuation, write_punctuation
);
classifier!(
    /// A string or character literal, quotes included.
    StrLiteral, StrLiteral, write_str_literal
);
classifier!(
    /// An integer literal.
    IntLiteral, IntLiteral, write_int_literal
);
classifier!(
    /// A floating point literal.
    FloatLiteral, FloatLiteral, write_float_literal
);
classifier!(
    /// A preprocessor token, e.g. `#define`.
    Preprocessor, Preprocessor, write_preprocessor
);
classifier!(
    /// A run of tokens of unknown category.
    TokenSeq, TokenSeq, write_token_seq
);

/// Marker for a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Newline;

impl Token for Newline {
    fn write_to(&self, generator: &mut dyn CodeGenerator) {
        generator.write_newline();
    }
}

/// Marker for a single separating space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Whitespace;

impl Token for Whitespace {
    fn write_to(&self, generator: &mut dyn CodeGenerator) {
        generator.write_whitespace();
    }
}

impl Token for &EntityRef {
    fn write_to(&self, generator: &mut dyn CodeGenerator) {
        generator.write_reference(self.targets(), self.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_do_not_copy() {
        let text = String::from("namespace");
        let kw = Keyword(&text);
        assert!(std::ptr::eq(kw.as_str(), text.as_str()));
    }

    #[test]
    fn test_kind_constants() {
        assert_eq!(Keyword::KIND, TokenKind::Keyword);
        assert_eq!(Preprocessor::KIND.as_str(), "preprocessor");
        assert_eq!(StrLiteral::KIND.as_str(), "str-literal");
    }
}
