//! Code generation for declaration trees.
//!
//! This crate turns a [`synops_ir::Entity`] tree back into source text. What
//! is written, and how, is controlled by a [`CodeGenerator`]: it decides per
//! entity whether to exclude it, write only its declaration, or write its full
//! definition, and it receives every token tagged with its lexical category.
//!
//! # Module Organization
//!
//! - [`token`] - Token classifiers (Keyword, Identifier, Punctuation, etc.)
//! - [`generator`] - The generator contract and synopsis decisions
//! - [`output`] - The scoped output sentinel
//! - [`generate`] - The traversal driver
//! - [`cpp`] - C++ tokenization of entities, types and template heads
//! - [`generators`] - Text, HTML and filtering generators
//! - [`testing`] - Test utilities (feature-gated)
//!
//! # Example
//!
//! ```
//! use synops_codegen::{TextGenerator, generate_code};
//! use synops_ir::{Entity, EntityKind, Type};
//!
//! let alias = Entity::new(EntityKind::TypeAlias { underlying: Type::builtin("int") }, "index");
//! let mut generator = TextGenerator::default();
//! generate_code(&mut generator, &alias);
//! assert_eq!(generator.finish(), "using index = int;\n");
//! ```

pub mod cpp;
pub mod generate;
pub mod generator;
pub mod generators;
pub mod indent;
pub mod output;
pub mod token;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use generate::{generate_code, write_template_arguments};
pub use generator::{CodeGenerator, Synopsis};
pub use generators::{FilterGenerator, HtmlGenerator, SynopsisFilter, TextGenerator};
pub use indent::{Indent, ParseIndentError};
pub use output::Output;
pub use token::{Token, TokenKind};
