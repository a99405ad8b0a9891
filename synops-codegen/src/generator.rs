//! The code generator contract.

use synops_ir::{Entity, EntityId};

/// How much of an entity is generated.
///
/// Ordered by how much output is produced, so `min` narrows a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Synopsis {
    /// Exclude the entity and everything inside it.
    Exclude,
    /// Only write the declaration.
    Declaration,
    /// Also write the definition.
    Definition,
}

/// Controls how entities are turned into text.
///
/// Implement it to customize what [`generate_code`](crate::generate_code)
/// writes. Only [`write_token_seq`](Self::write_token_seq) is required: every
/// other write hook forwards to it by default, so richer generators override
/// just the categories they want to style differently.
///
/// Hooks do not report failures. A generator writing to a fallible medium
/// keeps the error itself and reports it after generation.
pub trait CodeGenerator {
    /// Called before anything of a container entity is generated.
    fn on_container_begin(&mut self, entity: &Entity) -> Synopsis {
        let _ = entity;
        Synopsis::Definition
    }

    /// Called after all children of a container were generated.
    ///
    /// Not called when the container was excluded.
    fn on_container_end(&mut self, entity: &Entity) {
        let _ = entity;
    }

    /// Called before a non-container entity is generated.
    fn on_leaf(&mut self, entity: &Entity) -> Synopsis {
        let _ = entity;
        Synopsis::Definition
    }

    /// Increase the indentation level.
    ///
    /// The change applies from the next call to `write_newline`.
    fn indent(&mut self) {}

    /// Decrease the indentation level.
    ///
    /// The change applies immediately if nothing was written on the current
    /// line yet, otherwise from the next call to `write_newline`.
    fn unindent(&mut self) {}

    /// Write a run of tokens.
    fn write_token_seq(&mut self, tokens: &str);

    fn write_keyword(&mut self, keyword: &str) {
        self.write_token_seq(keyword);
    }

    fn write_identifier(&mut self, identifier: &str) {
        self.write_token_seq(identifier);
    }

    /// Write the name of a referenced entity.
    ///
    /// The default ignores the targets.
    fn write_reference(&mut self, targets: &[EntityId], name: &str) {
        let _ = targets;
        self.write_token_seq(name);
    }

    fn write_punctuation(&mut self, punctuation: &str) {
        self.write_token_seq(punctuation);
    }

    fn write_str_literal(&mut self, literal: &str) {
        self.write_token_seq(literal);
    }

    fn write_int_literal(&mut self, literal: &str) {
        self.write_token_seq(literal);
    }

    fn write_float_literal(&mut self, literal: &str) {
        self.write_token_seq(literal);
    }

    fn write_preprocessor(&mut self, token: &str) {
        self.write_token_seq(token);
    }

    /// Write a line break.
    ///
    /// This is the only way a line break is ever written.
    fn write_newline(&mut self) {
        self.write_token_seq("\n");
    }

    /// Write a single space.
    ///
    /// Only called where two tokens must be separated.
    fn write_whitespace(&mut self) {
        self.write_token_seq(" ");
    }
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for &mut G {
    fn on_container_begin(&mut self, entity: &Entity) -> Synopsis {
        (**self).on_container_begin(entity)
    }

    fn on_container_end(&mut self, entity: &Entity) {
        (**self).on_container_end(entity)
    }

    fn on_leaf(&mut self, entity: &Entity) -> Synopsis {
        (**self).on_leaf(entity)
    }

    fn indent(&mut self) {
        (**self).indent()
    }

    fn unindent(&mut self) {
        (**self).unindent()
    }

    fn write_token_seq(&mut self, tokens: &str) {
        (**self).write_token_seq(tokens)
    }

    fn write_keyword(&mut self, keyword: &str) {
        (**self).write_keyword(keyword)
    }

    fn write_identifier(&mut self, identifier: &str) {
        (**self).write_identifier(identifier)
    }

    fn write_reference(&mut self, targets: &[EntityId], name: &str) {
        (**self).write_reference(targets, name)
    }

    fn write_punctuation(&mut self, punctuation: &str) {
        (**self).write_punctuation(punctuation)
    }

    fn write_str_literal(&mut self, literal: &str) {
        (**self).write_str_literal(literal)
    }

    fn write_int_literal(&mut self, literal: &str) {
        (**self).write_int_literal(literal)
    }

    fn write_float_literal(&mut self, literal: &str) {
        (**self).write_float_literal(literal)
    }

    fn write_preprocessor(&mut self, token: &str) {
        (**self).write_preprocessor(token)
    }

    fn write_newline(&mut self) {
        (**self).write_newline()
    }

    fn write_whitespace(&mut self) {
        (**self).write_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synopsis_ordering_narrows() {
        assert!(Synopsis::Exclude < Synopsis::Declaration);
        assert!(Synopsis::Declaration < Synopsis::Definition);
        assert_eq!(
            Synopsis::Definition.min(Synopsis::Declaration),
            Synopsis::Declaration
        );
        assert_eq!(Synopsis::Exclude.min(Synopsis::Declaration), Synopsis::Exclude);
    }
}
