//! The scoped output sentinel.

use synops_ir::{Entity, EntityId, EntityRef};

use crate::{
    CodeGenerator, Synopsis,
    token::{
        FloatLiteral, Identifier, IntLiteral, Keyword, Newline, Preprocessor, Punctuation,
        StrLiteral, Token, TokenSeq, Whitespace,
    },
};

/// Writes the tokens of one entity through a [`CodeGenerator`].
///
/// Creating an `Output` asks the generator whether and how the entity is
/// generated. Dropping it tells the generator that a container is finished,
/// unless the container was excluded. Sentinels nest the same way the entity
/// tree does: a child's sentinel borrows the generator from its parent's via
/// [`Output::generator`].
///
/// Every write is a no-op while the entity is excluded.
///
/// ```
/// use synops_codegen::{Output, TextGenerator};
/// use synops_ir::{Entity, EntityKind};
///
/// let entity = Entity::new(EntityKind::Namespace { inline: false }, "geo");
/// let mut generator = TextGenerator::default();
/// {
///     let mut out = Output::new(&mut generator, &entity, false);
///     out.keyword("namespace").whitespace().identifier("geo").newline();
/// }
/// assert_eq!(generator.finish(), "namespace geo\n");
/// ```
pub struct Output<'a> {
    generator: &'a mut dyn CodeGenerator,
    entity: Option<&'a Entity>,
    synopsis: Synopsis,
}

impl<'a> Output<'a> {
    pub fn new(generator: &'a mut dyn CodeGenerator, entity: &'a Entity, is_container: bool) -> Self {
        let synopsis = if is_container {
            generator.on_container_begin(entity)
        } else {
            generator.on_leaf(entity)
        };
        let entity = (is_container && synopsis != Synopsis::Exclude).then_some(entity);
        Self {
            generator,
            entity,
            synopsis,
        }
    }

    /// The decision taken for this entity.
    pub fn synopsis(&self) -> Synopsis {
        self.synopsis
    }

    /// Returns false if the entity is excluded.
    pub fn is_enabled(&self) -> bool {
        self.synopsis != Synopsis::Exclude
    }

    /// Returns true if the definition should be generated as well.
    pub fn generate_definition(&self) -> bool {
        self.synopsis == Synopsis::Definition
    }

    /// The generator, for creating the sentinels of children.
    pub fn generator(&mut self) -> &mut dyn CodeGenerator {
        &mut *self.generator
    }

    pub fn write(&mut self, token: impl Token) -> &mut Self {
        if self.is_enabled() {
            token.write_to(&mut *self.generator);
        }
        self
    }

    pub fn keyword(&mut self, text: &str) -> &mut Self {
        self.write(Keyword(text))
    }

    pub fn identifier(&mut self, text: &str) -> &mut Self {
        self.write(Identifier(text))
    }

    pub fn punctuation(&mut self, text: &str) -> &mut Self {
        self.write(Punctuation(text))
    }

    pub fn str_literal(&mut self, text: &str) -> &mut Self {
        self.write(StrLiteral(text))
    }

    pub fn int_literal(&mut self, text: &str) -> &mut Self {
        self.write(IntLiteral(text))
    }

    pub fn float_literal(&mut self, text: &str) -> &mut Self {
        self.write(FloatLiteral(text))
    }

    pub fn preprocessor(&mut self, text: &str) -> &mut Self {
        self.write(Preprocessor(text))
    }

    pub fn token_seq(&mut self, text: &str) -> &mut Self {
        self.write(TokenSeq(text))
    }

    pub fn reference(&mut self, reference: &EntityRef) -> &mut Self {
        self.write(reference)
    }

    /// Write a reference that is not backed by an [`EntityRef`].
    pub fn reference_to(&mut self, targets: &[EntityId], name: &str) -> &mut Self {
        if self.is_enabled() {
            self.generator.write_reference(targets, name);
        }
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.write(Newline)
    }

    pub fn whitespace(&mut self) -> &mut Self {
        self.write(Whitespace)
    }

    /// Increase the indentation and start a new line.
    pub fn indent(&mut self) -> &mut Self {
        if self.is_enabled() {
            self.generator.indent();
        }
        self.newline()
    }

    /// Increase the indentation without starting a new line.
    pub fn indent_without_newline(&mut self) -> &mut Self {
        if self.is_enabled() {
            self.generator.indent();
        }
        self
    }

    pub fn unindent(&mut self) -> &mut Self {
        if self.is_enabled() {
            self.generator.unindent();
        }
        self
    }
}

impl Drop for Output<'_> {
    fn drop(&mut self) {
        if let Some(entity) = self.entity.take() {
            self.generator.on_container_end(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use synops_ir::{EntityKind, Type};

    use super::*;
    use crate::{
        TokenKind,
        testing::{Event, RecordingGenerator},
    };

    fn namespace(name: &str) -> Entity {
        Entity::new(EntityKind::Namespace { inline: false }, name)
    }

    fn variable(name: &str) -> Entity {
        Entity::new(
            EntityKind::Variable {
                ty: Type::builtin("int"),
                default: None,
                storage: Default::default(),
                constexpr: false,
            },
            name,
        )
    }

    #[test]
    fn test_container_fires_begin_and_end() {
        let ns = namespace("ns");
        let mut generator = RecordingGenerator::new();
        {
            let out = Output::new(&mut generator, &ns, true);
            assert!(out.is_enabled());
            assert!(out.generate_definition());
        }
        assert_eq!(
            generator.events(),
            &[
                Event::ContainerBegin("ns".into()),
                Event::ContainerEnd("ns".into())
            ]
        );
    }

    #[test]
    fn test_leaf_has_no_end_event() {
        let v = variable("v");
        let mut generator = RecordingGenerator::new();
        {
            let mut out = Output::new(&mut generator, &v, false);
            out.identifier("v");
        }
        assert_eq!(
            generator.events(),
            &[
                Event::Leaf("v".into()),
                Event::Token(TokenKind::Identifier, "v".to_string())
            ]
        );
    }

    #[test]
    fn test_excluded_output_writes_nothing() {
        let ns = namespace("hidden");
        let mut generator = RecordingGenerator::new().exclude("hidden");
        {
            let mut out = Output::new(&mut generator, &ns, true);
            assert!(!out.is_enabled());
            assert!(!out.generate_definition());
            out.keyword("namespace")
                .whitespace()
                .identifier("hidden")
                .indent()
                .unindent()
                .newline();
        }
        assert_eq!(
            generator.events(),
            &[Event::ContainerBegin("hidden".into())]
        );
    }

    #[test]
    fn test_declaration_only_is_enabled_without_definition() {
        let ns = namespace("ns");
        let mut generator = RecordingGenerator::new().declaration_only("ns");
        let out = Output::new(&mut generator, &ns, true);
        assert!(out.is_enabled());
        assert!(!out.generate_definition());
        assert_eq!(out.synopsis(), Synopsis::Declaration);
    }

    #[test]
    fn test_indent_writes_newline_unless_suppressed() {
        let v = variable("v");
        let mut generator = RecordingGenerator::new();
        {
            let mut out = Output::new(&mut generator, &v, false);
            out.indent().indent_without_newline().unindent();
        }
        assert_eq!(
            &generator.events()[1..],
            &[
                Event::Indent,
                Event::Newline,
                Event::Indent,
                Event::Unindent
            ]
        );
    }

    #[test]
    fn test_nested_sentinels_end_inner_first() {
        let outer = namespace("outer");
        let inner = namespace("inner");
        let mut generator = RecordingGenerator::new();
        {
            let mut out = Output::new(&mut generator, &outer, true);
            {
                let _child = Output::new(out.generator(), &inner, true);
            }
            out.punctuation("}");
        }
        assert_eq!(
            generator.events(),
            &[
                Event::ContainerBegin("outer".into()),
                Event::ContainerBegin("inner".into()),
                Event::ContainerEnd("inner".into()),
                Event::Token(TokenKind::Punctuation, "}".to_string()),
                Event::ContainerEnd("outer".into()),
            ]
        );
    }
}
