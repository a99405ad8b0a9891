//! The traversal driver.

use synops_ir::{Entity, TemplateArgument};

use crate::{CodeGenerator, Output, cpp};

/// Generate the code of `entity` and everything inside it.
///
/// Every entity is announced to the generator before any of its tokens are
/// written. Excluded entities contribute nothing, not even the line break
/// separating them from their siblings. Children of containers are visited
/// in order when the definition is generated.
pub fn generate_code(generator: &mut dyn CodeGenerator, entity: &Entity) {
    let is_container = entity.is_container();
    let mut out = Output::new(generator, entity, is_container);
    if !out.is_enabled() {
        tracing::debug!(id = %entity.id, "excluded from synopsis");
        return;
    }
    tracing::trace!(id = %entity.id, kind = entity.kind.name(), synopsis = ?out.synopsis(), "generating");

    cpp::write_head(&mut out, entity);
    if is_container && out.generate_definition() {
        cpp::open_definition(&mut out, entity);
        for child in entity.children() {
            generate_code(out.generator(), child);
        }
        cpp::close_definition(&mut out, entity);
    } else {
        cpp::write_declaration_end(&mut out, entity);
    }

    if entity.occupies_line() {
        out.newline();
    }
}

/// Write template arguments separated by `, `.
pub fn write_template_arguments(out: &mut Output<'_>, args: &[TemplateArgument]) {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.punctuation(",").whitespace();
        }
        cpp::write_template_argument(out, arg);
    }
}

#[cfg(test)]
mod tests {
    use synops_ir::{EntityKind, EntityRef, Expression, Type};

    use super::*;
    use crate::{
        TokenKind,
        testing::{Event, RecordingGenerator},
    };

    fn field(name: &str) -> Entity {
        Entity::new(
            EntityKind::MemberVariable {
                ty: Type::builtin("int"),
                default: None,
                mutable: false,
                bits: None,
            },
            name,
        )
    }

    #[test]
    fn test_template_arguments_have_no_trailing_separator() {
        let holder = field("x");
        let mut generator = RecordingGenerator::new();
        {
            let mut out = Output::new(&mut generator, &holder, false);
            write_template_arguments(
                &mut out,
                &[
                    TemplateArgument::Type(Type::builtin("int")),
                    TemplateArgument::Expression(Expression::int(4)),
                    TemplateArgument::Template(EntityRef::to("std::allocator")),
                ],
            );
        }
        assert_eq!(
            &generator.events()[1..],
            &[
                Event::Token(TokenKind::Keyword, "int".to_string()),
                Event::Token(TokenKind::Punctuation, ",".to_string()),
                Event::Whitespace,
                Event::Token(TokenKind::IntLiteral, "4".to_string()),
                Event::Token(TokenKind::Punctuation, ",".to_string()),
                Event::Whitespace,
                Event::Reference(vec!["std::allocator".into()], "allocator".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_and_empty_argument_lists() {
        let holder = field("x");
        let mut generator = RecordingGenerator::new();
        {
            let mut out = Output::new(&mut generator, &holder, false);
            write_template_arguments(&mut out, &[]);
            write_template_arguments(&mut out, &[TemplateArgument::Type(Type::builtin("char"))]);
        }
        assert_eq!(generator.text(), "char");
    }

    #[test]
    fn test_excluded_root_emits_nothing() {
        let tree = Entity::new(EntityKind::Namespace { inline: false }, "ns").with_child(field("a"));
        let mut generator = RecordingGenerator::new().exclude("ns");
        generate_code(&mut generator, &tree);
        assert_eq!(generator.events(), &[Event::ContainerBegin("ns".into())]);
    }
}
