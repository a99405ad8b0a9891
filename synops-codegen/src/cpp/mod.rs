//! C++ tokenization of entities.
//!
//! Each entity is written in up to three parts: its head (template head and
//! signature), then either the opening and closing of its definition with
//! the children in between, or the end of a plain declaration.

mod types;

use synops_ir::{BaseClass, Entity, EntityKind, Function, FunctionBody, TemplateHead};

use types::write_lines;
pub use types::{
    write_declarator, write_expression, write_initializer, write_parameter,
    write_template_argument, write_template_parameters, write_type,
};

use crate::{Output, write_template_arguments};

/// Write the template head and the signature.
pub fn write_head(out: &mut Output<'_>, entity: &Entity) {
    if let Some(template) = &entity.template {
        match template {
            TemplateHead::Primary(params) => write_template_parameters(out, params),
            TemplateHead::Specialization(_) => {
                out.keyword("template")
                    .whitespace()
                    .punctuation("<")
                    .punctuation(">");
            }
        }
        out.newline();
    }

    match &entity.kind {
        EntityKind::File => {}
        EntityKind::IncludeDirective { target, system } => {
            let target = if *system {
                format!("<{target}>")
            } else {
                format!("\"{target}\"")
            };
            out.preprocessor("#include").whitespace().preprocessor(&target);
        }
        EntityKind::MacroDefinition {
            parameters,
            replacement,
        } => {
            out.preprocessor("#define")
                .whitespace()
                .preprocessor(&entity.name);
            if let Some(parameters) = parameters {
                out.preprocessor("(");
                for (i, param) in parameters.iter().enumerate() {
                    if i > 0 {
                        out.preprocessor(",");
                    }
                    out.preprocessor(param);
                }
                out.preprocessor(")");
            }
            if !replacement.is_empty() {
                out.whitespace();
                write_macro_replacement(out, replacement);
            }
        }
        EntityKind::Namespace { inline } => {
            if *inline {
                out.keyword("inline").whitespace();
            }
            out.keyword("namespace");
            if !entity.name.is_empty() {
                out.whitespace().identifier(&entity.name);
            }
        }
        EntityKind::NamespaceAlias { target } => {
            out.keyword("namespace")
                .whitespace()
                .identifier(&entity.name)
                .whitespace()
                .punctuation("=")
                .whitespace()
                .reference(target);
        }
        EntityKind::UsingDirective { target } => {
            out.keyword("using")
                .whitespace()
                .keyword("namespace")
                .whitespace()
                .reference(target);
        }
        EntityKind::UsingDeclaration { target } => {
            out.keyword("using").whitespace().reference(target);
        }
        EntityKind::TypeAlias { underlying } => {
            out.keyword("using")
                .whitespace()
                .identifier(&entity.name)
                .whitespace()
                .punctuation("=")
                .whitespace();
            write_type(out, underlying);
        }
        EntityKind::Enum {
            scoped, underlying, ..
        } => {
            out.keyword("enum");
            if *scoped {
                out.whitespace().keyword("class");
            }
            if !entity.name.is_empty() {
                out.whitespace().identifier(&entity.name);
            }
            if let Some(underlying) = underlying {
                out.whitespace().punctuation(":").whitespace();
                write_type(out, underlying);
            }
        }
        EntityKind::Enumerator { value } => {
            out.identifier(&entity.name);
            write_initializer(out, value.as_ref());
        }
        EntityKind::Class { keyword, .. } => {
            out.keyword(keyword.as_str());
            if !entity.name.is_empty() {
                out.whitespace();
                write_name(out, entity);
            }
        }
        EntityKind::AccessSpecifier { access } => {
            out.unindent().keyword(access.as_str()).punctuation(":");
        }
        EntityKind::Variable {
            ty,
            default,
            storage,
            constexpr,
        } => {
            if let Some(storage) = storage.keyword() {
                out.keyword(storage).whitespace();
            }
            if *constexpr {
                out.keyword("constexpr").whitespace();
            }
            write_declarator(out, ty, Some(&entity.name));
            write_initializer(out, default.as_ref());
        }
        EntityKind::MemberVariable {
            ty,
            default,
            mutable,
            bits,
        } => {
            if *mutable {
                out.keyword("mutable").whitespace();
            }
            write_declarator(out, ty, Some(&entity.name));
            if let Some(bits) = bits {
                out.whitespace()
                    .punctuation(":")
                    .whitespace()
                    .int_literal(&bits.to_string());
            }
            write_initializer(out, default.as_ref());
        }
        EntityKind::Function(function) => write_function_signature(out, entity, function),
    }
}

/// Write everything that precedes the children of a definition.
pub fn open_definition(out: &mut Output<'_>, entity: &Entity) {
    match &entity.kind {
        EntityKind::File => {}
        EntityKind::Namespace { .. } | EntityKind::Enum { .. } => {
            out.whitespace().punctuation("{").indent();
        }
        EntityKind::Class {
            is_final, bases, ..
        } => {
            if *is_final {
                out.whitespace().keyword("final");
            }
            write_bases(out, bases);
            out.whitespace().punctuation("{").indent();
        }
        EntityKind::Function(function) => {
            out.whitespace().punctuation("{");
            let statements = body_statements(function);
            if !statements.is_empty() {
                out.indent();
                for statement in statements {
                    write_lines(out, statement, |out, line| {
                        out.token_seq(line);
                    });
                    out.newline();
                }
            }
        }
        _ => {}
    }
}

/// Write everything that follows the children of a definition.
pub fn close_definition(out: &mut Output<'_>, entity: &Entity) {
    match &entity.kind {
        EntityKind::File => {}
        EntityKind::Namespace { .. } => {
            out.unindent().punctuation("}");
        }
        EntityKind::Class { .. } | EntityKind::Enum { .. } => {
            out.unindent().punctuation("}").punctuation(";");
        }
        EntityKind::Function(function) => {
            if !body_statements(function).is_empty() {
                out.unindent();
            }
            out.punctuation("}");
        }
        _ => {}
    }
}

/// Write the end of an entity whose definition is not generated.
pub fn write_declaration_end(out: &mut Output<'_>, entity: &Entity) {
    match &entity.kind {
        EntityKind::File | EntityKind::IncludeDirective { .. } | EntityKind::MacroDefinition { .. } => {}
        EntityKind::Namespace { .. } => {
            out.whitespace().punctuation("{").punctuation("}");
        }
        EntityKind::Enumerator { .. } => {
            out.punctuation(",");
        }
        EntityKind::AccessSpecifier { .. } => {
            out.indent_without_newline();
        }
        EntityKind::Function(function) => {
            match &function.body {
                FunctionBody::Defaulted => {
                    out.whitespace()
                        .punctuation("=")
                        .whitespace()
                        .keyword("default");
                }
                FunctionBody::Deleted => {
                    out.whitespace()
                        .punctuation("=")
                        .whitespace()
                        .keyword("delete");
                }
                FunctionBody::PureVirtual => {
                    out.whitespace()
                        .punctuation("=")
                        .whitespace()
                        .int_literal("0");
                }
                FunctionBody::Declaration | FunctionBody::Definition(_) => {}
            }
            out.punctuation(";");
        }
        _ => {
            out.punctuation(";");
        }
    }
}

fn body_statements(function: &Function) -> &[String] {
    match &function.body {
        FunctionBody::Definition(statements) => statements,
        _ => &[],
    }
}

// Continued lines end in `\`.
fn write_macro_replacement(out: &mut Output<'_>, replacement: &str) {
    let mut lines = replacement.lines().peekable();
    while let Some(line) = lines.next() {
        if !line.is_empty() {
            out.preprocessor(line);
        }
        if lines.peek().is_some() {
            if !line.is_empty() {
                out.whitespace();
            }
            out.preprocessor("\\").newline();
        }
    }
}

fn write_name(out: &mut Output<'_>, entity: &Entity) {
    out.identifier(&entity.name);
    if let Some(TemplateHead::Specialization(specialization)) = &entity.template {
        out.punctuation("<");
        write_template_arguments(out, &specialization.args);
        out.punctuation(">");
    }
}

fn write_bases(out: &mut Output<'_>, bases: &[BaseClass]) {
    for (i, base) in bases.iter().enumerate() {
        if i == 0 {
            out.whitespace().punctuation(":").whitespace();
        } else {
            out.punctuation(",").whitespace();
        }
        if base.is_virtual {
            out.keyword("virtual").whitespace();
        }
        if let Some(access) = base.access {
            out.keyword(access.as_str()).whitespace();
        }
        write_type(out, &base.ty);
    }
}

fn write_function_signature(out: &mut Output<'_>, entity: &Entity, function: &Function) {
    for (enabled, keyword) in [
        (function.is_static, "static"),
        (function.constexpr, "constexpr"),
        (function.is_virtual, "virtual"),
        (function.explicit, "explicit"),
    ] {
        if enabled {
            out.keyword(keyword).whitespace();
        }
    }
    if let Some(return_type) = &function.return_type {
        write_type(out, return_type);
        out.whitespace();
    }
    write_name(out, entity);

    out.punctuation("(");
    for (i, param) in function.params.iter().enumerate() {
        if i > 0 {
            out.punctuation(",").whitespace();
        }
        write_parameter(out, param);
    }
    if function.variadic {
        if !function.params.is_empty() {
            out.punctuation(",").whitespace();
        }
        out.punctuation("...");
    }
    out.punctuation(")");

    for (enabled, keyword) in [
        (function.is_const, "const"),
        (function.noexcept, "noexcept"),
        (function.is_override, "override"),
        (function.is_final, "final"),
    ] {
        if enabled {
            out.whitespace().keyword(keyword);
        }
    }
}
