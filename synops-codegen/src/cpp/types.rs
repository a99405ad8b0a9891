use synops_ir::{
    Expression, LiteralKind, Parameter, TemplateArgument, TemplateParameter, Type,
};

use crate::{Output, write_template_arguments};

pub fn write_type(out: &mut Output<'_>, ty: &Type) {
    match ty {
        Type::Builtin(name) => {
            out.keyword(name);
        }
        Type::User(reference) => {
            out.reference(reference);
        }
        Type::Unexposed(spelling) => write_lines(out, spelling, |out, line| {
            out.token_seq(line);
        }),
        Type::Const(inner) => write_cv(out, "const", inner),
        Type::Volatile(inner) => write_cv(out, "volatile", inner),
        Type::Pointer(inner) => {
            write_type(out, inner);
            out.punctuation("*");
        }
        Type::LvalueRef(inner) => {
            write_type(out, inner);
            out.punctuation("&");
        }
        Type::RvalueRef(inner) => {
            write_type(out, inner);
            out.punctuation("&&");
        }
        Type::Array { .. } => {
            let (element, bounds) = split_array(ty);
            write_type(out, element);
            bounds.into_iter().for_each(|size| write_array_bounds(out, size));
        }
        Type::Instantiation { template, args } => {
            out.reference(template).punctuation("<");
            write_template_arguments(out, args);
            out.punctuation(">");
        }
    }
}

// `const int` but `int* const`
fn write_cv(out: &mut Output<'_>, qualifier: &str, inner: &Type) {
    if inner.is_pointer() {
        write_type(out, inner);
        out.whitespace().keyword(qualifier);
    } else {
        out.keyword(qualifier).whitespace();
        write_type(out, inner);
    }
}

fn write_array_bounds(out: &mut Output<'_>, size: Option<&Expression>) {
    out.punctuation("[");
    if let Some(size) = size {
        write_expression(out, size);
    }
    out.punctuation("]");
}

/// Write `ty name`, placing array bounds after the name.
pub fn write_declarator(out: &mut Output<'_>, ty: &Type, name: Option<&str>) {
    write_declarator_impl(out, ty, name, false);
}

/// Write a function parameter with its default argument.
pub fn write_parameter(out: &mut Output<'_>, param: &Parameter) {
    write_declarator_impl(out, &param.ty, param.name.as_deref(), param.pack);
    write_initializer(out, param.default.as_ref());
}

fn write_declarator_impl(out: &mut Output<'_>, ty: &Type, name: Option<&str>, pack: bool) {
    let (element, bounds) = split_array(ty);
    write_type(out, element);
    if pack {
        out.punctuation("...");
    }
    if let Some(name) = name.filter(|name| !name.is_empty()) {
        out.whitespace().identifier(name);
    }
    bounds.into_iter().for_each(|size| write_array_bounds(out, size));
}

/// The innermost element type and the bounds of every array layer, outermost first.
fn split_array(ty: &Type) -> (&Type, Vec<Option<&Expression>>) {
    let mut element = ty;
    let mut bounds = Vec::new();
    while let Type::Array { element: inner, size } = element {
        bounds.push(size.as_ref());
        element = inner.as_ref();
    }
    (element, bounds)
}

/// Write `text` line by line, breaking lines only through the generator.
pub(crate) fn write_lines(
    out: &mut Output<'_>,
    text: &str,
    mut write_line: impl FnMut(&mut Output<'_>, &str),
) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.newline();
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            write_line(out, line);
        }
    }
}

pub fn write_expression(out: &mut Output<'_>, expression: &Expression) {
    match expression {
        Expression::Literal { kind, text } => {
            match kind {
                LiteralKind::Int => out.int_literal(text),
                LiteralKind::Float => out.float_literal(text),
                LiteralKind::String | LiteralKind::Char => out.str_literal(text),
                LiteralKind::Bool => out.keyword(text),
            };
        }
        Expression::Unexposed(spelling) => write_lines(out, spelling, |out, line| {
            out.token_seq(line);
        }),
    }
}

/// Write ` = value`.
pub fn write_initializer(out: &mut Output<'_>, value: Option<&Expression>) {
    if let Some(value) = value {
        out.whitespace().punctuation("=").whitespace();
        write_expression(out, value);
    }
}

pub fn write_template_argument(out: &mut Output<'_>, arg: &TemplateArgument) {
    match arg {
        TemplateArgument::Type(ty) => write_type(out, ty),
        TemplateArgument::Expression(expression) => write_expression(out, expression),
        TemplateArgument::Template(reference) => {
            out.reference(reference);
        }
    }
}

/// Write `template <params>`.
pub fn write_template_parameters(out: &mut Output<'_>, params: &[TemplateParameter]) {
    out.keyword("template").whitespace().punctuation("<");
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.punctuation(",").whitespace();
        }
        write_template_parameter(out, param);
    }
    out.punctuation(">");
}

fn write_template_parameter(out: &mut Output<'_>, param: &TemplateParameter) {
    match param {
        TemplateParameter::Type {
            name,
            keyword,
            variadic,
            default,
        } => {
            out.keyword(keyword.as_str());
            write_parameter_name(out, name, *variadic);
            if let Some(default) = default {
                out.whitespace().punctuation("=").whitespace();
                write_type(out, default);
            }
        }
        TemplateParameter::NonType {
            name,
            ty,
            variadic,
            default,
        } => {
            write_type(out, ty);
            write_parameter_name(out, name, *variadic);
            write_initializer(out, default.as_ref());
        }
        TemplateParameter::Template {
            name,
            params,
            variadic,
            default,
        } => {
            write_template_parameters(out, params);
            out.whitespace().keyword("class");
            write_parameter_name(out, name, *variadic);
            if let Some(default) = default {
                out.whitespace().punctuation("=").whitespace().reference(default);
            }
        }
    }
}

fn write_parameter_name(out: &mut Output<'_>, name: &str, variadic: bool) {
    if variadic {
        out.punctuation("...");
    }
    if !name.is_empty() {
        out.whitespace().identifier(name);
    }
}

#[cfg(test)]
mod tests {
    use synops_ir::{Entity, EntityKind, EntityRef, TypeParameterKeyword};

    use super::*;
    use crate::testing::RecordingGenerator;

    fn render(write: impl FnOnce(&mut Output<'_>)) -> String {
        let holder = Entity::new(EntityKind::File, "holder.hpp");
        let mut generator = RecordingGenerator::new();
        {
            let mut out = Output::new(&mut generator, &holder, false);
            write(&mut out);
        }
        generator.text()
    }

    #[test]
    fn test_cv_placement() {
        let ty = Type::const_(Type::pointer(Type::const_(Type::builtin("char"))));
        assert_eq!(render(|out| write_type(out, &ty)), "const char* const");
    }

    #[test]
    fn test_references_and_instantiations() {
        let ty = Type::lvalue_ref(Type::const_(Type::Instantiation {
            template: EntityRef::new("std::vector", "std::vector"),
            args: vec![TemplateArgument::Type(Type::user(EntityRef::to("geo::point")))],
        }));
        assert_eq!(
            render(|out| write_type(out, &ty)),
            "const std::vector<point>&"
        );
    }

    #[test]
    fn test_array_declarator() {
        let ty = Type::Array {
            element: Box::new(Type::builtin("int")),
            size: Some(Expression::int(4)),
        };
        assert_eq!(render(|out| write_declarator(out, &ty, Some("xs"))), "int xs[4]");
        assert_eq!(render(|out| write_declarator(out, &ty, None)), "int[4]");
    }

    #[test]
    fn test_nested_array_bounds_outermost_first() {
        let ty = Type::Array {
            element: Box::new(Type::Array {
                element: Box::new(Type::builtin("int")),
                size: Some(Expression::int(3)),
            }),
            size: Some(Expression::int(2)),
        };
        assert_eq!(render(|out| write_declarator(out, &ty, Some("a"))), "int a[2][3]");
        assert_eq!(render(|out| write_type(out, &ty)), "int[2][3]");
    }

    #[test]
    fn test_parameter_pack() {
        let param = Parameter::new("args", Type::rvalue_ref(Type::unexposed("Args"))).into_pack();
        assert_eq!(render(|out| write_parameter(out, &param)), "Args&&... args");

        let unnamed = Parameter::unnamed(Type::unexposed("Ts")).into_pack();
        assert_eq!(render(|out| write_parameter(out, &unnamed)), "Ts...");
    }

    #[test]
    fn test_unexposed_lines_break_through_newline() {
        let ty = Type::unexposed("std::map<int,\n         int>");
        let holder = Entity::new(EntityKind::File, "holder.hpp");
        let mut generator = RecordingGenerator::new();
        {
            let mut out = Output::new(&mut generator, &holder, false);
            write_type(&mut out, &ty);
        }
        assert_eq!(
            generator.events()[1..],
            [
                crate::testing::Event::Token(crate::TokenKind::TokenSeq, "std::map<int,".to_string()),
                crate::testing::Event::Newline,
                crate::testing::Event::Token(crate::TokenKind::TokenSeq, "         int>".to_string()),
            ]
        );
    }

    #[test]
    fn test_template_parameter_list() {
        let params = vec![
            TemplateParameter::type_param("T"),
            TemplateParameter::NonType {
                name: "N".to_string(),
                ty: Type::builtin("int"),
                variadic: false,
                default: Some(Expression::int(3)),
            },
            TemplateParameter::Type {
                name: "Ts".to_string(),
                keyword: TypeParameterKeyword::Class,
                variadic: true,
                default: None,
            },
            TemplateParameter::Template {
                name: "C".to_string(),
                params: vec![TemplateParameter::type_param("")],
                variadic: false,
                default: None,
            },
        ];
        assert_eq!(
            render(|out| write_template_parameters(out, &params)),
            "template <typename T, int N = 3, class... Ts, template <typename> class C>"
        );
    }

    #[test]
    fn test_bool_literal_is_keyword() {
        let mut generator = RecordingGenerator::new();
        let holder = Entity::new(EntityKind::File, "holder.hpp");
        {
            let mut out = Output::new(&mut generator, &holder, false);
            write_expression(&mut out, &Expression::literal(LiteralKind::Bool, "true"));
        }
        assert_eq!(
            generator.events()[1],
            crate::testing::Event::Token(crate::TokenKind::Keyword, "true".to_string())
        );
    }
}
