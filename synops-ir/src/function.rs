//! Function declarations.

use serde::{Deserialize, Serialize};

use crate::{Expression, Type, serde_helpers::BodyRepr};

/// A function, member function, constructor or destructor.
///
/// Constructors and destructors have no return type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(rename = "returns", default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Type>,
    #[serde(default)]
    pub body: FunctionBody,
    /// Trailing C-style `...` parameter.
    #[serde(default)]
    pub variadic: bool,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(default)]
    pub constexpr: bool,
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub explicit: bool,
    #[serde(rename = "const", default)]
    pub is_const: bool,
    #[serde(default)]
    pub noexcept: bool,
    #[serde(rename = "override", default)]
    pub is_override: bool,
    #[serde(rename = "final", default)]
    pub is_final: bool,
}

impl Function {
    pub fn new(return_type: Option<Type>, params: Vec<Parameter>) -> Self {
        Self {
            params,
            return_type,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: FunctionBody) -> Self {
        self.body = body;
        self
    }

    /// Returns true if the function carries a body that can be rendered.
    pub fn has_definition(&self) -> bool {
        matches!(self.body, FunctionBody::Definition(_))
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Expression>,
    /// A function parameter pack, `Args&&... args`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pack: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            default: None,
            pack: false,
        }
    }

    pub fn unnamed(ty: Type) -> Self {
        Self {
            name: None,
            ty,
            default: None,
            pack: false,
        }
    }

    /// Turn this parameter into a parameter pack.
    pub fn into_pack(mut self) -> Self {
        self.pack = true;
        self
    }
}

/// What follows a function's signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BodyRepr", into = "BodyRepr")]
pub enum FunctionBody {
    /// `;`
    #[default]
    Declaration,
    /// `= default;`
    Defaulted,
    /// `= delete;`
    Deleted,
    /// `= 0;`
    PureVirtual,
    /// `{ ... }` with the statements kept as unexposed lines.
    Definition(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_forms() {
        #[derive(Deserialize)]
        struct B {
            a: FunctionBody,
            b: FunctionBody,
            c: FunctionBody,
            d: FunctionBody,
        }
        let b: B = toml::from_str(
            r#"
            a = "default"
            b = "delete"
            c = "pure"
            d = ["return 0;"]
            "#,
        )
        .unwrap();
        assert_eq!(b.a, FunctionBody::Defaulted);
        assert_eq!(b.b, FunctionBody::Deleted);
        assert_eq!(b.c, FunctionBody::PureVirtual);
        assert_eq!(b.d, FunctionBody::Definition(vec!["return 0;".to_string()]));
    }

    #[test]
    fn test_has_definition() {
        let f = Function::new(None, vec![]);
        assert!(!f.has_definition());
        assert!(f.with_body(FunctionBody::Definition(vec![])).has_definition());
    }

    #[test]
    fn test_function_fields() {
        let f: Function = toml::from_str(
            r#"
            returns = { builtin = "double" }
            const = true
            noexcept = true
            params = [{ name = "scale", type = { builtin = "double" }, default = 1.0 }]
            "#,
        )
        .unwrap();
        assert!(f.is_const);
        assert!(f.noexcept);
        assert_eq!(f.return_type, Some(Type::builtin("double")));
        assert_eq!(f.params[0].name.as_deref(), Some("scale"));
        assert_eq!(f.body, FunctionBody::Declaration);
        assert!(!f.params[0].pack);
    }

    #[test]
    fn test_parameter_pack() {
        let f: Function = toml::from_str(
            r#"params = [{ name = "args", type = { rvalue_ref = "Args" }, pack = true }]"#,
        )
        .unwrap();
        assert_eq!(
            f.params[0],
            Parameter::new("args", Type::rvalue_ref(Type::unexposed("Args"))).into_pack()
        );
    }
}
