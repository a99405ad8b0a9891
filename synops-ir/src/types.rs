//! Types, expressions and template arguments.

use serde::{Deserialize, Serialize};

use crate::{
    EntityRef,
    serde_helpers::{ExpressionRepr, TypeRepr},
};

/// A type as it appears in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TypeRepr", into = "TypeRepr")]
pub enum Type {
    /// A builtin type spelled with keywords, e.g. `unsigned long`.
    Builtin(String),
    /// A user-defined type, referenced by id.
    User(EntityRef),
    /// A type whose structure is not exposed, kept as its spelling.
    Unexposed(String),
    Const(Box<Type>),
    Volatile(Box<Type>),
    Pointer(Box<Type>),
    LvalueRef(Box<Type>),
    RvalueRef(Box<Type>),
    Array {
        element: Box<Type>,
        size: Option<Expression>,
    },
    /// A template instantiation, e.g. `std::vector<int>`.
    Instantiation {
        template: EntityRef,
        args: Vec<TemplateArgument>,
    },
}

impl Type {
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Builtin(name.into())
    }

    pub fn user(reference: EntityRef) -> Self {
        Self::User(reference)
    }

    pub fn unexposed(spelling: impl Into<String>) -> Self {
        Self::Unexposed(spelling.into())
    }

    pub fn const_(inner: Type) -> Self {
        Self::Const(Box::new(inner))
    }

    pub fn pointer(inner: Type) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn lvalue_ref(inner: Type) -> Self {
        Self::LvalueRef(Box::new(inner))
    }

    pub fn rvalue_ref(inner: Type) -> Self {
        Self::RvalueRef(Box::new(inner))
    }

    /// Returns true for pointer types, whose cv-qualifiers are written after them.
    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }
}

/// The lexical category of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Int,
    Float,
    String,
    Char,
    Bool,
}

/// An expression, e.g. a default value or an array size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExpressionRepr", into = "ExpressionRepr")]
pub enum Expression {
    Literal { kind: LiteralKind, text: String },
    /// An expression whose structure is not exposed, kept as its spelling.
    Unexposed(String),
}

impl Expression {
    pub fn literal(kind: LiteralKind, text: impl Into<String>) -> Self {
        Self::Literal {
            kind,
            text: text.into(),
        }
    }

    pub fn int(value: i64) -> Self {
        Self::literal(LiteralKind::Int, value.to_string())
    }

    pub fn unexposed(spelling: impl Into<String>) -> Self {
        Self::Unexposed(spelling.into())
    }
}

/// An argument of a template instantiation or specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateArgument {
    Type(Type),
    #[serde(rename = "expr")]
    Expression(Expression),
    Template(EntityRef),
}

/// The keyword introducing a template type parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeParameterKeyword {
    #[default]
    Typename,
    Class,
}

impl TypeParameterKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typename => "typename",
            Self::Class => "class",
        }
    }
}

/// A parameter of a template declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateParameter {
    /// `typename T = default`
    Type {
        name: String,
        #[serde(default)]
        keyword: TypeParameterKeyword,
        #[serde(default)]
        variadic: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Type>,
    },
    /// `int N = default`
    NonType {
        name: String,
        #[serde(rename = "type")]
        ty: Type,
        #[serde(default)]
        variadic: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Expression>,
    },
    /// `template <typename> class C = default`
    Template {
        name: String,
        #[serde(default)]
        params: Vec<TemplateParameter>,
        #[serde(default)]
        variadic: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<EntityRef>,
    },
}

impl TemplateParameter {
    /// A plain `typename name` parameter.
    pub fn type_param(name: impl Into<String>) -> Self {
        Self::Type {
            name: name.into(),
            keyword: TypeParameterKeyword::Typename,
            variadic: false,
            default: None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Type { name, .. } | Self::NonType { name, .. } | Self::Template { name, .. } => {
                name
            }
        }
    }
}
