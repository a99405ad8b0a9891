//! Serde representations for IR types with a compact manifest syntax.
//!
//! Types, expressions and function bodies accept short forms (a bare string
//! is an unexposed spelling, a bare integer is an integer literal, ...). The
//! IR types convert from and into these representations.

use serde::{Deserialize, Serialize};

use crate::{EntityId, EntityRef, Expression, FunctionBody, LiteralKind, TemplateArgument, Type};

/// Either a single value or a list of values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(v) => v,
        }
    }
}

/// `{ ref = "ns::name" }` or `{ ref = ["a", "b"], name = "display" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawEntityRef {
    #[serde(rename = "ref")]
    target: OneOrMany<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl From<RawEntityRef> for EntityRef {
    fn from(raw: RawEntityRef) -> Self {
        let targets: Vec<EntityId> = raw.target.into();
        match raw.name {
            Some(name) => EntityRef::overloaded(targets, name),
            None => {
                let name = targets
                    .first()
                    .map(|t| t.unqualified().to_string())
                    .unwrap_or_default();
                EntityRef::overloaded(targets, name)
            }
        }
    }
}

impl From<EntityRef> for RawEntityRef {
    fn from(r: EntityRef) -> Self {
        let (mut targets, name) = r.into_parts();
        let target = if targets.len() == 1 {
            OneOrMany::One(targets.remove(0))
        } else {
            OneOrMany::Many(targets)
        };
        Self {
            target,
            name: Some(name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum TypeRepr {
    Spelling(String),
    Reference(EntityRef),
    Node(TypeNode),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum TypeNode {
    Builtin(String),
    Const(Type),
    Volatile(Type),
    Pointer(Type),
    LvalueRef(Type),
    RvalueRef(Type),
    Array {
        of: Type,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Expression>,
    },
    Instantiation {
        template: EntityRef,
        #[serde(default)]
        args: Vec<TemplateArgument>,
    },
}

impl From<TypeRepr> for Type {
    fn from(repr: TypeRepr) -> Self {
        match repr {
            TypeRepr::Spelling(s) => Type::Unexposed(s),
            TypeRepr::Reference(r) => Type::User(r),
            TypeRepr::Node(node) => match node {
                TypeNode::Builtin(name) => Type::Builtin(name),
                TypeNode::Const(inner) => Type::Const(Box::new(inner)),
                TypeNode::Volatile(inner) => Type::Volatile(Box::new(inner)),
                TypeNode::Pointer(inner) => Type::Pointer(Box::new(inner)),
                TypeNode::LvalueRef(inner) => Type::LvalueRef(Box::new(inner)),
                TypeNode::RvalueRef(inner) => Type::RvalueRef(Box::new(inner)),
                TypeNode::Array { of, size } => Type::Array {
                    element: Box::new(of),
                    size,
                },
                TypeNode::Instantiation { template, args } => {
                    Type::Instantiation { template, args }
                }
            },
        }
    }
}

impl From<Type> for TypeRepr {
    fn from(ty: Type) -> Self {
        match ty {
            Type::Unexposed(s) => TypeRepr::Spelling(s),
            Type::User(r) => TypeRepr::Reference(r),
            Type::Builtin(name) => TypeRepr::Node(TypeNode::Builtin(name)),
            Type::Const(inner) => TypeRepr::Node(TypeNode::Const(*inner)),
            Type::Volatile(inner) => TypeRepr::Node(TypeNode::Volatile(*inner)),
            Type::Pointer(inner) => TypeRepr::Node(TypeNode::Pointer(*inner)),
            Type::LvalueRef(inner) => TypeRepr::Node(TypeNode::LvalueRef(*inner)),
            Type::RvalueRef(inner) => TypeRepr::Node(TypeNode::RvalueRef(*inner)),
            Type::Array { element, size } => TypeRepr::Node(TypeNode::Array { of: *element, size }),
            Type::Instantiation { template, args } => {
                TypeRepr::Node(TypeNode::Instantiation { template, args })
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ExpressionRepr {
    Bool(bool),
    Int(i64),
    Float(f64),
    Spelling(String),
    Node(ExpressionNode),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ExpressionNode {
    Int(String),
    Float(String),
    String(String),
    Char(String),
}

impl From<ExpressionRepr> for Expression {
    fn from(repr: ExpressionRepr) -> Self {
        match repr {
            ExpressionRepr::Bool(b) => Expression::literal(LiteralKind::Bool, b.to_string()),
            ExpressionRepr::Int(i) => Expression::literal(LiteralKind::Int, i.to_string()),
            ExpressionRepr::Float(f) => Expression::literal(LiteralKind::Float, format!("{:?}", f)),
            ExpressionRepr::Spelling(s) => Expression::Unexposed(s),
            ExpressionRepr::Node(node) => match node {
                ExpressionNode::Int(s) => Expression::literal(LiteralKind::Int, s),
                ExpressionNode::Float(s) => Expression::literal(LiteralKind::Float, s),
                ExpressionNode::String(s) => Expression::literal(LiteralKind::String, s),
                ExpressionNode::Char(s) => Expression::literal(LiteralKind::Char, s),
            },
        }
    }
}

impl From<Expression> for ExpressionRepr {
    fn from(expr: Expression) -> Self {
        match expr {
            Expression::Unexposed(s) => ExpressionRepr::Spelling(s),
            Expression::Literal { kind, text } => match kind {
                LiteralKind::Bool => ExpressionRepr::Bool(text == "true"),
                LiteralKind::Int => ExpressionRepr::Node(ExpressionNode::Int(text)),
                LiteralKind::Float => ExpressionRepr::Node(ExpressionNode::Float(text)),
                LiteralKind::String => ExpressionRepr::Node(ExpressionNode::String(text)),
                LiteralKind::Char => ExpressionRepr::Node(ExpressionNode::Char(text)),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum BodyRepr {
    Keyword(BodyKeyword),
    Statements(Vec<String>),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum BodyKeyword {
    Declaration,
    Default,
    Delete,
    Pure,
}

impl From<BodyRepr> for FunctionBody {
    fn from(repr: BodyRepr) -> Self {
        match repr {
            BodyRepr::Keyword(BodyKeyword::Declaration) => FunctionBody::Declaration,
            BodyRepr::Keyword(BodyKeyword::Default) => FunctionBody::Defaulted,
            BodyRepr::Keyword(BodyKeyword::Delete) => FunctionBody::Deleted,
            BodyRepr::Keyword(BodyKeyword::Pure) => FunctionBody::PureVirtual,
            BodyRepr::Statements(statements) => FunctionBody::Definition(statements),
        }
    }
}

impl From<FunctionBody> for BodyRepr {
    fn from(body: FunctionBody) -> Self {
        match body {
            FunctionBody::Declaration => BodyRepr::Keyword(BodyKeyword::Declaration),
            FunctionBody::Defaulted => BodyRepr::Keyword(BodyKeyword::Default),
            FunctionBody::Deleted => BodyRepr::Keyword(BodyKeyword::Delete),
            FunctionBody::PureVirtual => BodyRepr::Keyword(BodyKeyword::Pure),
            FunctionBody::Definition(statements) => BodyRepr::Statements(statements),
        }
    }
}
