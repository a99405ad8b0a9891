//! Entities: the nodes of the declaration tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EntityRef, Expression, Function, TemplateArgument, TemplateParameter, Type};

/// Stable identity of an entity, usually its qualified name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last `::`-separated segment.
    pub fn unqualified(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }

    /// The id of a child named `name` scoped inside this entity.
    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}::{}", self.0, name))
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(flatten)]
    pub kind: EntityKind,
    /// Template head written before the declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateHead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Ordered children; only meaningful for containers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entity>,
}

impl Entity {
    /// Create an entity whose id is its name.
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: EntityId::new(name.clone()),
            name,
            kind,
            template: None,
            comment: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<EntityId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_child(mut self, child: Entity) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Entity>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_template(mut self, template: TemplateHead) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns true if the entity owns children rendered inside it.
    ///
    /// Files, namespaces, class and enum definitions, and functions with a
    /// body are containers. Everything else is a leaf.
    pub fn is_container(&self) -> bool {
        match &self.kind {
            EntityKind::File | EntityKind::Namespace { .. } => true,
            EntityKind::Class { forward, .. } | EntityKind::Enum { forward, .. } => !forward,
            EntityKind::Function(function) => function.has_definition(),
            _ => false,
        }
    }

    /// Returns true if the rendered entity is terminated by its own line break.
    ///
    /// A file only concatenates its children.
    pub fn occupies_line(&self) -> bool {
        !matches!(self.kind, EntityKind::File)
    }

    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    /// Depth-first iterator over this entity and all descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Entity> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

/// What an entity declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    /// A source file (translation unit or header).
    File,
    /// `#include <target>` or `#include "target"`
    #[serde(rename = "include")]
    IncludeDirective {
        target: String,
        #[serde(default)]
        system: bool,
    },
    /// `#define name(params) replacement`
    #[serde(rename = "macro")]
    MacroDefinition {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parameters: Option<Vec<String>>,
        #[serde(default)]
        replacement: String,
    },
    Namespace {
        #[serde(default)]
        inline: bool,
    },
    /// `namespace name = target;`
    NamespaceAlias { target: EntityRef },
    /// `using namespace target;`
    UsingDirective { target: EntityRef },
    /// `using target;`
    UsingDeclaration { target: EntityRef },
    /// `using name = type;`
    #[serde(rename = "alias")]
    TypeAlias {
        #[serde(rename = "type")]
        underlying: Type,
    },
    Enum {
        #[serde(default)]
        scoped: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        underlying: Option<Type>,
        #[serde(default)]
        forward: bool,
    },
    Enumerator {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Expression>,
    },
    Class {
        #[serde(default)]
        keyword: ClassKeyword,
        #[serde(rename = "final", default)]
        is_final: bool,
        #[serde(default)]
        bases: Vec<BaseClass>,
        #[serde(default)]
        forward: bool,
    },
    /// `public:`, `protected:` or `private:`
    #[serde(rename = "access")]
    AccessSpecifier { access: Access },
    Variable {
        #[serde(rename = "type")]
        ty: Type,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Expression>,
        #[serde(default)]
        storage: StorageClass,
        #[serde(default)]
        constexpr: bool,
    },
    /// A non-static data member.
    #[serde(rename = "field")]
    MemberVariable {
        #[serde(rename = "type")]
        ty: Type,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Expression>,
        #[serde(default)]
        mutable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bits: Option<u32>,
    },
    Function(Function),
}

impl EntityKind {
    /// Short kind name, as spelled in manifests.
    pub fn name(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::IncludeDirective { .. } => "include",
            Self::MacroDefinition { .. } => "macro",
            Self::Namespace { .. } => "namespace",
            Self::NamespaceAlias { .. } => "namespace_alias",
            Self::UsingDirective { .. } => "using_directive",
            Self::UsingDeclaration { .. } => "using_declaration",
            Self::TypeAlias { .. } => "alias",
            Self::Enum { .. } => "enum",
            Self::Enumerator { .. } => "enumerator",
            Self::Class { .. } => "class",
            Self::AccessSpecifier { .. } => "access",
            Self::Variable { .. } => "variable",
            Self::MemberVariable { .. } => "field",
            Self::Function(_) => "function",
        }
    }

    /// Returns true for kinds that never carry a name of their own.
    pub fn is_anonymous(&self) -> bool {
        matches!(
            self,
            Self::File
                | Self::IncludeDirective { .. }
                | Self::AccessSpecifier { .. }
                | Self::UsingDirective { .. }
                | Self::UsingDeclaration { .. }
        )
    }

    /// Returns true for kinds whose children are rendered.
    pub fn accepts_children(&self) -> bool {
        match self {
            Self::File | Self::Namespace { .. } => true,
            Self::Class { forward, .. } | Self::Enum { forward, .. } => !forward,
            _ => false,
        }
    }
}

/// `class`, `struct` or `union`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKeyword {
    #[default]
    Class,
    Struct,
    Union,
}

impl ClassKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

/// Member access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    Protected,
    Private,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// A base class in a class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseClass {
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
}

/// Storage class specifier of a variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    #[default]
    None,
    Static,
    Extern,
    ThreadLocal,
}

impl StorageClass {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Static => Some("static"),
            Self::Extern => Some("extern"),
            Self::ThreadLocal => Some("thread_local"),
        }
    }
}

/// The template head of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateHead {
    /// `template <params>`
    Primary(Vec<TemplateParameter>),
    /// `template <>` with the specialized name written as `name<args>`.
    Specialization(Specialization),
}

/// The primary template and arguments of a full specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub template: EntityRef,
    #[serde(default)]
    pub args: Vec<TemplateArgument>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionBody;

    fn class(name: &str) -> Entity {
        Entity::new(
            EntityKind::Class {
                keyword: ClassKeyword::Class,
                is_final: false,
                bases: vec![],
                forward: false,
            },
            name,
        )
    }

    #[test]
    fn test_entity_id_segments() {
        let id = EntityId::new("geo::shapes");
        assert_eq!(id.unqualified(), "shapes");
        assert_eq!(id.child("circle").as_str(), "geo::shapes::circle");
        assert_eq!(EntityId::new("").child("top").as_str(), "top");
    }

    #[test]
    fn test_container_classification() {
        assert!(Entity::new(EntityKind::File, "a.hpp").is_container());
        assert!(Entity::new(EntityKind::Namespace { inline: false }, "ns").is_container());
        assert!(class("c").is_container());

        let forward = Entity::new(
            EntityKind::Class {
                keyword: ClassKeyword::Struct,
                is_final: false,
                bases: vec![],
                forward: true,
            },
            "fwd",
        );
        assert!(!forward.is_container());

        let decl = Entity::new(EntityKind::Function(Function::default()), "f");
        assert!(!decl.is_container());
        let def = Entity::new(
            EntityKind::Function(Function::default().with_body(FunctionBody::Definition(vec![]))),
            "g",
        );
        assert!(def.is_container());

        let var = Entity::new(
            EntityKind::Variable {
                ty: Type::builtin("int"),
                default: None,
                storage: StorageClass::None,
                constexpr: false,
            },
            "v",
        );
        assert!(!var.is_container());
    }

    #[test]
    fn test_walk_is_depth_first_in_order() {
        let tree = Entity::new(EntityKind::Namespace { inline: false }, "root")
            .with_child(class("a").with_child(class("a1")))
            .with_child(class("b"));
        let names: Vec<&str> = tree.walk().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn test_kind_deserialize_tagged() {
        let e: Entity = toml::from_str(
            r#"
            id = "ns::point"
            name = "point"
            kind = "class"
            keyword = "struct"
            "#,
        )
        .unwrap();
        assert_eq!(e.kind.name(), "class");
        assert!(matches!(
            e.kind,
            EntityKind::Class {
                keyword: ClassKeyword::Struct,
                ..
            }
        ));
    }

    #[test]
    fn test_kind_names_match_serde_tags() {
        let e = Entity::new(
            EntityKind::AccessSpecifier {
                access: Access::Public,
            },
            "",
        );
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["kind"], e.kind.name());
    }
}
