//! Manifest types and parsing for synops.toml files.

mod file;
mod lower;
mod parse;
mod references;
mod validate;

use std::fmt;

pub use file::SynopsToml;
pub use parse::parse_manifest;
use serde::Deserialize;
use synops_ir::{Entity, EntityId, EntityKind, Specialization, TemplateParameter};
pub use validate::ParseContext;

use crate::RenderOptions;

/// A loaded and validated manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Options from the `[render]` table.
    pub render: RenderOptions,
    /// The file entity, with all declared entities as descendants.
    pub file: Entity,
    /// Problems that do not prevent rendering.
    pub warnings: Vec<Warning>,
}

impl Manifest {
    /// Look up an entity by id.
    pub fn find(&self, id: &EntityId) -> Option<&Entity> {
        self.file.walk().find(|entity| entity.id == *id)
    }
}

/// A non-fatal problem found while loading a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A reference names an id that is not declared in the manifest.
    UnresolvedReference { from: EntityId, target: EntityId },
    /// A render option names an id that is not declared in the manifest.
    UnknownId { option: &'static str, id: EntityId },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedReference { from, target } => {
                write!(f, "'{from}' references unknown entity '{target}'")
            }
            Self::UnknownId { option, id } => {
                write!(f, "render.{option} names unknown entity '{id}'")
            }
        }
    }
}

/// Raw manifest as written in TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawManifest {
    #[serde(default)]
    pub render: RenderOptions,
    pub file: FileDef,
}

/// The `[file]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileDef {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub entities: Vec<EntityDef>,
}

/// An entity as written in TOML, before ids are assigned.
#[derive(Debug, Deserialize)]
pub(crate) struct EntityDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(flatten)]
    pub kind: EntityKind,
    #[serde(default)]
    pub comment: Option<String>,
    /// Parameters of a primary template.
    #[serde(default)]
    pub template: Option<Vec<TemplateParameter>>,
    /// Primary template and arguments of a full specialization.
    #[serde(default)]
    pub specialization: Option<Specialization>,
    #[serde(default)]
    pub children: Vec<EntityDef>,
}
