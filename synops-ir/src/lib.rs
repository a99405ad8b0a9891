//! Declaration tree types for the synops code generator.
//!
//! This crate provides the entity tree that code generation walks. The tree
//! is produced by a front-end (or loaded from a manifest) and is read-only
//! for the duration of a generation pass.
//!
//! # Architecture
//!
//! ```text
//! synops.toml → synops-manifest (loading) → synops-ir (entity tree) → synops-codegen
//! ```
//!
//! The IR types are designed to be:
//! - Front-end agnostic (no parser or compiler specifics)
//! - Purely structural (symbols are referenced by id, never resolved here)
//! - Serializable, so trees can be dumped and inspected

mod entity;
mod function;
mod reference;
mod serde_helpers;
mod types;

pub use entity::{
    Access, BaseClass, ClassKeyword, Entity, EntityId, EntityKind, Specialization, StorageClass,
    TemplateHead,
};
pub use function::{Function, FunctionBody, Parameter};
pub use reference::EntityRef;
pub use types::{
    Expression, LiteralKind, TemplateArgument, TemplateParameter, Type, TypeParameterKeyword,
};
