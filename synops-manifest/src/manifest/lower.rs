//! Lowering of raw entity definitions into the entity tree.

use indexmap::IndexSet;
use synops_ir::{Entity, EntityId, EntityKind, TemplateHead};

use super::{
    EntityDef, FileDef,
    validate::{ParseContext, find_last_name_span},
};
use crate::Result;

const ANONYMOUS: &str = "<anonymous>";

/// Assigns ids and checks the structure of the tree while lowering it.
pub(crate) struct Lowering<'c, 'a> {
    ctx: &'c ParseContext<'a>,
    ids: IndexSet<EntityId>,
}

impl<'c, 'a> Lowering<'c, 'a> {
    pub fn new(ctx: &'c ParseContext<'a>) -> Self {
        Self {
            ctx,
            ids: IndexSet::new(),
        }
    }

    /// All ids declared so far, in declaration order.
    pub fn into_ids(self) -> IndexSet<EntityId> {
        self.ids
    }

    pub fn lower_file(&mut self, file: &'a FileDef) -> Result<Entity> {
        let ctx = self.ctx;
        let root = EntityId::new("");
        let children = self.lower_children(&file.entities, &root, &EntityKind::File, ctx)?;
        let mut entity = Entity::new(EntityKind::File, file.name.clone()).with_children(children);
        entity.comment = file.comment.clone();
        Ok(entity)
    }

    fn lower_children(
        &mut self,
        defs: &'a [EntityDef],
        parent_id: &EntityId,
        parent_kind: &EntityKind,
        ctx: &ParseContext<'a>,
    ) -> Result<Vec<Entity>> {
        defs.iter()
            .enumerate()
            .map(|(index, def)| self.lower_entity(def, index, parent_id, parent_kind, ctx))
            .collect()
    }

    fn lower_entity(
        &mut self,
        def: &'a EntityDef,
        index: usize,
        parent_id: &EntityId,
        parent_kind: &EntityKind,
        ctx: &ParseContext<'a>,
    ) -> Result<Entity> {
        let kind = def.kind.name();
        self.check_placement(def, parent_id, parent_kind, ctx)?;
        self.check_name(def, ctx)?;

        let id = match &def.id {
            Some(id) => id.clone(),
            None if def.name.is_empty() => parent_id.child(&format!("@{index}")),
            None => parent_id.child(&def.name),
        };
        let needle = def.id.as_ref().map_or(def.name.as_str(), EntityId::as_str);
        if !self.ids.insert(id.clone()) {
            return Err(ctx.source_context().duplicate_id_error(
                id.as_str(),
                ctx.find_span(needle),
                find_last_name_span(ctx.src(), needle),
            ));
        }

        if !def.children.is_empty() && !def.kind.accepts_children() {
            return Err(ctx.source_context().unexpected_children_error(
                id.as_str(),
                kind,
                ctx.find_span(needle),
            ));
        }

        let template = match (&def.template, &def.specialization) {
            (Some(_), Some(_)) => {
                return Err(ctx.source_context().validation_error(
                    format!("'{id}' cannot be both a template and a specialization"),
                    ctx.find_span(needle),
                ));
            }
            (Some(params), None) => Some(TemplateHead::Primary(params.clone())),
            (None, Some(specialization)) => {
                Some(TemplateHead::Specialization(specialization.clone()))
            }
            (None, None) => None,
        };

        let segment = if def.name.is_empty() {
            ANONYMOUS
        } else {
            def.name.as_str()
        };
        let children = self.lower_children(&def.children, &id, &def.kind, &ctx.push(segment))?;

        Ok(Entity {
            id,
            name: def.name.clone(),
            kind: def.kind.clone(),
            template,
            comment: def.comment.clone(),
            children,
        })
    }

    fn check_placement(
        &self,
        def: &EntityDef,
        parent_id: &EntityId,
        parent_kind: &EntityKind,
        ctx: &ParseContext<'a>,
    ) -> Result<()> {
        let expected = match (&def.kind, parent_kind) {
            (EntityKind::File, _) => Some("the [file] table only"),
            (EntityKind::AccessSpecifier { .. }, EntityKind::Class { .. }) => None,
            (EntityKind::AccessSpecifier { .. }, _) => Some("a class"),
            (EntityKind::Enumerator { .. }, EntityKind::Enum { .. }) => None,
            (EntityKind::Enumerator { .. }, _) => Some("an enum"),
            (_, EntityKind::Enum { .. }) => Some("a file, namespace or class"),
            _ => None,
        };
        match expected {
            Some(expected) => {
                let parent = if parent_id.as_str().is_empty() {
                    ctx.filename().to_string()
                } else {
                    parent_id.to_string()
                };
                Err(ctx.source_context().misplaced_entity_error(
                    def.kind.name(),
                    parent,
                    expected,
                    ctx.find_span(&def.name),
                ))
            }
            None => Ok(()),
        }
    }

    fn check_name(&self, def: &EntityDef, ctx: &ParseContext<'a>) -> Result<()> {
        let kind = def.kind.name();
        if def.kind.is_anonymous() {
            return Ok(());
        }
        if def.name.is_empty() {
            if requires_name(&def.kind) {
                return Err(ctx.source_context().validation_error(
                    format!("{} requires a name", ctx.context_for(kind)),
                    None,
                ));
            }
            return Ok(());
        }
        ctx.validate_name(&def.name, kind)
    }
}

/// Namespaces, classes and enums may be anonymous.
fn requires_name(kind: &EntityKind) -> bool {
    !matches!(
        kind,
        EntityKind::Namespace { .. } | EntityKind::Class { .. } | EntityKind::Enum { .. }
    )
}
