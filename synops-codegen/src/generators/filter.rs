use std::collections::HashSet;

use synops_ir::{Entity, EntityId};

use crate::{CodeGenerator, Synopsis};

/// Upper bounds on what is generated, by entity id or kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynopsisFilter {
    exclude: HashSet<EntityId>,
    declarations: HashSet<EntityId>,
    exclude_kinds: HashSet<String>,
}

impl SynopsisFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude the entity with this id, including its children.
    pub fn exclude(mut self, id: impl Into<EntityId>) -> Self {
        self.exclude.insert(id.into());
        self
    }

    /// Only generate the declaration of the entity with this id.
    pub fn declaration_only(mut self, id: impl Into<EntityId>) -> Self {
        self.declarations.insert(id.into());
        self
    }

    /// Exclude every entity of a kind, named as in manifests (e.g. `macro`).
    pub fn exclude_kind(mut self, kind: impl Into<String>) -> Self {
        self.exclude_kinds.insert(kind.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.declarations.is_empty() && self.exclude_kinds.is_empty()
    }

    /// The most that may be generated for `entity`.
    pub fn limit(&self, entity: &Entity) -> Synopsis {
        if self.exclude.contains(&entity.id) || self.exclude_kinds.contains(entity.kind.name()) {
            Synopsis::Exclude
        } else if self.declarations.contains(&entity.id) {
            Synopsis::Declaration
        } else {
            Synopsis::Definition
        }
    }
}

/// Restricts the decisions of another generator with a [`SynopsisFilter`].
///
/// Entities the filter excludes are never shown to the inner generator. All
/// token and indentation hooks are forwarded unchanged.
#[derive(Debug, Clone)]
pub struct FilterGenerator<G> {
    inner: G,
    filter: SynopsisFilter,
}

impl<G: CodeGenerator> FilterGenerator<G> {
    pub fn new(inner: G, filter: SynopsisFilter) -> Self {
        Self { inner, filter }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: CodeGenerator> CodeGenerator for FilterGenerator<G> {
    fn on_container_begin(&mut self, entity: &Entity) -> Synopsis {
        match self.filter.limit(entity) {
            Synopsis::Exclude => Synopsis::Exclude,
            limit => self.inner.on_container_begin(entity).min(limit),
        }
    }

    fn on_container_end(&mut self, entity: &Entity) {
        self.inner.on_container_end(entity);
    }

    fn on_leaf(&mut self, entity: &Entity) -> Synopsis {
        match self.filter.limit(entity) {
            Synopsis::Exclude => Synopsis::Exclude,
            limit => self.inner.on_leaf(entity).min(limit),
        }
    }

    fn indent(&mut self) {
        self.inner.indent();
    }

    fn unindent(&mut self) {
        self.inner.unindent();
    }

    fn write_token_seq(&mut self, tokens: &str) {
        self.inner.write_token_seq(tokens);
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.inner.write_keyword(keyword);
    }

    fn write_identifier(&mut self, identifier: &str) {
        self.inner.write_identifier(identifier);
    }

    fn write_reference(&mut self, targets: &[EntityId], name: &str) {
        self.inner.write_reference(targets, name);
    }

    fn write_punctuation(&mut self, punctuation: &str) {
        self.inner.write_punctuation(punctuation);
    }

    fn write_str_literal(&mut self, literal: &str) {
        self.inner.write_str_literal(literal);
    }

    fn write_int_literal(&mut self, literal: &str) {
        self.inner.write_int_literal(literal);
    }

    fn write_float_literal(&mut self, literal: &str) {
        self.inner.write_float_literal(literal);
    }

    fn write_preprocessor(&mut self, token: &str) {
        self.inner.write_preprocessor(token);
    }

    fn write_newline(&mut self) {
        self.inner.write_newline();
    }

    fn write_whitespace(&mut self) {
        self.inner.write_whitespace();
    }
}

#[cfg(test)]
mod tests {
    use synops_ir::{EntityKind, Function};

    use super::*;
    use crate::testing::{Event, RecordingGenerator};

    fn function(name: &str) -> Entity {
        Entity::new(EntityKind::Function(Function::default()), name)
    }

    #[test]
    fn test_limit() {
        let filter = SynopsisFilter::new()
            .exclude("a")
            .declaration_only("b")
            .exclude_kind("macro");
        assert_eq!(filter.limit(&function("a")), Synopsis::Exclude);
        assert_eq!(filter.limit(&function("b")), Synopsis::Declaration);
        assert_eq!(filter.limit(&function("c")), Synopsis::Definition);
        let mac = Entity::new(
            EntityKind::MacroDefinition {
                parameters: None,
                replacement: String::new(),
            },
            "M",
        );
        assert_eq!(filter.limit(&mac), Synopsis::Exclude);
        assert!(!filter.is_empty());
        assert!(SynopsisFilter::new().is_empty());
    }

    #[test]
    fn test_excluded_entity_never_reaches_inner() {
        let mut generator =
            FilterGenerator::new(RecordingGenerator::new(), SynopsisFilter::new().exclude("f"));
        assert_eq!(generator.on_leaf(&function("f")), Synopsis::Exclude);
        assert!(generator.inner().events().is_empty());
    }

    #[test]
    fn test_inner_decision_is_narrowed() {
        let mut generator = FilterGenerator::new(
            RecordingGenerator::new().exclude("g"),
            SynopsisFilter::new().declaration_only("f").declaration_only("g"),
        );
        assert_eq!(generator.on_leaf(&function("f")), Synopsis::Declaration);
        assert_eq!(generator.on_leaf(&function("g")), Synopsis::Exclude);
        assert_eq!(
            generator.into_inner().events(),
            &[Event::Leaf("f".into()), Event::Leaf("g".into())]
        );
    }
}
