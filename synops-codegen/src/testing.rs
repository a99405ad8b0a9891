//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::collections::HashSet;

use synops_ir::{Entity, EntityId};

use crate::{CodeGenerator, Synopsis, TokenKind};

/// A single hook invocation observed by [`RecordingGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ContainerBegin(EntityId),
    ContainerEnd(EntityId),
    Leaf(EntityId),
    Indent,
    Unindent,
    Token(TokenKind, String),
    Reference(Vec<EntityId>, String),
    Newline,
    Whitespace,
}

/// Generator that records every hook call in order.
///
/// Entities can be excluded or limited to their declaration by id, and the
/// generator can be told to panic when a given entity is reached.
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    events: Vec<Event>,
    exclude: HashSet<EntityId>,
    declarations: HashSet<EntityId>,
    panic_on: Option<EntityId>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, id: impl Into<EntityId>) -> Self {
        self.exclude.insert(id.into());
        self
    }

    pub fn declaration_only(mut self, id: impl Into<EntityId>) -> Self {
        self.declarations.insert(id.into());
        self
    }

    /// Panic when the decision for `id` is requested.
    pub fn panic_on(mut self, id: impl Into<EntityId>) -> Self {
        self.panic_on = Some(id.into());
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Concatenated text of everything written, as a plain text generator
    /// without indentation would produce it.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for event in &self.events {
            match event {
                Event::Token(_, s) | Event::Reference(_, s) => text.push_str(s),
                Event::Newline => text.push('\n'),
                Event::Whitespace => text.push(' '),
                _ => {}
            }
        }
        text
    }

    /// Ids of all entities a decision was requested for, in order.
    pub fn visited(&self) -> Vec<&EntityId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::ContainerBegin(id) | Event::Leaf(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn decide(&self, entity: &Entity) -> Synopsis {
        if self.panic_on.as_ref() == Some(&entity.id) {
            panic!("refusing to generate `{}`", entity.id);
        }
        if self.exclude.contains(&entity.id) {
            Synopsis::Exclude
        } else if self.declarations.contains(&entity.id) {
            Synopsis::Declaration
        } else {
            Synopsis::Definition
        }
    }

    fn token(&mut self, kind: TokenKind, text: &str) {
        self.events.push(Event::Token(kind, text.to_string()));
    }
}

impl CodeGenerator for RecordingGenerator {
    fn on_container_begin(&mut self, entity: &Entity) -> Synopsis {
        self.events.push(Event::ContainerBegin(entity.id.clone()));
        self.decide(entity)
    }

    fn on_container_end(&mut self, entity: &Entity) {
        self.events.push(Event::ContainerEnd(entity.id.clone()));
    }

    fn on_leaf(&mut self, entity: &Entity) -> Synopsis {
        self.events.push(Event::Leaf(entity.id.clone()));
        self.decide(entity)
    }

    fn indent(&mut self) {
        self.events.push(Event::Indent);
    }

    fn unindent(&mut self) {
        self.events.push(Event::Unindent);
    }

    fn write_token_seq(&mut self, tokens: &str) {
        self.token(TokenKind::TokenSeq, tokens);
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.token(TokenKind::Keyword, keyword);
    }

    fn write_identifier(&mut self, identifier: &str) {
        self.token(TokenKind::Identifier, identifier);
    }

    fn write_reference(&mut self, targets: &[EntityId], name: &str) {
        self.events
            .push(Event::Reference(targets.to_vec(), name.to_string()));
    }

    fn write_punctuation(&mut self, punctuation: &str) {
        self.token(TokenKind::Punctuation, punctuation);
    }

    fn write_str_literal(&mut self, literal: &str) {
        self.token(TokenKind::StrLiteral, literal);
    }

    fn write_int_literal(&mut self, literal: &str) {
        self.token(TokenKind::IntLiteral, literal);
    }

    fn write_float_literal(&mut self, literal: &str) {
        self.token(TokenKind::FloatLiteral, literal);
    }

    fn write_preprocessor(&mut self, token: &str) {
        self.token(TokenKind::Preprocessor, token);
    }

    fn write_newline(&mut self) {
        self.events.push(Event::Newline);
    }

    fn write_whitespace(&mut self) {
        self.events.push(Event::Whitespace);
    }
}

/// Generator implementing only the required hook.
///
/// Everything it receives arrives through `write_token_seq`.
#[derive(Debug, Default)]
pub struct TokenSeqGenerator {
    pub output: String,
}

impl CodeGenerator for TokenSeqGenerator {
    fn write_token_seq(&mut self, tokens: &str) {
        self.output.push_str(tokens);
    }
}
