use synops_ir::{Entity, EntityId};

use crate::{CodeGenerator, Indent, Synopsis, TextGenerator, TokenKind};

/// Generator writing syntax highlighted HTML.
///
/// Every classified token is wrapped in a `<span>` whose class is the token
/// kind, references link to the id of their first target, and each included
/// entity is anchored by its id right before its first token.
#[derive(Debug, Clone, Default)]
pub struct HtmlGenerator {
    text: TextGenerator,
    pending_anchor: Option<EntityId>,
}

impl HtmlGenerator {
    pub fn new(indent: Indent) -> Self {
        Self {
            text: TextGenerator::new(indent),
            pending_anchor: None,
        }
    }

    /// The generated markup, wrapped in `<pre><code>`.
    pub fn finish(self) -> String {
        format!(
            "<pre><code class=\"language-cpp\">{}</code></pre>\n",
            self.text.finish()
        )
    }

    fn anchor(&mut self, entity: &Entity, synopsis: Synopsis) -> Synopsis {
        if synopsis != Synopsis::Exclude && entity.occupies_line() {
            self.pending_anchor = Some(entity.id.clone());
        }
        synopsis
    }

    fn write_markup(&mut self, markup: String) {
        match self.pending_anchor.take() {
            Some(id) => {
                let anchored = format!("<a id=\"{}\"></a>{markup}", escape(id.as_str()));
                self.text.write_token_seq(&anchored);
            }
            None => self.text.write_token_seq(&markup),
        }
    }

    fn span(&mut self, kind: TokenKind, text: &str) {
        self.write_markup(format!(
            "<span class=\"{}\">{}</span>",
            kind.as_str(),
            escape(text)
        ));
    }
}

impl CodeGenerator for HtmlGenerator {
    fn on_container_begin(&mut self, entity: &Entity) -> Synopsis {
        self.anchor(entity, Synopsis::Definition)
    }

    fn on_leaf(&mut self, entity: &Entity) -> Synopsis {
        self.anchor(entity, Synopsis::Definition)
    }

    fn indent(&mut self) {
        self.text.indent();
    }

    fn unindent(&mut self) {
        self.text.unindent();
    }

    fn write_token_seq(&mut self, tokens: &str) {
        self.write_markup(escape(tokens));
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.span(TokenKind::Keyword, keyword);
    }

    fn write_identifier(&mut self, identifier: &str) {
        self.span(TokenKind::Identifier, identifier);
    }

    fn write_reference(&mut self, targets: &[EntityId], name: &str) {
        match targets.first() {
            Some(target) => self.write_markup(format!(
                "<a class=\"reference\" href=\"#{}\">{}</a>",
                escape(target.as_str()),
                escape(name)
            )),
            None => self.span(TokenKind::Reference, name),
        }
    }

    fn write_punctuation(&mut self, punctuation: &str) {
        self.span(TokenKind::Punctuation, punctuation);
    }

    fn write_str_literal(&mut self, literal: &str) {
        self.span(TokenKind::StrLiteral, literal);
    }

    fn write_int_literal(&mut self, literal: &str) {
        self.span(TokenKind::IntLiteral, literal);
    }

    fn write_float_literal(&mut self, literal: &str) {
        self.span(TokenKind::FloatLiteral, literal);
    }

    fn write_preprocessor(&mut self, token: &str) {
        self.span(TokenKind::Preprocessor, token);
    }

    fn write_newline(&mut self) {
        self.text.write_newline();
    }

    fn write_whitespace(&mut self) {
        self.text.write_whitespace();
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
