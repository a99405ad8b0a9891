use crate::{CodeGenerator, Indent};

/// Generator writing plain text into a `String`.
///
/// Indentation is written lazily before the first token of a line, so blank
/// lines never carry trailing whitespace and a decrease on a still empty line
/// applies to that line.
#[derive(Debug, Clone)]
pub struct TextGenerator {
    output: String,
    indent: Indent,
    level: usize,
    next_level: usize,
    at_line_start: bool,
}

impl TextGenerator {
    pub fn new(indent: Indent) -> Self {
        Self {
            output: String::new(),
            indent,
            level: 0,
            next_level: 0,
            at_line_start: true,
        }
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

impl CodeGenerator for TextGenerator {
    fn indent(&mut self) {
        self.next_level += 1;
    }

    fn unindent(&mut self) {
        self.next_level = self.next_level.saturating_sub(1);
        if self.at_line_start {
            self.level = self.level.min(self.next_level);
        }
    }

    fn write_token_seq(&mut self, tokens: &str) {
        if tokens.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.level {
                self.output.push_str(self.indent.as_str());
            }
            self.at_line_start = false;
        }
        self.output.push_str(tokens);
    }

    fn write_newline(&mut self) {
        self.output.push('\n');
        self.level = self.next_level;
        self.at_line_start = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_applies_from_next_line() {
        let mut generator = TextGenerator::new(Indent::Spaces(2));
        generator.write_token_seq("a");
        generator.indent();
        generator.write_token_seq("b");
        generator.write_newline();
        generator.write_token_seq("c");
        generator.write_newline();
        assert_eq!(generator.finish(), "ab\n  c\n");
    }

    #[test]
    fn test_unindent_on_empty_line_is_immediate() {
        let mut generator = TextGenerator::new(Indent::Spaces(2));
        generator.indent();
        generator.write_newline();
        generator.write_token_seq("x");
        generator.write_newline();
        generator.unindent();
        generator.write_token_seq("}");
        assert_eq!(generator.finish(), "\n  x\n}");
    }

    #[test]
    fn test_unindent_mid_line_is_deferred() {
        let mut generator = TextGenerator::new(Indent::Tab);
        generator.indent();
        generator.write_newline();
        generator.write_token_seq("x");
        generator.unindent();
        generator.write_token_seq("y");
        generator.write_newline();
        generator.write_token_seq("z");
        assert_eq!(generator.finish(), "\n\txy\nz");
    }

    #[test]
    fn test_blank_lines_have_no_indentation() {
        let mut generator = TextGenerator::new(Indent::Spaces(4));
        generator.indent();
        generator.write_newline();
        generator.write_newline();
        generator.write_token_seq("x");
        assert_eq!(generator.finish(), "\n\n    x");
    }

    #[test]
    fn test_unindent_below_zero_saturates() {
        let mut generator = TextGenerator::default();
        generator.unindent();
        generator.write_token_seq("a");
        assert_eq!(generator.as_str(), "a");
    }
}
