//! Tree command report data structures.

use super::output::{Output, Report};

/// The entities of a manifest in depth-first order.
#[derive(Debug)]
pub struct TreeReport {
    pub file_name: String,
    pub comment: Option<String>,
    pub nodes: Vec<TreeNode>,
}

/// One entity of a [`TreeReport`].
#[derive(Debug)]
pub struct TreeNode {
    /// Nesting depth below the file.
    pub depth: usize,
    pub id: String,
    pub kind: &'static str,
    pub container: bool,
    pub template: bool,
    pub comment: Option<String>,
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.file_name);
        if let Some(comment) = &self.comment {
            out.preformatted(&format!("// {comment}"));
        }
        for node in &self.nodes {
            let indent = "  ".repeat(node.depth);
            let mut line = format!("{indent}{} {}", node.kind, node.id);
            if node.template {
                line.push_str(" <template>");
            }
            if node.container {
                line.push_str(" {}");
            }
            out.preformatted(&line);
            if let Some(comment) = &node.comment {
                for text in comment.lines() {
                    out.preformatted(&format!("{indent}  // {text}"));
                }
            }
        }
    }
}
