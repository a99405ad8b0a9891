//! Tree operation - entity listing.

use synops_ir::Entity;
use synops_manifest::Manifest;

use crate::reports::{TreeNode, TreeReport};

/// Flatten the entity tree of a manifest, depth first.
pub fn tree(manifest: &Manifest) -> TreeReport {
    let mut nodes = Vec::new();
    for child in manifest.file.children() {
        collect(child, 0, &mut nodes);
    }
    TreeReport {
        file_name: manifest.file.name.clone(),
        comment: manifest.file.comment.clone(),
        nodes,
    }
}

fn collect(entity: &Entity, depth: usize, nodes: &mut Vec<TreeNode>) {
    nodes.push(TreeNode {
        depth,
        id: entity.id.to_string(),
        kind: entity.kind.name(),
        container: entity.is_container(),
        template: entity.template.is_some(),
        comment: entity.comment.clone(),
    });
    for child in entity.children() {
        collect(child, depth + 1, nodes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_is_depth_first() {
        let manifest = synops_manifest::parse_str(
            r#"
            [file]
            name = "ns.hpp"

            [[file.entities]]
            kind = "namespace"
            name = "outer"
            comment = "Top level."
            children = [
                { kind = "variable", name = "n", type = "int" },
                { kind = "namespace", children = [{ kind = "variable", name = "m", type = "int" }] },
            ]
            "#,
        )
        .unwrap();

        let report = tree(&manifest);
        let ids: Vec<_> = report
            .nodes
            .iter()
            .map(|n| (n.depth, n.id.as_str(), n.kind))
            .collect();
        assert_eq!(
            ids,
            [
                (0, "outer", "namespace"),
                (1, "outer::n", "variable"),
                (1, "outer::@1", "namespace"),
                (2, "outer::@1::m", "variable"),
            ]
        );
        assert!(report.nodes[0].container);
        assert!(!report.nodes[1].container);
        assert_eq!(report.nodes[0].comment.as_deref(), Some("Top level."));
    }
}
