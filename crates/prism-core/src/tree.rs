//! Structure tree for the side panel.
//!
//! `build` walks a parsed value and emits one display node per object
//! key and array element. The tree is rebuilt in full whenever the UI
//! asks for it and is never patched incrementally, so this stays a
//! pure function of the value.

use serde_json::Value;

/// Leaf values longer than this are truncated in the label.
const PREVIEW_LIMIT: usize = 50;

/// One row of the structure tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Display label: `key` for containers, `key: value` for leaves.
    pub label: String,
    /// Path from the root, e.g. `items[2].name`. Empty for the root.
    pub path: String,
    /// Nesting depth (root = 0), used for indentation.
    pub depth: u16,
    /// Whether children are shown. Containers start collapsed.
    pub expanded: bool,
    /// Child nodes in declaration / index order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }

    /// Flips the expanded flag on the node with the given path.
    pub fn toggle(&mut self, target: &str) {
        if self.path == target {
            self.expanded = !self.expanded;
            return;
        }
        for child in &mut self.children {
            child.toggle(target);
        }
    }
}

/// Builds the display tree for a parsed document.
pub fn build(value: &Value) -> TreeNode {
    let mut root = node("JSON Document", String::new(), 0, value);
    root.expanded = true;
    root
}

fn node(name: &str, path: String, depth: u16, value: &Value) -> TreeNode {
    match value {
        Value::Object(map) => {
            let children = map
                .iter()
                .map(|(key, child)| node(key, join_key(&path, key), depth + 1, child))
                .collect();
            TreeNode {
                label: name.to_string(),
                path,
                depth,
                expanded: false,
                children,
            }
        }
        Value::Array(items) => {
            let children = items
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    node(&format!("[{i}]"), format!("{path}[{i}]"), depth + 1, child)
                })
                .collect();
            TreeNode {
                label: name.to_string(),
                path,
                depth,
                expanded: false,
                children,
            }
        }
        leaf => TreeNode {
            label: format!("{}: {}", name, preview(leaf)),
            path,
            depth,
            expanded: false,
            children: Vec::new(),
        },
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn preview(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() > PREVIEW_LIMIT {
        let truncated: String = rendered.chars().take(PREVIEW_LIMIT).collect();
        format!("{truncated}...")
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    /// Counts every node below the root.
    fn count(node: &TreeNode) -> usize {
        node.children.len() + node.children.iter().map(count).sum::<usize>()
    }

    /// Counts keys and indices in the source value.
    fn entries(value: &Value) -> usize {
        match value {
            Value::Object(map) => map.len() + map.values().map(entries).sum::<usize>(),
            Value::Array(items) => items.len() + items.iter().map(entries).sum::<usize>(),
            _ => 0,
        }
    }

    /// Follows a node path back into the value it was built from.
    fn navigate<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
        let segments = crate::locate::parse_path(path)?;
        let mut current = value;
        for segment in segments {
            current = match segment {
                crate::locate::PathSegment::Key(key) => current.get(key)?,
                crate::locate::PathSegment::Index(i) => current.get(i)?,
            };
        }
        Some(current)
    }

    fn assert_paths_navigable(node: &TreeNode, value: &Value) {
        if !node.path.is_empty() {
            assert!(
                navigate(value, &node.path).is_some(),
                "path {:?} does not navigate",
                node.path
            );
        }
        for child in &node.children {
            assert_paths_navigable(child, value);
        }
    }

    #[test]
    fn test_every_key_and_index_gets_a_node() {
        let value = parse(r#"{"a":{"b":1,"c":[true,null]},"d":"x","e":[]}"#);
        let root = build(&value);
        assert_eq!(count(&root), entries(&value));
    }

    #[test]
    fn test_paths_navigate_back_to_values() {
        let value = parse(r#"{"user":{"address":{"city":"Oslo"}},"items":[{"name":"a"},{"name":"b"}]}"#);
        let root = build(&value);
        assert_paths_navigable(&root, &value);
    }

    #[test]
    fn test_object_children_keep_declaration_order() {
        let value = parse(r#"{"zebra":1,"apple":2,"mango":3}"#);
        let root = build(&value);
        let labels: Vec<&str> = root
            .children
            .iter()
            .map(|c| c.label.split(':').next().unwrap())
            .collect();
        assert_eq!(labels, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_array_paths_use_brackets() {
        let value = parse(r#"{"items":[{"name":"x"}]}"#);
        let root = build(&value);
        let items = &root.children[0];
        assert_eq!(items.path, "items");
        assert_eq!(items.children[0].path, "items[0]");
        assert_eq!(items.children[0].children[0].path, "items[0].name");
    }

    #[test]
    fn test_long_leaf_values_are_truncated() {
        let long = "x".repeat(80);
        let value = parse(&format!(r#"{{"note":"{long}"}}"#));
        let root = build(&value);
        let label = &root.children[0].label;
        assert!(label.ends_with("..."));
        // "note: " prefix plus 50 preview chars plus the ellipsis
        assert_eq!(label.chars().count(), "note: ".len() + PREVIEW_LIMIT + 3);
    }

    #[test]
    fn test_root_is_expanded_and_containers_collapsed() {
        let value = parse(r#"{"a":{"b":1}}"#);
        let root = build(&value);
        assert!(root.expanded);
        assert!(!root.children[0].expanded);
    }

    #[test]
    fn test_toggle_by_path() {
        let value = parse(r#"{"a":{"b":{"c":1}}}"#);
        let mut root = build(&value);
        root.toggle("a.b");
        assert!(root.children[0].children[0].expanded);
        root.toggle("a.b");
        assert!(!root.children[0].children[0].expanded);
    }

    #[test]
    fn test_scalar_root_is_a_leaf() {
        let root = build(&parse("42"));
        assert!(root.children.is_empty());
        assert_eq!(root.label, "JSON Document: 42");
    }
}
