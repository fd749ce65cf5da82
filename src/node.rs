//! Content tree node model.
//!
//! The assembled outline is a flat ordered sequence of nodes, each owning its
//! children. Nodes are a tagged union consumers match on explicitly; there
//! are no parent back-references. A node's id embeds the parent path it was
//! built under, and its depth is assigned once during assembly.

use serde::Serialize;

use crate::spec::{HttpMethod, Parameter};

/// A node of the content tree: either a grouping node or an operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Group(GroupNode),
    Operation(OperationNode),
}

impl ContentNode {
    /// Stable id of the node.
    pub fn id(&self) -> &str {
        match self {
            ContentNode::Group(group) => &group.id,
            ContentNode::Operation(operation) => &operation.id,
        }
    }

    /// Depth of the node; the tree root is depth 0.
    pub fn depth(&self) -> usize {
        match self {
            ContentNode::Group(group) => group.depth,
            ContentNode::Operation(operation) => operation.depth,
        }
    }

    /// Display title of the node.
    pub fn title(&self) -> &str {
        match self {
            ContentNode::Group(group) => &group.title,
            ContentNode::Operation(operation) => &operation.title,
        }
    }

    /// Children of the node; operations have none.
    pub fn items(&self) -> &[ContentNode] {
        match self {
            ContentNode::Group(group) => &group.items,
            ContentNode::Operation(_) => &[],
        }
    }
}

/// What a grouping node was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// A heading in narrative description text.
    Section,
    /// An explicit `x-tagGroups` entry.
    Group,
    /// One API tag.
    Tag,
}

/// A grouping node with ordered children.
#[derive(Debug, Clone, Serialize)]
pub struct GroupNode {
    pub kind: GroupKind,
    pub id: String,
    pub title: String,
    /// Narrative text for the renderer: a section's own markdown slice, or
    /// the tag/group description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub depth: usize,
    pub items: Vec<ContentNode>,
}

/// One operation entry, carrying the raw fields a renderer needs.
#[derive(Debug, Clone, Serialize)]
pub struct OperationNode {
    pub id: String,
    pub depth: usize,
    /// Sidebar label, chosen by the configured side-nav style.
    pub title: String,
    pub method: HttpMethod,
    pub path: String,
    pub deprecated: bool,
    /// Merged parameter list: path-item shared parameters first, overridden
    /// by operation-level parameters with the same `(name, in)` pair.
    pub parameters: Vec<Parameter>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_discriminant() {
        let node = ContentNode::Group(GroupNode {
            kind: GroupKind::Tag,
            id: "tag/pets".to_string(),
            title: "Pets".to_string(),
            description: None,
            depth: 1,
            items: vec![ContentNode::Operation(OperationNode {
                id: "operation/listPets".to_string(),
                depth: 2,
                title: "List pets".to_string(),
                method: HttpMethod::Get,
                path: "/pets".to_string(),
                deprecated: false,
                parameters: Vec::new(),
            })],
        });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "group");
        assert_eq!(json["kind"], "tag");
        assert_eq!(json["items"][0]["type"], "operation");
        assert_eq!(json["items"][0]["method"], "get");
    }

    #[test]
    fn test_accessors() {
        let op = ContentNode::Operation(OperationNode {
            id: "operation/ping".to_string(),
            depth: 2,
            title: "Ping".to_string(),
            method: HttpMethod::Get,
            path: "/ping".to_string(),
            deprecated: false,
            parameters: Vec::new(),
        });
        assert_eq!(op.id(), "operation/ping");
        assert_eq!(op.depth(), 2);
        assert_eq!(op.title(), "Ping");
        assert!(op.items().is_empty());
    }
}
