//! Tag collection over an API description.
//!
//! Builds the tag map the assembler consumes: every tag name (declared or
//! discovered on an operation) mapped to its metadata plus the ordered list
//! of operations carrying it. Collection never fails; missing tag lists file
//! the operation under the anonymous tag instead.

use indexmap::IndexMap;

use crate::spec::{ApiDescription, HttpMethod, Operation, Parameter, Tag};

/// Name of the synthetic tag for operations that declare no tags.
pub const ANONYMOUS_TAG: &str = "";

/// A tag's metadata plus the operations filed under it.
#[derive(Debug, Clone)]
pub struct TagInfo {
    pub name: String,
    /// Display title override from `x-displayName`.
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Trait tags keep structural metadata but never accumulate operations.
    pub is_trait: bool,
    /// Operations in path/verb discovery order.
    pub operations: Vec<OperationRef>,
    /// Set once the tag is materialized into the outline. Tracked for
    /// orphan auditing; no warning is emitted for unused tags yet.
    pub used: bool,
}

impl TagInfo {
    fn from_declaration(tag: &Tag) -> Self {
        TagInfo {
            name: tag.name.clone(),
            display_name: tag.display_name.clone(),
            description: tag.description.clone(),
            is_trait: tag.is_trait,
            operations: Vec::new(),
            used: false,
        }
    }

    fn discovered(name: &str) -> Self {
        TagInfo {
            name: name.to_string(),
            display_name: None,
            description: None,
            is_trait: false,
            operations: Vec::new(),
            used: false,
        }
    }
}

/// An operation together with its originating path, verb, and the parameter
/// list inherited from its path item.
///
/// Identity is `(path, method)`. An operation listing several tags is cloned
/// into each tag's list: operations render once per tag they belong to.
#[derive(Debug, Clone)]
pub struct OperationRef {
    pub path: String,
    pub method: HttpMethod,
    /// Path-level parameters shared by all operations under the path.
    pub shared_parameters: Vec<Parameter>,
    pub operation: Operation,
}

/// Build the tag map for a description.
///
/// Declared tags are seeded first in declaration order, so their metadata
/// survives even with zero operations; tags discovered only on operations
/// append in first-seen order. Paths iterate in declaration order and verbs
/// in the fixed order `get, put, post, delete, options, head, patch, trace`,
/// which fixes the operation order within each tag.
pub fn collect_tags(description: &ApiDescription) -> IndexMap<String, TagInfo> {
    let mut tags: IndexMap<String, TagInfo> = IndexMap::new();

    for tag in &description.tags {
        tags.entry(tag.name.clone())
            .or_insert_with(|| TagInfo::from_declaration(tag));
    }

    for (path, item) in &description.paths {
        let shared_parameters = item.parameters.clone().unwrap_or_default();
        for (method, operation) in item.operations() {
            let effective_tags: Vec<&str> = if operation.tags.is_empty() {
                vec![ANONYMOUS_TAG]
            } else {
                operation.tags.iter().map(String::as_str).collect()
            };
            for name in effective_tags {
                let info = tags
                    .entry(name.to_string())
                    .or_insert_with(|| TagInfo::discovered(name));
                if info.is_trait {
                    continue;
                }
                info.operations.push(OperationRef {
                    path: path.clone(),
                    method,
                    shared_parameters: shared_parameters.clone(),
                    operation: operation.clone(),
                });
            }
        }
    }

    tags
}
