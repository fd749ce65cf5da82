//! API description structs for serde deserialization.
//!
//! This module defines the minimal subset of an OpenAPI 3.x description that
//! outline assembly needs: info text, declared tags, the path map, and the
//! optional `x-tagGroups` grouping override. Everything else in a document is
//! ignored during deserialization.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root API description.
///
/// `paths` is an insertion-ordered map: the ordering rules for collected
/// operations depend on the document's declaration order.
#[derive(Debug, Deserialize)]
pub struct ApiDescription {
    #[serde(default)]
    pub info: Info,
    /// Declared tag list. Preserves metadata for tags with zero operations.
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Vendor grouping override. When non-empty, only the tags it names are
    /// rendered, nested under one group per entry.
    #[serde(rename = "x-tagGroups", default)]
    pub tag_groups: Vec<TagGroup>,
}

/// Document info block. All fields are optional: a partially-specified
/// document must still produce an outline.
#[derive(Debug, Default, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
    /// Top-level narrative text; headings in it become section nodes.
    pub description: Option<String>,
}

/// A declared tag with its metadata.
#[derive(Debug, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
    /// Display title override for the rendered tag group.
    #[serde(rename = "x-displayName")]
    pub display_name: Option<String>,
    /// Marks the tag as a template that never accumulates operations.
    #[serde(rename = "x-traitTag", default)]
    pub is_trait: bool,
}

/// One `x-tagGroups` entry: a named, ordered list of tag names.
#[derive(Debug, Deserialize)]
pub struct TagGroup {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A path item containing operations for different HTTP methods.
#[derive(Debug, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    pub trace: Option<Operation>,
    /// Path-level parameters shared by all operations under this path.
    pub parameters: Option<Vec<Parameter>>,
}

impl PathItem {
    /// Iterate the present operations in the fixed verb order
    /// `get, put, post, delete, options, head, patch, trace`.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, self.get.as_ref()),
            (HttpMethod::Put, self.put.as_ref()),
            (HttpMethod::Post, self.post.as_ref()),
            (HttpMethod::Delete, self.delete.as_ref()),
            (HttpMethod::Options, self.options.as_ref()),
            (HttpMethod::Head, self.head.as_ref()),
            (HttpMethod::Patch, self.patch.as_ref()),
            (HttpMethod::Trace, self.trace.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

/// An API operation (endpoint).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    /// Tag names this operation is filed under. Empty means the operation
    /// belongs to the anonymous tag.
    #[serde(default)]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    pub parameters: Option<Vec<Parameter>>,
}

/// A parameter (query, path, header, or cookie).
///
/// The schema is carried opaquely; this crate only needs parameter identity
/// and pass-through fields for the renderer.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// HTTP method. The variant order is the fixed iteration order used when
/// collecting operations from a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Lowercase verb as it appears as a path item key.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Uppercase verb for display.
    pub fn as_str_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl ApiDescription {
    /// Parse an API description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse API description: {e}"))
    }

    /// Parse an API description from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse API description: {e}"))
    }
}
