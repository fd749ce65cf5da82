//! Outline assembly.
//!
//! Orchestrates the tag collector, heading extractor, and node construction
//! into the top-level ordered content tree: narrative sections first, then
//! either the explicit `x-tagGroups` groups or the full tag listing. The
//! pipeline is a single synchronous pass; assembly never fails, it degrades
//! to warnings and omissions on inconsistent input.

use indexmap::IndexMap;
use tracing::warn;

use crate::collect::{collect_tags, OperationRef, TagInfo, ANONYMOUS_TAG};
use crate::headings::{contains_component, extract_headings, Heading, SECURITY_SCHEMES_COMPONENT};
use crate::node::{ContentNode, GroupKind, GroupNode, OperationNode};
use crate::slug::slugify;
use crate::spec::{ApiDescription, Parameter, TagGroup};

/// Depth of explicit tag-group nodes.
const GROUP_DEPTH: usize = 0;

/// How an operation is titled in the side navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SideNavStyle {
    /// Summary, falling back to operationId, the first line of the
    /// description, then the path.
    #[default]
    SummaryOnly,
    /// Always the path.
    PathOnly,
    /// The operationId, falling back to the path.
    IdOnly,
}

/// Renderer-facing options passed through to node construction. Assembly
/// itself does not interpret them beyond handing them to the constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub side_nav_style: SideNavStyle,
}

/// The assembled outline for one description document.
#[derive(Debug)]
pub struct Outline {
    /// Top-level nodes in render order.
    pub items: Vec<ContentNode>,
    /// Id prefix (with trailing `/`) of the narrative section embedding the
    /// security-schemes component. Within one build the last marker in
    /// document order wins; separate builds cannot interfere.
    pub security_prefix: Option<String>,
    /// The tag map after assembly. `used` is set on every tag materialized
    /// into the tree, so callers can audit orphaned tags.
    pub tags: IndexMap<String, TagInfo>,
}

/// State threaded through one assembly pass.
#[derive(Debug, Default)]
struct BuildContext {
    security_prefix: Option<String>,
}

/// Build the content outline for a description.
pub fn build_outline(description: &ApiDescription, options: &BuildOptions) -> Outline {
    let mut tags = collect_tags(description);
    let mut ctx = BuildContext::default();
    let mut items = Vec::new();

    let narrative = description.info.description.as_deref().unwrap_or("");
    items.extend(markdown_sections(narrative, None, 1, &mut ctx));

    if description.tag_groups.is_empty() {
        let names: Vec<String> = tags.keys().cloned().collect();
        items.extend(tag_items(&names, None, &mut tags, None, options, &mut ctx));
    } else {
        items.extend(tag_group_items(
            &description.tag_groups,
            &mut tags,
            options,
            &mut ctx,
        ));
    }

    Outline {
        items,
        security_prefix: ctx.security_prefix,
        tags,
    }
}

/// Convert narrative text into nested section nodes starting at `depth`.
fn markdown_sections(
    text: &str,
    parent_id: Option<&str>,
    depth: usize,
    ctx: &mut BuildContext,
) -> Vec<ContentNode> {
    extract_headings(text)
        .iter()
        .map(|heading| section_node(heading, parent_id, depth, ctx))
        .collect()
}

fn section_node(
    heading: &Heading,
    parent_id: Option<&str>,
    depth: usize,
    ctx: &mut BuildContext,
) -> ContentNode {
    // The heading id already carries its slug path, so children keep the
    // same prefix rather than stacking `section/` segments.
    let id = match parent_id {
        Some(parent) => format!("{parent}/section/{}", heading.id),
        None => format!("section/{}", heading.id),
    };

    if contains_component(&heading.content, SECURITY_SCHEMES_COMPONENT) {
        ctx.security_prefix = Some(format!("{id}/"));
    }

    let items = heading
        .items
        .iter()
        .map(|child| section_node(child, parent_id, depth + 1, ctx))
        .collect();

    ContentNode::Group(GroupNode {
        kind: GroupKind::Section,
        id,
        title: heading.title.clone(),
        description: if heading.content.is_empty() {
            None
        } else {
            Some(heading.content.clone())
        },
        depth,
        items,
    })
}

/// Build one `group` node per explicit tag-group definition, in order.
fn tag_group_items(
    groups: &[TagGroup],
    tags: &mut IndexMap<String, TagInfo>,
    options: &BuildOptions,
    ctx: &mut BuildContext,
) -> Vec<ContentNode> {
    let mut res = Vec::with_capacity(groups.len());
    for group in groups {
        let id = format!("group/{}", slugify(&group.name));
        let items = tag_items(
            &group.tags,
            Some(&group.name),
            tags,
            Some((id.as_str(), GROUP_DEPTH)),
            options,
            ctx,
        );
        res.push(ContentNode::Group(GroupNode {
            kind: GroupKind::Group,
            id,
            title: group.name.clone(),
            description: None,
            depth: GROUP_DEPTH,
            items,
        }));
    }
    res
}

/// Expand the named tags into `tag` nodes (or, for the anonymous tag, its
/// hoisted sections and operations), in the given order.
fn tag_items(
    names: &[String],
    group_name: Option<&str>,
    tags: &mut IndexMap<String, TagInfo>,
    parent: Option<(&str, usize)>,
    options: &BuildOptions,
    ctx: &mut BuildContext,
) -> Vec<ContentNode> {
    let mut res = Vec::new();
    for name in names {
        let Some(info) = tags.get_mut(name) else {
            warn!(
                tag = %name,
                group = %group_name.unwrap_or_default(),
                "tag referenced by a tag group does not exist"
            );
            continue;
        };
        info.used = true;

        let depth = parent.map_or(1, |(_, parent_depth)| parent_depth + 1);
        let tag_description = info.description.clone().unwrap_or_default();

        if info.name == ANONYMOUS_TAG {
            // No node for the anonymous tag: its sections and operations are
            // spliced into the parent's sequence at the child depth the tag
            // node would have given them.
            let parent_id = parent.map(|(id, _)| id);
            res.extend(markdown_sections(
                &tag_description,
                parent_id,
                depth + 1,
                ctx,
            ));
            res.extend(operation_items(
                &info.operations,
                parent_id,
                depth + 1,
                options,
            ));
            continue;
        }

        let id = format!("tag/{}", slugify(&info.name));
        let title = info
            .display_name
            .clone()
            .unwrap_or_else(|| info.name.clone());
        let mut items = markdown_sections(&tag_description, Some(&id), depth + 1, ctx);
        items.extend(operation_items(&info.operations, Some(&id), depth + 1, options));
        res.push(ContentNode::Group(GroupNode {
            kind: GroupKind::Tag,
            id,
            title,
            description: info.description.clone(),
            depth,
            items,
        }));
    }
    res
}

/// One operation node per reference, in array order.
fn operation_items(
    operations: &[OperationRef],
    parent_id: Option<&str>,
    depth: usize,
    options: &BuildOptions,
) -> Vec<ContentNode> {
    operations
        .iter()
        .map(|op_ref| ContentNode::Operation(operation_node(op_ref, parent_id, depth, options)))
        .collect()
}

fn operation_node(
    op_ref: &OperationRef,
    parent_id: Option<&str>,
    depth: usize,
    options: &BuildOptions,
) -> OperationNode {
    let operation = &op_ref.operation;
    let id = match &operation.operation_id {
        Some(operation_id) => format!("operation/{operation_id}"),
        None => {
            let base = format!("paths/{}/{}", slugify(&op_ref.path), op_ref.method.as_str());
            match parent_id {
                Some(parent) => format!("{parent}/{base}"),
                None => base,
            }
        }
    };

    OperationNode {
        id,
        depth,
        title: operation_title(op_ref, options.side_nav_style),
        method: op_ref.method,
        path: op_ref.path.clone(),
        deprecated: operation.deprecated,
        parameters: merge_parameters(
            &op_ref.shared_parameters,
            operation.parameters.as_deref().unwrap_or(&[]),
        ),
    }
}

fn operation_title(op_ref: &OperationRef, style: SideNavStyle) -> String {
    let operation = &op_ref.operation;
    match style {
        SideNavStyle::PathOnly => op_ref.path.clone(),
        SideNavStyle::IdOnly => operation
            .operation_id
            .clone()
            .unwrap_or_else(|| op_ref.path.clone()),
        SideNavStyle::SummaryOnly => operation
            .summary
            .clone()
            .or_else(|| operation.operation_id.clone())
            .or_else(|| operation.description.as_deref().and_then(first_line))
            .unwrap_or_else(|| op_ref.path.clone()),
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Shared path-item parameters first; an operation-level parameter replaces
/// a shared one with the same `(name, in)` pair, otherwise it appends.
fn merge_parameters(shared: &[Parameter], own: &[Parameter]) -> Vec<Parameter> {
    let mut merged: Vec<Parameter> = shared.to_vec();
    for param in own {
        match merged
            .iter_mut()
            .find(|p| p.name == param.name && p.location == param.location)
        {
            Some(slot) => *slot = param.clone(),
            None => merged.push(param.clone()),
        }
    }
    merged
}
