//! apitoc builds an ordered, navigable content outline from an OpenAPI-style
//! API description.
//!
//! The pipeline is:
//! 1. Parse: JSON/YAML -> [`spec::ApiDescription`] (or hand one in directly)
//! 2. Collect: description -> tag map ([`collect::collect_tags`])
//! 3. Extract: narrative text -> heading tree ([`headings::extract_headings`])
//! 4. Assemble: tag map + headings -> ordered content tree
//!    ([`assemble::build_outline`])
//!
//! The output is a flat ordered sequence of [`node::ContentNode`]s —
//! narrative sections first, then either explicit `x-tagGroups` groups or
//! one group per tag — each with a stable id, a depth, and owned children.
//! Assembly is a single synchronous pass over in-memory data: inconsistent
//! input degrades to warnings and omissions, never errors.

#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

pub mod assemble;
pub mod collect;
pub mod headings;
pub mod node;
pub mod slug;
pub mod spec;

pub use assemble::{build_outline, BuildOptions, Outline, SideNavStyle};
pub use collect::{collect_tags, OperationRef, TagInfo, ANONYMOUS_TAG};
pub use headings::{extract_headings, Heading, SECURITY_SCHEMES_COMPONENT};
pub use node::{ContentNode, GroupKind, GroupNode, OperationNode};
pub use spec::{ApiDescription, HttpMethod};
