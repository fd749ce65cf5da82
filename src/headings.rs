//! Markdown heading extraction for narrative description text.
//!
//! Narrative text (the document's `info.description` and per-tag
//! descriptions) is mined for headings, which become `section` nodes in the
//! assembled outline. Extraction is event-based over pulldown-cmark with byte
//! offsets, so each heading also carries the raw markdown between itself and
//! the next heading; the assembler uses that slice as the section's
//! description and scans it for embed markers.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::slug::slugify;

/// Component name of the reserved security-schemes embed marker.
///
/// A section whose content references `<security-definitions …>` becomes the
/// id-prefix anchor for security-scheme references.
pub const SECURITY_SCHEMES_COMPONENT: &str = "security-definitions";

/// One extracted heading with its nested sub-headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading text with inline markup stripped.
    pub title: String,
    /// Slug path: the parent heading's id joined to this heading's slug
    /// with `/`, so ids stay stable and unique per branch.
    pub id: String,
    /// Markdown heading level, 1-based.
    pub level: usize,
    /// Raw markdown between this heading and the next heading of any level.
    pub content: String,
    /// Sub-headings of deeper levels.
    pub items: Vec<Heading>,
}

struct RawHeading {
    level: usize,
    title: String,
    content_start: usize,
}

/// Extract the nested heading tree from markdown text.
///
/// Headings of any level nest under the nearest preceding shallower heading;
/// skipped levels (an `###` directly under an `#`) nest without creating
/// placeholder levels. Text before the first heading belongs to no heading
/// and is not represented.
pub fn extract_headings(text: &str) -> Vec<Heading> {
    let mut flat: Vec<RawHeading> = Vec::new();
    let mut spans: Vec<usize> = Vec::new();
    let mut current: Option<RawHeading> = None;

    let parser = Parser::new_ext(text, Options::empty());
    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                // A heading interrupts the previous heading's content span.
                spans.push(range.start);
                current = Some(RawHeading {
                    level: level as usize,
                    title: String::new(),
                    content_start: range.end,
                });
            }
            Event::Text(t) => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push_str(&t);
                }
            }
            Event::Code(t) => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push_str(&t);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    flat.push(heading);
                }
            }
            _ => {}
        }
    }

    // spans[i] is where heading i starts; a heading's content runs from its
    // own end to the start of heading i+1 (or end of text).
    let contents: Vec<String> = flat
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let end = spans.get(i + 1).copied().unwrap_or(text.len());
            let start = heading.content_start.min(end);
            text[start..end].trim().to_string()
        })
        .collect();

    nest(flat, contents)
}

fn nest(flat: Vec<RawHeading>, contents: Vec<String>) -> Vec<Heading> {
    let mut roots: Vec<Heading> = Vec::new();
    let mut stack: Vec<Heading> = Vec::new();

    let close_one = |roots: &mut Vec<Heading>, stack: &mut Vec<Heading>| {
        if let Some(done) = stack.pop() {
            match stack.last_mut() {
                Some(parent) => parent.items.push(done),
                None => roots.push(done),
            }
        }
    };

    for (raw, content) in flat.into_iter().zip(contents) {
        while stack.last().is_some_and(|top| top.level >= raw.level) {
            close_one(&mut roots, &mut stack);
        }
        let slug = slugify(&raw.title);
        let id = match stack.last() {
            Some(parent) => format!("{}/{}", parent.id, slug),
            None => slug,
        };
        stack.push(Heading {
            title: raw.title,
            id,
            level: raw.level,
            content,
            items: Vec::new(),
        });
    }
    while !stack.is_empty() {
        close_one(&mut roots, &mut stack);
    }

    roots
}

/// Check whether markdown text references an embed component like
/// `<security-definitions/>` (any attributes, optionally self-closing).
pub fn contains_component(markdown: &str, component: &str) -> bool {
    let needle = format!("<{component}");
    let mut rest = markdown;
    while let Some(pos) = rest.find(&needle) {
        rest = &rest[pos + needle.len()..];
        match rest.chars().next() {
            Some(c) if c.is_whitespace() || c == '/' || c == '>' => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const NARRATIVE: &str = "\
Intro paragraph before any heading.

# Overview

Welcome text.

## Getting Started

Steps here.

## Authentication

Auth text with <security-definitions/> embedded.

# Changelog

Latest changes.
";

    #[test]
    fn test_extracts_nested_tree() {
        let headings = extract_headings(NARRATIVE);
        assert_eq!(headings.len(), 2, "two top-level headings expected");
        assert_eq!(headings[0].title, "Overview");
        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[0].items.len(), 2);
        assert_eq!(headings[0].items[0].title, "Getting Started");
        assert_eq!(headings[0].items[1].title, "Authentication");
        assert_eq!(headings[1].title, "Changelog");
        assert!(headings[1].items.is_empty());
    }

    #[test]
    fn test_ids_are_slug_paths() {
        let headings = extract_headings(NARRATIVE);
        assert_eq!(headings[0].id, "overview");
        assert_eq!(headings[0].items[0].id, "overview/getting-started");
        assert_eq!(headings[0].items[1].id, "overview/authentication");
        assert_eq!(headings[1].id, "changelog");
    }

    #[test]
    fn test_content_is_own_slice_only() {
        let headings = extract_headings(NARRATIVE);
        assert_eq!(
            headings[0].content, "Welcome text.",
            "content must stop at the next heading of any level"
        );
        assert_eq!(headings[0].items[0].content, "Steps here.");
        assert_eq!(headings[1].content, "Latest changes.");
    }

    #[test]
    fn test_skipped_levels_nest_under_nearest_shallower() {
        let headings = extract_headings("# Top\n\n### Deep\n\ntext\n");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].items.len(), 1);
        assert_eq!(headings[0].items[0].title, "Deep");
        assert_eq!(headings[0].items[0].level, 3);
    }

    #[test]
    fn test_deeper_heading_first_becomes_root() {
        let headings = extract_headings("## First\n\n# Second\n");
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].title, "First");
        assert_eq!(headings[1].title, "Second");
    }

    #[test]
    fn test_inline_markup_stripped_from_title() {
        let headings = extract_headings("# Using `curl` with *flair*\n");
        assert_eq!(headings[0].title, "Using curl with flair");
        assert_eq!(headings[0].id, "using-curl-with-flair");
    }

    #[test]
    fn test_empty_and_headingless_text() {
        assert!(extract_headings("").is_empty());
        assert!(extract_headings("just a paragraph\n\nand another").is_empty());
    }

    #[test]
    fn test_contains_component() {
        assert!(contains_component(
            "See <security-definitions/> here",
            SECURITY_SCHEMES_COMPONENT
        ));
        assert!(contains_component(
            "<security-definitions>",
            SECURITY_SCHEMES_COMPONENT
        ));
        assert!(contains_component(
            "<security-definitions id=\"x\">",
            SECURITY_SCHEMES_COMPONENT
        ));
        assert!(!contains_component(
            "plain security-definitions text",
            SECURITY_SCHEMES_COMPONENT
        ));
        assert!(!contains_component(
            "<security-definitions-extended/>",
            SECURITY_SCHEMES_COMPONENT
        ));
        assert!(!contains_component("", SECURITY_SCHEMES_COMPONENT));
    }
}
