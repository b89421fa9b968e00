//! Markup tree capability and its html5ever-backed implementation.

use html5ever::{local_name, namespace_url, ns, QualName};
use kuchikiki::traits::*;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};

use super::MarkupError;

/// Parsed markup whose element attributes can be read and written.
///
/// Anchor rewriting depends only on this trait, so the HTML library behind
/// it can be swapped without touching the rewrite logic.
pub trait MarkupTree: Sized {
    type Element;

    fn parse(markup: &str) -> Result<Self, MarkupError>;

    /// Elements named `tag` (ASCII case-insensitive) that carry attribute
    /// `attr`, in document order.
    fn select(&self, tag: &str, attr: &str) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    /// Serializes the tree back to markup.
    fn serialize(&self) -> Result<String, MarkupError>;
}

/// HTML tree parsed with html5ever.
///
/// Fragments are parsed in a `<template>` context, which keeps head-only
/// elements, comments, leading whitespace and bare table rows in place, and
/// are serialized back as the children of the fragment root. Input that opens
/// with a doctype, `<html>` or `<head>` (after an optional BOM, whitespace and
/// comments) is parsed and serialized as a whole document.
pub struct HtmlTree {
    document: NodeRef,
    fragment: bool,
}

impl HtmlTree {
    pub fn is_fragment(&self) -> bool {
        self.fragment
    }
}

impl MarkupTree for HtmlTree {
    type Element = NodeDataRef<ElementData>;

    fn parse(markup: &str) -> Result<Self, MarkupError> {
        if is_full_document(markup) {
            return Ok(Self {
                document: kuchikiki::parse_html().one(markup),
                fragment: false,
            });
        }
        let context = QualName::new(None, ns!(html), local_name!("template"));
        Ok(Self {
            document: kuchikiki::parse_fragment(context, Vec::new()).one(markup),
            fragment: true,
        })
    }

    fn select(&self, tag: &str, attr: &str) -> Vec<Self::Element> {
        self.document
            .descendants()
            .elements()
            .filter(|el| (*el.name.local).eq_ignore_ascii_case(tag))
            .filter(|el| el.attributes.borrow().contains(attr))
            .collect()
    }

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String> {
        element.attributes.borrow().get(name).map(str::to_string)
    }

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str) {
        element
            .attributes
            .borrow_mut()
            .insert(name, value.to_string());
    }

    fn serialize(&self) -> Result<String, MarkupError> {
        let mut out = Vec::new();
        if self.fragment {
            let root = self
                .document
                .first_child()
                .ok_or(MarkupError::MissingRoot)?;
            for child in root.children() {
                child.serialize(&mut out)?;
            }
        } else {
            self.document.serialize(&mut out)?;
        }
        Ok(String::from_utf8(out)?)
    }
}

fn is_full_document(markup: &str) -> bool {
    let mut rest = markup.trim_start_matches('\u{feff}').trim_start();
    while let Some(comment) = rest.strip_prefix("<!--") {
        match comment.find("-->") {
            Some(end) => rest = comment[end + 3..].trim_start(),
            None => return false,
        }
    }
    ["<!doctype", "<html", "<head"].iter().any(|prefix| {
        rest.get(..prefix.len())
            .is_some_and(|h| h.eq_ignore_ascii_case(prefix))
            && !rest[prefix.len()..]
                .starts_with(|c: char| c.is_ascii_alphanumeric() || c == '-')
    })
}
