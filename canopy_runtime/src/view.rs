// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative output of a render pass.
//!
//! Render functions are pure: they map current property values to a [`View`]
//! and never touch the host. The runtime hands the view to the host, which
//! owns the actual reconciliation against whatever it renders into.

use alloc::string::String;
use alloc::vec::Vec;

/// The full output of one render pass.
///
/// A view is an ordered list of nodes mounted under the instance's internal
/// root. Two views compare equal exactly when their trees are structurally
/// equal, which is what makes render purity testable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct View {
    nodes: Vec<ViewNode>,
}

impl View {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a node, builder style.
    #[must_use]
    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Returns the top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    /// Returns `true` if the view renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One node in a view tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewNode {
    /// An element with a tag, attributes, and children.
    Element(Element),
    /// A text run.
    Text(String),
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for ViewNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ViewNode {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

/// An element node.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<ViewNode>,
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, builder style. Later wins on duplicate names.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    /// Sets an attribute only when `on` is true, for presence-style flags.
    #[must_use]
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    /// Appends a child node, builder style.
    #[must_use]
    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the attribute value, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the attributes in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    /// Returns the children in order.
    #[must_use]
    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }
}
