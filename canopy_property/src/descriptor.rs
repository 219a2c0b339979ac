// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property descriptors.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use crate::convert::derived_attribute;
use crate::value::{Value, ValueKind};

/// One declared property: name, kind, default, attribute binding, reflection.
///
/// Descriptors are built with the named constructors and builder methods, then
/// handed to [`Schema::declare`](crate::Schema::declare):
///
/// ```rust
/// use canopy_property::PropertyDescriptor;
///
/// const SCHEMES: &[&str] = &["regular", "light"];
///
/// // `expanded` syncs with the `expanded` attribute and reflects back.
/// let expanded = PropertyDescriptor::bool("expanded").reflect(true);
///
/// // `color_scheme` binds to an explicitly named attribute.
/// let scheme = PropertyDescriptor::tag("color_scheme", SCHEMES, "regular")
///     .attribute("color-scheme")
///     .reflect(true);
///
/// // A property with no attribute counterpart at all.
/// let row_count = PropertyDescriptor::number("row_count", 0.0).property_only();
/// assert!(row_count.attribute_name().is_none());
/// assert_eq!(scheme.attribute_name(), Some("color-scheme"));
/// ```
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    name: &'static str,
    kind: ValueKind,
    default: Value,
    /// `None` means property-only: no attribute sync in either direction.
    attribute: Option<Cow<'static, str>>,
    reflect: bool,
}

impl PropertyDescriptor {
    fn new(name: &'static str, kind: ValueKind, default: Value) -> Self {
        Self {
            name,
            kind,
            default,
            attribute: Some(Cow::Owned(derived_attribute(name))),
            reflect: false,
        }
    }

    /// Declares a presence-style boolean property.
    ///
    /// Booleans default to `false`: an absent attribute always reads `false`,
    /// so a `true` default could never round-trip through reflection.
    #[must_use]
    pub fn bool(name: &'static str) -> Self {
        Self::new(name, ValueKind::Bool, Value::Bool(false))
    }

    /// Declares a numeric property with the given default.
    #[must_use]
    pub fn number(name: &'static str, default: f64) -> Self {
        Self::new(name, ValueKind::Number, Value::Number(default))
    }

    /// Declares a text property with the given default.
    #[must_use]
    pub fn text(name: &'static str, default: &str) -> Self {
        Self::new(name, ValueKind::Text, Value::Text(default.to_string()))
    }

    /// Declares an enum-of-strings property with the given tag set and default.
    ///
    /// The default must be a member of `tags`; this is checked by
    /// [`Schema::declare`](crate::Schema::declare).
    #[must_use]
    pub fn tag(name: &'static str, tags: &'static [&'static str], default: &'static str) -> Self {
        Self::new(name, ValueKind::Enum(tags), Value::Tag(default))
    }

    /// Overrides the attribute name (default: the property name, kebab-cased).
    #[must_use]
    pub fn attribute(mut self, attribute: &'static str) -> Self {
        self.attribute = Some(Cow::Borrowed(attribute));
        self
    }

    /// Removes the attribute binding entirely (property-only).
    #[must_use]
    pub fn property_only(mut self) -> Self {
        self.attribute = None;
        self
    }

    /// Sets whether property writes are reflected back to the attribute.
    ///
    /// Attribute → property sync is always active when an attribute binding
    /// exists; reflection adds the property → attribute direction.
    #[must_use]
    pub fn reflect(mut self, reflect: bool) -> Self {
        self.reflect = reflect;
        self
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared value kind.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Returns the declared default value.
    #[must_use]
    #[inline]
    pub fn default(&self) -> &Value {
        &self.default
    }

    /// Returns the bound attribute name, if any.
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Returns whether property writes rewrite the attribute.
    #[must_use]
    #[inline]
    pub fn is_reflected(&self) -> bool {
        self.reflect
    }

    pub(crate) fn attribute_owned(&self) -> Option<String> {
        self.attribute.as_deref().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_attribute_name() {
        let d = PropertyDescriptor::text("label_text", "Items per page:");
        assert_eq!(d.attribute_name(), Some("label-text"));
        assert!(!d.is_reflected());
    }

    #[test]
    fn explicit_attribute_name() {
        let d = PropertyDescriptor::bool("expanded").attribute("open");
        assert_eq!(d.attribute_name(), Some("open"));
    }

    #[test]
    fn property_only_has_no_attribute() {
        let d = PropertyDescriptor::number("row_count", 0.0).property_only();
        assert_eq!(d.attribute_name(), None);
    }

    #[test]
    fn bool_defaults_false() {
        let d = PropertyDescriptor::bool("expanded");
        assert_eq!(d.default(), &Value::Bool(false));
    }
}
