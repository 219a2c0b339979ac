// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-component-type property registration table.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::descriptor::PropertyDescriptor;
use crate::error::ConfigurationError;
use crate::id::PropertyId;
use crate::value::{Value, ValueKind};

/// The registration table for one component type.
///
/// A schema is built once at type-definition time, not per instance:
/// declare every property up front, then share the schema across all
/// instances of the component. Declaration order assigns [`PropertyId`]s.
///
/// # Example
///
/// ```rust
/// use canopy_property::{ConfigurationError, PropertyDescriptor, Schema};
///
/// let mut schema = Schema::new();
/// let expanded = schema
///     .declare(PropertyDescriptor::bool("expanded").reflect(true))
///     .unwrap();
///
/// assert_eq!(schema.by_name("expanded"), Some(expanded));
/// assert_eq!(schema.by_attribute("expanded"), Some(expanded));
///
/// // Duplicate declarations fail fast.
/// let err = schema.declare(PropertyDescriptor::bool("expanded")).unwrap_err();
/// assert_eq!(err, ConfigurationError::DuplicateName { name: "expanded" });
/// ```
#[derive(Default)]
pub struct Schema {
    descriptors: Vec<PropertyDescriptor>,
    by_name: HashMap<&'static str, PropertyId>,
    by_attribute: HashMap<String, PropertyId>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property, returning its [`PropertyId`].
    ///
    /// # Errors
    ///
    /// Fails with a [`ConfigurationError`] on a duplicate property name, a
    /// duplicate attribute binding, an enum with no tags, or an enum default
    /// outside the declared tag set. A failed declaration leaves the schema
    /// unchanged.
    pub fn declare(
        &mut self,
        descriptor: PropertyDescriptor,
    ) -> Result<PropertyId, ConfigurationError> {
        let name = descriptor.name();
        if self.by_name.contains_key(name) {
            return Err(ConfigurationError::DuplicateName { name });
        }
        if let Some(attribute) = descriptor.attribute_name()
            && self.by_attribute.contains_key(attribute)
        {
            return Err(ConfigurationError::DuplicateAttribute {
                attribute: descriptor.attribute_owned().unwrap_or_default(),
            });
        }
        if let ValueKind::Enum(tags) = descriptor.kind() {
            if tags.is_empty() {
                return Err(ConfigurationError::EmptyEnum { name });
            }
            if let &Value::Tag(default) = descriptor.default()
                && !tags.contains(&default)
            {
                return Err(ConfigurationError::DefaultNotInEnum { name, default });
            }
        }
        if self.descriptors.len() >= usize::from(u16::MAX) {
            return Err(ConfigurationError::TooManyProperties);
        }

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let id = PropertyId::new(self.descriptors.len() as u16);
        if let Some(attribute) = descriptor.attribute_owned() {
            self.by_attribute.insert(attribute, id);
        }
        self.by_name.insert(name, id);
        self.descriptors.push(descriptor);
        Ok(id)
    }

    /// Returns the number of declared properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if no properties are declared.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns the descriptor for a property.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&PropertyDescriptor> {
        self.descriptors.get(usize::from(id.index()))
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<PropertyId> {
        self.by_name.get(name).copied()
    }

    /// Looks up a property by its bound attribute name.
    #[must_use]
    pub fn by_attribute(&self, attribute: &str) -> Option<PropertyId> {
        self.by_attribute.get(attribute).copied()
    }

    /// Returns an iterator over all declared properties.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &PropertyDescriptor)> {
        self.descriptors.iter().enumerate().map(|(i, d)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len <= u16::MAX")]
            (PropertyId::new(i as u16), d)
        })
    }

    /// Returns an iterator over all declared property IDs.
    pub fn ids(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.iter().map(|(id, _)| id)
    }
}

impl core::fmt::Debug for Schema {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Schema")
            .field("count", &self.descriptors.len())
            .field(
                "properties",
                &self
                    .descriptors
                    .iter()
                    .map(PropertyDescriptor::name)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
