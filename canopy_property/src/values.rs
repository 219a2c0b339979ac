// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance property value storage.

use alloc::string::String;
use smallvec::SmallVec;

use crate::convert::{AttributeEdit, parse_attribute, serialize_value};
use crate::error::InvalidValueError;
use crate::id::PropertyId;
use crate::schema::Schema;
use crate::value::{Value, ValueKind};

/// Inline capacity for per-instance values.
///
/// Most components declare fewer than 8 properties, so this avoids heap
/// allocation in the common case.
const INLINE_CAPACITY: usize = 8;

/// What a successful write asks the caller to do next.
///
/// The property model itself has no access to the host element or the
/// scheduler; the owning runtime replays `reflect` onto the host's attribute
/// map and marks the instance dirty. `changed` reports whether the stored
/// value actually differed, for callers that want to coalesce.
#[derive(Clone, Debug, PartialEq)]
pub struct WriteEffect {
    /// `true` if the stored value differs from the previous one.
    pub changed: bool,
    /// The attribute rewrite to replay, when the property reflects.
    pub reflect: Option<(String, AttributeEdit)>,
}

/// Per-instance property values, seeded from schema defaults.
///
/// Storage is dense and indexed by [`PropertyId`]: every declared property
/// always has a value, so an absent attribute can never surface as an error.
///
/// # Example
///
/// ```rust
/// use canopy_property::{PropertyDescriptor, PropertyValues, Schema, Value};
///
/// let mut schema = Schema::new();
/// let value = schema
///     .declare(PropertyDescriptor::number("value", 10.0))
///     .unwrap();
///
/// let mut values = PropertyValues::from_schema(&schema);
/// assert_eq!(values.number(value), 10.0);
///
/// values.write(value, Value::Number(20.0), &schema).unwrap();
/// assert_eq!(values.number(value), 20.0);
/// ```
#[derive(Clone, Debug)]
pub struct PropertyValues {
    values: SmallVec<[Value; INLINE_CAPACITY]>,
}

impl PropertyValues {
    /// Creates instance storage with every property at its declared default.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        Self {
            values: schema.iter().map(|(_, d)| d.default().clone()).collect(),
        }
    }

    /// Returns the current value of a property.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not declared in the schema this storage was built
    /// from.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> &Value {
        &self.values[usize::from(id.index())]
    }

    /// Returns a boolean property's value.
    ///
    /// # Panics
    ///
    /// Panics if the property is undeclared or not a boolean.
    #[must_use]
    pub fn bool(&self, id: PropertyId) -> bool {
        self.get(id)
            .as_bool()
            .unwrap_or_else(|| panic!("property {id} is not a boolean"))
    }

    /// Returns a numeric property's value.
    ///
    /// # Panics
    ///
    /// Panics if the property is undeclared or not a number.
    #[must_use]
    pub fn number(&self, id: PropertyId) -> f64 {
        self.get(id)
            .as_number()
            .unwrap_or_else(|| panic!("property {id} is not a number"))
    }

    /// Returns a text property's value.
    ///
    /// # Panics
    ///
    /// Panics if the property is undeclared or not text.
    #[must_use]
    pub fn text(&self, id: PropertyId) -> &str {
        self.get(id)
            .as_text()
            .unwrap_or_else(|| panic!("property {id} is not text"))
    }

    /// Returns an enum property's tag.
    ///
    /// # Panics
    ///
    /// Panics if the property is undeclared or not an enum.
    #[must_use]
    pub fn tag(&self, id: PropertyId) -> &'static str {
        self.get(id)
            .as_tag()
            .unwrap_or_else(|| panic!("property {id} is not an enum"))
    }

    /// Writes a property value, validating it against the declared kind.
    ///
    /// Enum tags are normalized to the schema's declared `&'static str`
    /// entries, so later comparisons can use pointer-stable tags.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidValueError`] on a kind mismatch or an enum tag
    /// outside the declared set. On error the stored value is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not declared in `schema`.
    pub fn write(
        &mut self,
        id: PropertyId,
        value: Value,
        schema: &Schema,
    ) -> Result<WriteEffect, InvalidValueError> {
        let descriptor = schema
            .get(id)
            .unwrap_or_else(|| panic!("property {id} is not declared in this schema"));
        let name = descriptor.name();

        let value = match (descriptor.kind(), value) {
            (ValueKind::Enum(tags), Value::Tag(tag)) => {
                match tags.iter().copied().find(|t| *t == tag) {
                    Some(canonical) => Value::Tag(canonical),
                    None => return Err(InvalidValueError::UnknownTag { name, tag }),
                }
            }
            (kind, value) if kind.accepts(&value) => value,
            (kind, value) => {
                return Err(InvalidValueError::KindMismatch {
                    name,
                    expected: kind.name(),
                    got: value.kind_name(),
                });
            }
        };

        let slot = &mut self.values[usize::from(id.index())];
        let changed = *slot != value;
        let reflect = if descriptor.is_reflected() {
            descriptor
                .attribute_owned()
                .map(|attribute| (attribute, serialize_value(&value)))
        } else {
            None
        };
        *slot = value;
        Ok(WriteEffect { changed, reflect })
    }

    /// Applies an attribute change (set or removed) to the matching property.
    ///
    /// `raw` is `None` when the attribute was removed. The conversion is total
    /// per the declared kind's rules; attributes with no matching descriptor
    /// are skipped and `None` is returned. Attribute-sourced updates never
    /// produce a reflect edit (that would echo the attribute back to itself).
    pub fn apply_attribute(
        &mut self,
        attribute: &str,
        raw: Option<&str>,
        schema: &Schema,
    ) -> Option<PropertyId> {
        let id = schema.by_attribute(attribute)?;
        let descriptor = schema.get(id)?;
        let value = parse_attribute(descriptor.kind(), raw, descriptor.default());
        self.values[usize::from(id.index())] = value;
        Some(id)
    }
}
