//! Ordered collection of tunable properties with stable handles.

use std::collections::BTreeMap;
use std::ops::Index;

use crate::TunableProperty;

/// Opaque handle to a property inside one [`PropertySheet`].
///
/// Handles are only meaningful for the sheet that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyId(usize);

/// An insertion-ordered collection of [`TunableProperty`] values.
///
/// Iteration order is insertion order and is stable across calls, so an
/// inspection UI lists entries deterministically. Entries are never
/// removed; the owning system keeps the sheet for its whole lifetime.
#[derive(Clone, Debug, Default)]
pub struct PropertySheet {
    entries: Vec<TunableProperty>,
}

impl PropertySheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property and return its handle.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if a property with the same name is already
    /// present.
    pub fn push(&mut self, property: TunableProperty) -> PropertyId {
        debug_assert!(
            self.find(property.name()).is_none(),
            "duplicate property name '{}'",
            property.name()
        );
        let id = PropertyId(self.entries.len());
        self.entries.push(property);
        id
    }

    /// Look up a property by handle.
    pub fn get(&self, id: PropertyId) -> Option<&TunableProperty> {
        self.entries.get(id.0)
    }

    /// Look up a handle by property name.
    pub fn find(&self, name: &str) -> Option<PropertyId> {
        self.entries
            .iter()
            .position(|p| p.name() == name)
            .map(PropertyId)
    }

    /// Write a value through the sheet, clamped by the property's bounds.
    ///
    /// Returns `false` if the handle does not belong to this sheet.
    pub fn set(&mut self, id: PropertyId, value: f32) -> bool {
        match self.entries.get_mut(id.0) {
            Some(property) => {
                property.set(value);
                true
            }
            None => false,
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &TunableProperty)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, p)| (PropertyId(i), p))
    }

    /// Number of properties in the sheet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the sheet has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of current values keyed by name, for editor persistence.
    pub fn snapshot(&self) -> BTreeMap<&'static str, f32> {
        self.entries.iter().map(|p| (p.name(), p.value())).collect()
    }

    /// Restore values from a snapshot. Unknown names are ignored; restored
    /// values are clamped by each property's bounds.
    pub fn restore(&mut self, values: &BTreeMap<String, f32>) {
        for property in &mut self.entries {
            if let Some(&value) = values.get(property.name()) {
                property.set(value);
            }
        }
    }
}

impl Index<PropertyId> for PropertySheet {
    type Output = TunableProperty;

    /// # Panics
    ///
    /// Panics if the handle was issued by a different sheet.
    fn index(&self, id: PropertyId) -> &TunableProperty {
        &self.entries[id.0]
    }
}
