//! A single named, bounded, self-clamping scalar value.

use serde::Serialize;

/// A named scalar rendering parameter with a fixed valid range.
///
/// The stored value is always within `[min, max]`: the default is clamped
/// at construction and every write goes through [`TunableProperty::set`],
/// which clamps again. Non-finite writes are rejected and keep the
/// previous value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TunableProperty {
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
}

impl TunableProperty {
    /// Create a property with a default value and inclusive bounds.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `min > max` or a bound is non-finite.
    pub fn new(name: &'static str, default: f32, min: f32, max: f32) -> Self {
        debug_assert!(min.is_finite() && max.is_finite());
        debug_assert!(min <= max, "property '{name}' has inverted bounds");
        Self {
            name,
            value: default.clamp(min, max),
            min,
            max,
        }
    }

    /// The property's identifier, as shown in editing tooling.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The current value. Always within `[min, max]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Write a new value, clamped to `[min, max]`.
    ///
    /// NaN and infinite inputs are ignored and leave the value unchanged.
    pub fn set(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite write to property '{}'", self.name);
            return;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            log::debug!(
                "clamped property '{}' from {} to {}",
                self.name,
                value,
                clamped
            );
        }
        self.value = clamped;
    }
}
