//! Skysphere state: sun position angle and sky tunables.

use std::f32::consts::TAU;

use strata_editor::{PropertyId, PropertySheet, TunableProperty};

/// Per-frame snapshot of the sky state consumed by rendering systems.
///
/// Taken once per frame so the frame path reads a consistent set of values
/// even if an editor mutates the skysphere's tunables mid-frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyFrame {
    /// Sun position angle in radians, within `[0, 2π)`.
    pub sun_angle: f32,
    /// Atmospheric turbidity (Preetham haze measure).
    pub turbidity: f32,
    /// Sky color falloff exponent.
    pub color_exp: f32,
}

/// The sky dome: sun position over the day cycle plus sky tunables.
///
/// Owns its [`PropertySheet`]; editing tooling mutates turbidity and the
/// color exponent through property handles.
#[derive(Debug)]
pub struct Skysphere {
    sun_angle: f32,
    sheet: PropertySheet,
    turbidity: PropertyId,
    color_exp: PropertyId,
}

impl Skysphere {
    /// Create a skysphere with the sun at angle zero and default tunables.
    pub fn new() -> Self {
        let mut sheet = PropertySheet::new();
        let turbidity = sheet.push(TunableProperty::new("turbidity", 6.0, 2.0, 32.0));
        let color_exp = sheet.push(TunableProperty::new("colorExp", 1.0, 0.0, 10.0));
        Self {
            sun_angle: 0.0,
            sheet,
            turbidity,
            color_exp,
        }
    }

    /// Current sun position angle in radians, within `[0, 2π)`.
    pub fn sun_angle(&self) -> f32 {
        self.sun_angle
    }

    /// Set the sun position angle, wrapping into `[0, 2π)`.
    pub fn set_sun_angle(&mut self, angle: f32) {
        self.sun_angle = angle.rem_euclid(TAU);
    }

    /// Advance the day cycle by `dt` seconds for a day lasting
    /// `day_length` seconds (one full sun revolution).
    pub fn advance(&mut self, dt: f32, day_length: f32) {
        if day_length <= 0.0 {
            log::warn!("ignoring non-positive day length {day_length}");
            return;
        }
        self.set_sun_angle(self.sun_angle + TAU * dt / day_length);
    }

    /// Current turbidity value.
    pub fn turbidity(&self) -> f32 {
        self.sheet[self.turbidity].value()
    }

    /// Current color falloff exponent.
    pub fn color_exp(&self) -> f32 {
        self.sheet[self.color_exp].value()
    }

    /// The sky tunables, for the editor surface.
    pub fn properties(&self) -> &PropertySheet {
        &self.sheet
    }

    /// Mutable access for editing tooling.
    pub fn properties_mut(&mut self) -> &mut PropertySheet {
        &mut self.sheet
    }

    /// Snapshot the state the frame path needs.
    pub fn frame(&self) -> SkyFrame {
        SkyFrame {
            sun_angle: self.sun_angle,
            turbidity: self.turbidity(),
            color_exp: self.color_exp(),
        }
    }
}

impl Default for Skysphere {
    fn default() -> Self {
        Self::new()
    }
}
