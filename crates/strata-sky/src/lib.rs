//! Sky model for Strata: skysphere state and the analytic zenith color.
//!
//! [`Skysphere`] tracks the sun's position angle over the day cycle and
//! owns the sky tunables (turbidity, color exponent). Consumers on the
//! frame path take a [`SkyFrame`] snapshot rather than reaching into the
//! skysphere mid-frame.

mod skysphere;
mod zenith;

pub use skysphere::{SkyFrame, Skysphere};
pub use zenith::all_weather_zenith;
