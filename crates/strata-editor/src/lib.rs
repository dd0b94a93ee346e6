//! Editor-facing tunable property surface for Strata.
//!
//! Rendering systems own named, bounded, runtime-editable scalar values
//! ([`TunableProperty`]) collected in an ordered [`PropertySheet`]. Editing
//! tooling addresses entries through [`PropertyId`] handles and clamped
//! writes — it never holds raw references into the owning system.

mod property;
mod sheet;

pub use property::TunableProperty;
pub use sheet::{PropertyId, PropertySheet};
