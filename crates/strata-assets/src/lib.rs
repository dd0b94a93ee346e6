//! Texture asset registry for Strata.
//!
//! Loads named textures from a RON manifest, decodes them with `image`,
//! and hands out opaque [`TextureHandle`]s. The registry owns all pixel
//! data; consumers hold handles and must tolerate a name that has not
//! resolved yet (assets may still be loading when a frame runs).

mod registry;
mod texture;

pub use registry::{AssetError, TextureEntry, TextureManifest, TextureRegistry};
pub use texture::{TextureData, TextureHandle};
