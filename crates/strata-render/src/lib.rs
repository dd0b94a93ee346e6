//! Render-side shader parameter binding for Strata.
//!
//! The GPU backend (shader compilation, texture upload, framebuffers)
//! lives outside this crate; it implements the [`ShaderProgram`] and
//! [`TextureBinder`] traits. This crate owns the per-shader tunables and
//! runs the per-frame parameter upload for the chunk shader through
//! [`ChunkShaderParams`].

mod chunk_params;
mod frame;
mod program;
mod slot;

pub use chunk_params::{ChunkShaderParams, ChunkTunable};
pub use frame::FrameContext;
pub use program::{ShaderProgram, TextureBinder};
pub use slot::TextureSlot;

/// Registry names of the textures the chunk shader samples.
pub mod texture_names {
    /// Primary terrain atlas; required before any chunk parameters bind.
    pub const TERRAIN_ATLAS: &str = "terrain";
    /// Still-lava animation sheet.
    pub const LAVA: &str = "lava_still";
    /// Water surface normal map.
    pub const WATER_NORMAL: &str = "water_normal";
    /// Block effects sheet (breaking overlay, etc.).
    pub const EFFECTS: &str = "effects";
    /// Reflected-scene color attachment from the post-processing stage.
    pub const SCENE_REFLECTED: &str = "scene_reflected";
    /// Refracted-scene color attachment from the post-processing stage.
    pub const SCENE_REFRACTED: &str = "scene_refracted";
}
