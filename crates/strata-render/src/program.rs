//! Interfaces to the GPU backend consumed by parameter binding.

use glam::{Vec3, Vec4};

use strata_assets::TextureHandle;

use crate::slot::TextureSlot;

/// Uniform-upload interface of a compiled, linked shader program.
///
/// Implemented by the GPU backend. The caller guarantees the program is
/// the currently active one; parameter binding only writes uniform values
/// and never manages the program's lifecycle. Writes are total overwrites,
/// so repeating an identical write sequence is idempotent.
pub trait ShaderProgram {
    /// Write an integer uniform (sampler unit indices).
    fn set_int(&mut self, name: &str, value: i32);
    /// Write a scalar float uniform.
    fn set_float(&mut self, name: &str, value: f32);
    /// Write a 3-component float uniform.
    fn set_float3(&mut self, name: &str, value: Vec3);
    /// Write a 4-component float uniform.
    fn set_float4(&mut self, name: &str, value: Vec4);
}

/// Texture-unit binding interface.
///
/// Implemented by the GPU backend; binds a registry texture to the fixed
/// unit of a [`TextureSlot`] for the current frame.
pub trait TextureBinder {
    /// Bind `texture` to `slot`'s unit, leaving that unit active.
    fn bind(&mut self, slot: TextureSlot, texture: TextureHandle);
}
