//! Fixed texture-unit assignments for the chunk shader.

/// Texture slots the chunk shader samples from, one per texture unit.
///
/// The unit numbering is part of the shader contract: sampler uniforms are
/// written with these indices every frame. Using an enum instead of bare
/// integers keeps slot assignments collision-free as textures are added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Primary terrain atlas. Bound last so unit 0 is left active.
    Atlas,
    /// Still-lava animation sheet.
    Lava,
    /// Water surface normal map.
    WaterNormal,
    /// Block effects sheet.
    Effects,
    /// Reflected-scene color attachment.
    SceneReflected,
    /// Refracted-scene color attachment.
    SceneRefracted,
}

impl TextureSlot {
    /// All slots, in unit order.
    pub const ALL: [TextureSlot; 6] = [
        TextureSlot::Atlas,
        TextureSlot::Lava,
        TextureSlot::WaterNormal,
        TextureSlot::Effects,
        TextureSlot::SceneReflected,
        TextureSlot::SceneRefracted,
    ];

    /// The texture unit this slot binds to.
    pub const fn unit(self) -> u32 {
        match self {
            TextureSlot::Atlas => 0,
            TextureSlot::Lava => 1,
            TextureSlot::WaterNormal => 2,
            TextureSlot::Effects => 3,
            TextureSlot::SceneReflected => 4,
            TextureSlot::SceneRefracted => 5,
        }
    }
}
