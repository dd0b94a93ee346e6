//! Per-frame shader parameters for the chunk (terrain) program.
//!
//! [`ChunkShaderParams`] owns the chunk shader's sixteen tunables and,
//! once per frame, binds the chunk texture set to its fixed units and
//! uploads the current uniform values. The operation is a bounded,
//! non-blocking sequence of state writes: if the terrain atlas has not
//! resolved yet the whole frame is treated as not-ready and nothing is
//! written.

use glam::Vec4;

use strata_assets::{TextureHandle, TextureRegistry};
use strata_editor::{PropertyId, PropertySheet, TunableProperty};
use strata_sky::all_weather_zenith;

use crate::frame::FrameContext;
use crate::program::{ShaderProgram, TextureBinder};
use crate::slot::TextureSlot;
use crate::texture_names;

// ---------------------------------------------------------------------------
// ChunkTunable
// ---------------------------------------------------------------------------

/// The chunk shader's tunable parameters, in property-sheet order.
///
/// Variant order matches the sheet's insertion order, which is the order
/// the inspection UI lists them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkTunable {
    /// Inscattering distance falloff.
    SkyInscatteringLength,
    /// Inscattering blend strength.
    SkyInscatteringStrength,
    /// Wave amplitude.
    WaveIntens,
    /// Wave amplitude falloff per octave.
    WaveIntensFalloff,
    /// Wave base size.
    WaveSize,
    /// Wave size falloff per octave.
    WaveSizeFalloff,
    /// Wave animation speed.
    WaveSpeed,
    /// Wave speed falloff per octave.
    WaveSpeedFalloff,
    /// Torch specular exponent on land.
    TorchSpecExp,
    /// Torch specular exponent on water.
    TorchWaterSpecExp,
    /// Sun specular exponent on water.
    WaterSpecExp,
    /// Water normal-map strength.
    WaterNormalBias,
    /// Fresnel reflectance bias.
    WaterFresnelBias,
    /// Fresnel reflectance power.
    WaterFresnelPow,
    /// Refraction distortion strength.
    WaterRefraction,
    /// Vertical offset of the water plane.
    WaterOffsetY,
}

impl ChunkTunable {
    /// Number of tunables.
    pub const COUNT: usize = 16;
}

/// Name, default, min, max — one row per [`ChunkTunable`], same order.
const TUNABLE_DEFS: [(ChunkTunable, &str, f32, f32, f32); ChunkTunable::COUNT] = [
    (ChunkTunable::SkyInscatteringLength, "skyInscatteringLength", 0.9, 0.0, 1.0),
    (ChunkTunable::SkyInscatteringStrength, "skyInscatteringStrength", 0.25, 0.0, 1.0),
    (ChunkTunable::WaveIntens, "waveIntens", 0.68, 0.0, 2.0),
    (ChunkTunable::WaveIntensFalloff, "waveIntensFalloff", 0.98, 0.0, 2.0),
    (ChunkTunable::WaveSize, "waveSize", 0.76, 0.0, 2.0),
    (ChunkTunable::WaveSizeFalloff, "waveSizeFalloff", 0.9, 0.0, 2.0),
    (ChunkTunable::WaveSpeed, "waveSpeed", 0.44, 0.0, 2.0),
    (ChunkTunable::WaveSpeedFalloff, "waveSpeedFalloff", 0.26, 0.0, 2.0),
    (ChunkTunable::TorchSpecExp, "torchSpecExp", 32.0, 0.0, 64.0),
    (ChunkTunable::TorchWaterSpecExp, "torchWaterSpecExp", 30.0, 0.0, 64.0),
    (ChunkTunable::WaterSpecExp, "waterSpecExp", 64.0, 0.0, 128.0),
    (ChunkTunable::WaterNormalBias, "waterNormalBias", 2.0, 1.0, 4.0),
    (ChunkTunable::WaterFresnelBias, "waterFresnelBias", 0.01, 0.01, 0.1),
    (ChunkTunable::WaterFresnelPow, "waterFresnelPow", 2.8, 0.0, 10.0),
    (ChunkTunable::WaterRefraction, "waterRefraction", 0.05, 0.0, 1.0),
    (ChunkTunable::WaterOffsetY, "waterOffsetY", 0.0, 0.0, 1.0),
];

// ---------------------------------------------------------------------------
// ChunkShaderParams
// ---------------------------------------------------------------------------

/// Parameter binding for the chunk shader program.
///
/// Created once when the renderer comes up; [`ChunkShaderParams::apply`]
/// runs once per frame on the render thread. Stateless across frames
/// except for the tunable values, which are mutated only externally
/// through the property sheet.
pub struct ChunkShaderParams {
    lava: Option<TextureHandle>,
    water_normal: Option<TextureHandle>,
    effects: Option<TextureHandle>,
    scene_reflected: Option<TextureHandle>,
    sheet: PropertySheet,
    ids: [PropertyId; ChunkTunable::COUNT],
}

impl ChunkShaderParams {
    /// Create the parameter set, resolving the auxiliary chunk textures.
    ///
    /// A texture that has not been registered yet is tolerated: its handle
    /// is re-resolved lazily on later frames and its bind is skipped until
    /// then.
    pub fn new(textures: &TextureRegistry) -> Self {
        let mut sheet = PropertySheet::new();
        let ids = TUNABLE_DEFS
            .map(|(_, name, default, min, max)| sheet.push(TunableProperty::new(name, default, min, max)));

        for (i, (tunable, ..)) in TUNABLE_DEFS.iter().enumerate() {
            debug_assert_eq!(*tunable as usize, i, "TUNABLE_DEFS out of order");
        }

        let mut params = Self {
            lava: None,
            water_normal: None,
            effects: None,
            scene_reflected: None,
            sheet,
            ids,
        };
        params.refresh_aux(textures);
        params
    }

    /// Current value of a tunable.
    pub fn value(&self, tunable: ChunkTunable) -> f32 {
        self.sheet[self.ids[tunable as usize]].value()
    }

    /// Property handle for a tunable, for editing tooling.
    pub fn id(&self, tunable: ChunkTunable) -> PropertyId {
        self.ids[tunable as usize]
    }

    /// The ordered tunable collection, for the inspection UI.
    pub fn properties(&self) -> &PropertySheet {
        &self.sheet
    }

    /// Mutable access for editing tooling; writes clamp per property.
    pub fn properties_mut(&mut self) -> &mut PropertySheet {
        &mut self.sheet
    }

    /// Bind the chunk texture set and upload all uniform values.
    ///
    /// Preconditions owned by the caller: `program` is the currently
    /// active chunk program, and `binder` targets the same GPU context.
    /// If the terrain atlas is unresolved this is a no-op — the frame is
    /// not ready, not an error, and the operation simply reruns next
    /// frame. A missing sky snapshot skips only the sky uniform block.
    pub fn apply(
        &mut self,
        program: &mut dyn ShaderProgram,
        binder: &mut dyn TextureBinder,
        ctx: &FrameContext<'_>,
    ) {
        let Some(atlas) = ctx.textures.resolve(texture_names::TERRAIN_ATLAS) else {
            log::trace!("terrain atlas not resolved, skipping chunk shader parameters");
            return;
        };
        self.refresh_aux(ctx.textures);

        if let Some(lava) = self.lava {
            binder.bind(TextureSlot::Lava, lava);
        }
        if let Some(water_normal) = self.water_normal {
            binder.bind(TextureSlot::WaterNormal, water_normal);
        }
        if let Some(effects) = self.effects {
            binder.bind(TextureSlot::Effects, effects);
        }
        if let Some(reflected) = self.scene_reflected {
            binder.bind(TextureSlot::SceneReflected, reflected);
        }
        if ctx.render.refractive_water
            && let Some(refracted) = ctx.textures.resolve(texture_names::SCENE_REFRACTED)
        {
            binder.bind(TextureSlot::SceneRefracted, refracted);
        }
        // Atlas last: unit 0 is left as the active unit for the draw.
        binder.bind(TextureSlot::Atlas, atlas);

        program.set_int("textureLava", TextureSlot::Lava.unit() as i32);
        program.set_int("textureWaterNormal", TextureSlot::WaterNormal.unit() as i32);
        program.set_int("textureEffects", TextureSlot::Effects.unit() as i32);
        program.set_int("textureWaterReflection", TextureSlot::SceneReflected.unit() as i32);
        // Written regardless of the refraction flag; the shader only
        // samples this unit when the flag is compiled in.
        program.set_int("textureWaterRefraction", TextureSlot::SceneRefracted.unit() as i32);
        program.set_int("textureAtlas", TextureSlot::Atlas.unit() as i32);

        program.set_float4(
            "lightingSettingsFrag",
            Vec4::new(
                self.value(ChunkTunable::TorchSpecExp),
                self.value(ChunkTunable::TorchWaterSpecExp),
                self.value(ChunkTunable::WaterSpecExp),
                0.0,
            ),
        );

        if let Some(sky) = ctx.sky {
            // Homogeneous sun vector; w = 1 participates in normalization,
            // matching the constants the zenith model was tuned against.
            let sun =
                Vec4::new(0.0, sky.sun_angle.cos(), sky.sun_angle.sin(), 1.0).normalize();
            let zenith = all_weather_zenith(sun.y, sky.turbidity);
            program.set_float3("skyInscatteringColor", zenith);
            program.set_float4(
                "skyInscatteringSettingsFrag",
                Vec4::new(
                    sky.color_exp,
                    self.value(ChunkTunable::SkyInscatteringStrength),
                    self.value(ChunkTunable::SkyInscatteringLength),
                    0.0,
                ),
            );
        }

        program.set_float4(
            "waterSettingsFrag",
            Vec4::new(
                self.value(ChunkTunable::WaterNormalBias),
                self.value(ChunkTunable::WaterRefraction),
                self.value(ChunkTunable::WaterFresnelBias),
                self.value(ChunkTunable::WaterFresnelPow),
            ),
        );

        if ctx.render.animated_water {
            program.set_float("waveIntensFalloff", self.value(ChunkTunable::WaveIntensFalloff));
            program.set_float("waveSizeFalloff", self.value(ChunkTunable::WaveSizeFalloff));
            program.set_float("waveSize", self.value(ChunkTunable::WaveSize));
            program.set_float("waveSpeedFalloff", self.value(ChunkTunable::WaveSpeedFalloff));
            program.set_float("waveSpeed", self.value(ChunkTunable::WaveSpeed));
            program.set_float("waveIntens", self.value(ChunkTunable::WaveIntens));
            program.set_float("waterOffsetY", self.value(ChunkTunable::WaterOffsetY));
        }
    }

    /// Resolve any auxiliary texture that was missing at construction.
    fn refresh_aux(&mut self, textures: &TextureRegistry) {
        if self.lava.is_none() {
            self.lava = textures.resolve(texture_names::LAVA);
        }
        if self.water_normal.is_none() {
            self.water_normal = textures.resolve(texture_names::WATER_NORMAL);
        }
        if self.effects.is_none() {
            self.effects = textures.resolve(texture_names::EFFECTS);
        }
        if self.scene_reflected.is_none() {
            self.scene_reflected = textures.resolve(texture_names::SCENE_REFLECTED);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
