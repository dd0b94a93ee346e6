//! Per-frame context handed to parameter binding.

use strata_assets::TextureRegistry;
use strata_config::RenderConfig;
use strata_sky::SkyFrame;

/// Everything parameter binding reads besides its own tunables.
///
/// Built fresh by the frame loop so feature flags are re-read every frame
/// and no system reaches into process-wide state. The sky snapshot is
/// optional: at startup or in headless contexts there is no world to take
/// it from, and its dependent uniforms are simply skipped.
pub struct FrameContext<'a> {
    /// Current render settings, including the water feature flags.
    pub render: &'a RenderConfig,
    /// Texture registry for name resolution.
    pub textures: &'a TextureRegistry,
    /// Sky state snapshot, if a world is loaded.
    pub sky: Option<SkyFrame>,
}
