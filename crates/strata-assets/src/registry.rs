//! Texture registry: name → handle resolution backed by a RON manifest.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::texture::{TextureData, TextureHandle};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned during registry construction and insertion.
#[derive(Debug, Error)]
pub enum AssetError {
    /// I/O error reading the manifest file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// RON deserialization error.
    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// Failed to decode an image file.
    #[error("image load error: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Duplicate texture name in the manifest.
    #[error("duplicate texture name: {0}")]
    DuplicateName(String),
}

// ---------------------------------------------------------------------------
// RON manifest types
// ---------------------------------------------------------------------------

/// Top-level RON manifest listing named texture files.
#[derive(serde::Deserialize)]
pub struct TextureManifest {
    /// Texture entries.
    pub textures: Vec<TextureEntry>,
}

/// A single texture entry in the RON manifest.
#[derive(serde::Deserialize)]
pub struct TextureEntry {
    /// Name other systems resolve the texture by.
    pub name: String,
    /// Image file path relative to the texture base directory.
    pub file: String,
}

// ---------------------------------------------------------------------------
// TextureRegistry
// ---------------------------------------------------------------------------

/// Backing resource for one registry slot.
#[derive(Debug)]
enum Backing {
    /// Decoded image pixels, owned by the registry.
    Image(TextureData),
    /// A render-target color attachment; pixel storage lives on the GPU
    /// side and is managed by the post-processing stage.
    RenderTarget,
}

/// Name-keyed texture registry handing out opaque [`TextureHandle`]s.
///
/// The registry owns all CPU-side pixel data. Insertion is allowed after
/// construction so late-loading assets (the terrain atlas) and render
/// targets can appear once their subsystems come up; `resolve` returning
/// `None` for a name simply means "not ready yet".
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<(String, Backing)>,
    name_to_handle: HashMap<String, TextureHandle>,
}

impl TextureRegistry {
    /// Most textures a registry can hold, bounded by the handle width.
    ///
    /// Inserting a new name past this limit panics; replacing an existing
    /// name never allocates a handle and is always allowed.
    pub const CAPACITY: usize = u16::MAX as usize + 1;

    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a RON manifest file on disk. Texture paths are
    /// resolved relative to `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] on I/O, parse, decode, or duplicate-name
    /// failures. A listed file that does not exist is not an error: a
    /// deterministic placeholder is generated instead so development
    /// builds keep running with missing art.
    pub fn from_ron(path: &Path, base_dir: &Path) -> Result<Self, AssetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents, base_dir)
    }

    /// Load a registry from a RON manifest string.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`TextureRegistry::from_ron`].
    pub fn from_ron_str(ron_str: &str, base_dir: &Path) -> Result<Self, AssetError> {
        let manifest: TextureManifest = ron::from_str(ron_str)?;
        let mut registry = Self::new();

        for entry in manifest.textures {
            if registry.name_to_handle.contains_key(&entry.name) {
                return Err(AssetError::DuplicateName(entry.name));
            }
            let data = load_or_generate(&entry.name, &entry.file, base_dir)?;
            registry.push(entry.name, Backing::Image(data));
        }

        log::info!("texture registry loaded: {} entries", registry.len());
        Ok(registry)
    }

    /// Insert a decoded texture under `name`.
    ///
    /// If the name is already registered the pixel data is replaced and
    /// the existing handle is kept, so outstanding handles stay valid.
    ///
    /// # Panics
    ///
    /// Panics if a new name would exceed [`TextureRegistry::CAPACITY`].
    pub fn insert_image(&mut self, name: &str, data: TextureData) -> TextureHandle {
        match self.name_to_handle.get(name) {
            Some(&handle) => {
                self.entries[handle.0 as usize].1 = Backing::Image(data);
                log::debug!("replaced texture '{name}'");
                handle
            }
            None => self.push(name.to_string(), Backing::Image(data)),
        }
    }

    /// Decode an image file and insert it under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the file cannot be read or decoded.
    pub fn insert_from_file(&mut self, name: &str, path: &Path) -> Result<TextureHandle, AssetError> {
        let data = TextureData::from_image(image::open(path)?.to_rgba8());
        Ok(self.insert_image(name, data))
    }

    /// Register a render-target color attachment under a stable name.
    ///
    /// Re-registering (e.g. after the target is recreated on resize)
    /// returns the same handle.
    ///
    /// # Panics
    ///
    /// Panics if a new name would exceed [`TextureRegistry::CAPACITY`].
    pub fn register_target(&mut self, name: &str) -> TextureHandle {
        match self.name_to_handle.get(name) {
            Some(&handle) => handle,
            None => self.push(name.to_string(), Backing::RenderTarget),
        }
    }

    /// Resolve a name to a handle, or `None` if the texture is not
    /// registered (yet).
    pub fn resolve(&self, name: &str) -> Option<TextureHandle> {
        self.name_to_handle.get(name).copied()
    }

    /// CPU-side pixel data for a handle. `None` for render targets and
    /// foreign handles.
    pub fn data(&self, handle: TextureHandle) -> Option<&TextureData> {
        match self.entries.get(handle.0 as usize) {
            Some((_, Backing::Image(data))) => Some(data),
            _ => None,
        }
    }

    /// Name a handle was registered under.
    pub fn name(&self, handle: TextureHandle) -> Option<&str> {
        self.entries.get(handle.0 as usize).map(|(n, _)| n.as_str())
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_handle.contains_key(name)
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, name: String, backing: Backing) -> TextureHandle {
        let index = u16::try_from(self.entries.len()).expect("texture registry full");
        let handle = TextureHandle(index);
        self.name_to_handle.insert(name.clone(), handle);
        self.entries.push((name, backing));
        handle
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Loads a texture file from disk, or generates a solid-color placeholder
/// if the file is missing so missing art never takes the engine down.
fn load_or_generate(name: &str, file: &str, base_dir: &Path) -> Result<TextureData, AssetError> {
    let path = base_dir.join(file);
    if path.exists() {
        return Ok(TextureData::from_image(image::open(&path)?.to_rgba8()));
    }

    log::warn!("texture file '{file}' missing, generating placeholder for '{name}'");
    Ok(placeholder(name))
}

/// Deterministic solid-color placeholder derived from the texture name.
fn placeholder(name: &str) -> TextureData {
    let hash = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;
    TextureData::from_image(image::RgbaImage::from_pixel(
        32,
        32,
        image::Rgba([r, g, b, 255]),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_ron() -> &'static str {
        r#"TextureManifest(
            textures: [
                (name: "terrain", file: "terrain.png"),
                (name: "lava_still", file: "lava_still.png"),
                (name: "water_normal", file: "water_normal.png"),
            ],
        )"#
    }

    fn create_test_textures() -> TempDir {
        let dir = TempDir::new().unwrap();
        let terrain = image::RgbaImage::from_pixel(16, 16, image::Rgba([100, 90, 60, 255]));
        terrain.save(dir.path().join("terrain.png")).unwrap();
        let lava = image::RgbaImage::from_pixel(16, 16, image::Rgba([230, 90, 20, 255]));
        lava.save(dir.path().join("lava_still.png")).unwrap();
        // water_normal.png intentionally absent -> placeholder
        dir
    }

    #[test]
    fn test_registry_loads_from_ron() {
        let dir = create_test_textures();
        let registry = TextureRegistry::from_ron_str(sample_ron(), dir.path()).unwrap();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("terrain"));
        assert!(registry.contains("lava_still"));
    }

    #[test]
    fn test_resolve_unknown_name_returns_none() {
        let registry = TextureRegistry::new();
        assert!(registry.resolve("terrain").is_none());
    }

    #[test]
    fn test_resolved_handle_has_pixel_data() {
        let dir = create_test_textures();
        let registry = TextureRegistry::from_ron_str(sample_ron(), dir.path()).unwrap();
        let handle = registry.resolve("terrain").unwrap();
        let data = registry.data(handle).unwrap();
        assert_eq!((data.width, data.height), (16, 16));
        assert_eq!(registry.name(handle), Some("terrain"));
    }

    #[test]
    fn test_missing_file_generates_placeholder() {
        let dir = create_test_textures();
        let registry = TextureRegistry::from_ron_str(sample_ron(), dir.path()).unwrap();
        let handle = registry.resolve("water_normal").unwrap();
        let data = registry.data(handle).unwrap();
        assert_eq!((data.width, data.height), (32, 32));
    }

    #[test]
    fn test_placeholder_is_deterministic_per_name() {
        assert_eq!(placeholder("water_normal"), placeholder("water_normal"));
        assert_ne!(
            placeholder("water_normal").pixels,
            placeholder("effects").pixels
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let ron = r#"TextureManifest(
            textures: [
                (name: "terrain", file: "a.png"),
                (name: "terrain", file: "b.png"),
            ],
        )"#;
        let result = TextureRegistry::from_ron_str(ron, Path::new("missing"));
        assert!(matches!(result, Err(AssetError::DuplicateName(_))));
    }

    #[test]
    fn test_register_target_is_handle_stable() {
        let mut registry = TextureRegistry::new();
        let first = registry.register_target("scene_reflected");
        let second = registry.register_target("scene_reflected");
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert!(registry.data(first).is_none());
    }

    #[test]
    fn test_late_insertion_resolves() {
        let mut registry = TextureRegistry::new();
        assert!(registry.resolve("terrain").is_none());

        let data = TextureData::from_image(image::RgbaImage::from_pixel(
            8,
            8,
            image::Rgba([0, 0, 0, 255]),
        ));
        let handle = registry.insert_image("terrain", data);
        assert_eq!(registry.resolve("terrain"), Some(handle));
    }

    #[test]
    fn test_replacing_image_keeps_handle() {
        let mut registry = TextureRegistry::new();
        let small = TextureData::from_image(image::RgbaImage::from_pixel(
            8,
            8,
            image::Rgba([0, 0, 0, 255]),
        ));
        let big = TextureData::from_image(image::RgbaImage::from_pixel(
            16,
            16,
            image::Rgba([0, 0, 0, 255]),
        ));
        let first = registry.insert_image("terrain", small);
        let second = registry.insert_image("terrain", big);
        assert_eq!(first, second);
        assert_eq!(registry.data(first).unwrap().width, 16);
    }

    #[test]
    fn test_insert_from_file_decodes() {
        let dir = create_test_textures();
        let mut registry = TextureRegistry::new();
        let handle = registry
            .insert_from_file("terrain", &dir.path().join("terrain.png"))
            .unwrap();
        assert_eq!(registry.data(handle).unwrap().width, 16);
    }

    #[test]
    fn test_handles_stay_distinct_up_to_capacity() {
        let mut registry = TextureRegistry::new();
        for i in 0..TextureRegistry::CAPACITY {
            registry.register_target(&format!("target_{i}"));
        }
        assert_eq!(registry.len(), TextureRegistry::CAPACITY);
        let last = registry.resolve("target_65535").unwrap();
        assert_eq!(last.index(), u16::MAX);
    }

    #[test]
    #[should_panic(expected = "texture registry full")]
    fn test_insert_past_capacity_panics() {
        let mut registry = TextureRegistry::new();
        for i in 0..=TextureRegistry::CAPACITY {
            registry.register_target(&format!("target_{i}"));
        }
    }

    #[test]
    fn test_invalid_manifest_is_an_error() {
        let result = TextureRegistry::from_ron_str("{{nope}}", Path::new("missing"));
        assert!(matches!(result, Err(AssetError::Ron(_))));
    }
}
