use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{ImageError, Rgba, RgbaImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

impl TextureId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A loaded texture together with its pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHandle {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Solid fill used when an image cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder {
    pub color: (u8, u8, u8),
    pub size: (u32, u32),
}

impl Placeholder {
    pub const fn new(color: (u8, u8, u8), size: (u32, u32)) -> Self {
        Self { color, size }
    }

    pub fn render(&self) -> RgbaImage {
        let (r, g, b) = self.color;
        RgbaImage::from_pixel(self.size.0.max(1), self.size.1.max(1), Rgba([r, g, b, 255]))
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self::new((0, 255, 0), (100, 100))
    }
}

#[derive(Debug)]
pub enum LoadedImage {
    Decoded(RgbaImage),
    Missing(Placeholder),
}

impl LoadedImage {
    pub fn into_image(self) -> RgbaImage {
        match self {
            LoadedImage::Decoded(image) => image,
            LoadedImage::Missing(placeholder) => placeholder.render(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, LoadedImage::Missing(_))
    }
}

/// Decodes `path`, or reports the placeholder to use instead.
pub fn load_image(path: &Path, placeholder: Placeholder) -> LoadedImage {
    match image::open(path) {
        Ok(image) => LoadedImage::Decoded(image.to_rgba8()),
        Err(ImageError::IoError(err)) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "image file not found, using placeholder");
            LoadedImage::Missing(placeholder)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "image failed to load, using placeholder");
            LoadedImage::Missing(placeholder)
        }
    }
}

#[derive(Debug)]
pub struct Texture {
    pub key: String,
    pub image: RgbaImage,
}

#[derive(Debug, Default)]
pub struct ResourceManager {
    root: PathBuf,
    textures: Vec<Texture>,
    by_key: HashMap<String, TextureHandle>,
    placeholders: HashMap<Placeholder, TextureHandle>,
}

impl ResourceManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Loads an image relative to the asset root. Repeated keys return the
    /// cached handle; missing images share one texture per placeholder.
    pub fn load_texture(&mut self, key: &str, placeholder: Placeholder) -> TextureHandle {
        if let Some(handle) = self.by_key.get(key) {
            return *handle;
        }

        let path = self.root.join(key);
        let handle = match load_image(&path, placeholder) {
            LoadedImage::Decoded(image) => self.insert(key.to_string(), image),
            LoadedImage::Missing(placeholder) => self.placeholder(placeholder),
        };
        tracing::debug!(%key, width = handle.width, height = handle.height, "registered texture");
        self.by_key.insert(key.to_string(), handle);
        handle
    }

    pub fn placeholder(&mut self, placeholder: Placeholder) -> TextureHandle {
        if let Some(handle) = self.placeholders.get(&placeholder) {
            return *handle;
        }
        let (r, g, b) = placeholder.color;
        let key = format!("placeholder:{r},{g},{b}:{}x{}", placeholder.size.0, placeholder.size.1);
        let handle = self.insert(key, placeholder.render());
        self.placeholders.insert(placeholder, handle);
        handle
    }

    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    fn insert(&mut self, key: String, image: RgbaImage) -> TextureHandle {
        let handle = TextureHandle {
            id: TextureId(self.textures.len()),
            width: image.width(),
            height: image.height(),
        };
        self.textures.push(Texture { key, image });
        handle
    }
}
