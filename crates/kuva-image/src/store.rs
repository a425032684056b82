//! Named image bindings
//!
//! Commands operate on images by name, the store maps those names to
//! the images produced so far. Writing to an existing name replaces
//! the binding, reading a missing name is an error surfaced to the
//! caller rather than a panic.
use std::collections::HashMap;

use crate::errors::ImageErrors;
use crate::image::Image;

/// A mapping from user chosen names to images
///
/// # Example
/// ```
/// use kuva_core::bit_depth::BitDepth;
/// use kuva_core::pixel::Pixel;
/// use kuva_image::image::Image;
/// use kuva_image::store::ImageStore;
///
/// let mut store = ImageStore::new();
/// let image = Image::from_fn(2, 2, BitDepth::EIGHT, |_, _| {
///     Pixel::grey(BitDepth::EIGHT, 128)
/// })
/// .unwrap();
///
/// store.insert("base", image);
///
/// assert!(store.get("base").is_ok());
/// assert!(store.get("missing").is_err());
/// ```
#[derive(Clone, Default)]
pub struct ImageStore
{
    images: HashMap<String, Image>
}

impl ImageStore
{
    /// Create an empty store
    #[must_use]
    pub fn new() -> ImageStore
    {
        ImageStore {
            images: HashMap::new()
        }
    }

    /// Look up an image by name
    pub fn get(&self, name: &str) -> Result<&Image, ImageErrors>
    {
        self.images
            .get(name)
            .ok_or_else(|| ImageErrors::UnknownImage(name.to_string()))
    }

    /// Bind `name` to `image`, replacing any previous binding
    pub fn insert(&mut self, name: &str, image: Image)
    {
        self.images.insert(name.to_string(), image);
    }

    /// Whether a binding exists under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool
    {
        self.images.contains_key(name)
    }

    /// Number of bindings currently held
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.images.len()
    }

    /// Whether the store holds no bindings
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.images.is_empty()
    }

    /// Iterate over the bound names in arbitrary order
    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        self.images.keys().map(String::as_str)
    }
}
