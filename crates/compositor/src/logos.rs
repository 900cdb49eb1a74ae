use hromada_render_core::ImageAsset;
use hromada_traits::{ResourceError, ResourceProvider};
use hromada_types::Size;
use std::collections::HashMap;

pub const POCACITO: &str = "POCACITO";
pub const CANDID: &str = "Candid";

/// Native pixel dimensions of the known logos. Strip and sponsor layout is
/// computed from these, not from the decoded images, so a logo's slot
/// width does not depend on which file happens to be on disk.
const NATIVE_DIMENSIONS: &[(&str, f32, f32)] = &[
    ("Ecoaction", 516.0, 242.0),
    ("Ecoclub", 466.0, 138.0),
    ("RePower Ukraine", 506.0, 186.0),
    ("Greenpeace CEE", 512.0, 256.0),
    ("Energy Act For Ukraine", 1330.0, 1330.0),
    (POCACITO, 750.0, 300.0),
    (CANDID, 214.0, 216.0),
];

/// Native size of a named logo, if it is in the table.
pub fn native_size(name: &str) -> Option<Size> {
    NATIVE_DIMENSIONS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, w, h)| Size::new(*w, *h))
}

/// Width of `name` drawn `target_h` high. Unknown logos are square.
pub fn width_for_height(name: &str, target_h: f32) -> f32 {
    match native_size(name) {
        Some(size) => target_h * size.aspect(),
        None => target_h,
    }
}

/// The images available to this run. Every entry is optional: a logo that
/// is absent is simply not drawn.
#[derive(Debug, Clone, Default)]
pub struct LogoCatalog {
    primary: Option<ImageAsset>,
    logos: HashMap<String, ImageAsset>,
}

impl LogoCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the primary mark and each `(name, path)` logo through
    /// `provider`, skipping files that do not exist.
    pub fn load(
        provider: &dyn ResourceProvider,
        primary_path: &str,
        logos: &[(&str, String)],
    ) -> Result<Self, ResourceError> {
        let mut catalog = Self::new();

        match provider.load_optional(primary_path)? {
            Some(data) => catalog.primary = Some(ImageAsset::new("hromada", data)),
            None => log::debug!("Primary logo '{}' not found, header will omit it", primary_path),
        }

        for (name, path) in logos {
            match provider.load_optional(path)? {
                Some(data) => {
                    catalog.insert(ImageAsset::new(*name, data));
                }
                None => log::debug!("Logo '{}' not found at '{}', skipping", name, path),
            }
        }

        log::debug!(
            "Loaded {} of {} logos (primary: {})",
            catalog.logos.len(),
            logos.len(),
            catalog.primary.is_some()
        );
        Ok(catalog)
    }

    pub fn with_primary(mut self, asset: ImageAsset) -> Self {
        self.primary = Some(asset);
        self
    }

    /// Registers `asset` under its own name.
    pub fn insert(&mut self, asset: ImageAsset) -> &mut Self {
        self.logos.insert(asset.name.clone(), asset);
        self
    }

    pub fn primary(&self) -> Option<&ImageAsset> {
        self.primary.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&ImageAsset> {
        self.logos.get(name)
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}
