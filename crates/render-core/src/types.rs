use std::sync::Arc;

/// Raw encoded image bytes (PNG or JPEG) under a stable name.
///
/// Backends decode lazily and cache by `name`, so the same logo drawn on
/// every page is embedded once.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub name: String,
    pub data: Arc<Vec<u8>>,
}

impl ImageAsset {
    pub fn new(name: impl Into<String>, data: Arc<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Document-level metadata written to the PDF Info dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}
