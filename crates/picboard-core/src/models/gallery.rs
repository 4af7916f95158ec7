use std::path::PathBuf;

use serde::Serialize;

/// A persisted upload. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredImage {
    pub derived_file_name: String,
    pub path: PathBuf,
}

/// One file of the storage directory, as shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub file_name: String,
    pub path: PathBuf,
    /// File name without its last extension.
    pub caption: String,
}

impl GalleryEntry {
    pub fn new(file_name: String, path: PathBuf) -> Self {
        let caption = caption_from_file_name(&file_name).to_string();
        Self {
            file_name,
            path,
            caption,
        }
    }
}

/// Strip the last extension: `MyPhoto.JPG` -> `MyPhoto`, `.jpg` -> ``, `README` -> `README`.
pub fn caption_from_file_name(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}
