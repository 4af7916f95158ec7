//! Form field names, routes and fixed page text.

/// Multipart field carrying the caption.
pub const TITLE_FIELD: &str = "title";

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// Route prefix under which stored files are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

pub const PAGE_TITLE: &str = "Image Gallery";

/// Shown when an accepted upload cannot be moved into storage.
pub const MOVE_FAILED_MESSAGE: &str = "Failed to move the file to the upload directory.";

/// Shown in place of the gallery when the storage directory cannot be read.
pub const GALLERY_UNAVAILABLE_MESSAGE: &str = "Unable to read the gallery.";
