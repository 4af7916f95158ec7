use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Image content types the gallery knows how to accept.
///
/// Parsing is an exact, case-sensitive match on the declared MIME string.
/// The content itself is never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageMimeType {
    Jpeg,
    Png,
    Gif,
}

impl ImageMimeType {
    pub const ALL: [ImageMimeType; 3] = [ImageMimeType::Jpeg, ImageMimeType::Png, ImageMimeType::Gif];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMimeType::Jpeg => "image/jpeg",
            ImageMimeType::Png => "image/png",
            ImageMimeType::Gif => "image/gif",
        }
    }

    /// Exact match against the declared MIME string.
    pub fn parse_exact(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mime| mime.as_str() == s)
    }

    /// Extension written when the client-supplied one does not match.
    pub fn canonical_extension(&self) -> &'static str {
        match self {
            ImageMimeType::Jpeg => "jpg",
            ImageMimeType::Png => "png",
            ImageMimeType::Gif => "gif",
        }
    }

    /// Whether `extension` (compared case-insensitively) belongs to this type.
    pub fn matches_extension(&self, extension: &str) -> bool {
        let ext = extension.to_ascii_lowercase();
        match self {
            ImageMimeType::Jpeg => ext == "jpg" || ext == "jpeg",
            ImageMimeType::Png => ext == "png",
            ImageMimeType::Gif => ext == "gif",
        }
    }
}

impl FromStr for ImageMimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_exact(s).ok_or_else(|| anyhow::anyhow!("Unsupported image content type: {}", s))
    }
}

impl Display for ImageMimeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
