//! Shared file name derivation for stored images.
//!
//! Format: `{sanitize_title(caption)}.{extension}`. All of it is a pure
//! function of the caption, the original file name, the declared content
//! type and the extension policy.

use picboard_core::models::ImageMimeType;
use picboard_core::ExtensionPolicy;

/// Strip every character outside `[A-Za-z0-9-]`.
///
/// Case is kept and stripped runs are not replaced by anything, so
/// `"My Photo!!"` becomes `"MyPhoto"` and `"a b"`/`"ab"` collide.
pub fn sanitize_title(caption: &str) -> String {
    caption
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Substring after the last `.` of the original file name, or `""` without one.
pub fn file_extension(original_file_name: &str) -> &str {
    original_file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("")
}

/// Strip every character outside `[A-Za-z0-9]` from an extension.
pub fn sanitize_extension(extension: &str) -> String {
    extension
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Extension written to disk for an upload.
pub fn resolve_extension(
    original_file_name: &str,
    declared_mime_type: &str,
    policy: ExtensionPolicy,
) -> String {
    let extension = sanitize_extension(file_extension(original_file_name));

    match policy {
        ExtensionPolicy::Verbatim => extension,
        ExtensionPolicy::MatchContentType => match ImageMimeType::parse_exact(declared_mime_type) {
            Some(mime) if mime.matches_extension(&extension) => extension,
            Some(mime) => {
                tracing::debug!(
                    original_extension = %extension,
                    content_type = %mime,
                    "Extension does not match content type, using canonical extension"
                );
                mime.canonical_extension().to_string()
            }
            None => extension,
        },
    }
}

/// Full stored file name for an upload.
pub fn derive_file_name(
    caption: &str,
    original_file_name: &str,
    declared_mime_type: &str,
    policy: ExtensionPolicy,
) -> String {
    format!(
        "{}.{}",
        sanitize_title(caption),
        resolve_extension(original_file_name, declared_mime_type, policy)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title_strips_disallowed_characters() {
        assert_eq!(sanitize_title("My Photo!!"), "MyPhoto");
        assert_eq!(sanitize_title("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_title("sunset-2024_v2"), "sunset-2024v2");
        assert_eq!(sanitize_title("Crème brûlée"), "Crmebrle");
        assert_eq!(sanitize_title("!!!"), "");
    }

    #[test]
    fn test_sanitize_title_is_idempotent() {
        for caption in ["My Photo!!", "a/b\\c", "  x y z  ", "ok", "ümlaut-Ö1", ""] {
            let once = sanitize_title(caption);
            assert_eq!(sanitize_title(&once), once);
        }
    }

    #[test]
    fn test_distinct_captions_can_collide() {
        assert_eq!(sanitize_title("a b"), sanitize_title("ab"));
        assert_eq!(sanitize_title("a!b"), sanitize_title("a?b"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("pic.JPG"), "JPG");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("noext"), "");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_verbatim_policy_keeps_extension_but_strips_separators() {
        let policy = ExtensionPolicy::Verbatim;
        assert_eq!(resolve_extension("shell.php", "image/jpeg", policy), "php");
        assert_eq!(resolve_extension("noext", "image/png", policy), "");
        assert_eq!(resolve_extension("x./../evil", "image/png", policy), "evil");
        assert_eq!(
            derive_file_name("My Photo!!", "noext", "image/png", policy),
            "MyPhoto."
        );
    }

    #[test]
    fn test_match_policy_replaces_mismatched_extension() {
        let policy = ExtensionPolicy::MatchContentType;
        assert_eq!(resolve_extension("pic.JPG", "image/jpeg", policy), "JPG");
        assert_eq!(resolve_extension("pic.jpeg", "image/jpeg", policy), "jpeg");
        assert_eq!(resolve_extension("shell.php", "image/jpeg", policy), "jpg");
        assert_eq!(resolve_extension("noext", "image/gif", policy), "gif");
        assert_eq!(resolve_extension("pic.png", "image/gif", policy), "gif");
    }

    #[test]
    fn test_derive_file_name_is_deterministic() {
        let policy = ExtensionPolicy::MatchContentType;
        let first = derive_file_name("My Photo!!", "pic.JPG", "image/jpeg", policy);
        let second = derive_file_name("My Photo!!", "pic.JPG", "image/jpeg", policy);
        assert_eq!(first, "MyPhoto.JPG");
        assert_eq!(first, second);
    }
}
