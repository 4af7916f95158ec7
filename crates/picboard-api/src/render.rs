//! HTML rendering
//!
//! The whole site is one page: upload form, error paragraphs, gallery.
//! Every interpolated value goes through maud's escaping; file names are also
//! percent-encoded before they are placed in URLs.

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use picboard_core::constants::MAX_TITLE_BYTES;
use picboard_core::models::GalleryEntry;

use crate::constants::{IMAGE_FIELD, PAGE_TITLE, TITLE_FIELD, UPLOADS_ROUTE};

/// Characters left as-is in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

const STYLE: &str = r#"
.gallery { display: flex; flex-wrap: wrap; gap: 10px; }
.thumbnail { border: 1px solid #ddd; padding: 5px; text-align: center; width: 200px; height: 250px; display: flex; flex-direction: column; justify-content: space-between; }
.thumbnail img { width: 100%; height: 150px; object-fit: cover; }
.thumbnail p { margin-top: 5px; overflow-wrap: break-word; height: 50px; overflow: hidden; }
.error { color: #b00020; }
"#;

/// URL under which a stored file is served.
pub fn upload_url(file_name: &str) -> String {
    format!(
        "{}/{}",
        UPLOADS_ROUTE,
        utf8_percent_encode(file_name, PATH_SEGMENT)
    )
}

fn layout(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}

fn thumbnail(entry: &GalleryEntry) -> Markup {
    let url = upload_url(&entry.file_name);
    html! {
        div.thumbnail {
            a href=(url) target="_blank" {
                img src=(url) alt=(entry.caption);
            }
            p { (entry.caption) }
        }
    }
}

/// The gallery page with `messages` shown as error paragraphs above the form.
pub fn gallery_page(messages: &[String], entries: &[GalleryEntry]) -> Markup {
    layout(html! {
        @for message in messages {
            p.error { (message) }
        }
        form action="/" method="post" enctype="multipart/form-data" {
            input type="text" name=(TITLE_FIELD) placeholder="Enter image title" maxlength=(MAX_TITLE_BYTES) required;
            input type="file" name=(IMAGE_FIELD) accept="image/jpeg,image/png,image/gif" required;
            input type="submit" value="Upload Image";
        }
        div.gallery {
            @for entry in entries {
                (thumbnail(entry))
            }
        }
    })
}

/// Standalone page for errors outside the gallery flow.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(html! {
        h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
        p.error { (message) }
        p { a href="/" { "Back to the gallery" } }
    })
}
