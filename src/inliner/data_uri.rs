//! `data:` URI encoding for binary resources

use base64::Engine;

/// Guess a media type from the extension of a file name or address
///
/// Query strings and fragments are ignored, and the extension is compared
/// case-insensitively. Returns `None` for anything not in the table.
#[must_use]
pub fn guess_media_type(name_hint: &str) -> Option<&'static str> {
    let path = name_hint
        .split(['?', '#'])
        .next()
        .unwrap_or(name_hint);
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let (_, extension) = file_name.rsplit_once('.')?;

    let media_type = match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "json" => "application/json",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",
        _ => return None,
    };
    Some(media_type)
}

/// Encode `content` as `data:<mediatype>;base64,<payload>`
///
/// The media type is guessed from `name_hint`. When no guess is possible the
/// field is left empty, which browsers still accept.
#[must_use]
pub fn data_encode_image(name_hint: &str, content: &[u8]) -> String {
    let media_type = guess_media_type(name_hint).unwrap_or("");

    let encoded_capacity = base64::encoded_len(content.len(), true).unwrap_or(0);
    let mut encoded = String::with_capacity(encoded_capacity + 13 + media_type.len());

    encoded.push_str("data:");
    encoded.push_str(media_type);
    encoded.push_str(";base64,");
    base64::engine::general_purpose::STANDARD.encode_string(content, &mut encoded);

    encoded
}
