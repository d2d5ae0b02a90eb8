//! Storage key generation for uploaded photos.

use uuid::Uuid;

/// Number of random hex characters in a photo key.
const KEY_PREFIX_LEN: usize = 6;

/// Build a storage key for an uploaded photo.
///
/// The key is a short random prefix (lowercase hex, taken from a freshly
/// generated UUID) joined with the original filename's extension, e.g.
/// `"a1b2c3.png"` for `"whiskers.png"`. The extension is everything after
/// the last `.`; a filename with no dot is used whole as the extension.
pub fn photo_key(filename: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => filename,
    };
    format!("{}.{}", &hex[..KEY_PREFIX_LEN], ext)
}
