//! Photo upload filename policy.
//!
//! Uploaded files are never stored under their caller-supplied name; an
//! accepted file gets a generated UUID name so concurrent uploads cannot
//! collide and path fragments in the original name are irrelevant.

/// File extensions accepted for car photos.
pub const ALLOWED_PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Extract the lowercased extension of an uploaded filename, if allow-listed.
///
/// Returns `None` when the name has no extension or the extension is not in
/// [`ALLOWED_PHOTO_EXTENSIONS`]; the caller then ignores the upload.
pub fn allowed_photo_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let ext = ext.to_lowercase();
    if ALLOWED_PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}

/// Generate a collision-resistant stored filename for an accepted photo.
pub fn generated_photo_filename(extension: &str) -> String {
    format!("{}.{extension}", uuid::Uuid::new_v4())
}
