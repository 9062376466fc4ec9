/// A photograph supplied by the gallery data layer.
///
/// The visualizer only reads photos; it never mutates the catalog or uploads
/// anything. `aspect_tag` is free text from the album metadata and is mapped
/// to a geometric treatment by [`crate::classify`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Photo {
    /// Opaque identifier, unique within the catalog.
    pub id: String,
    /// Source URI of the image; passed through to the host untouched.
    pub source: String,
    /// Alt text for accessibility.
    pub alt: String,
    /// Free-text aspect tag (for example "wide", "portrait", "pano").
    pub aspect_tag: String,
    /// Name of the album the photo belongs to.
    pub album: String,
}

/// Distinct album names present in a catalog, in first-seen order.
///
/// Photos without an album name are skipped. The first entry is used as the
/// default album filter when the picker opens.
pub fn album_names(catalog: &[Photo]) -> Vec<String> {
    let mut names = Vec::new();
    for photo in catalog {
        if photo.album.is_empty() {
            continue;
        }
        if !names.iter().any(|n| n == &photo.album) {
            names.push(photo.album.clone());
        }
    }
    names
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/photo.rs"]
mod tests;
