use crate::{
    catalog::photo::{Photo, album_names},
    session::visualizer::Visualizer,
};

/// Transient state of the photo picker overlay.
///
/// Created when the picker opens and discarded on close or confirm; it is
/// purely a view over the catalog owned by the [`Visualizer`] and has no
/// effect on the composition until a confirm operation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PickerState {
    multi_select: bool,
    /// Pending photo ids in selection order; batch placement follows this
    /// order.
    pending: Vec<String>,
    album_filter: String,
}

impl PickerState {
    /// Whether the picker is in multi-add mode (vs. single add-or-swap).
    pub fn multi_select(&self) -> bool {
        self.multi_select
    }

    /// Photo ids pending batch confirmation, in selection order.
    pub fn pending_selections(&self) -> &[String] {
        &self.pending
    }

    /// Active album filter; empty means the whole catalog is shown.
    pub fn album_filter(&self) -> &str {
        &self.album_filter
    }
}

impl Visualizer {
    /// Open the picker. Multi-select mode batches additions; single mode
    /// adds or swaps immediately on [`Visualizer::confirm_single`]. The
    /// album filter defaults to the catalog's first album. Rejected during
    /// preview.
    pub fn open_picker(&mut self, multi_select: bool) {
        if self.preview {
            return;
        }
        let album_filter = album_names(&self.catalog)
            .into_iter()
            .next()
            .unwrap_or_default();
        self.picker = Some(PickerState {
            multi_select,
            pending: Vec::new(),
            album_filter,
        });
    }

    /// The open picker's state, if any.
    pub fn picker(&self) -> Option<&PickerState> {
        self.picker.as_ref()
    }

    /// Narrow the picker to one album. No-op while the picker is closed.
    pub fn set_album_filter(&mut self, name: impl Into<String>) {
        if let Some(state) = self.picker.as_mut() {
            state.album_filter = name.into();
        }
    }

    /// Catalog photos visible under the active album filter. Empty while
    /// the picker is closed.
    pub fn visible_photos(&self) -> Vec<&Photo> {
        let Some(state) = &self.picker else {
            return Vec::new();
        };
        self.catalog
            .iter()
            .filter(|p| state.album_filter.is_empty() || p.album == state.album_filter)
            .collect()
    }

    /// Toggle a photo in and out of the pending batch. Multi-select mode
    /// only.
    pub fn toggle_selection(&mut self, photo_id: &str) {
        let Some(state) = self.picker.as_mut() else {
            return;
        };
        if !state.multi_select {
            return;
        }
        if let Some(idx) = state.pending.iter().position(|id| id == photo_id) {
            state.pending.remove(idx);
        } else {
            state.pending.push(photo_id.to_owned());
        }
    }

    /// Confirm a single photo and close the picker. Single-select mode
    /// only: with a frame selected the photo replaces that frame's image
    /// (swap), otherwise a new artwork is added at the wall center.
    pub fn confirm_single(&mut self, photo: &Photo) {
        let Some(state) = &self.picker else {
            return;
        };
        if state.multi_select {
            return;
        }
        self.picker = None;
        match self.selected.clone() {
            Some(id) => self.swap_artwork_photo(&id, photo.clone()),
            None => self.add_artwork(photo.clone()),
        }
    }

    /// Confirm the pending batch and close the picker. Multi-select mode
    /// only; a no-op while nothing is pending. Pending ids are resolved
    /// against the catalog in selection order (ids that vanished from the
    /// catalog are skipped) and appended via [`Visualizer::add_artworks`].
    pub fn confirm_batch(&mut self) {
        let Some(state) = &self.picker else {
            return;
        };
        if !state.multi_select || state.pending.is_empty() {
            return;
        }
        let photos: Vec<Photo> = state
            .pending
            .iter()
            .filter_map(|id| self.catalog.iter().find(|p| &p.id == id))
            .cloned()
            .collect();
        self.add_artworks(&photos);
        self.picker = None;
    }

    /// Discard the picker without touching the composition.
    pub fn close_picker(&mut self) {
        self.picker = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/picker.rs"]
mod tests;
