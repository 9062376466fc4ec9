use crate::{
    catalog::photo::Photo,
    composition::model::ArtworkFrame,
    foundation::core::{FrameIdSeq, Vec2},
};

/// Horizontal spacing between row-layout slots, in abstract canvas units.
pub const ROW_SPACING: f64 = 250.0;

/// Preset arrangements that replace the whole composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// One centered artwork at full scale.
    Solo,
    /// Two artworks side by side.
    Pair,
    /// Three artworks in a row.
    Triptych,
}

/// Compute the opening placement for a set of photos.
///
/// - 0 photos: empty.
/// - 1 photo: centered at scale 1.0.
/// - 2 photos: x = -200 and +200, scale 0.8.
/// - 3 or more: evenly spaced along x centered on 0 at [`ROW_SPACING`],
///   scale 0.6: `x_i = (i - (n - 1) / 2) * 250`.
///
/// All frames use the default style, no rotation and automatic aspect.
/// Deterministic: identical inputs (including allocator state) always yield
/// identical frames.
pub fn initial_layout(photos: &[Photo], ids: &mut FrameIdSeq) -> Vec<ArtworkFrame> {
    match photos {
        [] => Vec::new(),
        [only] => vec![ArtworkFrame::new(ids.next_id(), only.clone())],
        [left, right] => {
            let mut frames = Vec::with_capacity(2);
            for (photo, x) in [(left, -200.0), (right, 200.0)] {
                let mut frame = ArtworkFrame::new(ids.next_id(), photo.clone());
                frame.position = Vec2::new(x, 0.0);
                frame.scale = 0.8;
                frames.push(frame);
            }
            frames
        }
        _ => row_layout(photos, 0, photos.len(), ids),
    }
}

/// Placement for a batch appended to an existing row of `existing` frames.
///
/// Slot `j = existing + i` gets `x_j = (j - (n - 1) / 2) * 250` with
/// `n = existing + photos.len()`, scale 0.6. Frames already on the wall are
/// not moved, so repeated batch adds continue the row instead of resetting
/// it.
pub fn extend_layout(
    existing: usize,
    photos: &[Photo],
    ids: &mut FrameIdSeq,
) -> Vec<ArtworkFrame> {
    row_layout(photos, existing, existing + photos.len(), ids)
}

fn row_layout(
    photos: &[Photo],
    first_slot: usize,
    total_slots: usize,
    ids: &mut FrameIdSeq,
) -> Vec<ArtworkFrame> {
    let center = (total_slots.saturating_sub(1)) as f64 / 2.0;
    photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let slot = (first_slot + i) as f64;
            let mut frame = ArtworkFrame::new(ids.next_id(), photo.clone());
            frame.position = Vec2::new((slot - center) * ROW_SPACING, 0.0);
            frame.scale = 0.6;
            frame
        })
        .collect()
}

/// Build a templated arrangement, seeding every slot with `base_photo`.
///
/// The user subsequently swaps individual photos; the template only decides
/// positions and scales: Solo at the origin at 1.0, Pair at x = ±180 at
/// 0.75, Triptych at x = {-280, 0, 280} at 0.6.
pub fn template_layout(
    kind: Template,
    base_photo: &Photo,
    ids: &mut FrameIdSeq,
) -> Vec<ArtworkFrame> {
    let slots: &[(f64, f64)] = match kind {
        Template::Solo => &[(0.0, 1.0)],
        Template::Pair => &[(-180.0, 0.75), (180.0, 0.75)],
        Template::Triptych => &[(-280.0, 0.6), (0.0, 0.6), (280.0, 0.6)],
    };
    slots
        .iter()
        .map(|&(x, scale)| {
            let mut frame = ArtworkFrame::new(ids.next_id(), base_photo.clone());
            frame.position = Vec2::new(x, 0.0);
            frame.scale = scale;
            frame
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
