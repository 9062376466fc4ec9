use crate::{
    catalog::frames::FrameStyle,
    catalog::photo::Photo,
    composition::aspect::AspectTreatment,
    composition::model::{ArtworkFrame, ArtworkGeometry, Composition},
    foundation::core::{FrameIdSeq, Vec2, clamp_scale},
    history::store::EditHistory,
    layout::engine::{Template, extend_layout, initial_layout, template_layout},
    session::picker::PickerState,
};

/// The wall visualizer: the stateful orchestrator of one editor session.
///
/// A `Visualizer` owns the current composition (through its edit history),
/// the background wall image reference, selection and preview state, and the
/// photo picker. It is created when the visualizer opens and discarded when
/// it closes; sessions are never persisted.
///
/// Mutating operations follow two rules throughout:
///
/// - While preview mode is active they are rejected as silent no-ops.
/// - A frame id that is no longer part of the composition is a stale UI
///   reference, tolerated as a silent no-op, never an error.
#[derive(Clone, Debug)]
pub struct Visualizer {
    pub(crate) background: Option<String>,
    pub(crate) history: EditHistory,
    pub(crate) selected: Option<String>,
    pub(crate) preview: bool,
    pub(crate) picker: Option<PickerState>,
    pub(crate) catalog: Vec<Photo>,
    pub(crate) ids: FrameIdSeq,
    pub(crate) drag: Option<DragState>,
}

/// Origin of the drag currently in progress, captured once at drag start so
/// the final position is `origin + total offset` rather than an accumulation
/// of incremental deltas.
#[derive(Clone, Debug)]
pub(crate) struct DragState {
    frame_id: String,
    origin: Vec2,
}

impl Visualizer {
    /// Open a fresh session.
    ///
    /// The history is seeded with [`initial_layout`] of `initial_photos`,
    /// and the first frame (if any) is selected. `catalog` is the full photo
    /// set the picker browses; the core only ever reads it.
    pub fn open(initial_photos: &[Photo], catalog: Vec<Photo>) -> Self {
        let mut ids = FrameIdSeq::new();
        let composition = Composition::from_frames(initial_layout(initial_photos, &mut ids));
        let selected = composition.first_frame_id().map(str::to_owned);
        Self {
            background: None,
            history: EditHistory::new(composition),
            selected,
            preview: false,
            picker: None,
            catalog,
            ids,
            drag: None,
        }
    }

    // ---- read surface -----------------------------------------------------

    /// The composition at the history cursor; the session always renders
    /// from this view.
    pub fn composition(&self) -> &Composition {
        self.history.current()
    }

    /// Id of the selected frame, if any.
    pub fn selected_frame_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected frame, if the selection still resolves.
    pub fn selected_frame(&self) -> Option<&ArtworkFrame> {
        self.selected.as_deref().and_then(|id| self.composition().frame(id))
    }

    /// Frames in paint order. The selected frame is promoted topmost, except
    /// during preview where selection highlighting is suppressed.
    pub fn render_order(&self) -> Vec<&ArtworkFrame> {
        let selected = if self.preview {
            None
        } else {
            self.selected.as_deref()
        };
        self.composition().render_order(selected)
    }

    /// Resolved render geometry for one frame.
    pub fn frame_geometry(&self, id: &str) -> Option<ArtworkGeometry> {
        self.composition().frame(id).map(ArtworkFrame::geometry)
    }

    /// The background wall image reference, once one has been chosen.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// The photo catalog supplied at open.
    pub fn catalog(&self) -> &[Photo] {
        &self.catalog
    }

    /// Whether preview mode is active.
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Whether an undo would change the composition.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo would change the composition.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- selection and preview -------------------------------------------

    /// Select a frame, or pass `None` to deselect. Selecting a stale id is
    /// a no-op; selection is disabled during preview.
    pub fn select_frame(&mut self, id: Option<&str>) {
        if self.preview {
            return;
        }
        match id {
            None => self.selected = None,
            Some(id) => {
                if self.composition().frame(id).is_some() {
                    self.selected = Some(id.to_owned());
                }
            }
        }
    }

    /// Enter preview: a read-only rendering mode. Every mutating operation
    /// is rejected until [`Visualizer::exit_preview`]; an open picker is
    /// discarded.
    pub fn enter_preview(&mut self) {
        self.preview = true;
        self.picker = None;
    }

    /// Leave preview and restore normal mutability.
    pub fn exit_preview(&mut self) {
        self.preview = false;
    }

    /// Replace the background wall image reference. Does not touch the
    /// composition or the history.
    pub fn set_background(&mut self, image: impl Into<String>) {
        self.background = Some(image.into());
    }

    // ---- frame edits ------------------------------------------------------

    /// Transient phase of a drag: place the frame at its pre-drag position
    /// plus the **total** drag offset so far. The origin is captured at the
    /// first move of a drag, and starting a drag selects the frame.
    ///
    /// Overwrites the current snapshot in place; nothing becomes undoable
    /// until [`Visualizer::drop_frame`] commits the gesture.
    pub fn drag_frame(&mut self, id: &str, dx: f64, dy: f64) {
        if self.preview {
            return;
        }
        let Some(origin) = self.begin_or_continue_drag(id) else {
            return;
        };
        self.selected = Some(id.to_owned());
        self.history.edit_transient(|comp| {
            if let Some(frame) = comp.frame_mut(id) {
                frame.position = origin + Vec2::new(dx, dy);
            }
        });
    }

    /// Finish a drag: commit the frame at origin plus total offset as one
    /// undoable step, and clear the drag state.
    pub fn drop_frame(&mut self, id: &str, dx: f64, dy: f64) {
        if self.preview {
            return;
        }
        let Some(origin) = self.begin_or_continue_drag(id) else {
            return;
        };
        self.drag = None;
        self.commit_frame_edit(id, |frame| {
            frame.position = origin + Vec2::new(dx, dy);
        });
    }

    /// Transient phase of the size slider: clamp and overwrite in place.
    pub fn preview_scale(&mut self, id: &str, value: f64) {
        if self.preview {
            return;
        }
        self.history.edit_transient(|comp| {
            if let Some(frame) = comp.frame_mut(id) {
                frame.scale = clamp_scale(value);
            }
        });
    }

    /// Commit a scale change, clamped to the legal range.
    pub fn set_scale(&mut self, id: &str, value: f64) {
        self.commit_frame_edit(id, |frame| {
            frame.scale = clamp_scale(value);
        });
    }

    /// Rotate a frame by a delta in degrees. Unclamped; rotation wraps
    /// visually.
    pub fn rotate_frame(&mut self, id: &str, delta_deg: f64) {
        self.commit_frame_edit(id, |frame| {
            frame.rotation_deg += delta_deg;
        });
    }

    /// Replace a frame's style.
    pub fn set_style(&mut self, id: &str, style: FrameStyle) {
        self.commit_frame_edit(id, |frame| {
            frame.style = style;
        });
    }

    /// Replace a frame's aspect override.
    pub fn set_aspect_override(&mut self, id: &str, treatment: AspectTreatment) {
        self.commit_frame_edit(id, |frame| {
            frame.aspect_override = treatment;
        });
    }

    // ---- adding and removing artworks -------------------------------------

    /// Append a new artwork at the wall center at scale 1.0.
    ///
    /// This is the picker's "add" gesture when no frame is selected; the
    /// companion "swap" gesture is [`Visualizer::swap_artwork_photo`].
    pub fn add_artwork(&mut self, photo: Photo) {
        if self.preview {
            return;
        }
        let mut next = self.composition().clone();
        next.frames.push(ArtworkFrame::new(self.ids.next_id(), photo));
        self.history.commit(next);
    }

    /// Replace the photo shown in an existing frame, keeping its transform
    /// and style.
    pub fn swap_artwork_photo(&mut self, id: &str, photo: Photo) {
        self.commit_frame_edit(id, |frame| {
            frame.photo = photo;
        });
    }

    /// Append one new frame per photo, continuing the current row (see
    /// [`extend_layout`]). An empty batch is a no-op.
    #[tracing::instrument(skip(self, photos))]
    pub fn add_artworks(&mut self, photos: &[Photo]) {
        if self.preview || photos.is_empty() {
            return;
        }
        let mut next = self.composition().clone();
        let appended = extend_layout(next.len(), photos, &mut self.ids);
        next.frames.extend(appended);
        self.history.commit(next);
    }

    /// Remove a frame. If it was selected, selection moves to the new first
    /// frame, or clears when the wall is empty.
    pub fn remove_frame(&mut self, id: &str) {
        if self.preview {
            return;
        }
        let mut next = self.composition().clone();
        if !next.remove(id) {
            return;
        }
        self.history.commit(next);
        if self.selected.as_deref() == Some(id) {
            self.selected = self.composition().first_frame_id().map(str::to_owned);
        }
    }

    /// Replace the entire composition with a templated arrangement.
    ///
    /// The template is seeded from the first existing frame's photo, falling
    /// back to `fallback` when the wall is empty; with neither available the
    /// call is a no-op. Destructive by design: any other placed photos are
    /// discarded (undo restores them). The first new frame is selected.
    #[tracing::instrument(skip(self, fallback))]
    pub fn apply_template(&mut self, kind: Template, fallback: Option<&Photo>) {
        if self.preview {
            return;
        }
        let seed = self
            .composition()
            .frames
            .first()
            .map(|frame| frame.photo.clone())
            .or_else(|| fallback.cloned());
        let Some(seed) = seed else {
            return;
        };
        let next = Composition::from_frames(template_layout(kind, &seed, &mut self.ids));
        self.selected = next.first_frame_id().map(str::to_owned);
        self.history.commit(next);
    }

    // ---- history ----------------------------------------------------------

    /// Step back one committed edit. Returns whether anything changed.
    /// Rejected during preview. Selection is fixed up to the first frame if
    /// the previously selected id no longer exists.
    pub fn undo(&mut self) -> bool {
        if self.preview {
            return false;
        }
        let moved = self.history.undo();
        if moved {
            self.fix_selection();
        }
        moved
    }

    /// Step forward one undone edit. Returns whether anything changed.
    /// Rejected during preview, with the same selection fix-up as undo.
    pub fn redo(&mut self) -> bool {
        if self.preview {
            return false;
        }
        let moved = self.history.redo();
        if moved {
            self.fix_selection();
        }
        moved
    }

    // ---- internals --------------------------------------------------------

    /// Clone-edit-commit for a single frame; the shared shape of every
    /// discrete frame edit. Stale ids commit nothing.
    fn commit_frame_edit(&mut self, id: &str, edit: impl FnOnce(&mut ArtworkFrame)) {
        if self.preview {
            return;
        }
        let mut next = self.composition().clone();
        let Some(frame) = next.frame_mut(id) else {
            return;
        };
        edit(frame);
        self.history.commit(next);
    }

    /// Resolve the drag origin for `id`, capturing it from the current
    /// composition when this is the first move of a new drag. `None` when
    /// the frame does not exist.
    fn begin_or_continue_drag(&mut self, id: &str) -> Option<Vec2> {
        if let Some(drag) = &self.drag
            && drag.frame_id == id
        {
            return Some(drag.origin);
        }
        let origin = self.composition().frame(id)?.position;
        self.drag = Some(DragState {
            frame_id: id.to_owned(),
            origin,
        });
        Some(origin)
    }

    fn fix_selection(&mut self) {
        if let Some(selected) = self.selected.as_deref()
            && self.composition().frame(selected).is_none()
        {
            self.selected = self.composition().first_frame_id().map(str::to_owned);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/visualizer.rs"]
mod tests;
