//! Framewall is the interactive core of a gallery "wall visualizer": an
//! editor that places photographs as framed artworks over a photo of a real
//! wall and lets the user move, scale, rotate and restyle each piece with
//! full undo/redo.
//!
//! # Architecture
//!
//! 1. **Model**: [`Composition`] is a pure, ordered list of [`ArtworkFrame`]
//!    values (insertion order is z-order). It owns all of its data, so
//!    `Clone` is a structural deep copy.
//! 2. **Layout**: [`initial_layout`], [`extend_layout`] and
//!    [`template_layout`] are pure placement functions; identical inputs
//!    always produce identical output.
//! 3. **History**: [`EditHistory`] is a bounded, cursor-addressed snapshot
//!    stack. Continuous gestures overwrite the current snapshot in place;
//!    exactly one commit per discrete gesture makes the edit undoable.
//! 4. **Session**: [`Visualizer`] orchestrates the above, owns selection,
//!    preview mode and the photo picker, and exposes resolved
//!    [`ArtworkGeometry`] for the host to draw.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: every operation runs synchronously on a user
//!   gesture; there is no background computation and no IO.
//! - **Tolerant edges**: operations on stale frame ids are silent no-ops and
//!   out-of-range scale input is clamped, never rejected.
//! - **Ephemeral sessions**: a session is never persisted; every open starts
//!   fresh from the supplied photos.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod composition;
mod foundation;
mod history;
mod layout;
mod session;

pub use catalog::frames::{
    FrameCategory, FrameStyle, FrameStyleConfig, MAT_RENDER_FACTOR, styles_in_category,
};
pub use catalog::photo::{Photo, album_names};
pub use composition::aspect::{AspectClass, AspectTreatment, classify};
pub use composition::model::{ArtworkFrame, ArtworkGeometry, Composition};
pub use foundation::core::{FrameIdSeq, Point, SCALE_MAX, SCALE_MIN, Vec2, clamp_scale};
pub use foundation::error::{FramewallError, FramewallResult};
pub use history::store::{EditHistory, HISTORY_CAPACITY};
pub use layout::engine::{
    ROW_SPACING, Template, extend_layout, initial_layout, template_layout,
};
pub use session::picker::PickerState;
pub use session::visualizer::Visualizer;
