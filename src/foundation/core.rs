pub use kurbo::{Point, Vec2};

/// Smallest committed artwork scale.
pub const SCALE_MIN: f64 = 0.2;

/// Largest committed artwork scale.
pub const SCALE_MAX: f64 = 3.0;

/// Clamp a requested artwork scale into [`SCALE_MIN`]..=[`SCALE_MAX`].
///
/// Out-of-range slider input is absorbed, not rejected. Non-finite input has
/// no meaningful ordering against the clamp range and falls back to the
/// neutral scale `1.0`.
pub fn clamp_scale(value: f64) -> f64 {
    if !value.is_finite() {
        return 1.0;
    }
    value.clamp(SCALE_MIN, SCALE_MAX)
}

/// Monotonic allocator for artwork frame ids.
///
/// Ids are unique for the lifetime of a session and are never reused after a
/// frame is removed. The allocator is passed explicitly into the layout
/// functions so placement stays a pure function of its inputs.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FrameIdSeq {
    next: u64,
}

impl FrameIdSeq {
    /// Create an allocator starting at `art-0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next id, advancing the sequence.
    pub fn next_id(&mut self) -> String {
        let id = format!("art-{}", self.next);
        self.next += 1;
        id
    }
}
