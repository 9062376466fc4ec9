use crate::{
    catalog::frames::{FrameStyle, MAT_RENDER_FACTOR},
    catalog::photo::Photo,
    composition::aspect::{AspectClass, AspectTreatment, classify},
    foundation::core::{SCALE_MAX, SCALE_MIN, Vec2},
    foundation::error::{FramewallError, FramewallResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A single placed artwork: one photo with its own transform and frame style.
pub struct ArtworkFrame {
    /// Identifier, unique within the owning composition and never reused.
    pub id: String,
    /// The displayed photo (shared read-only with the gallery layer).
    pub photo: Photo,
    /// Frame style from the catalog.
    pub style: FrameStyle,
    /// Offset in abstract canvas units from the wall center.
    pub position: Vec2,
    /// Size multiplier; committed values always sit in `[0.2, 3.0]`.
    pub scale: f64,
    /// Rotation in degrees; unbounded, wraps visually.
    pub rotation_deg: f64,
    /// Manual aspect override, `Auto` by default.
    pub aspect_override: AspectTreatment,
}

impl ArtworkFrame {
    /// Create a frame at the wall center with neutral transform and the
    /// default (canvas) style.
    pub fn new(id: impl Into<String>, photo: Photo) -> Self {
        Self {
            id: id.into(),
            photo,
            style: FrameStyle::default(),
            position: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
            aspect_override: AspectTreatment::default(),
        }
    }

    /// Resolve the aspect treatment: a manual override wins, `Auto` falls
    /// back to classifying the photo's aspect tag.
    pub fn resolved_treatment(&self) -> AspectClass {
        match self.aspect_override {
            AspectTreatment::Auto => classify(&self.photo.aspect_tag),
            AspectTreatment::Square => AspectClass::Square,
            AspectTreatment::Wide => AspectClass::Wide,
            AspectTreatment::Tall => AspectClass::Tall,
        }
    }

    /// Resolved render geometry for the host compositor.
    pub fn geometry(&self) -> ArtworkGeometry {
        let treatment = self.resolved_treatment();
        let (rw, rh) = treatment.ratio();
        let width = treatment.base_width() * self.scale;
        let config = self.style.config();
        ArtworkGeometry {
            treatment,
            width,
            height: width * rh / rw,
            position: self.position,
            rotation_deg: self.rotation_deg,
            scale: self.scale,
            mat_width: config.matting * self.scale * MAT_RENDER_FACTOR,
            visual_weight: config.visual_weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Everything the host needs to draw one artwork.
///
/// The core resolves treatment, clamped scale, position, rotation and mat
/// width; actual pixel compositing is the host's responsibility.
pub struct ArtworkGeometry {
    /// Resolved aspect class.
    pub treatment: AspectClass,
    /// Artwork width in abstract canvas units.
    pub width: f64,
    /// Artwork height in abstract canvas units.
    pub height: f64,
    /// Offset from the wall center.
    pub position: Vec2,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Committed scale.
    pub scale: f64,
    /// Visible mat band width after render scaling.
    pub mat_width: f64,
    /// Shadow-depth ordinal from the style catalog.
    pub visual_weight: u8,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The ordered set of all currently placed artworks.
///
/// Insertion order is z-order (later frames render on top); the selected
/// frame is promoted above everything else at render time, see
/// [`Composition::render_order`].
///
/// A composition owns all of its data, so `Clone` is a structural deep copy
/// with no aliasing back into the original.
pub struct Composition {
    /// Placed artworks in z-order.
    pub frames: Vec<ArtworkFrame>,
}

impl Composition {
    /// An empty wall.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-placed frames.
    pub fn from_frames(frames: Vec<ArtworkFrame>) -> Self {
        Self { frames }
    }

    /// Number of placed artworks.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no artwork is placed. An empty composition is a legal
    /// state ("all artworks removed"), including as a history entry.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Find a frame by id.
    pub fn frame(&self, id: &str) -> Option<&ArtworkFrame> {
        self.frames.iter().find(|f| f.id == id)
    }

    /// Find a frame by id, mutably.
    pub fn frame_mut(&mut self, id: &str) -> Option<&mut ArtworkFrame> {
        self.frames.iter_mut().find(|f| f.id == id)
    }

    /// Id of the bottom-most frame, if any.
    pub fn first_frame_id(&self) -> Option<&str> {
        self.frames.first().map(|f| f.id.as_str())
    }

    /// Remove a frame by id; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.frames.len();
        self.frames.retain(|f| f.id != id);
        self.frames.len() != before
    }

    /// Frames in paint order: insertion order, except the selected frame
    /// (when present) which is always painted last, on top.
    pub fn render_order(&self, selected: Option<&str>) -> Vec<&ArtworkFrame> {
        let mut order: Vec<&ArtworkFrame> = Vec::with_capacity(self.frames.len());
        let mut topmost = None;
        for frame in &self.frames {
            if selected == Some(frame.id.as_str()) {
                topmost = Some(frame);
            } else {
                order.push(frame);
            }
        }
        if let Some(frame) = topmost {
            order.push(frame);
        }
        order
    }

    /// Validate composition invariants.
    ///
    /// Committed compositions always satisfy these; the check exists for
    /// data arriving through the JSON boundary.
    pub fn validate(&self) -> FramewallResult<()> {
        for frame in &self.frames {
            if frame.id.trim().is_empty() {
                return Err(FramewallError::validation("frame id must be non-empty"));
            }
            if !frame.scale.is_finite()
                || frame.scale < SCALE_MIN
                || frame.scale > SCALE_MAX
            {
                return Err(FramewallError::validation(format!(
                    "frame '{}' scale must be within [{SCALE_MIN}, {SCALE_MAX}]",
                    frame.id
                )));
            }
            if !frame.position.x.is_finite() || !frame.position.y.is_finite() {
                return Err(FramewallError::validation(format!(
                    "frame '{}' position must be finite",
                    frame.id
                )));
            }
            if !frame.rotation_deg.is_finite() {
                return Err(FramewallError::validation(format!(
                    "frame '{}' rotation must be finite",
                    frame.id
                )));
            }
        }
        for (idx, frame) in self.frames.iter().enumerate() {
            if self.frames[..idx].iter().any(|f| f.id == frame.id) {
                return Err(FramewallError::validation(format!(
                    "duplicate frame id '{}'",
                    frame.id
                )));
            }
        }
        Ok(())
    }

    /// Serialize to JSON for host handoff (share/render pipelines).
    pub fn to_json(&self) -> FramewallResult<String> {
        serde_json::to_string(self).map_err(|e| FramewallError::serde(e.to_string()))
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> FramewallResult<Self> {
        let comp: Self =
            serde_json::from_str(json).map_err(|e| FramewallError::serde(e.to_string()))?;
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
