/// Per-artwork aspect treatment.
///
/// `Auto` defers to the photo's free-text aspect tag via [`classify`]; any
/// other value is a manual override that takes precedence.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AspectTreatment {
    /// Resolve from the photo's aspect tag.
    #[default]
    Auto,
    /// Force the 1:1 treatment.
    Square,
    /// Force the 3:2 treatment.
    Wide,
    /// Force the 4:5 treatment.
    Tall,
}

/// The resolved geometric aspect class used to size an artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectClass {
    /// 1:1.
    Square,
    /// 3:2 landscape.
    Wide,
    /// 4:5 portrait.
    Tall,
}

impl AspectClass {
    /// Width:height ratio of this class.
    pub fn ratio(self) -> (f64, f64) {
        match self {
            AspectClass::Square => (1.0, 1.0),
            AspectClass::Wide => (3.0, 2.0),
            AspectClass::Tall => (4.0, 5.0),
        }
    }

    /// Base render width in abstract canvas units at scale 1.0.
    pub fn base_width(self) -> f64 {
        match self {
            AspectClass::Square => 300.0,
            AspectClass::Wide => 400.0,
            AspectClass::Tall => 240.0,
        }
    }
}

impl From<AspectClass> for AspectTreatment {
    fn from(class: AspectClass) -> Self {
        match class {
            AspectClass::Square => AspectTreatment::Square,
            AspectClass::Wide => AspectTreatment::Wide,
            AspectClass::Tall => AspectTreatment::Tall,
        }
    }
}

const WIDE_KEYWORDS: [&str; 4] = ["wide", "land", "horiz", "pano"];
const TALL_KEYWORDS: [&str; 3] = ["tall", "port", "vert"];

/// Map a free-text aspect tag to a geometric class.
///
/// Case-insensitive substring match. Wide keywords are checked before tall
/// keywords, so a tag like "Portrait-Wide" resolves to [`AspectClass::Wide`].
/// Unknown or empty tags default to [`AspectClass::Square`]; there are no
/// error conditions.
pub fn classify(aspect_tag: &str) -> AspectClass {
    let tag = aspect_tag.to_ascii_lowercase();
    if WIDE_KEYWORDS.iter().any(|kw| tag.contains(kw)) {
        return AspectClass::Wide;
    }
    if TALL_KEYWORDS.iter().any(|kw| tag.contains(kw)) {
        return AspectClass::Tall;
    }
    AspectClass::Square
}

#[cfg(test)]
#[path = "../../tests/unit/composition/aspect.rs"]
mod tests;
