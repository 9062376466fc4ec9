use crate::foundation::error::{FramewallError, FramewallResult};

/// Factor applied to a style's matting width when resolving render geometry.
///
/// The visible mat band scales with the artwork but sub-linearly, so large
/// prints do not drown in matting: `mat_width = matting * scale * 0.7`.
pub const MAT_RENDER_FACTOR: f64 = 0.7;

/// The fixed set of frame styles offered by the visualizer.
///
/// The catalog is compiled-in, process-wide data; every style has a
/// [`FrameStyleConfig`]. Declaration order within a category is the order
/// styles are presented in the style-selection UI.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FrameStyle {
    // Modern
    /// Borderless canvas wrap; the default style for new artworks.
    #[default]
    Canvas,
    /// Thin white frame with a white mat.
    WhiteThin,
    /// Floating black frame.
    BlackFloating,
    /// Thin silver frame.
    SilverThin,
    // Wooden
    /// Natural oak.
    Oak,
    /// Deep walnut.
    Walnut,
    /// Black ash.
    BlackAsh,
    /// Light birch.
    Birch,
    /// Mahogany red.
    Mahogany,
    /// Rustic pine.
    Pine,
    /// Smoked hickory.
    Hickory,
    // Industrial
    /// Brushed aluminum.
    Aluminum,
    /// Matte steel.
    Steel,
    /// Champagne gold.
    Gold,
    /// Antique copper.
    Copper,
    // Gallery
    /// Deep shadow box.
    Shadowbox,
    /// Double-matted classic gallery frame.
    ClassicMat,
    /// Museum maple.
    MapleGallery,
}

/// Catalog grouping used by the style-selection UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FrameCategory {
    /// Minimal contemporary frames.
    Modern,
    /// Wood-finish frames.
    Wooden,
    /// Metal-finish frames.
    Industrial,
    /// Museum-style matted frames.
    Gallery,
}

/// Visual and geometric parameters of a frame style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameStyleConfig {
    /// Human-readable style name.
    pub display_name: &'static str,
    /// Catalog grouping.
    pub category: FrameCategory,
    /// Mat band width in abstract canvas units, before render scaling.
    pub matting: f64,
    /// Shadow-depth ordinal in 1..=5; larger means a heavier drop shadow.
    pub visual_weight: u8,
}

impl FrameStyle {
    /// Every style, in declaration order.
    pub const ALL: [FrameStyle; 18] = [
        FrameStyle::Canvas,
        FrameStyle::WhiteThin,
        FrameStyle::BlackFloating,
        FrameStyle::SilverThin,
        FrameStyle::Oak,
        FrameStyle::Walnut,
        FrameStyle::BlackAsh,
        FrameStyle::Birch,
        FrameStyle::Mahogany,
        FrameStyle::Pine,
        FrameStyle::Hickory,
        FrameStyle::Aluminum,
        FrameStyle::Steel,
        FrameStyle::Gold,
        FrameStyle::Copper,
        FrameStyle::Shadowbox,
        FrameStyle::ClassicMat,
        FrameStyle::MapleGallery,
    ];

    /// Look up the configuration for this style.
    ///
    /// Total over the enum: every style has a config, so the
    /// unrecognized-identifier failure mode can only exist at the string
    /// boundary ([`FrameStyle::parse`]).
    pub fn config(self) -> &'static FrameStyleConfig {
        use FrameCategory::*;
        match self {
            FrameStyle::Canvas => &FrameStyleConfig {
                display_name: "Canvas Wrap",
                category: Modern,
                matting: 0.0,
                visual_weight: 2,
            },
            FrameStyle::WhiteThin => &FrameStyleConfig {
                display_name: "Thin White",
                category: Modern,
                matting: 40.0,
                visual_weight: 1,
            },
            FrameStyle::BlackFloating => &FrameStyleConfig {
                display_name: "Floating Black",
                category: Modern,
                matting: 20.0,
                visual_weight: 3,
            },
            FrameStyle::SilverThin => &FrameStyleConfig {
                display_name: "Thin Silver",
                category: Modern,
                matting: 30.0,
                visual_weight: 1,
            },
            FrameStyle::Oak => &FrameStyleConfig {
                display_name: "Natural Oak",
                category: Wooden,
                matting: 45.0,
                visual_weight: 3,
            },
            FrameStyle::Walnut => &FrameStyleConfig {
                display_name: "Deep Walnut",
                category: Wooden,
                matting: 55.0,
                visual_weight: 5,
            },
            FrameStyle::BlackAsh => &FrameStyleConfig {
                display_name: "Black Ash",
                category: Wooden,
                matting: 60.0,
                visual_weight: 4,
            },
            FrameStyle::Birch => &FrameStyleConfig {
                display_name: "Light Birch",
                category: Wooden,
                matting: 40.0,
                visual_weight: 2,
            },
            FrameStyle::Mahogany => &FrameStyleConfig {
                display_name: "Mahogany Red",
                category: Wooden,
                matting: 65.0,
                visual_weight: 5,
            },
            FrameStyle::Pine => &FrameStyleConfig {
                display_name: "Rustic Pine",
                category: Wooden,
                matting: 40.0,
                visual_weight: 3,
            },
            FrameStyle::Hickory => &FrameStyleConfig {
                display_name: "Smoked Hickory",
                category: Wooden,
                matting: 55.0,
                visual_weight: 5,
            },
            FrameStyle::Aluminum => &FrameStyleConfig {
                display_name: "Brushed Aluminum",
                category: Industrial,
                matting: 50.0,
                visual_weight: 1,
            },
            FrameStyle::Steel => &FrameStyleConfig {
                display_name: "Matte Steel",
                category: Industrial,
                matting: 55.0,
                visual_weight: 4,
            },
            FrameStyle::Gold => &FrameStyleConfig {
                display_name: "Champagne Gold",
                category: Industrial,
                matting: 60.0,
                visual_weight: 4,
            },
            FrameStyle::Copper => &FrameStyleConfig {
                display_name: "Antique Copper",
                category: Industrial,
                matting: 55.0,
                visual_weight: 4,
            },
            FrameStyle::Shadowbox => &FrameStyleConfig {
                display_name: "Shadow Box",
                category: Gallery,
                matting: 80.0,
                visual_weight: 5,
            },
            FrameStyle::ClassicMat => &FrameStyleConfig {
                display_name: "Double Mat Classic",
                category: Gallery,
                matting: 70.0,
                visual_weight: 4,
            },
            FrameStyle::MapleGallery => &FrameStyleConfig {
                display_name: "Museum Maple",
                category: Gallery,
                matting: 100.0,
                visual_weight: 1,
            },
        }
    }

    /// Canonical identifier for this style (the serialized form).
    pub fn as_str(self) -> &'static str {
        match self {
            FrameStyle::Canvas => "canvas",
            FrameStyle::WhiteThin => "white_thin",
            FrameStyle::BlackFloating => "black_floating",
            FrameStyle::SilverThin => "silver_thin",
            FrameStyle::Oak => "oak",
            FrameStyle::Walnut => "walnut",
            FrameStyle::BlackAsh => "black_ash",
            FrameStyle::Birch => "birch",
            FrameStyle::Mahogany => "mahogany",
            FrameStyle::Pine => "pine",
            FrameStyle::Hickory => "hickory",
            FrameStyle::Aluminum => "aluminum",
            FrameStyle::Steel => "steel",
            FrameStyle::Gold => "gold",
            FrameStyle::Copper => "copper",
            FrameStyle::Shadowbox => "shadowbox",
            FrameStyle::ClassicMat => "classic_mat",
            FrameStyle::MapleGallery => "maple_gallery",
        }
    }

    /// Parse a canonical style identifier.
    ///
    /// An unknown identifier is a programming error in the caller, not a
    /// user-input condition, and maps to [`FramewallError::Configuration`].
    pub fn parse(s: &str) -> FramewallResult<FrameStyle> {
        FrameStyle::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                FramewallError::configuration(format!("unknown frame style '{s}'"))
            })
    }
}

/// Styles belonging to `category`, in declaration order.
pub fn styles_in_category(category: FrameCategory) -> impl Iterator<Item = FrameStyle> {
    FrameStyle::ALL
        .iter()
        .copied()
        .filter(move |style| style.config().category == category)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/frames.rs"]
mod tests;
