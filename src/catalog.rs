use serde::{Deserialize, Serialize};

use crate::assets::color::Color;

/// How a background preset fills the slot canvas.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundFill {
    Solid(Color),
    /// Diagonal gradient from the top-left to the bottom-right corner.
    /// Stops are `(offset in [0,1], color)` in ascending offset order.
    LinearGradient { stops: Vec<(f64, Color)> },
    /// Staggered polka-dot pattern over a base color.
    PolkaDots {
        base: Color,
        dot: Color,
        spacing: f64,
        radius: f64,
    },
}

/// Named background descriptor, referenced by id and never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BackgroundPreset {
    pub id: String,
    pub name: String,
    pub fill: BackgroundFill,
}

/// Built-in background presets.
pub fn builtin_backgrounds() -> Vec<BackgroundPreset> {
    fn hex(s: &str) -> Color {
        // All literals below are valid hex; a typo here is a programmer error.
        Color::from_hex(s).unwrap_or(Color::WHITE)
    }

    vec![
        BackgroundPreset {
            id: "bg-white".into(),
            name: "White".into(),
            fill: BackgroundFill::Solid(Color::WHITE),
        },
        BackgroundPreset {
            id: "bg-blue".into(),
            name: "Sky Blue".into(),
            fill: BackgroundFill::Solid(hex("#e0f2fe")),
        },
        BackgroundPreset {
            id: "bg-pink".into(),
            name: "Sakura".into(),
            fill: BackgroundFill::Solid(hex("#fce7f3")),
        },
        BackgroundPreset {
            id: "bg-purple".into(),
            name: "Lavender".into(),
            fill: BackgroundFill::Solid(hex("#f3e8ff")),
        },
        BackgroundPreset {
            id: "bg-grad-sunset".into(),
            name: "Sunset".into(),
            fill: BackgroundFill::LinearGradient {
                stops: vec![(0.0, hex("#fbc2eb")), (1.0, hex("#a6c1ee"))],
            },
        },
        BackgroundPreset {
            id: "bg-grad-dawn".into(),
            name: "Dawn".into(),
            fill: BackgroundFill::LinearGradient {
                stops: vec![(0.0, hex("#f6d365")), (1.0, hex("#fda085"))],
            },
        },
        BackgroundPreset {
            id: "bg-grad-iris".into(),
            name: "Iris".into(),
            fill: BackgroundFill::LinearGradient {
                stops: vec![(0.0, hex("#a18cd1")), (1.0, hex("#fbc2eb"))],
            },
        },
        BackgroundPreset {
            id: "bg-dots-pink".into(),
            name: "Dotty".into(),
            fill: BackgroundFill::PolkaDots {
                base: Color::WHITE,
                dot: hex("#fbcfe8"),
                spacing: 40.0,
                radius: 8.0,
            },
        },
    ]
}

/// Named frame overlay descriptor. `svg` is an SVG document authored with
/// internal transparency so it frames the photo instead of covering it;
/// `None` means "no frame".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FramePreset {
    pub id: String,
    pub name: String,
    pub svg: Option<String>,
}

const FRAME_POLAROID_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="1333" viewBox="0 0 1000 1333"><rect width="1000" height="1333" fill="none" stroke="white" stroke-width="60"/></svg>"##;

const FRAME_SAKURA_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="1333" viewBox="0 0 1000 1333"><rect x="10" y="10" width="980" height="1313" rx="48" fill="none" stroke="#f9a8d4" stroke-width="36"/><rect x="34" y="34" width="932" height="1265" rx="32" fill="none" stroke="#fdf2f8" stroke-width="10"/></svg>"##;

/// Built-in frame presets.
pub fn builtin_frames() -> Vec<FramePreset> {
    vec![
        FramePreset {
            id: "none".into(),
            name: "No Frame".into(),
            svg: None,
        },
        FramePreset {
            id: "polaroid".into(),
            name: "Polaroid".into(),
            svg: Some(FRAME_POLAROID_SVG.to_owned()),
        },
        FramePreset {
            id: "sakura".into(),
            name: "Sakura Border".into(),
            svg: Some(FRAME_SAKURA_SVG.to_owned()),
        },
    ]
}

/// Identifier of a fixed sheet layout algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// Vertical four-cut strip, produced in two color variants.
    Strip,
    /// Single photo inside a starred gradient frame.
    SquareFrame,
    /// ID-photo duplicates on a cutting-mat grid with an info sidebar.
    IdGrid,
    /// Credential-style card with photo and text fields.
    Card,
}

/// Fixed configuration a template imposes on an editing session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub id: TemplateId,
    /// Number of photo slots the session needs.
    pub slot_count: usize,
    /// Per-slot canvas shape as `width / height`.
    pub aspect_ratio: f64,
}

impl TemplateId {
    /// All registered templates, in catalog order.
    pub fn all() -> [TemplateId; 4] {
        [
            TemplateId::Strip,
            TemplateId::SquareFrame,
            TemplateId::IdGrid,
            TemplateId::Card,
        ]
    }

    /// The registry entry for this template.
    pub fn spec(self) -> LayoutTemplate {
        match self {
            TemplateId::Strip => LayoutTemplate {
                id: self,
                slot_count: 4,
                aspect_ratio: 1.5,
            },
            TemplateId::SquareFrame => LayoutTemplate {
                id: self,
                slot_count: 1,
                aspect_ratio: 1.0,
            },
            TemplateId::IdGrid => LayoutTemplate {
                id: self,
                slot_count: 1,
                aspect_ratio: 0.77,
            },
            TemplateId::Card => LayoutTemplate {
                id: self,
                slot_count: 1,
                aspect_ratio: 0.77,
            },
        }
    }
}

/// Pen colors offered for freehand drawing.
pub const PEN_COLORS: [&str; 6] = [
    "#FFFFFF", "#000000", "#FF69B4", "#87CEFA", "#FFD700", "#98FB98",
];

/// One browsable sticker entry: registry key plus display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StickerEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// One named sticker category for catalog browsing.
#[derive(Clone, Copy, Debug)]
pub struct StickerCategory {
    pub name: &'static str,
    pub entries: &'static [StickerEntry],
}

const fn entry(key: &'static str, label: &'static str) -> StickerEntry {
    StickerEntry { key, label }
}

/// Stable sticker catalog, grouped for UI browsing. The engine itself only
/// needs the key strings; labels are presentation data.
pub const STICKER_CATEGORIES: &[StickerCategory] = &[
    StickerCategory {
        name: "Y2K",
        entries: &[
            entry("y2k_star_silver", "Silver Star"),
            entry("y2k_star_holo", "Holo Star"),
            entry("y2k_moon_silver", "Chrome Moon"),
            entry("y2k_moon_holo", "Holo Moon"),
            entry("y2k_cross_silver", "Chrome Spark"),
            entry("y2k_cross_holo", "Holo Spark"),
        ],
    },
    StickerCategory {
        name: "Ribbon",
        entries: &[
            entry("ribbon_red_satin", "Red Satin"),
            entry("ribbon_pink_satin", "Pink Satin"),
            entry("ribbon_blue_check", "Blue Gingham"),
        ],
    },
    StickerCategory {
        name: "Doodle",
        entries: &[
            entry("doodle_sparkle", "Sparkles"),
            entry("doodle_heart", "Heart"),
            entry("doodle_wings", "Wings"),
            entry("doodle_whiskers", "Whiskers"),
            entry("doodle_crown", "Crown"),
        ],
    },
    StickerCategory {
        name: "Retro",
        entries: &[
            entry("retro_bauble", "Bauble"),
            entry("retro_holly", "Holly"),
            entry("retro_light", "Fairy Light"),
            entry("retro_stocking", "Stocking"),
            entry("retro_tree", "Xmas Tree"),
        ],
    },
    StickerCategory {
        name: "Cyber",
        entries: &[
            entry("cyber_bear", "Chrome Bear"),
            entry("cyber_bunny", "Holo Bunny"),
            entry("cyber_kitty", "Cyber Kitty"),
            entry("cyber_puppy", "Chrome Puppy"),
            entry("cyber_bird", "Gold Bird"),
        ],
    },
];

/// Iterate every sticker key in the catalog.
pub fn all_sticker_keys() -> impl Iterator<Item = &'static str> {
    STICKER_CATEGORIES
        .iter()
        .flat_map(|c| c.entries.iter().map(|e| e.key))
}

#[cfg(test)]
#[path = "../tests/unit/catalog.rs"]
mod tests;
