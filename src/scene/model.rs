use serde::{Deserialize, Serialize};

use crate::assets::color::Color;
use crate::assets::decode::{PreparedImage, PreparedSvg};
use crate::catalog::BackgroundPreset;
use crate::foundation::core::Point;

/// Stable identifier for one placed sticker.
///
/// Unique within an editing session for the lifetime of the sticker object;
/// allocated by the interaction engine, never reused after deletion.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StickerId(pub u64);

/// Brush family for freehand strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushKind {
    /// Single marker pass at near-full opacity.
    Standard,
    /// Wide glow pass in the stroke color plus a narrow bright core.
    #[default]
    Neon,
}

/// One committed or in-progress freehand stroke in logical coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub kind: BrushKind,
    pub points: Vec<Point>,
}

/// One placed sticker instance.
///
/// `kind_key` is a catalog key resolved by the sticker registry at draw
/// time; unknown keys render the placeholder glyph rather than failing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StickerItem {
    pub id: StickerId,
    pub kind_key: String,
    pub x: f64,
    pub y: f64,
    /// Always > 0; gesture code clamps it (selection-handle math divides by it).
    pub scale: f64,
    /// Radians.
    pub rotation: f64,
    #[serde(default)]
    pub flipped: bool,
}

/// Per-slot decoration container. Sticker list order is the z-order
/// (later entries draw on top); bring-to-front moves an item to the end.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecorationState {
    pub strokes: Vec<Stroke>,
    pub stickers: Vec<StickerItem>,
}

impl DecorationState {
    pub fn sticker(&self, id: StickerId) -> Option<&StickerItem> {
        self.stickers.iter().find(|s| s.id == id)
    }

    pub fn sticker_mut(&mut self, id: StickerId) -> Option<&mut StickerItem> {
        self.stickers.iter_mut().find(|s| s.id == id)
    }
}

/// Per-slot pan/zoom applied to the subject photo, independent of decorations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

/// How the subject photo is sized against the logical canvas before the
/// user transform applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Photo covers the full canvas (may crop).
    #[default]
    Cover,
    /// Photo fits inside the canvas with a margin so the background shows.
    Contain,
}

/// Feature-flag bundle for the one canonical compositor.
///
/// Cosmetic variants (film grain, soft glow, date stamp, fit mode) are
/// configuration on a single pipeline, not forked code paths.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Brightness/contrast/saturation boost on the photo layer.
    pub lighting: bool,
    /// Bloom: blurred lightened photo copy composited with a Screen blend,
    /// plus a warm tint confined to the photo footprint.
    pub soft_glow: bool,
    /// Film grain intensity in `[0, 1]`; `0` is a byte-exact no-op.
    pub grain: f32,
    /// Analog date imprint in the bottom-right corner.
    pub date_stamp: bool,
    pub fit: FitMode,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            lighting: true,
            soft_glow: true,
            grain: 0.08,
            date_stamp: true,
            fit: FitMode::Cover,
        }
    }
}

/// Everything the compositor needs to render one slot.
///
/// Borrowed view assembled per render call; the engine performs no IO and
/// holds no state across calls.
pub struct SlotParams<'a> {
    /// Decoded subject photo, if any. `None` (or a zero-sized image) leaves
    /// the photo step out while every other layer still renders.
    pub photo: Option<&'a PreparedImage>,
    pub background: Option<&'a BackgroundPreset>,
    /// Frame overlay stretched over the full logical surface.
    pub frame: Option<&'a PreparedSvg>,
    pub filters: &'a FilterOptions,
    pub decorations: &'a DecorationState,
    pub transform: ImageTransform,
    /// Sticker that gets selection chrome, if any.
    pub selected_sticker: Option<StickerId>,
    /// `width / height` of the slot canvas.
    pub aspect_ratio: f64,
    /// Injected date text for the stamp; the engine never reads a clock.
    pub date_text: &'a str,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
