use crate::foundation::error::{PurikuraError, PurikuraResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Edge length the logical canvas is pinned to.
///
/// Every slot renders into a fixed logical coordinate space: portrait aspect
/// ratios pin the width at this constant and derive the height, landscape
/// ratios pin the height. Interaction code maps screen pixels into this
/// space and never assumes a 1:1 pixel mapping.
pub const LOGICAL_EDGE: u32 = 1000;

/// Fixed-size logical canvas dimensions for one photo slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogicalSize {
    /// Width in logical units.
    pub width: u32,
    /// Height in logical units.
    pub height: u32,
}

impl LogicalSize {
    /// Derive the logical canvas for an aspect ratio (`width / height`).
    ///
    /// Portrait and square ratios pin the width at [`LOGICAL_EDGE`];
    /// landscape ratios pin the height.
    pub fn from_aspect_ratio(aspect_ratio: f64) -> PurikuraResult<Self> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(PurikuraError::validation(
                "aspect ratio must be finite and > 0",
            ));
        }
        if aspect_ratio > 1.0 {
            let width = ((f64::from(LOGICAL_EDGE) * aspect_ratio).round() as u32).max(1);
            Ok(Self {
                width,
                height: LOGICAL_EDGE,
            })
        } else {
            let height = ((f64::from(LOGICAL_EDGE) / aspect_ratio).round() as u32).max(1);
            Ok(Self {
                width: LOGICAL_EDGE,
                height,
            })
        }
    }

    /// Return `true` when the canvas has no drawable area.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
