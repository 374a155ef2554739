use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::PurikuraResult;

/// Prepared raster image in premultiplied RGBA8 form.
///
/// This is the only form of photo pixel data the engine ever sees: decoding
/// either fully succeeds or fails, there is no partially decoded state.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Wrap an already-straight RGBA8 buffer (e.g. a camera frame).
    pub fn from_straight_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> PurikuraResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if rgba.len() != expected {
            return Err(crate::PurikuraError::decode(
                "rgba buffer length does not match dimensions",
            ));
        }
        premultiply_rgba8_in_place(&mut rgba);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba),
        })
    }

    /// Return `true` when the image has no pixels to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Decode any raster image source supported by the `image` crate.
pub fn decode_image(bytes: &[u8]) -> PurikuraResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parsed SVG frame overlay.
#[derive(Clone, Debug)]
pub struct PreparedSvg {
    pub(crate) tree: Arc<usvg::Tree>,
}

/// Parse an SVG document (frame overlays are authored as SVG).
pub fn parse_svg(bytes: &[u8]) -> PurikuraResult<PreparedSvg> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(PreparedSvg {
        tree: Arc::new(tree),
    })
}

/// Rasterize a parsed SVG stretched to exactly `width x height` pixels.
///
/// Output is premultiplied RGBA8, matching [`PreparedImage`].
pub fn rasterize_svg_to_premul_rgba8(
    svg: &PreparedSvg,
    width: u32,
    height: u32,
) -> PurikuraResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| crate::PurikuraError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / svg.tree.size().width();
    let sy = (height as f32) / svg.tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&svg.tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
