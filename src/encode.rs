//! Raster output encoding. PNG keeps sticker and line art lossless; JPEG
//! bounds the size of large print sheets. Both are deterministic for
//! identical surfaces.

use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{PurikuraError, PurikuraResult};
use crate::render::surface::Surface;

/// Unpremultiply a surface into straight-alpha RGBA8.
fn to_straight_rgba(surface: &Surface) -> Vec<u8> {
    let mut out = surface.data.clone();
    for px in out.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in 0..3 {
            px[c] = ((u16::from(px[c]) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}

/// Encode a surface as PNG bytes.
pub fn to_png(surface: &Surface) -> PurikuraResult<Vec<u8>> {
    if surface.is_empty() {
        return Err(PurikuraError::render("cannot encode an empty surface"));
    }
    let rgba = to_straight_rgba(surface);
    let img = image::RgbaImage::from_raw(surface.width, surface.height, rgba)
        .ok_or_else(|| PurikuraError::render("surface buffer does not match dimensions"))?;

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(bytes)
}

/// Encode a surface as JPEG bytes at the given quality (1..=100).
///
/// Alpha is composited against white; JPEG has no alpha channel.
pub fn to_jpeg(surface: &Surface, quality: u8) -> PurikuraResult<Vec<u8>> {
    if surface.is_empty() {
        return Err(PurikuraError::render("cannot encode an empty surface"));
    }
    let rgba = to_straight_rgba(surface);
    let mut rgb = Vec::with_capacity((surface.width as usize) * (surface.height as usize) * 3);
    for px in rgba.chunks_exact(4) {
        let a = u16::from(px[3]);
        for c in 0..3 {
            let v = (u16::from(px[c]) * a + 255 * (255 - a)) / 255;
            rgb.push(v.min(255) as u8);
        }
    }
    let img = image::RgbImage::from_raw(surface.width, surface.height, rgb)
        .ok_or_else(|| PurikuraError::render("surface buffer does not match dimensions"))?;

    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality.clamp(1, 100));
    img.write_with_encoder(encoder).context("encode jpeg")?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../tests/unit/encode.rs"]
mod tests;
