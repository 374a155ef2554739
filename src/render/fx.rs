use crate::foundation::error::{PurikuraError, PurikuraResult};
use crate::foundation::math::{hash_u32, mul_div255_u8};
use crate::render::surface::Surface;

/// Blend modes used by the layer pipeline.
///
/// The compositor only reaches for the modes its steps need: Normal for
/// plain layer stacking, Screen for bloom, Overlay for film grain and
/// holographic chrome, SoftLight for warm tints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum BlendMode {
    #[default]
    Normal,
    Screen,
    Overlay,
    SoftLight,
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Porter-Duff source-over of premultiplied buffers at an op-level opacity.
pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> PurikuraResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PurikuraError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    let op = ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16;
    if op == 0 {
        return Ok(());
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = mul_div255_u8(u16::from(s[3]), op);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - u16::from(sa);

        d[3] = add_sat_u8(sa, mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            let sc = mul_div255_u8(u16::from(s[c]), op);
            let dc = mul_div255_u8(u16::from(d[c]), inv);
            d[c] = add_sat_u8(sc, dc);
        }
    }
    Ok(())
}

/// Composite `src` over `dst` with a blend mode at an op-level opacity.
pub(crate) fn composite_over(
    dst: &mut [u8],
    src: &[u8],
    opacity: f32,
    blend: BlendMode,
) -> PurikuraResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PurikuraError::render(
            "composite_over expects equal-length rgba8 buffers",
        ));
    }

    // Blend dispatch happens once per op, not per pixel; each branch
    // monomorphizes a specialized kernel.
    match blend {
        BlendMode::Normal => premul_over_in_place(dst, src, opacity),
        BlendMode::Screen => composite_over_blend(dst, src, opacity, |s, d| s + d - s * d),
        BlendMode::Overlay => composite_over_blend(dst, src, opacity, |s, d| {
            if d <= 0.5 {
                2.0 * s * d
            } else {
                1.0 - 2.0 * (1.0 - s) * (1.0 - d)
            }
        }),
        BlendMode::SoftLight => composite_over_blend(dst, src, opacity, |s, d| {
            if s <= 0.5 {
                d - (1.0 - 2.0 * s) * d * (1.0 - d)
            } else {
                let g = if d <= 0.25 {
                    ((16.0 * d - 12.0) * d + 4.0) * d
                } else {
                    d.sqrt()
                };
                d + (2.0 * s - 1.0) * (g - d)
            }
        }),
    }
}

#[inline(always)]
fn composite_over_blend<F>(dst: &mut [u8], src: &[u8], opacity: f32, blend_fn: F) -> PurikuraResult<()>
where
    F: Fn(f32, f32) -> f32,
{
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return Ok(());
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        // Porter-Duff source-over with the blend applied to unpremultiplied
        // channels:
        // out_a = sa + da * (1 - sa)
        // out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da
        let sp_r = (s[0] as f32 / 255.0) * opacity;
        let sp_g = (s[1] as f32 / 255.0) * opacity;
        let sp_b = (s[2] as f32 / 255.0) * opacity;
        let sa = (s[3] as f32 / 255.0) * opacity;

        let dp_r = d[0] as f32 / 255.0;
        let dp_g = d[1] as f32 / 255.0;
        let dp_b = d[2] as f32 / 255.0;
        let da = d[3] as f32 / 255.0;

        let inv_sa = 1.0 - sa;
        let out_a = (sa + da * inv_sa).clamp(0.0, 1.0);

        let unpremul = |p: f32, a: f32| if a > 0.0 { (p / a).clamp(0.0, 1.0) } else { 0.0 };
        let sc_r = unpremul(sp_r, sa);
        let sc_g = unpremul(sp_g, sa);
        let sc_b = unpremul(sp_b, sa);
        let dc_r = unpremul(dp_r, da);
        let dc_g = unpremul(dp_g, da);
        let dc_b = unpremul(dp_b, da);

        let b_r = blend_fn(sc_r, dc_r).clamp(0.0, 1.0);
        let b_g = blend_fn(sc_g, dc_g).clamp(0.0, 1.0);
        let b_b = blend_fn(sc_b, dc_b).clamp(0.0, 1.0);

        let out_p_r = (sp_r * (1.0 - da) + dp_r * (1.0 - sa) + b_r * sa * da).clamp(0.0, 1.0);
        let out_p_g = (sp_g * (1.0 - da) + dp_g * (1.0 - sa) + b_g * sa * da).clamp(0.0, 1.0);
        let out_p_b = (sp_b * (1.0 - da) + dp_b * (1.0 - sa) + b_b * sa * da).clamp(0.0, 1.0);

        d[0] = (out_p_r * 255.0).round().clamp(0.0, 255.0) as u8;
        d[1] = (out_p_g * 255.0).round().clamp(0.0, 255.0) as u8;
        d[2] = (out_p_b * 255.0).round().clamp(0.0, 255.0) as u8;
        d[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    Ok(())
}

/// Build a normalized Gaussian kernel in Q16 fixed point.
pub(crate) fn gaussian_kernel_q16(radius: u32, sigma: f32) -> PurikuraResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(PurikuraError::validation("blur sigma must be finite and > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(PurikuraError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Force exact unity gain by absorbing the rounding error into the center tap.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        weights[mid] = (mid_val + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

/// Separable Gaussian blur over a premultiplied RGBA8 surface.
pub(crate) fn blur_surface(surface: &Surface, radius: u32, sigma: f32) -> PurikuraResult<Surface> {
    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut out = surface.clone();
    if kernel.len() == 1 || surface.is_empty() {
        return Ok(out);
    }
    let mut tmp = vec![0u8; surface.data.len()];
    horizontal_blur_q16(&surface.data, &mut tmp, surface.width, surface.height, &kernel);
    vertical_blur_q16(&tmp, &mut out.data, surface.width, surface.height, &kernel);
    Ok(out)
}

fn horizontal_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let dx = ki as i32 - radius;
                let sx = (x + dx).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += (kw as u64) * (src[idx + c] as u64);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let dy = ki as i32 - radius;
                let sy = (y + dy).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += (kw as u64) * (src[idx + c] as u64);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

/// Apply a 4x5 color matrix (rows: r, g, b, a; last column is offset) to a
/// premultiplied buffer in place. Channels are unpremultiplied for the
/// matrix and re-premultiplied afterwards.
pub(crate) fn color_matrix_in_place(data: &mut [u8], m: [f32; 20]) {
    for px in data.chunks_exact_mut(4) {
        let pr = px[0] as f32 / 255.0;
        let pg = px[1] as f32 / 255.0;
        let pb = px[2] as f32 / 255.0;
        let pa = px[3] as f32 / 255.0;

        let inv_a = if pa > 0.0 { 1.0 / pa } else { 0.0 };
        let r = pr * inv_a;
        let g = pg * inv_a;
        let b = pb * inv_a;
        let a = pa;

        let out_r = (m[0] * r + m[1] * g + m[2] * b + m[3] * a + m[4]).clamp(0.0, 1.0);
        let out_g = (m[5] * r + m[6] * g + m[7] * b + m[8] * a + m[9]).clamp(0.0, 1.0);
        let out_b = (m[10] * r + m[11] * g + m[12] * b + m[13] * a + m[14]).clamp(0.0, 1.0);
        let out_a = (m[15] * r + m[16] * g + m[17] * b + m[18] * a + m[19]).clamp(0.0, 1.0);

        px[0] = ((out_r * out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        px[1] = ((out_g * out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        px[2] = ((out_b * out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
        px[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

/// Multiply two 4x5 color matrices (`a` applied after `b`).
fn matrix_mul(a: [f32; 20], b: [f32; 20]) -> [f32; 20] {
    let mut out = [0.0f32; 20];
    for row in 0..4 {
        for col in 0..5 {
            let mut v = 0.0;
            for k in 0..4 {
                v += a[row * 5 + k] * b[k * 5 + col];
            }
            if col == 4 {
                v += a[row * 5 + 4];
            }
            out[row * 5 + col] = v;
        }
    }
    out
}

fn identity_matrix() -> [f32; 20] {
    let mut m = [0.0f32; 20];
    m[0] = 1.0;
    m[6] = 1.0;
    m[12] = 1.0;
    m[18] = 1.0;
    m
}

fn brightness_matrix(b: f32) -> [f32; 20] {
    let mut m = identity_matrix();
    m[0] = b;
    m[6] = b;
    m[12] = b;
    m
}

fn contrast_matrix(c: f32) -> [f32; 20] {
    let o = 0.5 * (1.0 - c);
    let mut m = identity_matrix();
    m[0] = c;
    m[4] = o;
    m[6] = c;
    m[9] = o;
    m[12] = c;
    m[14] = o;
    m
}

fn saturation_matrix(s: f32) -> [f32; 20] {
    // Rec. 601 luma weights.
    let (lr, lg, lb) = (0.2126, 0.7152, 0.0722);
    let inv = 1.0 - s;
    let mut m = identity_matrix();
    m[0] = lr * inv + s;
    m[1] = lg * inv;
    m[2] = lb * inv;
    m[5] = lr * inv;
    m[6] = lg * inv + s;
    m[7] = lb * inv;
    m[10] = lr * inv;
    m[11] = lg * inv;
    m[12] = lb * inv + s;
    m
}

/// Beauty-filter matrix: gentle brightness lift, slight contrast ease,
/// mild saturation push.
pub(crate) fn lighting_matrix() -> [f32; 20] {
    matrix_mul(
        saturation_matrix(1.05),
        matrix_mul(contrast_matrix(0.95), brightness_matrix(1.15)),
    )
}

/// Brightness-only matrix used on the bloom copy before the Screen blend.
pub(crate) fn bloom_matrix() -> [f32; 20] {
    brightness_matrix(1.2)
}

/// Piecewise-linear color ramp lookup over ascending `(offset, color)` stops.
pub(crate) fn gradient_color(stops: &[(f64, crate::assets::color::Color)], t: f64) -> crate::assets::color::Color {
    use crate::assets::color::Color;
    let Some(first) = stops.first() else {
        return Color::WHITE;
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let span = (o1 - o0).max(1e-9);
            return c0.lerp(c1, (t - o0) / span);
        }
    }
    stops[stops.len() - 1].1
}

/// Write a diagonal (top-left to bottom-right) multi-stop gradient straight
/// into a surface, replacing its contents.
pub(crate) fn fill_diagonal_gradient(
    out: &mut Surface,
    stops: &[(f64, crate::assets::color::Color)],
) {
    let span = (out.width.saturating_sub(1) + out.height.saturating_sub(1)).max(1) as f64;
    for y in 0..out.height {
        for x in 0..out.width {
            let t = f64::from(x + y) / span;
            let c = gradient_color(stops, t).to_rgba8_premul();
            let idx = ((y as usize) * (out.width as usize) + (x as usize)) * 4;
            out.data[idx..idx + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
}

/// Edge length of the tileable grain pattern.
pub(crate) const GRAIN_TILE: u32 = 100;
const GRAIN_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Composite deterministic film grain over the whole surface with an
/// Overlay blend at `opacity = intensity`.
///
/// Intensity at or below zero leaves the surface byte-identical — the grain
/// step is a true no-op, not a blend by zero that might still round.
pub(crate) fn apply_grain(surface: &mut Surface, intensity: f32) -> PurikuraResult<()> {
    if intensity <= 0.0 || surface.is_empty() {
        return Ok(());
    }

    let mut tile = vec![0u8; (GRAIN_TILE as usize) * (GRAIN_TILE as usize) * 4];
    for y in 0..GRAIN_TILE {
        for x in 0..GRAIN_TILE {
            let idx = ((y as usize) * (GRAIN_TILE as usize) + (x as usize)) * 4;
            let v = hash_u32(GRAIN_SEED, x, y) as u8;
            tile[idx] = v;
            tile[idx + 1] = v;
            tile[idx + 2] = v;
            tile[idx + 3] = 255;
        }
    }

    let mut noise = vec![0u8; surface.data.len()];
    for y in 0..surface.height {
        let ty = (y % GRAIN_TILE) as usize;
        for x in 0..surface.width {
            let tx = (x % GRAIN_TILE) as usize;
            let src = (ty * (GRAIN_TILE as usize) + tx) * 4;
            let dst = ((y as usize) * (surface.width as usize) + (x as usize)) * 4;
            noise[dst..dst + 4].copy_from_slice(&tile[src..src + 4]);
        }
    }

    composite_over(
        &mut surface.data,
        &noise,
        intensity.min(1.0),
        BlendMode::Overlay,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/fx.rs"]
mod tests;
