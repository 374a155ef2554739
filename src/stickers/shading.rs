//! Shading helpers shared across sticker families and sheet chrome:
//! gradient image paints, star/circle primitives, layered halo glow.

use kurbo::Shape;

use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath};
use crate::render::painter::{ImagePaint, Painter, StrokeStyle};

const PATH_TOLERANCE: f64 = 0.1;
/// Pixel edge of synthesized gradient paint images. Gradients are smooth,
/// so a modest image stretched over the silhouette is indistinguishable
/// from an analytic fill.
const GRADIENT_IMAGE_EDGE: u32 = 96;

/// Closed five-or-more point star, the primitive reused by stickers and
/// sheet decoration alike.
pub(crate) fn star_path(cx: f64, cy: f64, outer: f64, inner: f64, points: u32) -> BezPath {
    let points = points.max(3);
    let mut path = BezPath::new();
    let step = std::f64::consts::PI / points as f64;
    let mut rot = std::f64::consts::PI / 2.0 * 3.0;

    path.move_to((cx, cy - outer));
    for _ in 0..points {
        path.line_to((cx + rot.cos() * outer, cy + rot.sin() * outer));
        rot += step;
        path.line_to((cx + rot.cos() * inner, cy + rot.sin() * inner));
        rot += step;
    }
    path.close_path();
    path
}

pub(crate) fn circle_path(cx: f64, cy: f64, r: f64) -> BezPath {
    kurbo::Circle::new((cx, cy), r.max(0.0)).to_path(PATH_TOLERANCE)
}

pub(crate) fn ellipse_path(cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64) -> BezPath {
    kurbo::Ellipse::new((cx, cy), (rx.max(0.0), ry.max(0.0)), rotation).to_path(PATH_TOLERANCE)
}

fn gradient_color(stops: &[(f64, Color)], t: f64) -> Color {
    let Some(first) = stops.first() else {
        return Color::BLACK;
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

fn premul_bytes(c: Color) -> [u8; 4] {
    let p = c.to_rgba8_premul();
    [p.r, p.g, p.b, p.a]
}

/// Diagonal multi-stop gradient paint image (top-left toward bottom-right).
pub(crate) fn linear_gradient_image(stops: &[(f64, Color)]) -> Option<ImagePaint> {
    let n = GRADIENT_IMAGE_EDGE;
    let mut bytes = vec![0u8; (n as usize) * (n as usize) * 4];
    let span = 2.0 * f64::from(n - 1);
    for y in 0..n {
        for x in 0..n {
            let t = f64::from(x + y) / span;
            let px = premul_bytes(gradient_color(stops, t));
            let idx = ((y as usize) * (n as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&px);
        }
    }
    ImagePaint::from_premul_rgba8(&bytes, n, n)
}

/// Radial gradient paint image with the highlight focus pulled toward the
/// upper left, the way studio light falls on a sphere.
pub(crate) fn radial_gradient_image(stops: &[(f64, Color)]) -> Option<ImagePaint> {
    let n = GRADIENT_IMAGE_EDGE;
    let r = f64::from(n) / 2.0;
    let (fx, fy) = (r - r / 3.0, r - r / 3.0);
    let mut bytes = vec![0u8; (n as usize) * (n as usize) * 4];
    for y in 0..n {
        for x in 0..n {
            let dx = f64::from(x) + 0.5 - fx;
            let dy = f64::from(y) + 0.5 - fy;
            let t = ((dx * dx + dy * dy).sqrt() / r).clamp(0.0, 1.0);
            let px = premul_bytes(gradient_color(stops, t));
            let idx = ((y as usize) * (n as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&px);
        }
    }
    ImagePaint::from_premul_rgba8(&bytes, n, n)
}

/// Paint transform mapping a gradient image over the local box
/// `[-extent, extent]` in both axes.
pub(crate) fn paint_into_box(extent: f64) -> Affine {
    Affine::translate((-extent, -extent))
        * Affine::scale(2.0 * extent / f64::from(GRADIENT_IMAGE_EDGE))
}

/// Fill `path` (spanning `[-extent, extent]` locally) with a gradient image.
pub(crate) fn fill_with_gradient(
    p: &mut Painter,
    base: Affine,
    path: &BezPath,
    image: Option<&ImagePaint>,
    extent: f64,
    fallback: Color,
) {
    match image {
        Some(img) => p.fill_path_with_image(base, img, paint_into_box(extent), path),
        None => p.fill_path(base, fallback, path),
    }
}

/// Layered halo glow: widening, fading outline passes under the shape,
/// simulating a blurred shadow without a pixel pass.
pub(crate) fn halo(p: &mut Painter, base: Affine, path: &BezPath, color: Color, width: f64) {
    for (mul, alpha) in [(2.6, 0.10), (1.8, 0.18), (1.1, 0.28)] {
        p.stroke_path(
            base,
            color.with_alpha(color.a * alpha),
            &StrokeStyle::new(width * mul),
            path,
        );
    }
}

/// Metallic finishes used by the pet family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MetalFinish {
    Silver,
    Holo,
    Titanium,
    Gold,
}

/// Radial liquid-metal gradient for a finish.
pub(crate) fn metal_gradient(finish: MetalFinish) -> Option<ImagePaint> {
    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap_or(Color::BLACK)
    }

    let stops: &[(f64, Color)] = match finish {
        MetalFinish::Silver => &[
            (0.0, Color::WHITE),
            (0.3, Color::rgb(0.878, 0.878, 0.878)),
            (0.8, Color::rgb(0.502, 0.502, 0.502)),
            (1.0, Color::rgb(0.251, 0.251, 0.251)),
        ],
        MetalFinish::Holo => &[
            (0.0, Color::rgb(1.0, 0.878, 0.941)),
            (0.5, Color::rgb(0.867, 0.627, 0.867)),
            (1.0, Color::rgb(0.541, 0.169, 0.886)),
        ],
        MetalFinish::Titanium => &[
            (0.0, Color::rgb(0.627, 0.627, 0.627)),
            (0.5, Color::rgb(0.314, 0.314, 0.314)),
            (1.0, Color::rgb(0.102, 0.102, 0.102)),
        ],
        MetalFinish::Gold => &[
            (0.0, hex("#FFFFE0")),
            (0.4, hex("#FFD700")),
            (1.0, hex("#B8860B")),
        ],
    };
    radial_gradient_image(stops)
}

/// Fill a sphere-like path with a metal finish sized to its radius.
pub(crate) fn fill_metal(
    p: &mut Painter,
    base: Affine,
    path: &BezPath,
    cx: f64,
    cy: f64,
    r: f64,
    finish: MetalFinish,
) {
    let img = metal_gradient(finish);
    match img {
        Some(img) => {
            let paint_tr = Affine::translate((cx - r, cy - r))
                * Affine::scale(2.0 * r / f64::from(GRADIENT_IMAGE_EDGE));
            p.fill_path_with_image(base, &img, paint_tr, path);
        }
        None => p.fill_path(base, Color::rgb(0.6, 0.6, 0.6), path),
    }
}
