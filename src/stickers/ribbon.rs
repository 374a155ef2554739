//! Satin / gingham bow family.

use super::RibbonStyle;
use super::shading::{self, fill_with_gradient};
use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath};
use crate::render::painter::{ImagePaint, Painter, StrokeStyle};

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::WHITE)
}

pub(super) fn draw(p: &mut Painter, base: Affine, style: RibbonStyle, size: f64) {
    let k = size / 60.0;
    let (base_color, dark_color, gingham) = match style {
        RibbonStyle::PinkSatin => (hex("#FFC0CB"), hex("#FF69B4"), false),
        RibbonStyle::BlueGingham => (hex("#87CEFA"), hex("#4682B4"), true),
        RibbonStyle::RedSatin => (hex("#D22B2B"), hex("#8B0000"), false),
    };

    let bow = bow_path(k);

    if gingham {
        // Crossed-stripe weave baked into a pattern image; filling the bow
        // path with it keeps the lattice inside the silhouette without a
        // clip layer.
        match gingham_image(base_color) {
            Some(img) => {
                let extent = 80.0 * k;
                let paint_tr = Affine::translate((-extent, -extent))
                    * Affine::scale(2.0 * extent / f64::from(GINGHAM_EDGE));
                p.fill_path_with_image(base, &img, paint_tr, &bow);
            }
            None => p.fill_path(base, base_color, &bow),
        }
    } else {
        let sheen = shading::linear_gradient_image(&[
            (0.0, base_color),
            (0.5, Color::WHITE),
            (1.0, base_color),
        ]);
        fill_with_gradient(p, base, &bow, sheen.as_ref(), 80.0 * k, base_color);
    }

    // Outline gives the loops their fold definition.
    p.stroke_path(base, dark_color, &StrokeStyle::new(1.2 * k), &bow);

    // Knot.
    let knot = shading::circle_path(0.0, 0.0, 8.0 * k);
    let knot_color = if gingham { base_color } else { dark_color };
    p.fill_path(base, knot_color, &knot);
}

const GINGHAM_EDGE: u32 = 160;

/// White ground with translucent crossed stripes every 8px, 4px wide;
/// crossings read darker where the passes stack, like woven gingham.
fn gingham_image(stripe: Color) -> Option<ImagePaint> {
    let n = GINGHAM_EDGE;
    let mut bytes = vec![0u8; (n as usize) * (n as usize) * 4];
    for y in 0..n {
        for x in 0..n {
            let on_v = (x % 8) < 4;
            let on_h = (y % 8) < 4;
            let mut c = Color::WHITE;
            if on_v {
                c = c.lerp(stripe, 0.85);
            }
            if on_h {
                c = c.lerp(stripe, 0.85);
            }
            let pm = c.to_rgba8_premul();
            let idx = ((y as usize) * (n as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&[pm.r, pm.g, pm.b, pm.a]);
        }
    }
    ImagePaint::from_premul_rgba8(&bytes, n, n)
}

/// Two loops and two notched tails meeting at the knot.
fn bow_path(k: f64) -> BezPath {
    let mut path = BezPath::new();
    // Left loop.
    path.move_to((0.0, 0.0));
    path.curve_to(
        (-40.0 * k, -40.0 * k),
        (-80.0 * k, -20.0 * k),
        (-40.0 * k, 20.0 * k),
    );
    path.line_to((0.0, 0.0));
    // Right loop.
    path.curve_to(
        (40.0 * k, -40.0 * k),
        (80.0 * k, -20.0 * k),
        (40.0 * k, 20.0 * k),
    );
    path.line_to((0.0, 0.0));
    // Left tail.
    path.move_to((0.0, 0.0));
    path.quad_to((-20.0 * k, 50.0 * k), (-50.0 * k, 60.0 * k));
    path.line_to((-30.0 * k, 60.0 * k));
    path.quad_to((-15.0 * k, 50.0 * k), (0.0, 10.0 * k));
    path.close_path();
    // Right tail.
    path.move_to((0.0, 0.0));
    path.quad_to((20.0 * k, 50.0 * k), (50.0 * k, 60.0 * k));
    path.line_to((30.0 * k, 60.0 * k));
    path.quad_to((15.0 * k, 50.0 * k), (0.0, 10.0 * k));
    path.close_path();
    path
}
