//! Y2K metallic / holographic sparkle family.

use super::shading::{self, fill_with_gradient, halo};
use super::{Finish, SparkleShape};
use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath};
use crate::render::painter::{Painter, StrokeStyle};

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::WHITE)
}

pub(super) fn draw(p: &mut Painter, base: Affine, shape: SparkleShape, finish: Finish, size: f64) {
    let k = size / 60.0;
    let path = match shape {
        SparkleShape::Star => shading::star_path(0.0, 0.0, 55.0 * k, 25.0 * k, 5),
        SparkleShape::Moon => crescent_path(k),
        SparkleShape::Cross => cross_path(k),
    };

    let (gradient, glow) = match finish {
        Finish::Holo => (
            shading::linear_gradient_image(&[
                (0.0, hex("#FFC3EB")),
                (0.5, hex("#C3FBD8")),
                (1.0, hex("#ACE0F9")),
            ]),
            hex("#FF69B4"),
        ),
        Finish::Silver => (
            shading::linear_gradient_image(&[
                (0.0, hex("#E0E0E0")),
                (0.4, Color::WHITE),
                (0.6, Color::WHITE),
                (1.0, hex("#A0A0A0")),
            ]),
            hex("#ACE0F9"),
        ),
    };

    halo(p, base, &path, glow, 8.0 * k);
    fill_with_gradient(p, base, &path, gradient.as_ref(), 60.0 * k, hex("#E0E0E0"));
    // High-gloss bevel.
    p.stroke_path(
        base,
        Color::WHITE.with_alpha(0.9),
        &StrokeStyle::new(2.0 * k),
        &path,
    );
}

/// Crescent: outer arc swept clockwise, closed by an inner bezier bite.
fn crescent_path(k: f64) -> BezPath {
    let r = 50.0 * k;
    let mut path = BezPath::new();

    let start = 2.0f64;
    let sweep = 3.5f64;
    let steps = 24;
    path.move_to((r * start.cos(), r * start.sin()));
    for i in 1..=steps {
        let a = start + sweep * (i as f64) / (steps as f64);
        path.line_to((r * a.cos(), r * a.sin()));
    }
    path.curve_to(
        (20.0 * k, -30.0 * k),
        (20.0 * k, 30.0 * k),
        (-21.0 * k, 35.0 * k),
    );
    path.close_path();
    path
}

/// Four-point sparkle cross with pinched waists.
fn cross_path(k: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, -60.0 * k));
    path.quad_to((5.0 * k, -10.0 * k), (60.0 * k, 0.0));
    path.quad_to((5.0 * k, 10.0 * k), (0.0, 60.0 * k));
    path.quad_to((-5.0 * k, 10.0 * k), (-60.0 * k, 0.0));
    path.quad_to((-5.0 * k, -10.0 * k), (0.0, -60.0 * k));
    path.close_path();
    path
}
