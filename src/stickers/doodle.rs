//! Hand-drawn doodle family: white marker lines over a hot-pink halo.

use super::DoodleShape;
use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath};
use crate::render::painter::{Painter, StrokeStyle};

pub(super) fn draw(p: &mut Painter, base: Affine, shape: DoodleShape, size: f64) {
    let k = size / 60.0;
    let outline = Color::from_hex("#FF69B4").unwrap_or(Color::BLACK);

    let paths = match shape {
        DoodleShape::Sparkle => sparkle_paths(k),
        DoodleShape::Heart => heart_paths(k),
        DoodleShape::Wings => wings_paths(k),
        DoodleShape::Whiskers => whiskers_paths(k),
        DoodleShape::Crown => crown_paths(k),
    };

    // Pink halo pass first, then the white core over it.
    for path in &paths {
        p.stroke_path(base, outline, &StrokeStyle::new(6.0 * k), path);
    }
    for path in &paths {
        p.stroke_path(base, Color::WHITE, &StrokeStyle::new(3.0 * k), path);
    }
}

fn line(path: &mut BezPath, x0: f64, y0: f64, x1: f64, y1: f64) {
    path.move_to((x0, y0));
    path.line_to((x1, y1));
}

fn sparkle_paths(k: f64) -> Vec<BezPath> {
    let mut main = BezPath::new();
    line(&mut main, 0.0, -30.0 * k, 0.0, 30.0 * k);
    line(&mut main, -20.0 * k, 0.0, 20.0 * k, 0.0);
    // Little corner glint.
    line(&mut main, 15.0 * k, -15.0 * k, 18.0 * k, -18.0 * k);
    vec![main]
}

fn heart_paths(k: f64) -> Vec<BezPath> {
    let mut heart = BezPath::new();
    heart.move_to((0.0, 15.0 * k));
    heart.curve_to(
        (-20.0 * k, -10.0 * k),
        (-40.0 * k, 10.0 * k),
        (0.0, 40.0 * k),
    );
    heart.curve_to(
        (40.0 * k, 10.0 * k),
        (20.0 * k, -10.0 * k),
        (0.0, 15.0 * k),
    );
    // Scribble fill.
    line(&mut heart, -10.0 * k, 20.0 * k, 10.0 * k, 20.0 * k);
    vec![heart]
}

fn wings_paths(k: f64) -> Vec<BezPath> {
    let mut left = BezPath::new();
    left.move_to((-10.0 * k, 0.0));
    left.quad_to((-40.0 * k, -30.0 * k), (-70.0 * k, -10.0 * k));
    left.quad_to((-60.0 * k, 10.0 * k), (-50.0 * k, 10.0 * k));
    left.quad_to((-40.0 * k, 20.0 * k), (-10.0 * k, 10.0 * k));

    let mut right = BezPath::new();
    right.move_to((10.0 * k, 0.0));
    right.quad_to((40.0 * k, -30.0 * k), (70.0 * k, -10.0 * k));
    right.quad_to((60.0 * k, 10.0 * k), (50.0 * k, 10.0 * k));
    right.quad_to((40.0 * k, 20.0 * k), (10.0 * k, 10.0 * k));
    vec![left, right]
}

fn whiskers_paths(k: f64) -> Vec<BezPath> {
    let mut w = BezPath::new();
    // Left cheek.
    line(&mut w, -60.0 * k, -10.0 * k, -100.0 * k, -20.0 * k);
    line(&mut w, -60.0 * k, 10.0 * k, -100.0 * k, 10.0 * k);
    line(&mut w, -60.0 * k, 30.0 * k, -100.0 * k, 40.0 * k);
    // Right cheek.
    line(&mut w, 60.0 * k, -10.0 * k, 100.0 * k, -20.0 * k);
    line(&mut w, 60.0 * k, 10.0 * k, 100.0 * k, 10.0 * k);
    line(&mut w, 60.0 * k, 30.0 * k, 100.0 * k, 40.0 * k);
    vec![w]
}

fn crown_paths(k: f64) -> Vec<BezPath> {
    let mut crown = BezPath::new();
    crown.move_to((-30.0 * k, 20.0 * k));
    crown.line_to((-30.0 * k, -10.0 * k));
    crown.line_to((-15.0 * k, 10.0 * k));
    crown.line_to((0.0, -20.0 * k));
    crown.line_to((15.0 * k, 10.0 * k));
    crown.line_to((30.0 * k, -10.0 * k));
    crown.line_to((30.0 * k, 20.0 * k));
    crown.close_path();

    // Jewel above the center spike.
    let jewel = super::shading::circle_path(0.0, -25.0 * k, 2.0 * k);
    vec![crown, jewel]
}
