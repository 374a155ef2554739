//! Retro seasonal ornaments: mid-century palette, heavy rounded outline.

use kurbo::Shape as _;

use super::SeasonalShape;
use super::shading::{circle_path, halo, star_path};
use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath, Rect};
use crate::render::painter::{Painter, StrokeStyle};

const RED: &str = "#C4423F";
const GREEN: &str = "#2E5E4E";
const GOLD: &str = "#D4AF37";
const CREAM: &str = "#F2E8C9";
const OUTLINE: &str = "#4A3328";

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::BLACK)
}

struct Retro<'a> {
    p: &'a mut Painter,
    base: Affine,
    k: f64,
}

impl Retro<'_> {
    fn outline(&mut self, path: &BezPath) {
        self.p
            .stroke_path(self.base, hex(OUTLINE), &StrokeStyle::new(3.5 * self.k), path);
    }

    fn filled(&mut self, path: &BezPath, color: Color) {
        self.p.fill_path(self.base, color, path);
        self.outline(path);
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.p.fill_path(self.base, color, path);
    }

    fn rect_path(&self, x: f64, y: f64, w: f64, h: f64) -> BezPath {
        let k = self.k;
        Rect::new(x * k, y * k, (x + w) * k, (y + h) * k).to_path(0.1)
    }
}

pub(super) fn draw(p: &mut Painter, base: Affine, shape: SeasonalShape, size: f64) {
    let k = size / 60.0;
    let mut r = Retro { p, base, k };
    match shape {
        SeasonalShape::Bauble => bauble(&mut r),
        SeasonalShape::Holly => holly(&mut r),
        SeasonalShape::Light => light(&mut r),
        SeasonalShape::Stocking => stocking(&mut r),
        SeasonalShape::Tree => tree(&mut r),
    }
}

fn bauble(r: &mut Retro<'_>) {
    let k = r.k;
    let ball = circle_path(0.0, 10.0 * k, 45.0 * k);
    r.fill(&ball, hex(RED));

    // Cream band across the ball, edges trimmed to the circle's chords.
    let band = band_in_circle(0.0, 10.0 * k, 45.0 * k, 0.0, 20.0 * k);
    r.fill(&band, hex(CREAM));
    for dx in [-25.0, 0.0, 25.0] {
        r.fill(&circle_path(dx * k, 10.0 * k, 4.0 * k), hex(GREEN));
    }
    r.outline(&ball);

    // Hanger cap and loop.
    let cap = r.rect_path(-10.0, -40.0, 20.0, 10.0);
    r.filled(&cap, hex(GOLD));
    r.outline(&circle_path(0.0, -45.0 * k, 5.0 * k));
}

/// Horizontal band spanning a circle between `y0` and `y1`, trimmed to the
/// chord width at each edge.
fn band_in_circle(cx: f64, cy: f64, radius: f64, y0: f64, y1: f64) -> BezPath {
    let chord = |y: f64| -> f64 {
        let d = (y - cy).abs();
        if d >= radius {
            0.0
        } else {
            (radius * radius - d * d).sqrt()
        }
    };
    let (w0, w1) = (chord(y0), chord(y1));
    let mut path = BezPath::new();
    path.move_to((cx - w0, y0));
    path.line_to((cx + w0, y0));
    path.line_to((cx + w1, y1));
    path.line_to((cx - w1, y1));
    path.close_path();
    path
}

fn holly(r: &mut Retro<'_>) {
    let k = r.k;
    for angle in [-0.5f64, 0.5f64] {
        let leaf_base = r.base * Affine::rotate(angle);
        let mut leaf = BezPath::new();
        leaf.move_to((0.0, 0.0));
        leaf.quad_to((15.0 * k, -10.0 * k), (30.0 * k, 0.0));
        leaf.quad_to((45.0 * k, -10.0 * k), (60.0 * k, 0.0));
        leaf.quad_to((45.0 * k, 10.0 * k), (30.0 * k, 0.0));
        leaf.quad_to((15.0 * k, 10.0 * k), (0.0, 0.0));
        leaf.close_path();
        r.p.fill_path(leaf_base, hex(GREEN), &leaf);
        r.p
            .stroke_path(leaf_base, hex(OUTLINE), &StrokeStyle::new(3.5 * k), &leaf);

        let mut vein = BezPath::new();
        vein.move_to((0.0, 0.0));
        vein.line_to((55.0 * k, 0.0));
        r.p
            .stroke_path(leaf_base, hex(CREAM), &StrokeStyle::new(1.0 * k), &vein);
    }

    for (bx, by) in [(-5.0, -5.0), (8.0, 0.0), (0.0, 8.0)] {
        r.filled(&circle_path(bx * k, by * k, 8.0 * k), hex(RED));
        r.fill(
            &circle_path((bx - 2.0) * k, (by - 2.0) * k, 2.0 * k),
            Color::WHITE,
        );
    }
}

fn light(r: &mut Retro<'_>) {
    let k = r.k;
    let mut bulb = BezPath::new();
    bulb.move_to((0.0, -40.0 * k));
    bulb.curve_to((30.0 * k, -10.0 * k), (30.0 * k, 30.0 * k), (0.0, 50.0 * k));
    bulb.curve_to(
        (-30.0 * k, 30.0 * k),
        (-30.0 * k, -10.0 * k),
        (0.0, -40.0 * k),
    );
    bulb.close_path();

    halo(r.p, r.base, &bulb, hex(GOLD), 10.0 * k);
    r.filled(&bulb, hex(GOLD));

    // Screw base with thread lines.
    let socket = r.rect_path(-12.0, -55.0, 24.0, 15.0);
    r.filled(&socket, hex("#C0C0C0"));
    let mut threads = BezPath::new();
    threads.move_to((-12.0 * k, -50.0 * k));
    threads.line_to((12.0 * k, -50.0 * k));
    threads.move_to((-12.0 * k, -45.0 * k));
    threads.line_to((12.0 * k, -45.0 * k));
    r.p
        .stroke_path(r.base, hex(OUTLINE), &StrokeStyle::new(1.0 * k), &threads);
}

fn stocking(r: &mut Retro<'_>) {
    let k = r.k;
    let mut boot = BezPath::new();
    boot.move_to((-15.0 * k, -50.0 * k));
    boot.line_to((15.0 * k, -50.0 * k));
    boot.line_to((15.0 * k, 0.0));
    boot.curve_to(
        (15.0 * k, 30.0 * k),
        (20.0 * k, 35.0 * k),
        (35.0 * k, 40.0 * k),
    );
    boot.line_to((35.0 * k, 55.0 * k));
    boot.curve_to(
        (0.0, 55.0 * k),
        (-20.0 * k, 45.0 * k),
        (-25.0 * k, 35.0 * k),
    );
    boot.line_to((-25.0 * k, 0.0));
    boot.line_to((-15.0 * k, -50.0 * k));
    boot.close_path();
    r.filled(&boot, hex(RED));

    let cuff = r.rect_path(-20.0, -50.0, 40.0, 15.0);
    r.filled(&cuff, hex(CREAM));

    // Toe and heel patches.
    let mut toe = BezPath::new();
    toe.move_to((35.0 * k, 40.0 * k));
    toe.line_to((35.0 * k, 55.0 * k));
    toe.line_to((20.0 * k, 50.0 * k));
    toe.close_path();
    r.fill(&toe, hex(GREEN));

    let mut heel = BezPath::new();
    heel.move_to((-25.0 * k, 35.0 * k));
    heel.line_to((-15.0 * k, 30.0 * k));
    heel.line_to((-15.0 * k, 45.0 * k));
    heel.close_path();
    r.fill(&heel, hex(GREEN));
}

fn tree(r: &mut Retro<'_>) {
    let k = r.k;
    let trunk = r.rect_path(-10.0, 35.0, 20.0, 25.0);
    r.filled(&trunk, hex("#5C4033"));

    for (y_off, width, height) in [(40.0, 45.0, 40.0), (15.0, 35.0, 35.0), (-10.0, 25.0, 30.0)] {
        let mut layer = BezPath::new();
        layer.move_to((0.0, (y_off - height) * k));
        layer.line_to((width * k, y_off * k));
        layer.line_to((-width * k, y_off * k));
        layer.close_path();
        r.filled(&layer, hex(GREEN));
    }

    for (x, y, c) in [
        (-15.0, 30.0, RED),
        (10.0, 5.0, RED),
        (15.0, 30.0, CREAM),
        (-5.0, -5.0, CREAM),
    ] {
        r.fill(&circle_path(x * k, y * k, 4.0 * k), hex(c));
    }

    let topper = star_path(0.0, -32.0 * k, 14.0 * k, 6.0 * k, 5);
    r.filled(&topper, hex(GOLD));
}
