//! Liquid-metal pet family: radial chrome spheres with tiny face details.

use super::PetShape;
use super::shading::{MetalFinish, circle_path, ellipse_path, fill_metal, halo};
use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath};
use crate::render::painter::{Painter, StrokeStyle};

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::BLACK)
}

pub(super) fn draw(p: &mut Painter, base: Affine, shape: PetShape, size: f64) {
    let k = size / 60.0;
    match shape {
        PetShape::Bear => bear(p, base, k),
        PetShape::Bunny => bunny(p, base, k),
        PetShape::Kitty => kitty(p, base, k),
        PetShape::Puppy => puppy(p, base, k),
        PetShape::Bird => bird(p, base, k),
    }
}

fn bear(p: &mut Painter, base: Affine, k: f64) {
    // Ears behind the head.
    for ex in [-35.0, 35.0] {
        let ear = circle_path(ex * k, -35.0 * k, 18.0 * k);
        fill_metal(p, base, &ear, ex * k, -35.0 * k, 18.0 * k, MetalFinish::Silver);
    }

    let head = circle_path(0.0, 0.0, 50.0 * k);
    fill_metal(p, base, &head, 0.0, 0.0, 50.0 * k, MetalFinish::Silver);

    // Specular swipe.
    let shine = ellipse_path(-20.0 * k, -20.0 * k, 15.0 * k, 8.0 * k, -std::f64::consts::FRAC_PI_4);
    p.fill_path(base, Color::WHITE.with_alpha(0.9), &shine);

    for ex in [-15.0, 15.0] {
        p.fill_path(base, Color::BLACK, &circle_path(ex * k, 0.0, 4.0 * k));
    }
    let snout = ellipse_path(0.0, 10.0 * k, 8.0 * k, 5.0 * k, 0.0);
    p.fill_path(base, Color::BLACK, &snout);
}

fn bunny(p: &mut Painter, base: Affine, k: f64) {
    // Cyan glow behind the ears.
    let glow = hex("#00FFFF");
    for (ex, rot) in [(-25.0, -0.2), (25.0, 0.2)] {
        let ear = ellipse_path(ex * k, -50.0 * k, 15.0 * k, 40.0 * k, rot);
        halo(p, base, &ear, glow, 6.0 * k);
        fill_metal(p, base, &ear, ex * k, -50.0 * k, 40.0 * k, MetalFinish::Holo);
    }

    let head = circle_path(0.0, 0.0, 45.0 * k);
    fill_metal(p, base, &head, 0.0, 0.0, 45.0 * k, MetalFinish::Holo);

    for ex in [-15.0, 15.0] {
        p.fill_path(base, Color::WHITE, &circle_path(ex * k, -5.0 * k, 3.0 * k));
    }
    let mut nose = BezPath::new();
    nose.move_to((-5.0 * k, 10.0 * k));
    nose.line_to((5.0 * k, 10.0 * k));
    nose.line_to((0.0, 15.0 * k));
    nose.close_path();
    p.fill_path(base, Color::WHITE, &nose);
}

fn kitty(p: &mut Painter, base: Affine, k: f64) {
    // Pointed ears.
    for sign in [-1.0f64, 1.0f64] {
        let mut ear = BezPath::new();
        ear.move_to((sign * 40.0 * k, -20.0 * k));
        ear.line_to((sign * 55.0 * k, -60.0 * k));
        ear.line_to((sign * 10.0 * k, -35.0 * k));
        ear.close_path();
        fill_metal(
            p,
            base,
            &ear,
            sign * 35.0 * k,
            -40.0 * k,
            25.0 * k,
            MetalFinish::Titanium,
        );
    }

    let head = ellipse_path(0.0, 0.0, 55.0 * k, 40.0 * k, 0.0);
    fill_metal(p, base, &head, 0.0, 0.0, 55.0 * k, MetalFinish::Titanium);

    // LED eyes.
    let led = hex("#00FF00");
    for ex in [-20.0, 20.0] {
        let eye = circle_path(ex * k, 0.0, 6.0 * k);
        halo(p, base, &eye, led, 4.0 * k);
        p.fill_path(base, led, &eye);
    }

    let mut whiskers = BezPath::new();
    for sign in [-1.0f64, 1.0f64] {
        whiskers.move_to((sign * 40.0 * k, 10.0 * k));
        whiskers.line_to((sign * 65.0 * k, 10.0 * k));
        whiskers.move_to((sign * 40.0 * k, 18.0 * k));
        whiskers.line_to((sign * 60.0 * k, 22.0 * k));
    }
    p.stroke_path(base, Color::WHITE, &StrokeStyle::new(1.0 * k), &whiskers);
}

fn puppy(p: &mut Painter, base: Affine, k: f64) {
    // Droopy ears.
    for (ex, rot) in [(-45.0, 0.4), (45.0, -0.4)] {
        let ear = ellipse_path(ex * k, -10.0 * k, 15.0 * k, 35.0 * k, rot);
        fill_metal(p, base, &ear, ex * k, -10.0 * k, 35.0 * k, MetalFinish::Silver);
    }

    let head = circle_path(0.0, 0.0, 48.0 * k);
    fill_metal(p, base, &head, 0.0, 0.0, 48.0 * k, MetalFinish::Silver);

    // Big puppy eyes with catchlights.
    let iris = hex("#111111");
    for ex in [-18.0, 18.0] {
        p.fill_path(base, iris, &circle_path(ex * k, -5.0 * k, 6.0 * k));
    }
    p.fill_path(base, Color::WHITE, &circle_path(-20.0 * k, -8.0 * k, 2.0 * k));
    p.fill_path(base, Color::WHITE, &circle_path(16.0 * k, -8.0 * k, 2.0 * k));

    let snout = ellipse_path(0.0, 15.0 * k, 12.0 * k, 8.0 * k, 0.0);
    p.fill_path(base, hex("#333333"), &snout);
}

fn bird(p: &mut Painter, base: Affine, k: f64) {
    let gold = hex("#FFD700");
    // Wings with a warm glow.
    for (ex, rot) in [(-35.0, -0.5), (35.0, 0.5)] {
        let wing = ellipse_path(ex * k, 10.0 * k, 15.0 * k, 8.0 * k, rot);
        halo(p, base, &wing, gold, 4.0 * k);
        fill_metal(p, base, &wing, ex * k, 10.0 * k, 15.0 * k, MetalFinish::Gold);
    }

    let body = circle_path(0.0, 0.0, 40.0 * k);
    fill_metal(p, base, &body, 0.0, 0.0, 40.0 * k, MetalFinish::Gold);

    for ex in [-15.0, 15.0] {
        p.fill_path(base, Color::BLACK, &circle_path(ex * k, -10.0 * k, 4.0 * k));
    }

    let mut beak = BezPath::new();
    beak.move_to((-5.0 * k, 0.0));
    beak.line_to((5.0 * k, 0.0));
    beak.line_to((0.0, 8.0 * k));
    beak.close_path();
    p.fill_path(base, hex("#FF4500"), &beak);

    // Tuft.
    let mut tuft = BezPath::new();
    tuft.move_to((0.0, -40.0 * k));
    tuft.quad_to((5.0 * k, -55.0 * k), (15.0 * k, -50.0 * k));
    p.stroke_path(base, hex("#DAA520"), &StrokeStyle::new(2.0 * k), &tuft);
}
