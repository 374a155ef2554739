use super::*;
use crate::render::painter::Painter;

fn render_text(text: &str, size: f64, align: Align) -> crate::render::surface::Surface {
    let mut p = Painter::new(200, 80).unwrap();
    draw_text(
        &mut p,
        Affine::IDENTITY,
        text,
        Point::new(100.0, 60.0),
        size,
        Color::WHITE,
        1.0,
        align,
    );
    p.finish()
}

fn ink_count(surface: &crate::render::surface::Surface) -> usize {
    surface.data.chunks_exact(4).filter(|px| px[3] != 0).count()
}

#[test]
fn width_grows_with_length_and_size() {
    assert_eq!(text_width("", 20.0), 0.0);
    let one = text_width("A", 20.0);
    let two = text_width("AB", 20.0);
    assert!(two > one);
    assert!(text_width("A", 40.0) > one);
}

#[test]
fn letters_leave_ink() {
    assert!(ink_count(&render_text("PURIKURA", 20.0, Align::Center)) > 0);
    assert!(ink_count(&render_text("0123456789", 14.0, Align::Center)) > 0);
}

#[test]
fn unsupported_characters_draw_nothing() {
    assert_eq!(ink_count(&render_text("~~~", 20.0, Align::Left)), 0);
    assert_eq!(ink_count(&render_text("   ", 20.0, Align::Left)), 0);
}

#[test]
fn lowercase_maps_to_uppercase_glyphs() {
    let upper = render_text("DATE", 20.0, Align::Left);
    let lower = render_text("date", 20.0, Align::Left);
    assert_eq!(upper.fingerprint(), lower.fingerprint());
}

#[test]
fn alignment_shifts_ink() {
    let left = render_text("HI", 20.0, Align::Left);
    let right = render_text("HI", 20.0, Align::Right);
    assert_ne!(left.fingerprint(), right.fingerprint());
    assert_eq!(ink_count(&left), ink_count(&right));
}

#[test]
fn zero_size_draws_nothing() {
    assert_eq!(ink_count(&render_text("HI", 0.0, Align::Left)), 0);
}
