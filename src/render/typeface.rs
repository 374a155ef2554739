//! Procedural stroke-glyph face for sheet chrome and the date stamp.
//!
//! Glyphs are polylines in a unit box (x in `0..0.6`, y in `0..1`, baseline
//! at `y = 1`) expanded with round caps, which gives the rounded marker look
//! the rest of the chrome uses. Characters outside the face are skipped;
//! text here is decorative chrome, not document typesetting.

use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath, Point};
use crate::render::painter::{Painter, StrokeStyle};

/// Horizontal alignment relative to the text origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
    Right,
}

const ADVANCE: f64 = 0.8;

type Glyph = &'static [&'static [(f64, f64)]];

fn glyph(c: char) -> Option<Glyph> {
    let g: Glyph = match c.to_ascii_uppercase() {
        'A' => &[&[(0.0, 1.0), (0.3, 0.0), (0.6, 1.0)], &[(0.12, 0.62), (0.48, 0.62)]],
        'B' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.4, 0.0), (0.55, 0.12), (0.55, 0.36), (0.4, 0.48), (0.0, 0.48)],
            &[(0.4, 0.48), (0.58, 0.62), (0.58, 0.86), (0.4, 1.0), (0.0, 1.0)],
        ],
        'C' => &[&[
            (0.55, 0.15),
            (0.4, 0.0),
            (0.2, 0.0),
            (0.0, 0.2),
            (0.0, 0.8),
            (0.2, 1.0),
            (0.4, 1.0),
            (0.55, 0.85),
        ]],
        'D' => &[&[(0.0, 0.0), (0.0, 1.0), (0.35, 1.0), (0.55, 0.8), (0.55, 0.2), (0.35, 0.0), (0.0, 0.0)]],
        'E' => &[&[(0.55, 0.0), (0.0, 0.0), (0.0, 1.0), (0.55, 1.0)], &[(0.0, 0.5), (0.42, 0.5)]],
        'F' => &[&[(0.55, 0.0), (0.0, 0.0), (0.0, 1.0)], &[(0.0, 0.5), (0.42, 0.5)]],
        'G' => &[&[
            (0.55, 0.15),
            (0.35, 0.0),
            (0.2, 0.0),
            (0.0, 0.2),
            (0.0, 0.8),
            (0.2, 1.0),
            (0.45, 1.0),
            (0.55, 0.85),
            (0.55, 0.55),
            (0.34, 0.55),
        ]],
        'H' => &[&[(0.0, 0.0), (0.0, 1.0)], &[(0.6, 0.0), (0.6, 1.0)], &[(0.0, 0.5), (0.6, 0.5)]],
        'I' => &[&[(0.3, 0.0), (0.3, 1.0)], &[(0.1, 0.0), (0.5, 0.0)], &[(0.1, 1.0), (0.5, 1.0)]],
        'J' => &[&[(0.55, 0.0), (0.55, 0.8), (0.4, 1.0), (0.15, 1.0), (0.0, 0.85)]],
        'K' => &[&[(0.0, 0.0), (0.0, 1.0)], &[(0.55, 0.0), (0.0, 0.55)], &[(0.2, 0.42), (0.55, 1.0)]],
        'L' => &[&[(0.0, 0.0), (0.0, 1.0), (0.55, 1.0)]],
        'M' => &[&[(0.0, 1.0), (0.0, 0.0), (0.3, 0.45), (0.6, 0.0), (0.6, 1.0)]],
        'N' => &[&[(0.0, 1.0), (0.0, 0.0), (0.6, 1.0), (0.6, 0.0)]],
        'O' => &[&[
            (0.2, 0.0),
            (0.4, 0.0),
            (0.6, 0.2),
            (0.6, 0.8),
            (0.4, 1.0),
            (0.2, 1.0),
            (0.0, 0.8),
            (0.0, 0.2),
            (0.2, 0.0),
        ]],
        'P' => &[&[(0.0, 1.0), (0.0, 0.0), (0.45, 0.0), (0.6, 0.14), (0.6, 0.36), (0.45, 0.5), (0.0, 0.5)]],
        'Q' => &[
            &[
                (0.2, 0.0),
                (0.4, 0.0),
                (0.6, 0.2),
                (0.6, 0.8),
                (0.4, 1.0),
                (0.2, 1.0),
                (0.0, 0.8),
                (0.0, 0.2),
                (0.2, 0.0),
            ],
            &[(0.38, 0.7), (0.62, 1.02)],
        ],
        'R' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.45, 0.0), (0.6, 0.14), (0.6, 0.36), (0.45, 0.5), (0.0, 0.5)],
            &[(0.25, 0.5), (0.6, 1.0)],
        ],
        'S' => &[&[
            (0.55, 0.12),
            (0.35, 0.0),
            (0.15, 0.0),
            (0.0, 0.15),
            (0.06, 0.36),
            (0.5, 0.6),
            (0.58, 0.8),
            (0.45, 1.0),
            (0.15, 1.0),
            (0.0, 0.88),
        ]],
        'T' => &[&[(0.0, 0.0), (0.6, 0.0)], &[(0.3, 0.0), (0.3, 1.0)]],
        'U' => &[&[(0.0, 0.0), (0.0, 0.8), (0.2, 1.0), (0.4, 1.0), (0.6, 0.8), (0.6, 0.0)]],
        'V' => &[&[(0.0, 0.0), (0.3, 1.0), (0.6, 0.0)]],
        'W' => &[&[(0.0, 0.0), (0.12, 1.0), (0.3, 0.5), (0.48, 1.0), (0.6, 0.0)]],
        'X' => &[&[(0.0, 0.0), (0.6, 1.0)], &[(0.6, 0.0), (0.0, 1.0)]],
        'Y' => &[&[(0.0, 0.0), (0.3, 0.45), (0.6, 0.0)], &[(0.3, 0.45), (0.3, 1.0)]],
        'Z' => &[&[(0.0, 0.0), (0.6, 0.0), (0.0, 1.0), (0.6, 1.0)]],
        '0' => &[
            &[
                (0.2, 0.0),
                (0.4, 0.0),
                (0.6, 0.2),
                (0.6, 0.8),
                (0.4, 1.0),
                (0.2, 1.0),
                (0.0, 0.8),
                (0.0, 0.2),
                (0.2, 0.0),
            ],
            &[(0.16, 0.74), (0.44, 0.26)],
        ],
        '1' => &[&[(0.15, 0.2), (0.35, 0.0), (0.35, 1.0)], &[(0.15, 1.0), (0.55, 1.0)]],
        '2' => &[&[(0.0, 0.18), (0.15, 0.0), (0.45, 0.0), (0.6, 0.18), (0.55, 0.42), (0.0, 1.0), (0.6, 1.0)]],
        '3' => &[&[
            (0.0, 0.12),
            (0.2, 0.0),
            (0.45, 0.0),
            (0.58, 0.15),
            (0.5, 0.38),
            (0.3, 0.46),
            (0.5, 0.56),
            (0.58, 0.8),
            (0.45, 1.0),
            (0.2, 1.0),
            (0.0, 0.9),
        ]],
        '4' => &[&[(0.45, 1.0), (0.45, 0.0), (0.0, 0.68), (0.6, 0.68)]],
        '5' => &[&[
            (0.55, 0.0),
            (0.06, 0.0),
            (0.0, 0.45),
            (0.35, 0.4),
            (0.55, 0.55),
            (0.55, 0.82),
            (0.4, 1.0),
            (0.1, 1.0),
            (0.0, 0.9),
        ]],
        '6' => &[&[
            (0.5, 0.0),
            (0.2, 0.15),
            (0.02, 0.5),
            (0.0, 0.8),
            (0.15, 1.0),
            (0.4, 1.0),
            (0.55, 0.85),
            (0.55, 0.64),
            (0.4, 0.5),
            (0.1, 0.56),
        ]],
        '7' => &[&[(0.0, 0.0), (0.6, 0.0), (0.2, 1.0)]],
        '8' => &[&[
            (0.3, 0.47),
            (0.12, 0.38),
            (0.08, 0.14),
            (0.24, 0.0),
            (0.36, 0.0),
            (0.52, 0.14),
            (0.48, 0.38),
            (0.3, 0.47),
            (0.1, 0.6),
            (0.05, 0.85),
            (0.2, 1.0),
            (0.4, 1.0),
            (0.55, 0.85),
            (0.5, 0.6),
            (0.3, 0.47),
        ]],
        '9' => &[&[
            (0.55, 0.46),
            (0.25, 0.5),
            (0.05, 0.36),
            (0.05, 0.14),
            (0.2, 0.0),
            (0.4, 0.0),
            (0.55, 0.14),
            (0.55, 0.5),
            (0.45, 0.85),
            (0.2, 1.0),
        ]],
        '.' => &[&[(0.1, 0.97), (0.12, 1.0)]],
        '\'' => &[&[(0.15, 0.0), (0.1, 0.22)]],
        '-' => &[&[(0.06, 0.5), (0.5, 0.5)]],
        '/' => &[&[(0.05, 1.0), (0.55, 0.0)]],
        ':' => &[&[(0.1, 0.35), (0.12, 0.38)], &[(0.1, 0.92), (0.12, 0.95)]],
        '*' => &[
            &[(0.3, 0.14), (0.3, 0.66)],
            &[(0.08, 0.4), (0.52, 0.4)],
            &[(0.12, 0.2), (0.48, 0.6)],
            &[(0.48, 0.2), (0.12, 0.6)],
        ],
        _ => return None,
    };
    Some(g)
}

/// Advance width of `text` at cap height `size`.
pub(crate) fn text_width(text: &str, size: f64) -> f64 {
    let n = text.chars().count() as f64;
    if n <= 0.0 {
        return 0.0;
    }
    (n * ADVANCE - (ADVANCE - 0.6)) * size
}

/// Draw a line of text with its baseline at `origin`.
///
/// `weight` multiplies the default stroke width (1.0 reads like a medium
/// marker, ~1.6 like a bold wordmark). Unsupported characters advance the
/// pen but draw nothing.
pub(crate) fn draw_text(
    p: &mut Painter,
    base: Affine,
    text: &str,
    origin: Point,
    size: f64,
    color: Color,
    weight: f64,
    align: Align,
) {
    if size <= 0.0 || text.is_empty() {
        return;
    }

    let width = text_width(text, size);
    let start_x = match align {
        Align::Left => origin.x,
        Align::Center => origin.x - width / 2.0,
        Align::Right => origin.x - width,
    };

    let style = StrokeStyle::new(size * 0.14 * weight.max(0.1));
    let mut pen_x = start_x;
    for c in text.chars() {
        if c != ' '
            && let Some(strokes) = glyph(c)
        {
            let mut path = BezPath::new();
            for poly in strokes {
                let mut first = true;
                for &(gx, gy) in *poly {
                    let pt = (pen_x + gx * size, origin.y + (gy - 1.0) * size);
                    if first {
                        path.move_to(pt);
                        first = false;
                    } else {
                        path.line_to(pt);
                    }
                }
            }
            p.stroke_path(base, color, &style, &path);
        }
        pen_x += ADVANCE * size;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/typeface.rs"]
mod tests;
