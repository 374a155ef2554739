//! Per-slot compositor: one canonical layer pipeline with feature flags.
//!
//! Layer order is strict and each step fully composites before the next
//! begins: background, photo (+ filters), grain, strokes, frame overlay,
//! stickers (+ selection chrome), date stamp. Vector steps render through a
//! fresh [`Painter`] pass and are source-over composited; pixel steps
//! operate on the premultiplied buffer directly.

use kurbo::Shape as _;

use crate::assets::color::Color;
use crate::assets::decode::{PreparedImage, rasterize_svg_to_premul_rgba8};
use crate::catalog::BackgroundFill;
use crate::foundation::core::{Affine, BezPath, LogicalSize, Point, Rect};
use crate::foundation::error::PurikuraResult;
use crate::render::fx::{self, BlendMode};
use crate::render::painter::{ImagePaint, Painter, StrokeStyle};
use crate::render::surface::Surface;
use crate::render::typeface::{self, Align};
use crate::scene::model::{BrushKind, FitMode, SlotParams, Stroke};
use crate::stickers::{self, AssetKind};

/// Nominal registry size stickers are drawn at; the silhouette spans about
/// twice this in logical units before the per-sticker scale applies.
pub const STICKER_NOMINAL_SIZE: f64 = 75.0;

/// Half extent of the selection box (and hit box) at sticker scale 1.
pub const SELECTION_HALF_EXTENT: f64 = 90.0;

/// On-screen radius of the resize handle; divided by the sticker scale when
/// drawn inside its local space so it stays this size on screen.
pub const HANDLE_RADIUS: f64 = 24.0;

/// Margin factor applied in `FitMode::Contain` so the background shows.
const CONTAIN_MARGIN: f64 = 0.85;

const SELECTION_COLOR: &str = "#3b82f6";
const DATE_MARGIN: f64 = 30.0;
const DATE_SIZE: f64 = 36.0;

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::BLACK)
}

/// Render one photo slot to its fixed-size logical surface.
#[tracing::instrument(skip(params), fields(aspect = params.aspect_ratio))]
pub fn render_slot(params: &SlotParams<'_>) -> PurikuraResult<Surface> {
    let logical = LogicalSize::from_aspect_ratio(params.aspect_ratio)?;
    let mut out = Surface::new(logical.width, logical.height);
    if out.is_empty() {
        // Zero-area target: every draw is a no-op by contract.
        return Ok(out);
    }

    step_background(&mut out, params);
    step_photo(&mut out, params)?;
    fx::apply_grain(&mut out, params.filters.grain)?;
    step_strokes(&mut out, params)?;
    step_frame(&mut out, params)?;
    step_stickers(&mut out, params)?;
    step_date_stamp(&mut out, params)?;

    Ok(out)
}

fn step_background(out: &mut Surface, params: &SlotParams<'_>) {
    let fill = params.background.map(|b| &b.fill);
    match fill {
        None | Some(BackgroundFill::Solid(_)) => {
            let color = match fill {
                Some(BackgroundFill::Solid(c)) => *c,
                _ => Color::WHITE,
            };
            let p = color.to_rgba8_premul();
            for px in out.data.chunks_exact_mut(4) {
                px.copy_from_slice(&[p.r, p.g, p.b, p.a]);
            }
        }
        Some(BackgroundFill::LinearGradient { stops }) => {
            fx::fill_diagonal_gradient(out, stops);
        }
        Some(BackgroundFill::PolkaDots {
            base,
            dot,
            spacing,
            radius,
        }) => {
            let p = base.to_rgba8_premul();
            for px in out.data.chunks_exact_mut(4) {
                px.copy_from_slice(&[p.r, p.g, p.b, p.a]);
            }
            let Some(mut painter) = Painter::new(out.width, out.height) else {
                return;
            };
            let spacing = spacing.max(1.0);
            let mut y = 0.0;
            let mut row = 0u32;
            while y <= out.height as f64 {
                let offset_x = if row % 2 == 0 { 0.0 } else { spacing / 2.0 };
                let mut x = 0.0;
                while x <= out.width as f64 {
                    painter.fill_path(
                        Affine::IDENTITY,
                        *dot,
                        &crate::stickers::shading::circle_path(x + offset_x, y, *radius),
                    );
                    x += spacing;
                }
                y += spacing;
                row += 1;
            }
            let layer = painter.finish();
            let _ = fx::premul_over_in_place(&mut out.data, &layer.data, 1.0);
        }
    }
}

/// Placement of the subject photo in logical space: `(origin, size)`.
fn photo_placement(photo: &PreparedImage, out: &Surface, params: &SlotParams<'_>) -> (Point, f64, f64) {
    let (w, h) = (out.width as f64, out.height as f64);
    let (iw, ih) = (photo.width as f64, photo.height as f64);

    let base_scale = match params.filters.fit {
        FitMode::Cover => (w / iw).max(h / ih),
        FitMode::Contain => (w / iw).min(h / ih) * CONTAIN_MARGIN,
    };
    let scale = base_scale * params.transform.scale;
    let draw_w = iw * scale;
    let draw_h = ih * scale;
    let origin = Point::new(
        (w - draw_w) / 2.0 + params.transform.x,
        (h - draw_h) / 2.0 + params.transform.y,
    );
    (origin, draw_w, draw_h)
}

fn step_photo(out: &mut Surface, params: &SlotParams<'_>) -> PurikuraResult<()> {
    let Some(photo) = params.photo else {
        return Ok(());
    };
    if photo.is_empty() {
        return Ok(());
    }
    let Some(paint) = ImagePaint::from_premul_rgba8(&photo.rgba8_premul, photo.width, photo.height)
    else {
        return Ok(());
    };

    let (origin, draw_w, draw_h) = photo_placement(photo, out, params);
    let transform = Affine::translate((origin.x, origin.y))
        * Affine::scale_non_uniform(draw_w / photo.width as f64, draw_h / photo.height as f64);

    let Some(mut painter) = Painter::new(out.width, out.height) else {
        return Ok(());
    };
    painter.draw_image(transform, &paint, 1.0);
    let mut layer = painter.finish();

    if params.filters.lighting {
        fx::color_matrix_in_place(&mut layer.data, fx::lighting_matrix());
    }

    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)?;

    if params.filters.soft_glow {
        // Bloom: blurred, lightened copy of the photo layer in a Screen
        // blend, then a warm tint held to the photo's footprint.
        let mut bloom = fx::blur_surface(&layer, 15, 7.5)?;
        fx::color_matrix_in_place(&mut bloom.data, fx::bloom_matrix());
        fx::composite_over(&mut out.data, &bloom.data, 0.6, BlendMode::Screen)?;

        if let Some(mut tint_pass) = Painter::new(out.width, out.height) {
            let footprint = Rect::new(origin.x, origin.y, origin.x + draw_w, origin.y + draw_h);
            tint_pass.fill_rect(
                Affine::IDENTITY,
                Color::rgba(1.0, 0.753, 0.796, 1.0),
                footprint,
            );
            let tint = tint_pass.finish();
            fx::composite_over(&mut out.data, &tint.data, 0.25, BlendMode::SoftLight)?;
        }
    }

    Ok(())
}

fn stroke_polyline(stroke: &Stroke) -> BezPath {
    let mut path = BezPath::new();
    let mut points = stroke.points.iter();
    let Some(first) = points.next() else {
        return path;
    };
    path.move_to(*first);
    let mut any = false;
    for pt in points {
        path.line_to(*pt);
        any = true;
    }
    if !any {
        // Zero-length subpaths stroke to nothing; a hair of travel turns the
        // round caps into the expected dot for a tap.
        path.line_to((first.x + 0.01, first.y));
    }
    path
}

fn step_strokes(out: &mut Surface, params: &SlotParams<'_>) -> PurikuraResult<()> {
    if params.decorations.strokes.is_empty() {
        return Ok(());
    }
    let Some(mut painter) = Painter::new(out.width, out.height) else {
        return Ok(());
    };

    for stroke in &params.decorations.strokes {
        let path = stroke_polyline(stroke);
        if path.elements().is_empty() {
            continue;
        }
        match stroke.kind {
            BrushKind::Neon => {
                // Simulated shadow-blur: widening color passes under a
                // narrow bright core.
                for (mul, alpha) in [(1.9, 0.25), (1.3, 0.5), (1.0, 1.0)] {
                    painter.stroke_path(
                        Affine::IDENTITY,
                        stroke.color.with_alpha(stroke.color.a * alpha),
                        &StrokeStyle::new(stroke.width * mul),
                        &path,
                    );
                }
                painter.stroke_path(
                    Affine::IDENTITY,
                    Color::WHITE,
                    &StrokeStyle::new(stroke.width * 0.4),
                    &path,
                );
            }
            BrushKind::Standard => {
                painter.stroke_path(
                    Affine::IDENTITY,
                    stroke.color.with_alpha(stroke.color.a * 0.9),
                    &StrokeStyle::new(stroke.width),
                    &path,
                );
            }
        }
    }

    let layer = painter.finish();
    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)
}

fn step_frame(out: &mut Surface, params: &SlotParams<'_>) -> PurikuraResult<()> {
    let Some(frame) = params.frame else {
        return Ok(());
    };
    let bytes = rasterize_svg_to_premul_rgba8(frame, out.width, out.height)?;
    fx::premul_over_in_place(&mut out.data, &bytes, 1.0)
}

fn step_stickers(out: &mut Surface, params: &SlotParams<'_>) -> PurikuraResult<()> {
    if params.decorations.stickers.is_empty() {
        return Ok(());
    }
    let Some(mut painter) = Painter::new(out.width, out.height) else {
        return Ok(());
    };

    for sticker in &params.decorations.stickers {
        let scale = sticker.scale.max(f64::EPSILON);
        let sx = if sticker.flipped { -scale } else { scale };
        let base = Affine::translate((sticker.x, sticker.y))
            * Affine::rotate(sticker.rotation)
            * Affine::scale_non_uniform(sx, scale);

        stickers::draw(
            &mut painter,
            base,
            AssetKind::parse(&sticker.kind_key),
            STICKER_NOMINAL_SIZE,
        );

        if params.selected_sticker == Some(sticker.id) {
            draw_selection_chrome(&mut painter, base, scale);
        }
    }

    let layer = painter.finish();
    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)
}

/// Dashed bounding box plus resize handle, drawn inside the sticker's local
/// space with widths divided by its scale so the chrome keeps a constant
/// on-screen weight.
fn draw_selection_chrome(painter: &mut Painter, base: Affine, scale: f64) {
    let accent = hex(SELECTION_COLOR);
    let half = SELECTION_HALF_EXTENT;

    let box_path = Rect::new(-half, -half, half, half).to_path(0.1);
    painter.stroke_path(
        base,
        accent,
        &StrokeStyle::new(4.0 / scale).with_dashes(&[15.0, 10.0]),
        &box_path,
    );

    let handle_r = HANDLE_RADIUS / scale;
    let handle = crate::stickers::shading::circle_path(half, half, handle_r);
    painter.fill_path(base, accent, &handle);

    // Resize arrows across the handle.
    let arrow = handle_r * 0.5;
    let mut arrows = BezPath::new();
    arrows.move_to((half - arrow, half - arrow));
    arrows.line_to((half + arrow, half + arrow));
    painter.stroke_path(base, Color::WHITE, &StrokeStyle::new(2.0 / scale), &arrows);
}

fn step_date_stamp(out: &mut Surface, params: &SlotParams<'_>) -> PurikuraResult<()> {
    if !params.filters.date_stamp || params.date_text.is_empty() {
        return Ok(());
    }
    let Some(mut painter) = Painter::new(out.width, out.height) else {
        return Ok(());
    };

    let origin = Point::new(
        out.width as f64 - DATE_MARGIN,
        out.height as f64 - DATE_MARGIN,
    );
    // Film halation: wide warm glow, a hotter mid pass, a bright core.
    for (color, alpha, weight) in [
        ("#ff5e00", 0.30, 2.6),
        ("#ff9900", 0.90, 1.3),
        ("#ffcc80", 1.00, 0.7),
    ] {
        typeface::draw_text(
            &mut painter,
            Affine::IDENTITY,
            params.date_text,
            origin,
            DATE_SIZE,
            hex(color).with_alpha(alpha),
            weight,
            Align::Right,
        );
    }

    let layer = painter.finish();
    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
