//! Sheet assembly: lays already-composited slot surfaces into print-ready
//! sheets. Each template is a self-contained algorithm over a fixed master
//! canvas; every master is scaled down (never up) to the output bound
//! before it leaves the assembler.

use kurbo::Shape as _;

use crate::assets::color::Color;
use crate::catalog::TemplateId;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::foundation::error::{PurikuraError, PurikuraResult};
use crate::foundation::math::hash_unit_f64;
use crate::render::fx::{self, BlendMode};
use crate::render::painter::{ImagePaint, Painter, StrokeStyle};
use crate::render::surface::Surface;
use crate::render::typeface::{self, Align};
use crate::stickers::shading::{circle_path, star_path};
use xxhash_rust::xxh3::xxh3_64;

/// Longest edge any assembled sheet may have after the final scale.
pub const MAX_OUTPUT_EDGE: u32 = 1900;

/// Text fields rendered into sheet chrome. Plain strings; fixed-width
/// layout slots truncate, nothing else validates.
#[derive(Clone, Debug, Default)]
pub struct SheetMetadata {
    pub name: String,
    pub location: String,
    pub date_text: String,
}

/// Assemble one or more output sheets from per-slot surfaces.
///
/// Zero usable surfaces is an error. Fewer surfaces than the template's
/// slot count degrades gracefully: available surfaces are reused in order.
#[tracing::instrument(skip(slots, meta), fields(template = ?template, slots = slots.len()))]
pub fn assemble(
    slots: &[Surface],
    template: TemplateId,
    meta: &SheetMetadata,
) -> PurikuraResult<Vec<Surface>> {
    let usable: Vec<&Surface> = slots.iter().filter(|s| !s.is_empty()).collect();
    if usable.is_empty() {
        return Err(PurikuraError::validation(
            "layout assembly needs at least one non-empty slot surface",
        ));
    }

    let sheets = match template {
        TemplateId::Strip => strip_sheets(&usable, meta)?,
        TemplateId::SquareFrame => vec![square_frame_sheet(&usable, meta)?],
        TemplateId::IdGrid => vec![id_grid_sheet(&usable, meta)?],
        TemplateId::Card => vec![card_sheet(&usable, meta)?],
    };

    sheets.into_iter().map(scale_to_bound).collect()
}

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::BLACK)
}

fn slot_at<'a>(usable: &[&'a Surface], i: usize) -> &'a Surface {
    usable[i % usable.len()]
}

/// Scale a master render down to the output bound, preserving aspect.
fn scale_to_bound(master: Surface) -> PurikuraResult<Surface> {
    let longest = master.width.max(master.height);
    if longest <= MAX_OUTPUT_EDGE || master.is_empty() {
        return Ok(master);
    }
    let scale = f64::from(MAX_OUTPUT_EDGE) / f64::from(longest);
    let w = ((f64::from(master.width) * scale).round() as u32).max(1);
    let h = ((f64::from(master.height) * scale).round() as u32).max(1);

    let Some(mut p) = Painter::new(w, h) else {
        return Ok(master);
    };
    let Some(paint) = ImagePaint::from_surface(&master) else {
        return Ok(master);
    };
    p.draw_image(
        Affine::scale_non_uniform(
            f64::from(w) / f64::from(master.width),
            f64::from(h) / f64::from(master.height),
        ),
        &paint,
        1.0,
    );
    Ok(p.finish())
}

/// Draw a slot surface stretched into the given sheet rect.
fn draw_surface(p: &mut Painter, surface: &Surface, x: f64, y: f64, w: f64, h: f64) {
    let Some(paint) = ImagePaint::from_surface(surface) else {
        return;
    };
    let tr = Affine::translate((x, y))
        * Affine::scale_non_uniform(
            w / f64::from(surface.width.max(1)),
            h / f64::from(surface.height.max(1)),
        );
    p.draw_image(tr, &paint, 1.0);
}

fn truncate_field(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}..")
    } else {
        s.to_owned()
    }
}

fn dotted_date(meta: &SheetMetadata) -> String {
    meta.date_text.replace('/', ".")
}

// --- Strip -----------------------------------------------------------------

struct StripScheme {
    bg: &'static str,
    hole: &'static str,
    title: &'static str,
    sub: &'static str,
}

/// Two finished prints of the same four-cut layout in different schemes.
fn strip_sheets(usable: &[&Surface], meta: &SheetMetadata) -> PurikuraResult<Vec<Surface>> {
    const SCHEMES: [StripScheme; 2] = [
        StripScheme {
            bg: "#111111",
            hole: "#f8fafc",
            title: "#FFFFFF",
            sub: "#AAAAAA",
        },
        StripScheme {
            bg: "#fdf2f8",
            hole: "#ffffff",
            title: "#db2777",
            sub: "#f472b6",
        },
    ];

    SCHEMES
        .iter()
        .map(|scheme| strip_sheet(usable, meta, scheme))
        .collect()
}

fn strip_sheet(
    usable: &[&Surface],
    meta: &SheetMetadata,
    scheme: &StripScheme,
) -> PurikuraResult<Surface> {
    const CELLS: usize = 4;
    let photo_w = f64::from(slot_at(usable, 0).width.max(1));
    let photo_h = f64::from(slot_at(usable, 0).height.max(1));

    let rail = 70.0;
    let margin = 40.0;
    let gap = 30.0;
    let header = 60.0;
    let footer = 300.0;

    let sheet_w = photo_w + 2.0 * (rail + margin);
    let sheet_h = header + photo_h * CELLS as f64 + gap * (CELLS - 1) as f64 + footer + margin;

    let mut out = Surface::new(sheet_w as u32, sheet_h as u32);
    let bg = hex(scheme.bg).to_rgba8_premul();
    for px in out.data.chunks_exact_mut(4) {
        px.copy_from_slice(&[bg.r, bg.g, bg.b, bg.a]);
    }

    let Some(mut p) = Painter::new(out.width, out.height) else {
        return Ok(out);
    };

    // Sprocket rails.
    let hole = hex(scheme.hole);
    let mut y = header;
    while y + 38.0 < sheet_h - footer {
        for cx in [rail / 2.0, sheet_w - rail / 2.0] {
            let rr = kurbo::RoundedRect::new(cx - 14.0, y, cx + 14.0, y + 38.0, 7.0);
            p.fill_path(Affine::IDENTITY, hole, &rr.to_path(0.1));
        }
        y += 90.0;
    }

    // Photo cells, reusing available surfaces when undersupplied.
    let x = rail + margin;
    let mut cell_y = header;
    for i in 0..CELLS {
        draw_surface(&mut p, slot_at(usable, i), x, cell_y, photo_w, photo_h);
        cell_y += photo_h + gap;
    }

    // Footer wordmark and date.
    let footer_center = sheet_h - footer / 2.0 - margin;
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        "PURIKURA",
        Point::new(sheet_w / 2.0, footer_center - 20.0),
        70.0,
        hex(scheme.title),
        1.6,
        Align::Center,
    );
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        &dotted_date(meta),
        Point::new(sheet_w / 2.0, footer_center + 60.0),
        30.0,
        hex(scheme.sub),
        1.0,
        Align::Center,
    );

    let layer = p.finish();
    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)?;
    Ok(out)
}

// --- Square frame ----------------------------------------------------------

const STAR_SEED: u64 = 0x51a2_7bd3;

fn square_frame_sheet(usable: &[&Surface], meta: &SheetMetadata) -> PurikuraResult<Surface> {
    let photo = slot_at(usable, 0);
    let photo_w = f64::from(photo.width.max(1));
    let photo_h = f64::from(photo.height.max(1));

    let pad_x = 80.0;
    let pad_top = 80.0;
    let pad_bottom = 250.0;
    let sheet_w = photo_w + 2.0 * pad_x;
    let sheet_h = photo_h + pad_top + pad_bottom;

    let mut out = Surface::new(sheet_w as u32, sheet_h as u32);
    fx::fill_diagonal_gradient(
        &mut out,
        &[
            (0.0, hex("#ff9a9e")),
            (0.2, hex("#fad0c4")),
            (0.4, hex("#fad0c4")),
            (0.6, hex("#a18cd1")),
            (0.8, hex("#fbc2eb")),
            (1.0, hex("#8fd3f4")),
        ],
    );

    let Some(mut p) = Painter::new(out.width, out.height) else {
        return Ok(out);
    };

    // Hand-drawn stars scattered over the border area. Placement comes from
    // a seeded hash so the sheet is reproducible.
    for i in 0..25u64 {
        let side = (hash_unit_f64(STAR_SEED, i * 4) * 4.0) as u32;
        let u = hash_unit_f64(STAR_SEED, i * 4 + 1);
        let v = hash_unit_f64(STAR_SEED, i * 4 + 2);
        let (x, y) = match side {
            0 => (u * sheet_w, v * pad_top),
            1 => (u * sheet_w, sheet_h - v * pad_bottom),
            2 => (u * pad_x, v * sheet_h),
            _ => (sheet_w - u * pad_x, v * sheet_h),
        };
        let size = 10.0 + hash_unit_f64(STAR_SEED, i * 4 + 3) * 20.0;
        p.fill_path(
            Affine::IDENTITY,
            Color::WHITE,
            &star_path(x, y, size, size / 2.0, 5),
        );
    }

    // White mat, then the photo.
    p.fill_rect(
        Affine::IDENTITY,
        Color::WHITE,
        Rect::new(pad_x - 5.0, pad_top - 5.0, pad_x + photo_w + 5.0, pad_top + photo_h + 5.0),
    );
    draw_surface(&mut p, photo, pad_x, pad_top, photo_w, photo_h);

    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        &meta.name.to_uppercase(),
        Point::new(sheet_w / 2.0, sheet_h - 120.0),
        36.0,
        Color::WHITE,
        1.4,
        Align::Center,
    );
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        &dotted_date(meta),
        Point::new(sheet_w / 2.0, sheet_h - 70.0),
        24.0,
        Color::WHITE.with_alpha(0.8),
        1.0,
        Align::Center,
    );

    let layer = p.finish();
    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)?;
    Ok(out)
}

// --- ID grid ---------------------------------------------------------------

fn id_grid_sheet(usable: &[&Surface], meta: &SheetMetadata) -> PurikuraResult<Surface> {
    let photo = slot_at(usable, 0);
    let (sheet_w, sheet_h) = (1500.0, 1050.0);

    let mut out = Surface::new(sheet_w as u32, sheet_h as u32);
    let white = Color::WHITE.to_rgba8_premul();
    for px in out.data.chunks_exact_mut(4) {
        px.copy_from_slice(&[white.r, white.g, white.b, white.a]);
    }

    let Some(mut p) = Painter::new(out.width, out.height) else {
        return Ok(out);
    };

    // Cutting-mat rulings: fine grid under a heavier accent grid.
    draw_grid(&mut p, sheet_w, sheet_h, 20.0, hex("#e2e8f0"), 1.0);
    draw_grid(&mut p, sheet_w, sheet_h, 80.0, hex("#93c5fd"), 1.5);

    // Two large prints, then a row of four small ones.
    let (start_x, start_y) = (60.0, 60.0);
    let (large_w, large_h) = (360.0, 480.0);
    let (small_w, small_h) = (240.0, 320.0);
    for i in 0..2 {
        cut_photo(&mut p, photo, start_x + i as f64 * (large_w + 40.0), start_y, large_w, large_h);
    }
    let row2_y = start_y + large_h + 60.0;
    for i in 0..4 {
        cut_photo(&mut p, photo, start_x + i as f64 * (small_w + 26.0), row2_y, small_w, small_h);
    }

    // Print-size annotations beside each row.
    for (label, cy) in [
        ("45 X 35", start_y + large_h / 2.0),
        ("30 X 24", row2_y + small_h / 2.0),
    ] {
        let base = Affine::translate((start_x - 25.0, cy)) * Affine::rotate(-std::f64::consts::FRAC_PI_2);
        typeface::draw_text(
            &mut p,
            base,
            label,
            Point::ZERO,
            16.0,
            hex("#64748b"),
            1.0,
            Align::Center,
        );
    }

    sidebar(&mut p, photo, meta, start_y);

    let layer = p.finish();
    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)?;
    Ok(out)
}

fn draw_grid(p: &mut Painter, w: f64, h: f64, step: f64, color: Color, weight: f64) {
    let mut lines = BezPath::new();
    let mut x = 0.0;
    while x <= w {
        lines.move_to((x, 0.0));
        lines.line_to((x, h));
        x += step;
    }
    let mut y = 0.0;
    while y <= h {
        lines.move_to((0.0, y));
        lines.line_to((w, y));
        y += step;
    }
    p.stroke_path(Affine::IDENTITY, color, &StrokeStyle::new(weight), &lines);
}

/// Photo cell with a hairline border and triangular cut marks.
fn cut_photo(p: &mut Painter, surface: &Surface, x: f64, y: f64, w: f64, h: f64) {
    draw_surface(p, surface, x, y, w, h);

    p.stroke_path(
        Affine::IDENTITY,
        hex("#cbd5e1"),
        &StrokeStyle::new(1.0),
        &Rect::new(x, y, x + w, y + h).to_path(0.1),
    );

    let t = 6.0;
    let mark = hex("#334155");
    for fx_pos in [0.2, 0.8] {
        let cx = x + w * fx_pos;
        // Top edge.
        let mut top = BezPath::new();
        top.move_to((cx, y - 2.0));
        top.line_to((cx + t, y - 2.0 - t));
        top.line_to((cx - t, y - 2.0 - t));
        top.close_path();
        p.fill_path(Affine::IDENTITY, mark, &top);
        // Bottom edge.
        let mut bottom = BezPath::new();
        bottom.move_to((cx, y + h + 2.0));
        bottom.line_to((cx + t, y + h + 2.0 + t));
        bottom.line_to((cx - t, y + h + 2.0 + t));
        bottom.close_path();
        p.fill_path(Affine::IDENTITY, mark, &bottom);
    }
}

fn sidebar(p: &mut Painter, photo: &Surface, meta: &SheetMetadata, start_y: f64) {
    let (x, w, h) = (1130.0, 310.0, 860.0);

    p.stroke_path(
        Affine::IDENTITY,
        hex("#1e293b"),
        &StrokeStyle::new(2.0),
        &Rect::new(x, start_y, x + w, start_y + h).to_path(0.1),
    );

    // Header band.
    p.fill_rect(
        Affine::IDENTITY,
        hex("#1e3a8a"),
        Rect::new(x, start_y, x + w, start_y + 80.0),
    );
    typeface::draw_text(
        p,
        Affine::IDENTITY,
        "ID PHOTO",
        Point::new(x + w / 2.0, start_y + 55.0),
        30.0,
        Color::WHITE,
        1.3,
        Align::Center,
    );

    // Quality badge row.
    let info_y = start_y + 120.0;
    p.fill_rect(
        Affine::IDENTITY,
        hex("#3b82f6"),
        Rect::new(x + 30.0, info_y, x + 80.0, info_y + 35.0),
    );
    p.fill_path(
        Affine::IDENTITY,
        Color::WHITE,
        &circle_path(x + 55.0, info_y + 17.0, 12.0),
    );
    p.fill_path(
        Affine::IDENTITY,
        hex("#3b82f6"),
        &circle_path(x + 55.0, info_y + 17.0, 6.0),
    );
    typeface::draw_text(
        p,
        Affine::IDENTITY,
        "PERFECT*",
        Point::new(x + 90.0, info_y + 27.0),
        20.0,
        hex("#3b82f6"),
        1.2,
        Align::Left,
    );

    let mut divider = BezPath::new();
    divider.move_to((x + 30.0, info_y + 60.0));
    divider.line_to((x + w - 30.0, info_y + 60.0));
    p.stroke_path(Affine::IDENTITY, hex("#e2e8f0"), &StrokeStyle::new(2.0), &divider);

    // Metadata fields.
    let mut field_y = info_y + 100.0;
    for (label, value) in [
        ("NAME", meta.name.as_str()),
        ("DATE", meta.date_text.as_str()),
        ("LOCATION", meta.location.as_str()),
    ] {
        typeface::draw_text(
            p,
            Affine::IDENTITY,
            label,
            Point::new(x + 30.0, field_y),
            14.0,
            hex("#64748b"),
            1.2,
            Align::Left,
        );
        field_y += 28.0;
        typeface::draw_text(
            p,
            Affine::IDENTITY,
            &truncate_field(value, 14).to_uppercase(),
            Point::new(x + 30.0, field_y),
            20.0,
            hex("#0f172a"),
            1.2,
            Align::Left,
        );
        field_y += 42.0;
    }

    field_y += 20.0;
    typeface::draw_text(
        p,
        Affine::IDENTITY,
        "NO. 001-A4",
        Point::new(x + w - 30.0, field_y),
        16.0,
        hex("#94a3b8"),
        1.0,
        Align::Right,
    );

    // Spare print at the bottom of the card.
    let (indep_w, indep_h) = (240.0, 300.0);
    cut_photo(
        p,
        photo,
        x + (w - indep_w) / 2.0,
        start_y + h - indep_h - 30.0,
        indep_w,
        indep_h,
    );
}

// --- Card ------------------------------------------------------------------

fn card_sheet(usable: &[&Surface], meta: &SheetMetadata) -> PurikuraResult<Surface> {
    let photo = slot_at(usable, 0);
    let (card_w, card_h) = (1000.0, 600.0);

    let mut out = Surface::new(card_w as u32, card_h as u32);
    fx::fill_diagonal_gradient(&mut out, &[(0.0, hex("#eef2ff")), (1.0, hex("#e0e7ff"))]);

    let Some(mut p) = Painter::new(out.width, out.height) else {
        return Ok(out);
    };

    // Header band.
    p.fill_rect(
        Affine::IDENTITY,
        hex("#3b82f6"),
        Rect::new(0.0, 0.0, card_w, 100.0),
    );
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        "DRIVER LICENSE",
        Point::new(40.0, 70.0),
        40.0,
        Color::WHITE,
        1.5,
        Align::Left,
    );
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        &truncate_field(&meta.location, 12).to_uppercase(),
        Point::new(card_w - 40.0, 70.0),
        26.0,
        Color::WHITE.with_alpha(0.9),
        1.0,
        Align::Right,
    );

    // Photo with a soft offset shadow.
    let photo_w = 250.0;
    let photo_h = photo_w * f64::from(photo.height.max(1)) / f64::from(photo.width.max(1));
    let (px, py) = (50.0, 150.0);
    p.fill_path(
        Affine::IDENTITY,
        Color::BLACK.with_alpha(0.18),
        &kurbo::RoundedRect::new(px + 6.0, py + 8.0, px + photo_w + 6.0, py + photo_h + 8.0, 4.0)
            .to_path(0.1),
    );
    draw_surface(&mut p, photo, px, py, photo_w, photo_h);

    // Text column.
    let tx = 350.0;
    typeface::draw_text(&mut p, Affine::IDENTITY, "NAME", Point::new(tx, 200.0), 20.0, hex("#64748b"), 1.2, Align::Left);
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        &truncate_field(&meta.name, 16).to_uppercase(),
        Point::new(tx, 248.0),
        34.0,
        Color::BLACK,
        1.4,
        Align::Left,
    );
    typeface::draw_text(&mut p, Affine::IDENTITY, "DOB", Point::new(tx, 320.0), 20.0, hex("#64748b"), 1.2, Align::Left);
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        &truncate_field(&meta.date_text, 14),
        Point::new(tx, 362.0),
        26.0,
        Color::BLACK,
        1.2,
        Align::Left,
    );
    typeface::draw_text(&mut p, Affine::IDENTITY, "LIC NO", Point::new(tx, 420.0), 20.0, hex("#64748b"), 1.2, Align::Left);
    typeface::draw_text(
        &mut p,
        Affine::IDENTITY,
        &license_serial(&meta.name),
        Point::new(tx, 462.0),
        26.0,
        Color::BLACK,
        1.2,
        Align::Left,
    );

    // Signature, slanted like handwriting.
    let sig_base = Affine::translate((tx, 540.0)) * Affine::skew(-0.25, 0.0);
    typeface::draw_text(
        &mut p,
        sig_base,
        &truncate_field(&meta.name, 18),
        Point::ZERO,
        40.0,
        Color::BLACK.with_alpha(0.85),
        0.7,
        Align::Left,
    );

    let layer = p.finish();
    fx::premul_over_in_place(&mut out.data, &layer.data, 1.0)?;

    // Holographic security disc, overlay-blended over everything.
    if let Some(mut holo) = Painter::new(out.width, out.height) {
        holo.fill_path(Affine::IDENTITY, Color::WHITE, &circle_path(800.0, 300.0, 150.0));
        typeface::draw_text(
            &mut holo,
            Affine::IDENTITY,
            "PURI",
            Point::new(800.0, 315.0),
            44.0,
            Color::WHITE,
            1.4,
            Align::Center,
        );
        let holo_layer = holo.finish();
        fx::composite_over(&mut out.data, &holo_layer.data, 0.12, BlendMode::Overlay)?;
    }

    Ok(out)
}

/// Deterministic id-like serial derived from the holder's name.
fn license_serial(name: &str) -> String {
    let h = xxh3_64(name.trim().to_uppercase().as_bytes());
    format!("P-{:07}", h % 10_000_000)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/assembler.rs"]
mod tests;
