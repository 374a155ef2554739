use super::*;
use crate::assets::decode::PreparedImage;
use crate::catalog::{BackgroundFill, BackgroundPreset};
use crate::scene::model::{DecorationState, FilterOptions, ImageTransform, StickerId, StickerItem};

fn quiet_filters() -> FilterOptions {
    FilterOptions {
        lighting: false,
        soft_glow: false,
        grain: 0.0,
        date_stamp: false,
        fit: FitMode::Cover,
    }
}

fn solid_photo(w: u32, h: u32, rgba: [u8; 4]) -> PreparedImage {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..w * h {
        data.extend_from_slice(&rgba);
    }
    PreparedImage::from_straight_rgba8(w, h, data).unwrap()
}

fn params<'a>(
    filters: &'a FilterOptions,
    decorations: &'a DecorationState,
    photo: Option<&'a PreparedImage>,
) -> SlotParams<'a> {
    SlotParams {
        photo,
        background: None,
        frame: None,
        filters,
        decorations,
        transform: ImageTransform::default(),
        selected_sticker: None,
        aspect_ratio: 1.0,
        date_text: "",
    }
}

#[test]
fn missing_background_renders_white() {
    let filters = quiet_filters();
    let dec = DecorationState::default();
    let out = render_slot(&params(&filters, &dec, None)).unwrap();
    assert_eq!(out.pixel(500, 500), [255, 255, 255, 255]);
}

#[test]
fn solid_background_fills_canvas() {
    let filters = quiet_filters();
    let dec = DecorationState::default();
    let mut p = params(&filters, &dec, None);
    let preset = BackgroundPreset {
        id: "bg".into(),
        name: "bg".into(),
        fill: BackgroundFill::Solid(Color::rgb(1.0, 0.0, 0.0)),
    };
    p.background = Some(&preset);
    let out = render_slot(&p).unwrap();
    assert_eq!(out.pixel(10, 10), [255, 0, 0, 255]);
    assert_eq!(out.pixel(990, 990), [255, 0, 0, 255]);
}

#[test]
fn missing_photo_still_renders_decorations() {
    let filters = quiet_filters();
    let mut dec = DecorationState::default();
    dec.stickers.push(StickerItem {
        id: StickerId(1),
        kind_key: "retro_bauble".into(),
        x: 500.0,
        y: 500.0,
        scale: 1.0,
        rotation: 0.0,
        flipped: false,
    });
    let out = render_slot(&params(&filters, &dec, None)).unwrap();
    assert_ne!(out.pixel(500, 510), [255, 255, 255, 255]);
}

#[test]
fn zero_sized_photo_is_skipped() {
    let filters = quiet_filters();
    let dec = DecorationState::default();
    let photo = PreparedImage::from_straight_rgba8(0, 0, Vec::new()).unwrap();
    let out = render_slot(&params(&filters, &dec, Some(&photo))).unwrap();
    assert_eq!(out.pixel(500, 500), [255, 255, 255, 255]);
}

#[test]
fn cover_photo_fills_the_canvas() {
    let filters = quiet_filters();
    let dec = DecorationState::default();
    let photo = solid_photo(8, 6, [0, 0, 255, 255]);
    let out = render_slot(&params(&filters, &dec, Some(&photo))).unwrap();
    assert_eq!(out.pixel(500, 500), [0, 0, 255, 255]);
    assert_eq!(out.pixel(5, 5), [0, 0, 255, 255]);
}

#[test]
fn contain_photo_leaves_background_margin() {
    let mut filters = quiet_filters();
    filters.fit = FitMode::Contain;
    let dec = DecorationState::default();
    let photo = solid_photo(8, 8, [0, 0, 255, 255]);
    let out = render_slot(&params(&filters, &dec, Some(&photo))).unwrap();
    // Center is photo, the border band is background.
    assert_eq!(out.pixel(500, 500), [0, 0, 255, 255]);
    assert_eq!(out.pixel(10, 10), [255, 255, 255, 255]);
}

#[test]
fn lighting_changes_photo_pixels_only_when_enabled() {
    let dec = DecorationState::default();
    let photo = solid_photo(8, 8, [120, 120, 120, 255]);

    let plain = quiet_filters();
    let out_plain = render_slot(&params(&plain, &dec, Some(&photo))).unwrap();

    let mut lit = quiet_filters();
    lit.lighting = true;
    let out_lit = render_slot(&params(&lit, &dec, Some(&photo))).unwrap();

    assert_ne!(out_plain.fingerprint(), out_lit.fingerprint());
    assert!(out_lit.pixel(500, 500)[0] > out_plain.pixel(500, 500)[0]);
}

#[test]
fn soft_glow_lightens_the_photo_region() {
    let dec = DecorationState::default();
    let photo = solid_photo(8, 8, [60, 60, 60, 255]);

    let plain = quiet_filters();
    let out_plain = render_slot(&params(&plain, &dec, Some(&photo))).unwrap();

    let mut glow = quiet_filters();
    glow.soft_glow = true;
    let out_glow = render_slot(&params(&glow, &dec, Some(&photo))).unwrap();

    assert!(out_glow.pixel(500, 500)[0] > out_plain.pixel(500, 500)[0]);
}

#[test]
fn date_stamp_marks_the_bottom_right() {
    let dec = DecorationState::default();
    let mut filters = quiet_filters();
    filters.date_stamp = true;

    let mut with_date = params(&filters, &dec, None);
    with_date.date_text = "'25 . 08 . 07";
    let stamped = render_slot(&with_date).unwrap();

    let quiet = quiet_filters();
    let blank = render_slot(&params(&quiet, &dec, None)).unwrap();
    assert_ne!(stamped.fingerprint(), blank.fingerprint());

    // Ink lands in the bottom-right quadrant only.
    let mut touched = false;
    for y in 900..1000 {
        for x in 600..1000 {
            if stamped.pixel(x, y) != blank.pixel(x, y) {
                touched = true;
            }
        }
    }
    assert!(touched);
    assert_eq!(stamped.pixel(100, 100), blank.pixel(100, 100));
}

#[test]
fn selection_chrome_only_draws_for_the_selected_sticker() {
    let filters = quiet_filters();
    let mut dec = DecorationState::default();
    dec.stickers.push(StickerItem {
        id: StickerId(9),
        kind_key: "doodle_heart".into(),
        x: 500.0,
        y: 500.0,
        scale: 1.0,
        rotation: 0.0,
        flipped: false,
    });

    let unselected = render_slot(&params(&filters, &dec, None)).unwrap();
    let mut selected_params = params(&filters, &dec, None);
    selected_params.selected_sticker = Some(StickerId(9));
    let selected = render_slot(&selected_params).unwrap();

    assert_ne!(unselected.fingerprint(), selected.fingerprint());

    // Wrong id draws no chrome.
    let mut other = params(&filters, &dec, None);
    other.selected_sticker = Some(StickerId(1));
    let other_out = render_slot(&other).unwrap();
    assert_eq!(unselected.fingerprint(), other_out.fingerprint());
}
