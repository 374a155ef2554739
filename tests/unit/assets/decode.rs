use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_premul() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn svg_parse_ok_and_err() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
    assert!(parse_svg(ok).is_ok());
    assert!(parse_svg(b"<not-svg>").is_err());
}

#[test]
fn svg_rasterizes_to_requested_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;
    let prepared = parse_svg(svg).unwrap();
    let bytes = rasterize_svg_to_premul_rgba8(&prepared, 4, 6).unwrap();
    assert_eq!(bytes.len(), 4 * 6 * 4);
    // Fully red, fully opaque.
    assert_eq!(bytes[0], 255);
    assert_eq!(bytes[3], 255);
}

#[test]
fn straight_rgba_wrapper_validates_length() {
    assert!(PreparedImage::from_straight_rgba8(2, 2, vec![0u8; 16]).is_ok());
    assert!(PreparedImage::from_straight_rgba8(2, 2, vec![0u8; 15]).is_err());
}

#[test]
fn zero_sized_image_reports_empty() {
    let img = PreparedImage::from_straight_rgba8(0, 0, Vec::new()).unwrap();
    assert!(img.is_empty());
}
