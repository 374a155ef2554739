use super::*;

#[test]
fn portrait_pins_width() {
    let size = LogicalSize::from_aspect_ratio(0.77).unwrap();
    assert_eq!(size.width, LOGICAL_EDGE);
    assert_eq!(size.height, 1299);
}

#[test]
fn landscape_pins_height() {
    let size = LogicalSize::from_aspect_ratio(1.5).unwrap();
    assert_eq!(size.width, 1500);
    assert_eq!(size.height, LOGICAL_EDGE);
}

#[test]
fn square_is_edge_by_edge() {
    let size = LogicalSize::from_aspect_ratio(1.0).unwrap();
    assert_eq!((size.width, size.height), (LOGICAL_EDGE, LOGICAL_EDGE));
}

#[test]
fn invalid_ratios_are_rejected() {
    assert!(LogicalSize::from_aspect_ratio(0.0).is_err());
    assert!(LogicalSize::from_aspect_ratio(-1.0).is_err());
    assert!(LogicalSize::from_aspect_ratio(f64::NAN).is_err());
    assert!(LogicalSize::from_aspect_ratio(f64::INFINITY).is_err());
}

#[test]
fn premul_conversion_scales_channels() {
    let c = Rgba8Premul::from_straight_rgba(100, 50, 200, 128);
    assert_eq!(c.r, ((100u16 * 128 + 127) / 255) as u8);
    assert_eq!(c.g, ((50u16 * 128 + 127) / 255) as u8);
    assert_eq!(c.b, ((200u16 * 128 + 127) / 255) as u8);
    assert_eq!(c.a, 128);
}
