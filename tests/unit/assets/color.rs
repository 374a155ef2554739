use super::*;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c = Color::from_hex("#ff0000").unwrap();
    assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));

    let c = Color::from_hex("#0000ff80").unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    // Leading '#' is optional, case-insensitive.
    assert_eq!(Color::from_hex("FF69B4").unwrap(), Color::from_hex("#ff69b4").unwrap());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::from_hex("#ff00").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
    assert!(Color::from_hex("").is_err());
}

#[test]
fn serde_round_trips_through_hex() {
    let c = Color::from_hex("#fbc2eb").unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#fbc2eb\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);

    let translucent = Color::rgba(1.0, 0.0, 0.0, 0.5);
    let json = serde_json::to_string(&translucent).unwrap();
    let back: Color = serde_json::from_str(&json).unwrap();
    assert!((back.a - 0.5).abs() < 0.01);
}

#[test]
fn lerp_hits_endpoints() {
    let a = Color::rgb(0.0, 0.0, 0.0);
    let b = Color::rgb(1.0, 1.0, 1.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    let mid = a.lerp(b, 0.5);
    assert!((mid.r - 0.5).abs() < 1e-9);
}

#[test]
fn premul_multiplies_by_alpha() {
    let c = Color::rgba(1.0, 1.0, 1.0, 0.5).to_rgba8_premul();
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
}
