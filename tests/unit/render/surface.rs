use super::*;

#[test]
fn new_surface_is_transparent() {
    let s = Surface::new(4, 3);
    assert_eq!(s.data.len(), 4 * 3 * 4);
    assert!(s.data.iter().all(|&b| b == 0));
    assert!(!s.is_empty());
    assert!(Surface::new(0, 5).is_empty());
}

#[test]
fn pixel_reads_clamp_to_transparent_outside() {
    let mut s = Surface::new(2, 2);
    s.data[0..4].copy_from_slice(&[1, 2, 3, 4]);
    assert_eq!(s.pixel(0, 0), [1, 2, 3, 4]);
    assert_eq!(s.pixel(5, 0), [0, 0, 0, 0]);
    assert_eq!(s.pixel(0, 5), [0, 0, 0, 0]);
}

#[test]
fn fingerprint_tracks_content_and_shape() {
    let a = Surface::new(4, 4);
    let b = Surface::new(4, 4);
    assert_eq!(a.fingerprint(), b.fingerprint());

    let mut c = Surface::new(4, 4);
    c.data[0] = 1;
    assert_ne!(a.fingerprint(), c.fingerprint());

    // Same byte count, different shape.
    let wide = Surface::new(8, 2);
    assert_ne!(a.fingerprint(), wide.fingerprint());
}
