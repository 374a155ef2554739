use super::*;

#[test]
fn fnv_is_deterministic_and_seed_sensitive() {
    let mut a = Fnv1a64::new_default();
    a.write_u64(42);
    let mut b = Fnv1a64::new_default();
    b.write_u64(42);
    assert_eq!(a.finish(), b.finish());

    let mut c = Fnv1a64::new(7);
    c.write_u64(42);
    assert_ne!(a.finish(), c.finish());
}

#[test]
fn lattice_hash_varies_with_coordinates() {
    let a = hash_u32(1, 0, 0);
    let b = hash_u32(1, 1, 0);
    let c = hash_u32(1, 0, 1);
    assert!(a != b || b != c);
    assert_eq!(a, hash_u32(1, 0, 0));
}

#[test]
fn unit_hash_stays_in_range() {
    for i in 0..1000 {
        let v = hash_unit_f64(99, i);
        assert!((0.0..1.0).contains(&v), "out of range: {v}");
    }
}

#[test]
fn mul_div255_hits_bounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
}
