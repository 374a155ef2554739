use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let mut dst = vec![1, 2, 3, 4];
    let src = vec![200, 200, 200, 200];
    premul_over_in_place(&mut dst, &src, 0.0).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 4]);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let mut dst = vec![10, 20, 30, 40];
    let src = vec![255, 255, 255, 0];
    premul_over_in_place(&mut dst, &src, 1.0).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 40]);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let mut dst = vec![0, 0, 0, 255];
    let src = vec![255, 0, 0, 255];
    premul_over_in_place(&mut dst, &src, 1.0).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn over_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(premul_over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
}

#[test]
fn screen_blend_with_white_gives_white() {
    let mut dst = vec![30, 60, 90, 255];
    let src = vec![255, 255, 255, 255];
    composite_over(&mut dst, &src, 1.0, BlendMode::Screen).unwrap();
    assert_eq!(&dst[..3], &[255, 255, 255]);
}

#[test]
fn overlay_blend_keeps_black_black() {
    let mut dst = vec![0, 0, 0, 255];
    let src = vec![128, 128, 128, 255];
    composite_over(&mut dst, &src, 1.0, BlendMode::Overlay).unwrap();
    assert_eq!(&dst[..3], &[0, 0, 0]);
}

#[test]
fn blend_opacity_0_is_noop() {
    let mut dst = vec![10, 20, 30, 255];
    let src = vec![200, 100, 50, 255];
    for blend in [BlendMode::Screen, BlendMode::Overlay, BlendMode::SoftLight] {
        composite_over(&mut dst, &src, 0.0, blend).unwrap();
        assert_eq!(dst, vec![10, 20, 30, 255]);
    }
}

#[test]
fn gaussian_kernel_is_normalized() {
    let k = gaussian_kernel_q16(5, 2.0).unwrap();
    assert_eq!(k.len(), 11);
    assert_eq!(k.iter().map(|&v| v as u64).sum::<u64>(), 65536);

    assert_eq!(gaussian_kernel_q16(0, 1.0).unwrap(), vec![1 << 16]);
    assert!(gaussian_kernel_q16(3, 0.0).is_err());
}

#[test]
fn blur_radius_0_is_identity() {
    let mut s = Surface::new(8, 8);
    for (i, b) in s.data.iter_mut().enumerate() {
        *b = (i % 251) as u8;
    }
    let blurred = blur_surface(&s, 0, 1.0).unwrap();
    assert_eq!(blurred.data, s.data);
}

#[test]
fn blur_flattens_an_impulse() {
    let mut s = Surface::new(9, 9);
    let center = ((4 * 9 + 4) * 4) as usize;
    s.data[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);
    let blurred = blur_surface(&s, 3, 1.5).unwrap();
    assert!(blurred.data[center] < 255);
    let neighbor = ((4 * 9 + 5) * 4) as usize;
    assert!(blurred.data[neighbor] > 0);
}

#[test]
fn identity_color_matrix_keeps_opaque_pixels() {
    let mut m = [0.0f32; 20];
    m[0] = 1.0;
    m[6] = 1.0;
    m[12] = 1.0;
    m[18] = 1.0;
    let mut data = vec![10, 128, 250, 255, 0, 0, 0, 255];
    let before = data.clone();
    color_matrix_in_place(&mut data, m);
    assert_eq!(data, before);
}

#[test]
fn lighting_matrix_brightens_midtones() {
    let mut data = vec![100, 100, 100, 255];
    color_matrix_in_place(&mut data, lighting_matrix());
    assert!(data[0] > 100);
}

#[test]
fn gradient_color_interpolates_between_stops() {
    use crate::assets::color::Color;
    let stops = [(0.0, Color::BLACK), (1.0, Color::WHITE)];
    let mid = gradient_color(&stops, 0.5);
    assert!((mid.r - 0.5).abs() < 1e-9);
    assert_eq!(gradient_color(&stops, -1.0), Color::BLACK);
    assert_eq!(gradient_color(&stops, 2.0), Color::WHITE);
}

#[test]
fn grain_zero_is_byte_exact_noop() {
    let mut s = Surface::new(32, 32);
    fill_diagonal_gradient(
        &mut s,
        &[
            (0.0, crate::assets::color::Color::rgb(0.2, 0.4, 0.6)),
            (1.0, crate::assets::color::Color::rgb(0.9, 0.5, 0.1)),
        ],
    );
    let before = s.clone();
    apply_grain(&mut s, 0.0).unwrap();
    assert_eq!(s, before);
    apply_grain(&mut s, -1.0).unwrap();
    assert_eq!(s, before);
}

#[test]
fn grain_above_zero_changes_pixels_deterministically() {
    let mut a = Surface::new(32, 32);
    fill_diagonal_gradient(
        &mut a,
        &[
            (0.0, crate::assets::color::Color::rgb(0.5, 0.5, 0.5)),
            (1.0, crate::assets::color::Color::rgb(0.5, 0.5, 0.5)),
        ],
    );
    let mut b = a.clone();
    let before = a.clone();

    apply_grain(&mut a, 0.35).unwrap();
    apply_grain(&mut b, 0.35).unwrap();
    assert_ne!(a, before);
    assert_eq!(a, b);
}
