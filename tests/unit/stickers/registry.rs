use super::*;
use crate::render::painter::Painter;

fn draw_to_surface(kind: AssetKind, size: f64) -> crate::render::surface::Surface {
    let mut p = Painter::new(160, 160).unwrap();
    let base = Affine::translate((80.0, 80.0));
    draw(&mut p, base, kind, size);
    p.finish()
}

fn has_ink(surface: &crate::render::surface::Surface) -> bool {
    surface.data.chunks_exact(4).any(|px| px[3] != 0)
}

#[test]
fn unknown_keys_fall_back_to_placeholder() {
    assert_eq!(AssetKind::parse("hat_santa_classic"), AssetKind::Placeholder);
    assert_eq!(AssetKind::parse(""), AssetKind::Placeholder);
    assert!(AssetKind::resolve("hat_santa_classic").is_none());
}

#[test]
fn known_keys_resolve_to_their_family() {
    assert_eq!(
        AssetKind::parse("y2k_star_holo"),
        AssetKind::Sparkle {
            shape: SparkleShape::Star,
            finish: Finish::Holo
        }
    );
    assert_eq!(AssetKind::parse("cyber_bird"), AssetKind::Pet(PetShape::Bird));
}

#[test]
fn placeholder_draws_visibly() {
    assert!(has_ink(&draw_to_surface(AssetKind::Placeholder, 40.0)));
}

#[test]
fn every_catalog_asset_draws_visibly() {
    for key in crate::catalog::all_sticker_keys() {
        let surface = draw_to_surface(AssetKind::parse(key), 40.0);
        assert!(has_ink(&surface), "asset '{key}' drew nothing");
    }
}

#[test]
fn assets_are_deterministic() {
    for key in ["y2k_star_silver", "ribbon_red_satin", "cyber_bear", "retro_tree"] {
        let a = draw_to_surface(AssetKind::parse(key), 40.0);
        let b = draw_to_surface(AssetKind::parse(key), 40.0);
        assert_eq!(a.fingerprint(), b.fingerprint(), "asset '{key}' not deterministic");
    }
}

#[test]
fn degenerate_sizes_draw_nothing() {
    assert!(!has_ink(&draw_to_surface(AssetKind::Placeholder, 0.0)));
    assert!(!has_ink(&draw_to_surface(AssetKind::Placeholder, -5.0)));
    assert!(!has_ink(&draw_to_surface(
        AssetKind::Pet(PetShape::Bear),
        f64::NAN
    )));
}
