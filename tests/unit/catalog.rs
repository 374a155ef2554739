use super::*;

#[test]
fn template_registry_is_consistent() {
    for id in TemplateId::all() {
        let spec = id.spec();
        assert_eq!(spec.id, id);
        assert!(spec.slot_count >= 1);
        assert!(spec.aspect_ratio > 0.0);
    }
    assert_eq!(TemplateId::Strip.spec().slot_count, 4);
    assert_eq!(TemplateId::SquareFrame.spec().slot_count, 1);
}

#[test]
fn template_ids_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&TemplateId::SquareFrame).unwrap(),
        "\"square_frame\""
    );
    let back: TemplateId = serde_json::from_str("\"id_grid\"").unwrap();
    assert_eq!(back, TemplateId::IdGrid);
}

#[test]
fn background_ids_are_unique() {
    let presets = builtin_backgrounds();
    let mut ids: Vec<&str> = presets.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len());
}

#[test]
fn gradient_presets_carry_ordered_stops() {
    for preset in builtin_backgrounds() {
        if let BackgroundFill::LinearGradient { stops } = &preset.fill {
            assert!(stops.len() >= 2, "{} needs at least two stops", preset.id);
            for pair in stops.windows(2) {
                assert!(pair[0].0 <= pair[1].0, "{} stops out of order", preset.id);
            }
        }
    }
}

#[test]
fn frame_svgs_parse() {
    for frame in builtin_frames() {
        if let Some(svg) = &frame.svg {
            assert!(
                crate::assets::decode::parse_svg(svg.as_bytes()).is_ok(),
                "frame '{}' has invalid svg",
                frame.id
            );
        }
    }
}

#[test]
fn every_catalog_key_resolves_in_the_registry() {
    for key in all_sticker_keys() {
        assert!(
            crate::stickers::AssetKind::resolve(key).is_some(),
            "catalog key '{key}' does not resolve"
        );
    }
}

#[test]
fn pen_colors_are_valid_hex() {
    for hex in PEN_COLORS {
        assert!(crate::assets::color::Color::from_hex(hex).is_ok());
    }
}
