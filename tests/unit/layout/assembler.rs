use super::*;

fn solid_surface(w: u32, h: u32, rgba: [u8; 4]) -> Surface {
    let mut s = Surface::new(w, h);
    for px in s.data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
    s
}

fn meta() -> SheetMetadata {
    SheetMetadata {
        name: "PURI USER".into(),
        location: "TOKYO".into(),
        date_text: "2026/08/07".into(),
    }
}

#[test]
fn zero_slots_is_an_error() {
    assert!(assemble(&[], TemplateId::Strip, &meta()).is_err());
    // All-empty surfaces count as zero usable slots.
    let empty = Surface::new(0, 0);
    assert!(assemble(&[empty], TemplateId::Card, &meta()).is_err());
}

#[test]
fn strip_returns_two_color_variants() {
    let slots: Vec<Surface> = (0..4)
        .map(|i| solid_surface(300, 200, [40 * (i + 1) as u8, 0, 0, 255]))
        .collect();
    let sheets = assemble(&slots, TemplateId::Strip, &meta()).unwrap();
    assert_eq!(sheets.len(), 2);
    assert_ne!(sheets[0].fingerprint(), sheets[1].fingerprint());
}

#[test]
fn undersupplied_strip_reuses_surfaces() {
    let one = solid_surface(300, 200, [10, 200, 30, 255]);
    let sheets = assemble(std::slice::from_ref(&one), TemplateId::Strip, &meta()).unwrap();
    assert_eq!(sheets.len(), 2);
}

#[test]
fn single_slot_templates_return_one_sheet() {
    let slot = solid_surface(200, 260, [0, 80, 160, 255]);
    for id in [TemplateId::SquareFrame, TemplateId::IdGrid, TemplateId::Card] {
        let sheets = assemble(std::slice::from_ref(&slot), id, &meta()).unwrap();
        assert_eq!(sheets.len(), 1, "{id:?}");
        assert!(!sheets[0].is_empty());
    }
}

#[test]
fn outputs_respect_the_size_bound() {
    let slots: Vec<Surface> = (0..4)
        .map(|_| solid_surface(1500, 1000, [90, 90, 90, 255]))
        .collect();
    for id in TemplateId::all() {
        for sheet in assemble(&slots, id, &meta()).unwrap() {
            assert!(
                sheet.width.max(sheet.height) <= MAX_OUTPUT_EDGE,
                "{id:?} exceeded bound: {}x{}",
                sheet.width,
                sheet.height
            );
        }
    }
}

#[test]
fn small_masters_are_never_upscaled() {
    let slot = solid_surface(200, 260, [0, 80, 160, 255]);
    let sheets = assemble(std::slice::from_ref(&slot), TemplateId::Card, &meta()).unwrap();
    // The card master is fixed at 1000x600, already inside the bound.
    assert_eq!((sheets[0].width, sheets[0].height), (1000, 600));
}

#[test]
fn assembly_is_deterministic() {
    let slot = solid_surface(400, 400, [120, 60, 200, 255]);
    let a = assemble(std::slice::from_ref(&slot), TemplateId::SquareFrame, &meta()).unwrap();
    let b = assemble(std::slice::from_ref(&slot), TemplateId::SquareFrame, &meta()).unwrap();
    assert_eq!(a[0].fingerprint(), b[0].fingerprint());
}

#[test]
fn license_serial_is_stable_and_id_like() {
    let a = license_serial("PURI USER");
    let b = license_serial("puri user ");
    assert_eq!(a, b);
    assert!(a.starts_with("P-"));
    assert_eq!(a.len(), 9);
    assert_ne!(a, license_serial("SOMEONE ELSE"));
}

#[test]
fn field_truncation_bounds_width() {
    assert_eq!(truncate_field("SHORT", 14), "SHORT");
    let long = truncate_field("AVERYLONGLOCATIONNAME", 14);
    assert_eq!(long.chars().count(), 16);
    assert!(long.ends_with(".."));
}
