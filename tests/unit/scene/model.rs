use super::*;

#[test]
fn image_transform_defaults_to_identity() {
    let t = ImageTransform::default();
    assert_eq!((t.x, t.y, t.scale), (0.0, 0.0, 1.0));
}

#[test]
fn decoration_state_round_trips_through_json() {
    let dec = DecorationState {
        strokes: vec![Stroke {
            color: Color::from_hex("#FF69B4").unwrap(),
            width: 25.0,
            kind: BrushKind::Neon,
            points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        }],
        stickers: vec![StickerItem {
            id: StickerId(7),
            kind_key: "y2k_star_silver".into(),
            x: 500.0,
            y: 700.0,
            scale: 1.5,
            rotation: 0.25,
            flipped: true,
        }],
    };

    let json = serde_json::to_string(&dec).unwrap();
    let back: DecorationState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.strokes.len(), 1);
    assert_eq!(back.strokes[0].points.len(), 2);
    assert_eq!(back.stickers[0].id, StickerId(7));
    assert!(back.stickers[0].flipped);
}

#[test]
fn sticker_lookup_finds_by_id() {
    let mut dec = DecorationState::default();
    dec.stickers.push(StickerItem {
        id: StickerId(1),
        kind_key: "doodle_heart".into(),
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
        flipped: false,
    });

    assert!(dec.sticker(StickerId(1)).is_some());
    assert!(dec.sticker(StickerId(2)).is_none());
    dec.sticker_mut(StickerId(1)).unwrap().x = 9.0;
    assert_eq!(dec.stickers[0].x, 9.0);
}

#[test]
fn flipped_defaults_to_false_when_missing() {
    let json = r#"{"id":3,"kind_key":"cyber_bear","x":1.0,"y":2.0,"scale":1.0,"rotation":0.0}"#;
    let sticker: StickerItem = serde_json::from_str(json).unwrap();
    assert!(!sticker.flipped);
}
