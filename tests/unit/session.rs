use super::*;
use crate::catalog::TemplateId;

#[test]
fn new_session_sizes_state_to_the_template() {
    let session = BoothSession::new(TemplateId::Strip);
    assert_eq!(session.template(), TemplateId::Strip);
    assert_eq!(session.editor().decorations().len(), 4);
    assert_eq!(session.editor().transforms().len(), 4);
}

#[test]
fn template_switch_resets_slots() {
    let mut session = BoothSession::new(TemplateId::Strip);
    session.editor_mut().add_sticker(0, "doodle_heart");
    session.select_template(TemplateId::Card);
    assert_eq!(session.editor().decorations().len(), 1);
    assert!(session.editor().decorations()[0].stickers.is_empty());
}

#[test]
fn renders_without_any_photo() {
    let session = BoothSession::new(TemplateId::SquareFrame);
    let surface = session.render_slot(0).unwrap();
    assert!(!surface.is_empty());
    // Defaults to a white background.
    assert_eq!(surface.pixel(500, 500), [255, 255, 255, 255]);
}

#[test]
fn sheet_capture_suppresses_selection_chrome() {
    let mut session = BoothSession::new(TemplateId::SquareFrame);
    {
        let filters = session.filters_mut();
        filters.lighting = false;
        filters.soft_glow = false;
        filters.grain = 0.0;
        filters.date_stamp = false;
    }
    session.editor_mut().add_sticker(0, "retro_bauble");
    assert!(session.editor().selected_sticker().is_some());

    // Editing render shows chrome, the captured sheet render must not.
    let editing = session.render_slot(0).unwrap();
    session.editor_mut().set_selected(None);
    let clean = session.render_slot(0).unwrap();
    assert_ne!(editing.fingerprint(), clean.fingerprint());

    session.editor_mut().set_selected(Some(crate::scene::model::StickerId(1)));
    let sheets = session.assemble_sheets().unwrap();
    assert_eq!(sheets.len(), 1);
}
