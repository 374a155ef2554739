//! Session glue: owns everything a booth run needs (template, photos,
//! presets, editor state, sheet metadata) and drives the compositor and
//! assembler. All rendering is synchronous and single-threaded; a render is
//! a pure function of the session state and can be repeated at any time.

use crate::assets::decode::{PreparedImage, PreparedSvg};
use crate::catalog::{BackgroundPreset, TemplateId};
use crate::foundation::error::PurikuraResult;
use crate::interact::engine::Editor;
use crate::layout::assembler::{self, SheetMetadata};
use crate::render::compositor;
use crate::render::surface::Surface;
use crate::scene::model::{FilterOptions, SlotParams};

/// One editing session for a chosen layout template.
pub struct BoothSession {
    editor: Editor,
    photos: Vec<Option<PreparedImage>>,
    frames: Vec<Option<PreparedSvg>>,
    background: Option<BackgroundPreset>,
    filters: FilterOptions,
    metadata: SheetMetadata,
    date_text: String,
}

impl BoothSession {
    pub fn new(template: TemplateId) -> Self {
        let spec = template.spec();
        Self {
            editor: Editor::new(spec),
            photos: (0..spec.slot_count).map(|_| None).collect(),
            frames: (0..spec.slot_count).map(|_| None).collect(),
            background: None,
            filters: FilterOptions::default(),
            metadata: SheetMetadata::default(),
            date_text: String::new(),
        }
    }

    /// Switch templates. Per-slot photos, frames, decorations and photo
    /// transforms are reset to the new slot count.
    pub fn select_template(&mut self, template: TemplateId) {
        let spec = template.spec();
        self.editor.select_template(spec);
        self.photos = (0..spec.slot_count).map(|_| None).collect();
        self.frames = (0..spec.slot_count).map(|_| None).collect();
    }

    pub fn template(&self) -> TemplateId {
        self.editor.template().id
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Install a decoded photo for a slot. Until a photo is set, the slot
    /// renders background and decorations only.
    pub fn set_photo(&mut self, slot: usize, photo: PreparedImage) {
        if let Some(p) = self.photos.get_mut(slot) {
            *p = Some(photo);
        }
    }

    pub fn set_frame(&mut self, slot: usize, frame: Option<PreparedSvg>) {
        if let Some(f) = self.frames.get_mut(slot) {
            *f = frame;
        }
    }

    pub fn set_background(&mut self, background: Option<BackgroundPreset>) {
        self.background = background;
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterOptions {
        &mut self.filters
    }

    pub fn metadata_mut(&mut self) -> &mut SheetMetadata {
        &mut self.metadata
    }

    /// Date string used by the per-slot date stamp.
    pub fn set_date_text(&mut self, date_text: impl Into<String>) {
        self.date_text = date_text.into();
    }

    /// Render one slot from current state.
    pub fn render_slot(&self, slot: usize) -> PurikuraResult<Surface> {
        self.render_slot_inner(slot, true)
    }

    fn render_slot_inner(&self, slot: usize, with_selection: bool) -> PurikuraResult<Surface> {
        let spec = self.editor.template();
        let decorations = &self.editor.decorations()[slot.min(spec.slot_count - 1)];
        let selected = if with_selection && slot == self.editor.active_slot() {
            self.editor.selected_sticker()
        } else {
            None
        };
        let params = SlotParams {
            photo: self.photos.get(slot).and_then(|p| p.as_ref()),
            background: self.background.as_ref(),
            frame: self.frames.get(slot).and_then(|f| f.as_ref()),
            filters: &self.filters,
            decorations,
            transform: self.editor.transforms()[slot.min(spec.slot_count - 1)],
            selected_sticker: selected,
            aspect_ratio: spec.aspect_ratio,
            date_text: &self.date_text,
        };
        compositor::render_slot(&params)
    }

    /// Render every slot without selection chrome and assemble the final
    /// sheet(s). Selection is suppressed rather than mutated, so the editor
    /// state is untouched by a capture.
    pub fn assemble_sheets(&self) -> PurikuraResult<Vec<Surface>> {
        let spec = self.editor.template();
        let mut slots = Vec::with_capacity(spec.slot_count);
        for i in 0..spec.slot_count {
            slots.push(self.render_slot_inner(i, false)?);
        }
        assembler::assemble(&slots, spec.id, &self.metadata)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
