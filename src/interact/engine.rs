//! Pointer interaction: screen-to-logical mapping, sticker hit-testing and
//! the gesture state machine that mutates per-slot decoration state.
//!
//! The engine shares the compositor's coordinate contract (logical canvas
//! size, selection box extent, handle radius) but none of its drawing code.

use serde::{Deserialize, Serialize};

use crate::assets::color::Color;
use crate::catalog::LayoutTemplate;
use crate::foundation::core::{LogicalSize, Point, Vec2};
use crate::render::compositor::{HANDLE_RADIUS, SELECTION_HALF_EXTENT};
use crate::scene::model::{
    BrushKind, DecorationState, ImageTransform, StickerId, StickerItem, Stroke,
};

/// Smallest scale a resize gesture can reach; selection-handle math divides
/// by the scale, so it must never touch zero.
pub const MIN_STICKER_SCALE: f64 = 0.05;
const MAX_STICKER_SCALE: f64 = 8.0;

/// Pointer slop around the resize handle, in logical units.
const HANDLE_HIT_RADIUS: f64 = HANDLE_RADIUS + 8.0;

/// Fixed angle offset keeping the resize handle at the bottom-right corner
/// while the pointer drives rotation.
const HANDLE_ANGLE_OFFSET: f64 = std::f64::consts::FRAC_PI_4;

/// Default insertion point for new stickers.
pub const DEFAULT_STICKER_POS: (f64, f64) = (500.0, 700.0);

/// On-screen bounding rect of a slot's displayed surface, in screen pixels.
///
/// Layout can resize or move this at any time, so gesture code recomputes
/// the screen-to-logical map from a fresh rect on every event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a screen-space pointer position into logical canvas coordinates.
pub fn to_logical(screen: Point, rect: ScreenRect, logical: LogicalSize) -> Point {
    let sx = f64::from(logical.width) / rect.width.max(1e-9);
    let sy = f64::from(logical.height) / rect.height.max(1e-9);
    Point::new((screen.x - rect.left) * sx, (screen.y - rect.top) * sy)
}

/// Inverse of [`to_logical`], used by tests and by callers positioning
/// overlays in screen space.
pub fn to_screen(logical_pt: Point, rect: ScreenRect, logical: LogicalSize) -> Point {
    let sx = rect.width.max(1e-9) / f64::from(logical.width.max(1));
    let sy = rect.height.max(1e-9) / f64::from(logical.height.max(1));
    Point::new(logical_pt.x * sx + rect.left, logical_pt.y * sy + rect.top)
}

/// Active editing tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Pan/zoom the subject photo.
    #[default]
    Adjust,
    /// Freehand drawing.
    Draw,
    /// Sticker selection and manipulation.
    Sticker,
}

/// Brush configuration applied to newly started strokes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BrushSettings {
    pub color: Color,
    pub width: f64,
    pub kind: BrushKind,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color::from_hex("#FF69B4").unwrap_or(Color::WHITE),
            width: 25.0,
            kind: BrushKind::Neon,
        }
    }
}

/// One active gesture. At most one gesture runs per editor, and it always
/// targets the slot it started on.
#[derive(Clone, Debug, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Drawing,
    Panning {
        /// Screen-space anchor, advanced every move (incremental pan).
        last_screen: Point,
    },
    DraggingSticker {
        id: StickerId,
        start_pos: Point,
        start_logical: Point,
    },
    TransformingSticker {
        id: StickerId,
        start_scale: f64,
        start_dist: f64,
    },
}

/// Per-session interaction state: owns the per-slot decoration and photo
/// transform arrays and mutates them in response to pointer gestures.
#[derive(Clone, Debug)]
pub struct Editor {
    template: LayoutTemplate,
    decorations: Vec<DecorationState>,
    transforms: Vec<ImageTransform>,
    selected: Option<StickerId>,
    tool: Tool,
    brush: BrushSettings,
    gesture: Gesture,
    active_slot: usize,
    next_sticker_id: u64,
}

impl Editor {
    pub fn new(template: LayoutTemplate) -> Self {
        let mut editor = Self {
            template,
            decorations: Vec::new(),
            transforms: Vec::new(),
            selected: None,
            tool: Tool::default(),
            brush: BrushSettings::default(),
            gesture: Gesture::Idle,
            active_slot: 0,
            next_sticker_id: 1,
        };
        editor.reset_slots();
        editor
    }

    /// Switch templates: per-slot state is recreated at the new slot count.
    pub fn select_template(&mut self, template: LayoutTemplate) {
        self.template = template;
        self.reset_slots();
    }

    fn reset_slots(&mut self) {
        let n = self.template.slot_count;
        self.decorations = (0..n).map(|_| DecorationState::default()).collect();
        self.transforms = vec![ImageTransform::default(); n];
        self.selected = None;
        self.gesture = Gesture::Idle;
        self.active_slot = 0;
    }

    pub fn template(&self) -> LayoutTemplate {
        self.template
    }

    pub fn logical_size(&self) -> LogicalSize {
        LogicalSize::from_aspect_ratio(self.template.aspect_ratio).unwrap_or(LogicalSize {
            width: crate::foundation::core::LOGICAL_EDGE,
            height: crate::foundation::core::LOGICAL_EDGE,
        })
    }

    pub fn decorations(&self) -> &[DecorationState] {
        &self.decorations
    }

    pub fn transforms(&self) -> &[ImageTransform] {
        &self.transforms
    }

    pub fn transform_mut(&mut self, slot: usize) -> Option<&mut ImageTransform> {
        self.transforms.get_mut(slot)
    }

    pub fn selected_sticker(&self) -> Option<StickerId> {
        self.selected
    }

    /// Select a sticker directly (catalog taps select without a pointer
    /// gesture). `None` clears the selection.
    pub fn set_selected(&mut self, id: Option<StickerId>) {
        self.selected = id;
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn set_brush(&mut self, brush: BrushSettings) {
        self.brush = brush;
    }

    /// Insert a sticker at the default position and select it.
    pub fn add_sticker(&mut self, slot: usize, kind_key: &str) -> Option<StickerId> {
        let dec = self.decorations.get_mut(slot)?;
        let id = StickerId(self.next_sticker_id);
        self.next_sticker_id += 1;
        dec.stickers.push(StickerItem {
            id,
            kind_key: kind_key.to_owned(),
            x: DEFAULT_STICKER_POS.0,
            y: DEFAULT_STICKER_POS.1,
            scale: 1.0,
            rotation: 0.0,
            flipped: false,
        });
        self.active_slot = slot;
        self.selected = Some(id);
        Some(id)
    }

    /// Remove the selected sticker from its slot and clear the selection.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected.take() else {
            return;
        };
        for dec in &mut self.decorations {
            dec.stickers.retain(|s| s.id != id);
        }
    }

    /// Move the selected sticker to the end of its slot's list (topmost).
    pub fn bring_to_front(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        for dec in &mut self.decorations {
            if let Some(idx) = dec.stickers.iter().position(|s| s.id == id) {
                let sticker = dec.stickers.remove(idx);
                dec.stickers.push(sticker);
                return;
            }
        }
    }

    /// Pop the most recent stroke of a slot.
    pub fn undo_stroke(&mut self, slot: usize) {
        if let Some(dec) = self.decorations.get_mut(slot) {
            dec.strokes.pop();
        }
    }

    pub fn pointer_down(&mut self, slot: usize, screen: Point, rect: ScreenRect) {
        if slot >= self.decorations.len() {
            return;
        }
        self.active_slot = slot;
        let logical = to_logical(screen, rect, self.logical_size());

        match self.tool {
            Tool::Sticker => self.sticker_down(slot, logical),
            Tool::Draw => {
                self.selected = None;
                let brush = self.brush.clone();
                self.decorations[slot].strokes.push(Stroke {
                    color: brush.color,
                    width: brush.width,
                    kind: brush.kind,
                    points: vec![logical],
                });
                self.gesture = Gesture::Drawing;
            }
            Tool::Adjust => {
                self.selected = None;
                self.gesture = Gesture::Panning {
                    last_screen: screen,
                };
            }
        }
    }

    fn sticker_down(&mut self, slot: usize, logical: Point) {
        // The resize handle sits on the selection box corner, partly outside
        // the sticker's own hit box, so the selected sticker's handle is
        // checked before the stack walk.
        if let Some(id) = self.selected
            && near_resize_handle(&self.decorations[slot], id, logical)
            && let Some(s) = self.decorations[slot].sticker(id)
        {
            let dist = (logical - Point::new(s.x, s.y)).hypot().max(1e-6);
            self.gesture = Gesture::TransformingSticker {
                id,
                start_scale: s.scale,
                start_dist: dist,
            };
            return;
        }

        // Top-most first: walk the z-order in reverse.
        let hit = self.decorations[slot]
            .stickers
            .iter()
            .rev()
            .find(|s| sticker_hit(s, logical))
            .map(|s| (s.id, Point::new(s.x, s.y)));

        match hit {
            Some((id, pos)) => {
                self.selected = Some(id);
                self.gesture = Gesture::DraggingSticker {
                    id,
                    start_pos: pos,
                    start_logical: logical,
                };
            }
            None => {
                self.selected = None;
                self.gesture = Gesture::Idle;
            }
        }
    }

    pub fn pointer_move(&mut self, slot: usize, screen: Point, rect: ScreenRect) {
        if slot >= self.decorations.len() || slot != self.active_slot {
            return;
        }
        let size = self.logical_size();
        let logical = to_logical(screen, rect, size);

        match self.gesture {
            Gesture::Idle => {}
            Gesture::Drawing => {
                if let Some(stroke) = self.decorations[slot].strokes.last_mut() {
                    stroke.points.push(logical);
                }
            }
            Gesture::DraggingSticker {
                id,
                start_pos,
                start_logical,
            } => {
                if let Some(s) = self.decorations[slot].sticker_mut(id) {
                    let delta = logical - start_logical;
                    s.x = start_pos.x + delta.x;
                    s.y = start_pos.y + delta.y;
                }
            }
            Gesture::TransformingSticker {
                id,
                start_scale,
                start_dist,
            } => {
                if let Some(s) = self.decorations[slot].sticker_mut(id) {
                    let center = Point::new(s.x, s.y);
                    let v: Vec2 = logical - center;
                    let dist = v.hypot();
                    s.scale = (start_scale * (dist / start_dist))
                        .clamp(MIN_STICKER_SCALE, MAX_STICKER_SCALE);
                    s.rotation = v.y.atan2(v.x) - HANDLE_ANGLE_OFFSET;
                }
            }
            Gesture::Panning { last_screen } => {
                let sx = f64::from(size.width) / rect.width.max(1e-9);
                let sy = f64::from(size.height) / rect.height.max(1e-9);
                if let Some(t) = self.transforms.get_mut(slot) {
                    t.x += (screen.x - last_screen.x) * sx;
                    t.y += (screen.y - last_screen.y) * sy;
                }
                self.gesture = Gesture::Panning {
                    last_screen: screen,
                };
            }
        }
    }

    /// Pointer up or cancel: the in-progress stroke (if any) is already in
    /// its slot's list, so ending a gesture is just returning to idle.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

/// Square bound test sized by the sticker's scale.
fn sticker_hit(s: &StickerItem, p: Point) -> bool {
    let half = SELECTION_HALF_EXTENT * s.scale;
    p.x > s.x - half && p.x < s.x + half && p.y > s.y - half && p.y < s.y + half
}

/// Whether the pointer sits on the selected sticker's resize handle: the
/// rotated bottom-right corner of its selection box.
fn near_resize_handle(dec: &DecorationState, id: StickerId, p: Point) -> bool {
    let Some(s) = dec.sticker(id) else {
        return false;
    };
    let scale = s.scale.max(MIN_STICKER_SCALE);
    let half = SELECTION_HALF_EXTENT * scale;
    let corner_local = Vec2::new(if s.flipped { -half } else { half }, half);
    let (sin, cos) = s.rotation.sin_cos();
    let corner = Point::new(
        s.x + corner_local.x * cos - corner_local.y * sin,
        s.y + corner_local.x * sin + corner_local.y * cos,
    );
    (p - corner).hypot() <= HANDLE_HIT_RADIUS
}

#[cfg(test)]
#[path = "../../tests/unit/interact/engine.rs"]
mod tests;
