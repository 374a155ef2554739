//! Purikura is a deterministic photo-booth compositing and layout engine.
//!
//! The pipeline is explicitly staged:
//!
//! - Decode photos into [`PreparedImage`] (the only IO boundary)
//! - Edit per-slot state through the [`interact::engine::Editor`] gesture machine
//! - Composite each slot with [`render::compositor::render_slot`]
//! - Assemble slots into print sheets with [`layout::assembler::assemble`]
//! - Encode sheets via [`encode`]
//!
//! Rendering is single-threaded, recomposes every frame from scratch, and
//! is idempotent: identical inputs produce byte-identical pixels.
#![forbid(unsafe_code)]

mod foundation;

pub mod assets;
pub mod catalog;
pub mod encode;
pub mod interact;
pub mod layout;
pub mod render;
pub mod scene;
pub mod session;
pub mod stickers;

pub use crate::assets::color::Color;
pub use crate::assets::decode::{PreparedImage, PreparedSvg, decode_image, parse_svg};
pub use crate::catalog::{BackgroundPreset, FramePreset, LayoutTemplate, TemplateId};
pub use crate::foundation::core::{Affine, BezPath, LOGICAL_EDGE, LogicalSize, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{PurikuraError, PurikuraResult};
pub use crate::interact::engine::{Editor, ScreenRect, Tool, to_logical, to_screen};
pub use crate::layout::assembler::{MAX_OUTPUT_EDGE, SheetMetadata, assemble};
pub use crate::render::compositor::render_slot;
pub use crate::render::surface::Surface;
pub use crate::scene::model::{
    BrushKind, DecorationState, FilterOptions, FitMode, ImageTransform, SlotParams, StickerId,
    StickerItem, Stroke,
};
pub use crate::session::BoothSession;
pub use crate::stickers::AssetKind;
