//! Raster rendering: the per-slot compositor and its supporting passes.

pub mod compositor;
pub(crate) mod fx;
pub(crate) mod painter;
pub mod surface;
pub(crate) mod typeface;
