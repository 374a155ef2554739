use std::sync::Arc;

use smallvec::SmallVec;

use crate::assets::color::Color;
use crate::foundation::core::{Affine, BezPath, Rect};
use crate::render::surface::Surface;

/// Outline style for stroked vector drawing.
///
/// Strokes are expanded to fill outlines with `kurbo::stroke` (round caps
/// and joins throughout) and then filled; the raster backend itself only
/// ever fills paths, which keeps every pass on one code path.
#[derive(Clone, Debug)]
pub(crate) struct StrokeStyle {
    pub(crate) width: f64,
    /// Dash pattern; empty draws solid.
    pub(crate) dashes: SmallVec<[f64; 4]>,
}

impl StrokeStyle {
    pub(crate) fn new(width: f64) -> Self {
        Self {
            width,
            dashes: SmallVec::new(),
        }
    }

    pub(crate) fn with_dashes(mut self, pattern: &[f64]) -> Self {
        self.dashes = SmallVec::from_slice(pattern);
        self
    }

    fn to_kurbo(&self) -> kurbo::Stroke {
        let mut s = kurbo::Stroke::new(self.width)
            .with_caps(kurbo::Cap::Round)
            .with_join(kurbo::Join::Round);
        if !self.dashes.is_empty() {
            s = s.with_dashes(0.0, self.dashes.iter().copied());
        }
        s
    }
}

/// Image paint sampled by fills (photos, gradients, noise, frame rasters).
#[derive(Clone)]
pub(crate) struct ImagePaint {
    pub(crate) paint: vello_cpu::Image,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl ImagePaint {
    /// Build an image paint from premultiplied RGBA8 bytes.
    ///
    /// Returns `None` for zero-sized or over-large (`> u16::MAX` edge)
    /// images; callers treat that as "nothing to draw".
    pub(crate) fn from_premul_rgba8(bytes: &[u8], width: u32, height: u32) -> Option<Self> {
        let w: u16 = width.try_into().ok()?;
        let h: u16 = height.try_into().ok()?;
        if w == 0
            || h == 0
            || bytes.len()
                != (width as usize)
                    .saturating_mul(height as usize)
                    .saturating_mul(4)
        {
            return None;
        }
        let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
            (width as usize) * (height as usize),
        );
        for px in bytes.chunks_exact(4) {
            pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
                px[0], px[1], px[2], px[3],
            ]));
        }
        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
        Some(Self {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width,
            height,
        })
    }

    pub(crate) fn from_surface(surface: &Surface) -> Option<Self> {
        Self::from_premul_rgba8(&surface.data, surface.width, surface.height)
    }
}

/// One vector drawing pass over a raster target.
///
/// The backend renders into a fresh buffer per pass, so a `Painter` is
/// created, drawn into in z-order, and then flattened with [`Painter::finish`]
/// (or composited onto an existing surface by the caller). Every draw call
/// sets the full paint state it needs; no style state leaks between calls.
pub(crate) struct Painter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl Painter {
    /// Start a pass. `None` when the target has no drawable area (callers
    /// then skip the pass entirely, which keeps zero-size rendering a no-op).
    pub(crate) fn new(width: u32, height: u32) -> Option<Self> {
        let w: u16 = width.try_into().ok()?;
        let h: u16 = height.try_into().ok()?;
        if w == 0 || h == 0 {
            return None;
        }
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.reset();
        Some(Self {
            ctx,
            width: w,
            height: h,
        })
    }

    fn prepare(&mut self, transform: Affine) {
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
    }

    /// Fill a path with a solid color under `transform`.
    pub(crate) fn fill_path(&mut self, transform: Affine, color: Color, path: &BezPath) {
        let [r, g, b, a] = color.to_rgba8();
        self.prepare(transform);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Fill an axis-aligned rect with a solid color under `transform`.
    pub(crate) fn fill_rect(&mut self, transform: Affine, color: Color, rect: Rect) {
        let [r, g, b, a] = color.to_rgba8();
        self.prepare(transform);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
    }

    /// Stroke a path with a solid color (round caps/joins, optional dashes).
    pub(crate) fn stroke_path(
        &mut self,
        transform: Affine,
        color: Color,
        style: &StrokeStyle,
        path: &BezPath,
    ) {
        if style.width <= 0.0 {
            return;
        }
        let outline = kurbo::stroke(
            path.elements().iter().copied(),
            &style.to_kurbo(),
            &kurbo::StrokeOpts::default(),
            0.1,
        );
        self.fill_path(transform, color, &outline);
    }

    /// Fill a path with an image paint mapped into path-local space.
    ///
    /// `paint_transform` positions the image in the same local space the
    /// path is defined in (e.g. translate by the path bounds origin so the
    /// image spans the silhouette).
    pub(crate) fn fill_path_with_image(
        &mut self,
        transform: Affine,
        image: &ImagePaint,
        paint_transform: Affine,
        path: &BezPath,
    ) {
        self.prepare(transform);
        self.ctx.set_paint_transform(affine_to_cpu(paint_transform));
        self.ctx.set_paint(image.paint.clone());
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Draw an image so its pixel rect `(0,0)..(w,h)` maps through
    /// `transform`, optionally under a uniform opacity.
    pub(crate) fn draw_image(&mut self, transform: Affine, image: &ImagePaint, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }
        self.prepare(transform);
        self.ctx.set_paint(image.paint.clone());
        if opacity < 1.0 {
            self.ctx.push_opacity_layer(opacity);
        }
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            image.width as f64,
            image.height as f64,
        ));
        if opacity < 1.0 {
            self.ctx.pop_layer();
        }
    }

    /// Flush the pass into a fresh premultiplied surface.
    pub(crate) fn finish(mut self) -> Surface {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Surface {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
