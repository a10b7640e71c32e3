use crate::foundation::core::{Affine, BezPath, Viewport};
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::paint::color::Color;
use crate::render::frame::FrameRGBA;
use crate::render::paint::{ColorStop, CompositeMode, LineCap, Paint, StrokeStyle};
use crate::render::surface::{StateStack, Surface};

/// Options for [`CpuSurface`].
#[derive(Clone, Copy, Debug)]
pub struct CpuSurfaceOpts {
    /// Device pixels per CSS pixel.
    pub device_pixel_ratio: f64,
    /// Backing colour every frame starts from.
    pub clear: Color,
}

impl Default for CpuSurfaceOpts {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            clear: Color::BLACK,
        }
    }
}

/// CPU raster surface powered by `vello_cpu`.
///
/// The backing store is `floor(width × dpr) × floor(height × dpr)` device pixels and every
/// command is pre-scaled by `dpr`, so callers draw in CSS pixels. A frame is recorded into one
/// render context and groups map onto its native layers, so composite modes always combine with
/// the pixels already drawn beneath them.
pub struct CpuSurface {
    viewport: Viewport,
    opts: CpuSurfaceOpts,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    layer_depth: usize,
    state: StateStack,
}

impl CpuSurface {
    /// Allocate a surface for `viewport`.
    pub fn new(viewport: Viewport, opts: CpuSurfaceOpts) -> BouquetResult<Self> {
        let (width, height) = device_size(viewport, opts.device_pixel_ratio)?;
        let mut surface = Self {
            viewport,
            opts,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            layer_depth: 0,
            state: StateStack::default(),
        };
        surface.reset();
        Ok(surface)
    }

    /// Backing store size in device pixels.
    pub fn device_size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    /// Device pixels per CSS pixel.
    pub fn device_pixel_ratio(&self) -> f64 {
        self.opts.device_pixel_ratio
    }

    /// Reallocate for a new viewport and pixel ratio. Drops any in-progress frame.
    pub fn resize_with_ratio(
        &mut self,
        viewport: Viewport,
        device_pixel_ratio: f64,
    ) -> BouquetResult<()> {
        let (width, height) = device_size(viewport, device_pixel_ratio)?;
        tracing::debug!(
            css_w = viewport.width,
            css_h = viewport.height,
            device_w = width,
            device_h = height,
            "cpu surface resized"
        );
        self.viewport = viewport;
        self.opts.device_pixel_ratio = device_pixel_ratio;
        self.width = width;
        self.height = height;
        self.ctx = vello_cpu::RenderContext::new(width, height);
        self.layer_depth = 0;
        self.reset();
        Ok(())
    }

    /// Reset to the clear colour with identity state and no open layers.
    pub fn reset(&mut self) {
        if self.layer_depth > 0 {
            // Open layers cannot be popped out of a reset context.
            self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
            self.layer_depth = 0;
        } else {
            self.ctx.reset();
        }
        self.state.reset();

        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx.set_paint(color_to_cpu(self.opts.clear));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Rasterize the frame and read it back.
    ///
    /// Fails while a layer opened with [`Surface::begin_layer`] is still open.
    pub fn finish_frame(&mut self) -> BouquetResult<FrameRGBA> {
        if self.layer_depth != 0 {
            return Err(BouquetError::render(format!(
                "frame finished with {} unclosed layer(s)",
                self.layer_depth
            )));
        }
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn prepare_draw(&mut self, paint: &Paint) {
        let s = self.state.current();
        let device = Affine::scale(self.opts.device_pixel_ratio) * s.transform;
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(device));
        self.ctx.set_blend_mode(blend_to_cpu(s.composite));
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(*c)),
            Paint::Linear(g) => {
                let stops = stops_to_cpu(&g.stops);
                let gradient = vello_cpu::peniko::Gradient::new_linear(
                    point_to_cpu(g.start),
                    point_to_cpu(g.end),
                )
                .with_stops(stops.as_slice());
                self.ctx.set_paint(gradient);
            }
            Paint::Radial(g) => {
                let stops = stops_to_cpu(&g.stops);
                let gradient = vello_cpu::peniko::Gradient::new_two_point_radial(
                    point_to_cpu(g.center),
                    g.inner_radius as f32,
                    point_to_cpu(g.center),
                    g.outer_radius as f32,
                )
                .with_stops(stops.as_slice());
                self.ctx.set_paint(gradient);
            }
        }
    }
}

impl Surface for CpuSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> BouquetResult<()> {
        self.resize_with_ratio(viewport, self.opts.device_pixel_ratio)
    }

    fn begin_frame(&mut self) {
        self.reset();
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn transform(&mut self, affine: Affine) {
        self.state.transform(affine);
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.state.set_composite(mode);
    }

    fn fill(&mut self, path: &BezPath, paint: &Paint) {
        self.prepare_draw(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle, paint: &Paint) {
        self.prepare_draw(paint);
        self.ctx.set_stroke(stroke_to_cpu(style));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn begin_layer(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.push_layer(None, None, None, None, None);
        self.layer_depth += 1;
    }

    fn end_layer(&mut self) {
        if self.layer_depth == 0 {
            return;
        }
        self.ctx.pop_layer();
        self.layer_depth -= 1;
    }
}

fn device_size(viewport: Viewport, device_pixel_ratio: f64) -> BouquetResult<(u16, u16)> {
    if !(device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0) {
        return Err(BouquetError::validation(
            "device_pixel_ratio must be finite and > 0",
        ));
    }
    let w = (viewport.width * device_pixel_ratio).floor();
    let h = (viewport.height * device_pixel_ratio).floor();
    if !(w >= 1.0 && h >= 1.0) {
        return Err(BouquetError::render(
            "cpu surface needs at least one device pixel per side",
        ));
    }
    if w > f64::from(u16::MAX) || h > f64::from(u16::MAX) {
        return Err(BouquetError::render("cpu surface size exceeds u16"));
    }
    Ok((w as u16, h as u16))
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::new(c.to_f32_array())
}

fn stops_to_cpu(stops: &[ColorStop]) -> Vec<vello_cpu::peniko::ColorStop> {
    stops
        .iter()
        .map(|s| {
            let offset = s.offset.clamp(0.0, 1.0) as f32;
            vello_cpu::peniko::ColorStop::from((offset, color_to_cpu(s.color)))
        })
        .collect()
}

fn blend_to_cpu(mode: CompositeMode) -> vello_cpu::peniko::BlendMode {
    use vello_cpu::peniko::{BlendMode, Compose, Mix};

    match mode {
        CompositeMode::SourceOver => BlendMode::default(),
        CompositeMode::DestinationOver => BlendMode::new(Mix::Normal, Compose::DestOver),
        CompositeMode::Lighter => BlendMode::new(Mix::Normal, Compose::Plus),
    }
}

fn stroke_to_cpu(style: &StrokeStyle) -> vello_cpu::kurbo::Stroke {
    let cap = match style.cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
    };
    vello_cpu::kurbo::Stroke::new(style.width).with_caps(cap)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
