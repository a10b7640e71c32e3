use crate::foundation::core::{Affine, BezPath, Viewport};
use crate::foundation::error::BouquetResult;
use crate::render::paint::{CompositeMode, Paint, StrokeStyle};
use crate::render::surface::{StateStack, Surface};

/// One recorded drawing command with its resolved state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Filled path.
    FillPath {
        /// Path geometry in local space.
        path: BezPath,
        /// Local-to-viewport transform at record time.
        transform: Affine,
        /// Fill paint.
        paint: Paint,
        /// Compositing mode at record time.
        composite: CompositeMode,
    },
    /// Stroked path.
    StrokePath {
        /// Path geometry in local space.
        path: BezPath,
        /// Local-to-viewport transform at record time.
        transform: Affine,
        /// Stroke geometry.
        style: StrokeStyle,
        /// Stroke paint.
        paint: Paint,
        /// Compositing mode at record time.
        composite: CompositeMode,
    },
    /// Isolated group opened.
    BeginLayer,
    /// Isolated group closed.
    EndLayer,
}

impl DrawOp {
    /// Transform of a fill or stroke; `None` for layer markers.
    pub fn transform(&self) -> Option<Affine> {
        match self {
            Self::FillPath { transform, .. } | Self::StrokePath { transform, .. } => {
                Some(*transform)
            }
            Self::BeginLayer | Self::EndLayer => None,
        }
    }

    /// Composite mode of a fill or stroke; `None` for layer markers.
    pub fn composite(&self) -> Option<CompositeMode> {
        match self {
            Self::FillPath { composite, .. } | Self::StrokePath { composite, .. } => {
                Some(*composite)
            }
            Self::BeginLayer | Self::EndLayer => None,
        }
    }
}

/// Surface that records commands instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    state: StateStack,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Empty recording for a viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            state: StateStack::default(),
            ops: Vec::new(),
        }
    }

    /// Recorded commands in submission order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Drop recorded commands and reset state.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.state.reset();
    }

    /// Current save depth; zero once every `save` has been restored.
    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> BouquetResult<()> {
        self.viewport = viewport;
        self.state.reset();
        Ok(())
    }

    fn begin_frame(&mut self) {
        self.clear();
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
        let s = self.state.current();
        self.ops.push(DrawOp::FillPath {
            path: path.clone(),
            transform: s.transform,
            paint: paint.clone(),
            composite: s.composite,
        });
    }

    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle, paint: &Paint) {
        let s = self.state.current();
        self.ops.push(DrawOp::StrokePath {
            path: path.clone(),
            transform: s.transform,
            style: *style,
            paint: paint.clone(),
            composite: s.composite,
        });
    }

    fn begin_layer(&mut self) {
        self.ops.push(DrawOp::BeginLayer);
    }

    fn end_layer(&mut self) {
        self.ops.push(DrawOp::EndLayer);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;
