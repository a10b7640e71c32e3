use crate::foundation::core::{Affine, BezPath, Rect, Viewport};
use crate::foundation::error::BouquetResult;
use crate::render::paint::{CompositeMode, Paint, StrokeStyle};

/// Immediate-mode 2D drawing context handed to every draw call.
///
/// Coordinates are CSS pixels; implementations own device-pixel scaling. State follows the
/// canvas model: `save`/`restore` bracket the current transform and composite mode, and
/// `transform` post-multiplies the current matrix.
pub trait Surface {
    /// Current viewport size. Read every frame, never cached by callers.
    fn viewport(&self) -> Viewport;

    /// Follow a host resize. Drawing state is reset.
    fn resize(&mut self, viewport: Viewport) -> BouquetResult<()>;

    /// Prepare for a new frame.
    fn begin_frame(&mut self) {}

    /// Push the current transform and composite mode.
    fn save(&mut self);

    /// Pop back to the last saved state. Unbalanced restores are ignored.
    fn restore(&mut self);

    /// Post-multiply the current transform (`current = current * affine`).
    fn transform(&mut self, affine: Affine);

    /// Set the compositing mode for subsequent fills and strokes.
    fn set_composite(&mut self, mode: CompositeMode);

    /// Fill a path with the non-zero rule.
    fn fill(&mut self, path: &BezPath, paint: &Paint);

    /// Stroke a path.
    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle, paint: &Paint);

    /// Start an isolated group; its content is composited source-over when the group ends.
    fn begin_layer(&mut self);

    /// Close the innermost group opened by [`Surface::begin_layer`].
    fn end_layer(&mut self);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        use kurbo::Shape as _;
        self.fill(&rect.to_path(0.1), paint);
    }
}

/// Transform and composite mode tracked by surface implementations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    /// Current user-space transform.
    pub transform: Affine,
    /// Current compositing mode.
    pub composite: CompositeMode,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            composite: CompositeMode::SourceOver,
        }
    }
}

/// Save/restore stack shared by the surface implementations.
#[derive(Clone, Debug, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    /// Active state.
    pub fn current(&self) -> DrawState {
        self.current
    }

    /// Save depth.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Push a copy of the active state.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last pushed state, if any.
    pub fn restore(&mut self) {
        if let Some(s) = self.saved.pop() {
            self.current = s;
        }
    }

    /// Post-multiply the active transform.
    pub fn transform(&mut self, affine: Affine) {
        self.current.transform = self.current.transform * affine;
    }

    /// Replace the active composite mode.
    pub fn set_composite(&mut self, mode: CompositeMode) {
        self.current.composite = mode;
    }

    /// Drop all saved state and return to identity.
    pub fn reset(&mut self) {
        self.current = DrawState::default();
        self.saved.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
