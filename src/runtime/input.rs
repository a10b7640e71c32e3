use crate::foundation::core::{Point, Rect, Viewport};
use crate::scene::FOCAL_LIFT;

/// Pointer-down or tap delivered by the host, in client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Mouse click.
    Mouse {
        /// Client-space position.
        client: Point,
    },
    /// Touch start; only the first touch is used.
    Touch {
        /// Client-space positions of active touches.
        touches: Vec<Point>,
    },
}

impl PointerEvent {
    /// Click at a client position.
    pub fn click(x: f64, y: f64) -> Self {
        Self::Mouse {
            client: Point::new(x, y),
        }
    }

    /// Position that drives regeneration, if the event carries one.
    pub fn client_point(&self) -> Option<Point> {
        match self {
            Self::Mouse { client } => Some(*client),
            Self::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Map a pointer event to a bouquet focal point.
///
/// The client position is made canvas-local through `canvas_rect`. A local coordinate of zero
/// (or NaN) falls back to the viewport centre on that axis, then the point is lifted by
/// [`FOCAL_LIFT`]. Touch events without touches yield `None`.
pub fn focal_point(event: &PointerEvent, canvas_rect: Rect, viewport: Viewport) -> Option<Point> {
    let client = event.client_point()?;
    let local = Point::new(client.x - canvas_rect.x0, client.y - canvas_rect.y0);

    let x = or_center(local.x, viewport.width);
    let y = or_center(local.y, viewport.height);
    let focal = Point::new(x, y - FOCAL_LIFT);
    tracing::debug!(
        client_x = client.x,
        client_y = client.y,
        focal_x = focal.x,
        focal_y = focal.y,
        "pointer mapped to focal point"
    );
    Some(focal)
}

fn or_center(v: f64, extent: f64) -> f64 {
    if v == 0.0 || v.is_nan() {
        extent / 2.0
    } else {
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/input.rs"]
mod tests;
