use std::collections::VecDeque;

use crate::foundation::core::{Millis, Point, Rect, Viewport};
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::runtime::clock::{Clock, VirtualClock};
use crate::runtime::input::PointerEvent;

/// Event delivered by a [`FrameHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// Display frame callback carrying its timestamp.
    Frame(Millis),
    /// Pointer-down or tap.
    Pointer(PointerEvent),
    /// The drawable area changed size.
    Resize(Viewport),
}

/// Platform side of the animation loop: frame scheduling, input and geometry.
pub trait FrameHost {
    /// Ask for one more frame callback.
    fn request_frame(&mut self);
    /// Next event, or `None` once the host is torn down.
    fn next_event(&mut self) -> Option<HostEvent>;
    /// Current clock value.
    fn now_ms(&self) -> Millis;
    /// Canvas bounding rectangle in client coordinates.
    fn canvas_rect(&self) -> Rect;
}

/// Deterministic host that ticks a [`VirtualClock`] at a fixed frame step.
///
/// Scripted pointer and resize events are delivered before the first frame whose timestamp is
/// at or after theirs. Frames are only produced when one has been requested, and the host ends
/// after `frame_limit` frames.
#[derive(Clone, Debug)]
pub struct ScriptedHost {
    clock: VirtualClock,
    step_ms: Millis,
    next_frame_ms: Millis,
    frame_limit: u64,
    delivered: u64,
    requested: bool,
    canvas_rect: Rect,
    script: VecDeque<(Millis, HostEvent)>,
}

impl ScriptedHost {
    /// Host producing up to `frame_limit` frames at `fps`, starting at clock value 0.
    pub fn new(fps: u32, frame_limit: u64, viewport: Viewport) -> BouquetResult<Self> {
        if fps == 0 {
            return Err(BouquetError::validation("scripted host fps must be non-zero"));
        }
        Ok(Self {
            clock: VirtualClock::default(),
            step_ms: 1000.0 / f64::from(fps),
            next_frame_ms: 0.0,
            frame_limit,
            delivered: 0,
            requested: false,
            canvas_rect: viewport.rect(),
            script: VecDeque::new(),
        })
    }

    /// Offset the canvas inside the client area.
    pub fn with_canvas_origin(mut self, origin: Point) -> Self {
        self.canvas_rect = Rect::from_origin_size(origin, self.canvas_rect.size());
        self
    }

    /// Schedule a click at client `(x, y)`.
    pub fn with_tap(self, at_ms: Millis, x: f64, y: f64) -> Self {
        self.with_event(at_ms, HostEvent::Pointer(PointerEvent::click(x, y)))
    }

    /// Schedule a resize.
    pub fn with_resize(self, at_ms: Millis, viewport: Viewport) -> Self {
        self.with_event(at_ms, HostEvent::Resize(viewport))
    }

    /// Schedule an arbitrary non-frame event. Events keep insertion order among equal times.
    pub fn with_event(mut self, at_ms: Millis, event: HostEvent) -> Self {
        let idx = self.script.partition_point(|(t, _)| *t <= at_ms);
        self.script.insert(idx, (at_ms, event));
        self
    }

    /// Time between frames.
    pub fn step_ms(&self) -> Millis {
        self.step_ms
    }

    /// Frames delivered so far.
    pub fn frames_delivered(&self) -> u64 {
        self.delivered
    }

    /// Scripted events not yet delivered.
    pub fn pending_events(&self) -> usize {
        self.script.len()
    }

    fn exhausted(&self) -> bool {
        self.delivered >= self.frame_limit
    }
}

impl FrameHost for ScriptedHost {
    fn request_frame(&mut self) {
        self.requested = true;
    }

    fn next_event(&mut self) -> Option<HostEvent> {
        if self.exhausted() {
            return None;
        }
        if let Some((at, _)) = self.script.front()
            && *at <= self.next_frame_ms
        {
            let (at, event) = self.script.pop_front()?;
            self.clock.advance_to(at);
            if let HostEvent::Resize(vp) = &event {
                self.canvas_rect =
                    Rect::from_origin_size(self.canvas_rect.origin(), vp.rect().size());
            }
            return Some(event);
        }
        if !self.requested {
            return None;
        }
        self.requested = false;
        self.clock.advance_to(self.next_frame_ms);
        let ts = self.next_frame_ms;
        self.delivered += 1;
        self.next_frame_ms += self.step_ms;
        Some(HostEvent::Frame(ts))
    }

    fn now_ms(&self) -> Millis {
        self.clock.now_ms()
    }

    fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/host.rs"]
mod tests;
