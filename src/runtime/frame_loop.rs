use crate::foundation::core::{Millis, Rect, Viewport};
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::foundation::rng::RandomSource;
use crate::render::surface::Surface;
use crate::runtime::host::{FrameHost, HostEvent};
use crate::runtime::input::{PointerEvent, focal_point};
use crate::scene::Scene;

/// Scheduling state of an [`AnimationLoop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// Not started; no frame has been requested.
    #[default]
    Idle,
    /// A frame callback is pending.
    Scheduled,
    /// A frame is being drawn.
    Running,
}

/// Bookkeeping for one drawn frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame counter.
    pub index: u64,
    /// Timestamp the frame was drawn at.
    pub time_ms: Millis,
    /// Time since the previous frame; zero for the first.
    pub dt_ms: Millis,
}

/// Self-rescheduling frame driver.
///
/// Each frame draws the background and then the bouquet at the same timestamp, then requests
/// the next frame before returning. Pointer events regenerate the bouquet additively between
/// frames.
pub struct AnimationLoop<R: RandomSource> {
    scene: Scene,
    rng: R,
    state: LoopState,
    frames: u64,
    last_frame_ms: Option<Millis>,
}

impl<R: RandomSource> AnimationLoop<R> {
    /// Idle loop over `scene`, drawing regeneration samples from `rng`.
    pub fn new(scene: Scene, rng: R) -> Self {
        Self {
            scene,
            rng,
            state: LoopState::Idle,
            frames: 0,
            last_frame_ms: None,
        }
    }

    /// Current scheduling state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The animated scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Request the first frame.
    pub fn start(&mut self, host: &mut dyn FrameHost) -> BouquetResult<()> {
        if self.state != LoopState::Idle {
            return Err(BouquetError::looping(format!(
                "start called while {:?}",
                self.state
            )));
        }
        host.request_frame();
        self.state = LoopState::Scheduled;
        Ok(())
    }

    /// Draw one frame at `ts` and schedule the next.
    pub fn on_frame(
        &mut self,
        ts: Millis,
        host: &mut dyn FrameHost,
        surface: &mut dyn Surface,
    ) -> BouquetResult<FrameInfo> {
        if self.state != LoopState::Scheduled {
            return Err(BouquetError::looping(format!(
                "frame callback delivered while {:?}",
                self.state
            )));
        }
        self.state = LoopState::Running;

        surface.begin_frame();
        self.scene.draw(surface, ts);

        let info = FrameInfo {
            index: self.frames,
            time_ms: ts,
            dt_ms: self.last_frame_ms.map_or(0.0, |prev| ts - prev),
        };
        self.frames += 1;
        self.last_frame_ms = Some(ts);
        tracing::trace!(index = info.index, t = ts, dt = info.dt_ms, "frame drawn");

        host.request_frame();
        self.state = LoopState::Scheduled;
        Ok(info)
    }

    /// Regenerate around the pointer, appending to the current bouquet.
    ///
    /// Returns how many flowers were added, or `None` if the event carried no position.
    pub fn on_pointer(
        &mut self,
        event: &PointerEvent,
        canvas_rect: Rect,
        viewport: Viewport,
        now_ms: Millis,
    ) -> Option<usize> {
        let focal = focal_point(event, canvas_rect, viewport)?;
        let added = self
            .scene
            .bouquet_mut()
            .generate(focal, true, viewport, now_ms, &mut self.rng);
        Some(added)
    }

    /// Pump `host` until it ends. `after_frame` runs after every drawn frame.
    ///
    /// Returns the number of frames drawn during this call.
    #[tracing::instrument(skip_all, name = "animation_loop")]
    pub fn run<H, S, F>(
        &mut self,
        host: &mut H,
        surface: &mut S,
        mut after_frame: F,
    ) -> BouquetResult<u64>
    where
        H: FrameHost,
        S: Surface,
        F: FnMut(&FrameInfo, &mut S) -> BouquetResult<()>,
    {
        if self.state == LoopState::Idle {
            self.start(&mut *host)?;
        }
        let first = self.frames;
        tracing::info!(start_ms = host.now_ms(), "animation loop started");

        while let Some(event) = host.next_event() {
            match event {
                HostEvent::Frame(ts) => {
                    let info = self.on_frame(ts, &mut *host, &mut *surface)?;
                    after_frame(&info, &mut *surface)?;
                }
                HostEvent::Pointer(ev) => {
                    let viewport = surface.viewport();
                    self.on_pointer(&ev, host.canvas_rect(), viewport, host.now_ms());
                }
                HostEvent::Resize(viewport) => {
                    tracing::debug!(
                        width = viewport.width,
                        height = viewport.height,
                        "host resized"
                    );
                    surface.resize(viewport)?;
                }
            }
        }

        self.state = LoopState::Idle;
        let drawn = self.frames - first;
        tracing::info!(frames = drawn, end_ms = host.now_ms(), "animation loop stopped");
        Ok(drawn)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/frame_loop.rs"]
mod tests;
