//! Bouquet draws a procedurally generated bouquet of flowers over an animated starfield.
//!
//! Each frame paints the background and then the bouquet at one shared timestamp:
//!
//! - Build a [`Scene`] from a viewport and a [`RandomSource`]
//! - Drive it with an [`AnimationLoop`] pumped by a [`FrameHost`]
//! - Rasterize onto a [`CpuSurface`] and hand frames to a [`FrameSink`]
//!
//! Pointer events regenerate the bouquet additively around the tapped point.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves.
pub mod animation;
/// JSON run configuration.
pub mod config;
pub mod encode;
/// Geometry, errors and randomness shared across the crate.
pub mod foundation;
/// Colour values.
pub mod paint;
pub mod render;
pub mod runtime;
pub mod scene;

pub use crate::animation::ease::ease_out_back;
pub use crate::config::{SceneConfig, TapDef};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::foundation::core::{Affine, BezPath, Millis, Point, Rect, Viewport};
pub use crate::foundation::error::{BouquetError, BouquetResult};
pub use crate::foundation::rng::{RandomSource, SeededRng, SequenceRng};
pub use crate::paint::color::Color;
pub use crate::render::cpu::{CpuSurface, CpuSurfaceOpts};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::record::{DrawOp, RecordingSurface};
pub use crate::render::surface::Surface;
pub use crate::runtime::clock::{Clock, VirtualClock};
pub use crate::runtime::frame_loop::{AnimationLoop, FrameInfo, LoopState};
pub use crate::runtime::host::{FrameHost, HostEvent, ScriptedHost};
pub use crate::runtime::input::{PointerEvent, focal_point};
pub use crate::scene::bouquet::{Bouquet, FlowerCap};
pub use crate::scene::flower::Flower;
pub use crate::scene::{Scene, SceneOpts};
