//! Frame scheduling and pointer input.

/// Time sources.
pub mod clock;
/// Self-rescheduling animation loop.
pub mod frame_loop;
/// Platform event source.
pub mod host;
/// Pointer events and focal mapping.
pub mod input;
