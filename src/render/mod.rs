//! Drawing surfaces: the [`Surface`](surface::Surface) contract, a recording surface for
//! inspection, and the `vello_cpu` rasterizer.

/// `vello_cpu` surface.
pub mod cpu;
/// Read-back frames.
pub mod frame;
/// Paints and stroke styles.
pub mod paint;
/// Command-recording surface.
pub mod record;
/// Surface contract and draw state.
pub mod surface;
