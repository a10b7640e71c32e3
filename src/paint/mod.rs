/// Straight-alpha colours.
pub mod color;
