/// Viewport and pixel primitives.
pub mod core;
/// Crate error type.
pub mod error;
/// Random sources.
pub mod rng;
