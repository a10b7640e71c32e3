//! Procedural content: flowers, the bouquet that owns them, and the starfield behind it.

/// Sky, stars and aura.
pub mod background;
/// Flower collection with stems and ribbon.
pub mod bouquet;
/// Single blossom geometry and animation.
pub mod flower;

use crate::foundation::core::{Millis, Point, Viewport};
use crate::foundation::rng::RandomSource;
use crate::render::surface::Surface;
use crate::scene::background::Starfield;
use crate::scene::bouquet::{Bouquet, FlowerCap};

/// Vertical lift applied to focal points, so the fan sits above its stems.
pub const FOCAL_LIFT: f64 = 40.0;

/// Startup parameters for a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneOpts {
    /// Number of background stars.
    pub star_count: usize,
    /// Bound on accumulated flowers.
    pub cap: FlowerCap,
}

impl Default for SceneOpts {
    fn default() -> Self {
        Self {
            star_count: background::DEFAULT_STAR_COUNT,
            cap: FlowerCap::Unbounded,
        }
    }
}

/// Everything drawn in a frame.
#[derive(Clone, Debug)]
pub struct Scene {
    starfield: Starfield,
    bouquet: Bouquet,
}

impl Scene {
    /// Build the startup scene: stars over `viewport` and a first bouquet just above centre.
    pub fn new(
        viewport: Viewport,
        opts: SceneOpts,
        now_ms: Millis,
        rng: &mut impl RandomSource,
    ) -> Self {
        let starfield = Starfield::generate(opts.star_count, viewport, rng);
        let mut bouquet = Bouquet::new(now_ms).with_cap(opts.cap);
        let c = viewport.center();
        bouquet.generate(
            Point::new(c.x, c.y - FOCAL_LIFT),
            false,
            viewport,
            now_ms,
            rng,
        );
        Self { starfield, bouquet }
    }

    /// Assemble from parts.
    pub fn from_parts(starfield: Starfield, bouquet: Bouquet) -> Self {
        Self { starfield, bouquet }
    }

    /// Background decoration.
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// The bouquet.
    pub fn bouquet(&self) -> &Bouquet {
        &self.bouquet
    }

    /// Mutable access for regeneration.
    pub fn bouquet_mut(&mut self) -> &mut Bouquet {
        &mut self.bouquet
    }

    /// Background then bouquet, both at the same clock value.
    pub fn draw(&self, surface: &mut dyn Surface, t: Millis) {
        self.starfield.draw(surface, t, self.bouquet.focal());
        self.bouquet.draw(surface, t);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mod.rs"]
mod tests;
