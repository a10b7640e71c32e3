use crate::foundation::core::{Millis, Point, Viewport};
use crate::foundation::rng::RandomSource;
use crate::paint::color::Color;
use crate::render::paint::{ColorStop, CompositeMode, LinearGradient, Paint, RadialGradient};
use crate::render::surface::Surface;
use crate::scene::flower::circle_path;

/// Star count used by the default scene.
pub const DEFAULT_STAR_COUNT: usize = 80;

/// A twinkling point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Position in viewport space.
    pub position: Point,
    /// Disc radius, in `[0.5, 2.0)`.
    pub radius: f64,
    /// Clock offset of the twinkle, in `[0, 1000)` ms.
    pub twinkle_ms: Millis,
}

impl Star {
    /// `0.5 + 0.5·sin((t + twinkle) / 700)`.
    pub fn alpha(&self, t: Millis) -> f64 {
        0.5 + 0.5 * ((t + self.twinkle_ms) / 700.0).sin()
    }
}

/// Sky gradient, stars and the pulsing aura behind the bouquet.
///
/// Stars are sampled once against the startup viewport and kept across resizes.
#[derive(Clone, Debug)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` stars over `viewport`.
    pub fn generate(count: usize, viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                position: Point::new(
                    rng.next_unit() * viewport.width,
                    rng.next_unit() * viewport.height,
                ),
                radius: rng.next_unit() * 1.5 + 0.5,
                twinkle_ms: rng.next_unit() * 1000.0,
            })
            .collect();
        Self { stars }
    }

    /// Build from explicit stars.
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    /// The fixed star set.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Vertical sky gradient at `t`; the bottom red channel drifts with `sin(t/5000)`.
    pub fn sky_paint(t: Millis, viewport: Viewport) -> Paint {
        let shift = (t / 5000.0).sin() * 0.05;
        Paint::Linear(LinearGradient {
            start: Point::ORIGIN,
            end: Point::new(0.0, viewport.height),
            stops: vec![
                ColorStop::new(0.0, Color::from_rgb8_alpha(8.0, 17.0, 38.0, 1.0)),
                ColorStop::new(
                    1.0,
                    Color::from_rgb8_alpha(7.0 + shift * 50.0, 16.0, 34.0, 1.0),
                ),
            ],
        })
    }

    /// Inner aura opacity at `t`: `0.2 + 0.15·sin(t/1000)`.
    pub fn aura_alpha(t: Millis) -> f64 {
        0.2 + 0.15 * (t / 1000.0).sin()
    }

    /// Radial aura centred on `focal`, reaching `0.7 × min(w, h)`.
    pub fn aura_paint(t: Millis, focal: Point, viewport: Viewport) -> Paint {
        let warm = Color::from_rgb8(255, 244, 200);
        Paint::Radial(RadialGradient {
            center: focal,
            inner_radius: 10.0,
            outer_radius: viewport.min_side() * 0.7,
            stops: vec![
                ColorStop::new(0.0, warm.with_alpha(Self::aura_alpha(t))),
                ColorStop::new(0.25, warm.with_alpha(0.08)),
                ColorStop::new(1.0, warm.with_alpha(0.0)),
            ],
        })
    }

    /// Paint the sky, stars and aura at `t`.
    pub fn draw(&self, surface: &mut dyn Surface, t: Millis, focal: Point) {
        let viewport = surface.viewport();
        let full = viewport.rect();

        surface.fill_rect(full, &Self::sky_paint(t, viewport));

        let star_color = Color::from_rgb8(255, 255, 200);
        for star in &self.stars {
            let disc = circle_path(star.position, star.radius);
            surface.fill(&disc, &Paint::Solid(star_color.with_alpha(star.alpha(t))));
        }

        surface.save();
        surface.set_composite(CompositeMode::Lighter);
        surface.fill_rect(full, &Self::aura_paint(t, focal, viewport));
        surface.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/background.rs"]
mod tests;
