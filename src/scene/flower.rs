use std::f64::consts::{PI, TAU};

use crate::animation::ease::ease_out_back;
use crate::foundation::core::{Affine, BezPath, Millis, Point};
use crate::foundation::rng::RandomSource;
use crate::paint::color::Color;
use crate::render::paint::{ColorStop, LinearGradient, Paint};
use crate::render::surface::Surface;

/// Maximum sway, in degrees, at the start of the entrance.
pub const SWAY_DEGREES: f64 = 6.0;
/// Clock divisor for the sway oscillator.
pub const SWAY_PERIOD_MS: f64 = 700.0;

/// Fixed colours of a blossom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerPalette {
    /// Petal gradient stop at the tip.
    pub petal_light: Color,
    /// Petal gradient stop at mid-length.
    pub petal_base: Color,
    /// Petal gradient stop at the root.
    pub petal_dark: Color,
    /// Centre disc fill.
    pub center: Color,
}

impl Default for FlowerPalette {
    fn default() -> Self {
        Self {
            petal_light: Color::from_rgb8(0xff, 0xf8, 0x9b),
            petal_base: Color::from_rgb8(0xff, 0xd5, 0x4d),
            petal_dark: Color::from_rgb8(0xf1, 0xc9, 0x4a),
            center: Color::from_rgb8(0xf6, 0xc8, 0x4c),
        }
    }
}

/// Randomized generation-time parameters of one flower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerParams {
    /// Sway phase offset in radians.
    pub phase: f64,
    /// Number of petals, in `[6, 10)`.
    pub petal_count: u32,
    /// Petal length, in `[18, 36)`.
    pub petal_len: f64,
    /// Petal width, in `[10, 20)`.
    pub petal_width: f64,
    /// Entrance delay after construction, in `[0, 300)` ms.
    pub delay_ms: Millis,
    /// Entrance duration, in `[900, 1500)` ms.
    pub duration_ms: Millis,
    /// Sway speed multiplier, in `[0.6, 1.6)`.
    pub sway_speed: f64,
}

impl FlowerParams {
    /// Draw a parameter set. `phase` overrides the random phase; the draw order is fixed so
    /// seeded and scripted sources replay exactly.
    pub fn sample(rng: &mut impl RandomSource, phase: Option<f64>) -> Self {
        let phase = match phase {
            Some(p) => p,
            None => rng.uniform(0.0, TAU),
        };
        Self {
            phase,
            petal_count: rng.uniform_int(6, 10),
            petal_len: rng.uniform(18.0, 36.0),
            petal_width: rng.uniform(10.0, 20.0),
            delay_ms: rng.uniform(0.0, 300.0),
            duration_ms: rng.uniform(900.0, 1500.0),
            sway_speed: rng.uniform(0.6, 1.6),
        }
    }
}

/// Entrance state of a flower at one clock value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerPose {
    /// Clamped entrance progress in `[0, 1]`.
    pub progress: f64,
    /// Overshoot-eased scale multiplier.
    pub entrance: f64,
    /// Sway rotation in radians.
    pub sway_rad: f64,
    /// Local-to-viewport transform: translate, scale, then rotate.
    pub transform: Affine,
}

impl FlowerPose {
    /// `true` while the entrance scale is zero and nothing would be visible.
    pub fn is_collapsed(&self) -> bool {
        self.entrance <= 0.0
    }
}

/// A single procedurally generated blossom.
#[derive(Clone, Debug, PartialEq)]
pub struct Flower {
    /// Anchor in viewport space.
    pub position: Point,
    /// Nominal size multiplier (> 0).
    pub scale: f64,
    /// Geometry and timing.
    pub params: FlowerParams,
    /// Clock value at which the entrance starts.
    pub birth_ms: Millis,
    /// Colours.
    pub palette: FlowerPalette,
}

impl Flower {
    /// Sample a flower at `position`, born `delay_ms` after `now_ms`.
    ///
    /// Non-positive or non-finite scales fall back to 1.
    pub fn new(
        position: Point,
        scale: f64,
        phase: Option<f64>,
        now_ms: Millis,
        rng: &mut impl RandomSource,
    ) -> Self {
        let params = FlowerParams::sample(rng, phase);
        Self::from_params(position, scale, params, now_ms)
    }

    /// Build from an explicit parameter set.
    pub fn from_params(position: Point, scale: f64, params: FlowerParams, now_ms: Millis) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            position,
            scale,
            params,
            birth_ms: now_ms + params.delay_ms,
            palette: FlowerPalette::default(),
        }
    }

    /// Push the entrance start later, for staggered generations.
    pub fn delay_birth(&mut self, by_ms: Millis) {
        self.birth_ms += by_ms;
    }

    /// Entrance progress, scale and sway at clock value `t`.
    ///
    /// Before birth the progress is 0, which is the fully collapsed state.
    pub fn pose(&self, t: Millis) -> FlowerPose {
        let age = t - self.birth_ms;
        let progress = (age / self.params.duration_ms).clamp(0.0, 1.0);
        let entrance = ease_out_back(progress);

        let sway_deg = ((t / SWAY_PERIOD_MS + self.params.phase) * self.params.sway_speed).sin()
            * SWAY_DEGREES
            * (1.0 - progress);
        let sway_rad = sway_deg * PI / 180.0;

        let transform = Affine::translate(self.position.to_vec2())
            * Affine::scale(self.scale * entrance)
            * Affine::rotate(sway_rad);
        FlowerPose {
            progress,
            entrance,
            sway_rad,
            transform,
        }
    }

    /// Teardrop petal pointing up (towards negative y) from the origin.
    pub fn petal_path(&self) -> BezPath {
        let l = self.params.petal_len;
        let w = self.params.petal_width;
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.curve_to((w * 0.6, -l * 0.2), (w * 0.9, -l * 0.9), (0.0, -l));
        p.curve_to((-w * 0.9, -l * 0.9), (-w * 0.6, -l * 0.2), (0.0, 0.0));
        p.close_path();
        p
    }

    /// Tip-to-root gradient shared by every petal.
    pub fn petal_paint(&self) -> Paint {
        Paint::Linear(LinearGradient {
            start: Point::new(0.0, -self.params.petal_len),
            end: Point::ORIGIN,
            stops: vec![
                ColorStop::new(0.0, self.palette.petal_light),
                ColorStop::new(0.5, self.palette.petal_base),
                ColorStop::new(1.0, self.palette.petal_dark),
            ],
        })
    }

    /// Radius of the centre disc.
    pub fn center_radius(&self) -> f64 {
        self.params.petal_width * 0.9
    }

    /// Draw at clock value `t`. A collapsed flower draws nothing.
    pub fn draw(&self, surface: &mut dyn Surface, t: Millis) {
        let pose = self.pose(t);
        if pose.is_collapsed() {
            return;
        }

        surface.save();
        surface.transform(pose.transform);

        let petal = self.petal_path();
        let paint = self.petal_paint();
        let n = self.params.petal_count.max(1);
        for i in 0..n {
            let angle = f64::from(i) / f64::from(n) * TAU;
            surface.save();
            surface.transform(Affine::rotate(angle));
            surface.fill(&petal, &paint);
            surface.restore();
        }

        let disc = circle_path(Point::ORIGIN, self.center_radius());
        surface.fill(&disc, &Paint::Solid(self.palette.center));
        surface.restore();
    }
}

pub(crate) fn circle_path(center: Point, radius: f64) -> BezPath {
    use kurbo::Shape as _;
    kurbo::Circle::new(center, radius).to_path(0.1)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/flower.rs"]
mod tests;
