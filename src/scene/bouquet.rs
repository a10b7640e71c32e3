use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Millis, Point, Viewport};
use crate::foundation::rng::RandomSource;
use crate::paint::color::Color;
use crate::render::paint::{CompositeMode, LineCap, Paint, StrokeStyle};
use crate::render::surface::Surface;
use crate::scene::flower::Flower;

/// Fraction of the viewport's short side used as the scatter radius.
pub const SPREAD_FACTOR: f64 = 0.22;
/// Birth offset between consecutive flowers of one generation.
pub const STAGGER_MS: Millis = 80.0;

/// Stem and ribbon styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BouquetStyle {
    /// Stem stroke colour.
    pub stem: Color,
    /// Stem width at flower scale 1.
    pub stem_width: f64,
    /// Ribbon stroke colour.
    pub ribbon: Color,
    /// Ribbon thickness.
    pub ribbon_width: f64,
    /// Ribbon half length.
    pub ribbon_half_len: f64,
}

impl Default for BouquetStyle {
    fn default() -> Self {
        Self {
            stem: Color::from_rgb8(0x2c, 0x5f, 0x2b),
            stem_width: 4.0,
            ribbon: Color::from_rgb8(0xb3, 0x3a, 0x3a),
            ribbon_width: 18.0,
            ribbon_half_len: 60.0,
        }
    }
}

/// Upper bound on the number of flowers a bouquet keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowerCap {
    /// Keep every flower ever added.
    #[default]
    Unbounded,
    /// Keep at most this many, evicting the oldest first.
    Max(usize),
}

impl FlowerCap {
    /// `None` maps to [`FlowerCap::Unbounded`].
    pub fn from_option(max: Option<usize>) -> Self {
        match max {
            Some(n) => Self::Max(n),
            None => Self::Unbounded,
        }
    }
}

/// An ordered collection of flowers fanned around a focal point.
#[derive(Clone, Debug)]
pub struct Bouquet {
    flowers: Vec<Flower>,
    created_ms: Millis,
    focal: Point,
    cap: FlowerCap,
    style: BouquetStyle,
}

impl Bouquet {
    /// Empty bouquet created at `now_ms`.
    pub fn new(now_ms: Millis) -> Self {
        Self {
            flowers: Vec::new(),
            created_ms: now_ms,
            focal: Point::ORIGIN,
            cap: FlowerCap::Unbounded,
            style: BouquetStyle::default(),
        }
    }

    /// Replace the flower bound. Applies on the next generation.
    pub fn with_cap(mut self, cap: FlowerCap) -> Self {
        self.cap = cap;
        self
    }

    /// Replace stem and ribbon styling.
    pub fn with_style(mut self, style: BouquetStyle) -> Self {
        self.style = style;
        self
    }

    /// Flowers in draw order.
    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// Number of flowers.
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    /// `true` when there are no flowers.
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Clock value at construction. Informational only.
    pub fn created_ms(&self) -> Millis {
        self.created_ms
    }

    /// Centre of the most recent generation.
    pub fn focal(&self) -> Point {
        self.focal
    }

    /// Active flower bound.
    pub fn cap(&self) -> FlowerCap {
        self.cap
    }

    /// Scatter `5..=9` new flowers around `center`.
    ///
    /// Non-additive generation discards the previous flowers first; additive generation
    /// appends. Returns how many flowers were added.
    ///
    /// The radius magnitude is drawn from `uniform(10, spread)`. When the spread is below 10
    /// (short side under about 45 px) that range is reversed, so radii land in `(spread, 10]`
    /// and flowers may sit farther out than the spread itself.
    pub fn generate(
        &mut self,
        center: Point,
        additive: bool,
        viewport: Viewport,
        now_ms: Millis,
        rng: &mut impl RandomSource,
    ) -> usize {
        if !additive {
            self.flowers.clear();
        }
        self.focal = center;

        let n = rng.uniform_int(5, 10) as usize;
        let spread = viewport.min_side() * SPREAD_FACTOR;
        self.flowers.reserve(n);

        for i in 0..n {
            let angle = rng.uniform(-PI * 0.45, PI * 1.45);
            // Product of two uniforms clusters towards the centre.
            let radius_factor = rng.uniform(0.0, 1.0).abs();
            let radius_mag = rng.uniform(10.0, spread);
            let r = if spread > 0.0 {
                radius_factor * radius_mag
            } else {
                0.0
            };

            let x = center.x + angle.cos() * r + rng.uniform(-12.0, 12.0);
            let y = center.y + angle.sin() * r + rng.uniform(-8.0, 18.0);

            let falloff = if spread > 0.0 {
                (r.abs() / spread).min(1.0)
            } else {
                0.0
            };
            let scale = rng.uniform(0.9, 1.6) * (1.0 - falloff * 0.45);

            let mut flower = Flower::new(Point::new(x, y), scale, None, now_ms, rng);
            flower.delay_birth(i as f64 * STAGGER_MS);
            self.flowers.push(flower);
        }

        let evicted = self.enforce_cap();
        tracing::debug!(
            added = n,
            additive,
            evicted,
            total = self.flowers.len(),
            spread,
            focal_x = center.x,
            focal_y = center.y,
            "bouquet generated"
        );
        n
    }

    fn enforce_cap(&mut self) -> usize {
        let FlowerCap::Max(max) = self.cap else {
            return 0;
        };
        let excess = self.flowers.len().saturating_sub(max);
        if excess > 0 {
            self.flowers.drain(..excess);
        }
        excess
    }

    /// Stem for `flower`: from just below its anchor to the shared knot near the bottom.
    pub fn stem_path(flower: &Flower, viewport: Viewport) -> BezPath {
        let w = viewport.width;
        let h = viewport.height;
        let mut p = BezPath::new();
        p.move_to((flower.position.x, flower.position.y + 6.0));
        p.quad_to(
            ((flower.position.x + w / 2.0) / 2.0, h - 40.0),
            (w / 2.0, h - 20.0),
        );
        p
    }

    /// Horizontal ribbon across the stem knot.
    pub fn ribbon_path(&self, viewport: Viewport) -> BezPath {
        let cx = viewport.width / 2.0;
        let y = viewport.height - 26.0;
        let mut p = BezPath::new();
        p.move_to((cx - self.style.ribbon_half_len, y));
        p.line_to((cx + self.style.ribbon_half_len, y));
        p
    }

    /// Draw stems, flowers and ribbon at clock value `t`.
    ///
    /// The bouquet is drawn as one isolated layer. Stems use destination-over, so they sit
    /// beneath every flower in the layer without touching the background below it.
    pub fn draw(&self, surface: &mut dyn Surface, t: Millis) {
        let viewport = surface.viewport();
        surface.begin_layer();

        surface.save();
        surface.set_composite(CompositeMode::DestinationOver);
        let stem_paint = Paint::Solid(self.style.stem);
        for f in &self.flowers {
            let style = StrokeStyle::new(self.style.stem_width * f.scale);
            surface.stroke(&Self::stem_path(f, viewport), &style, &stem_paint);
        }
        surface.restore();

        for f in &self.flowers {
            f.draw(surface, t);
        }

        surface.save();
        let style = StrokeStyle::new(self.style.ribbon_width).with_cap(LineCap::Round);
        surface.stroke(
            &self.ribbon_path(viewport),
            &style,
            &Paint::Solid(self.style.ribbon),
        );
        surface.restore();

        surface.end_layer();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/bouquet.rs"]
mod tests;
