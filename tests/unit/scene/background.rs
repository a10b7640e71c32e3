use super::*;
use crate::foundation::rng::{SeededRng, SequenceRng};
use crate::render::record::{DrawOp, RecordingSurface};

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0).unwrap()
}

#[test]
fn stars_are_sampled_inside_the_viewport() {
    let mut rng = SeededRng::from_seed_u64(42);
    let field = Starfield::generate(DEFAULT_STAR_COUNT, viewport(), &mut rng);
    assert_eq!(field.stars().len(), 80);
    for s in field.stars() {
        assert!((0.0..800.0).contains(&s.position.x));
        assert!((0.0..600.0).contains(&s.position.y));
        assert!((0.5..2.0).contains(&s.radius));
        assert!((0.0..1000.0).contains(&s.twinkle_ms));
    }
}

#[test]
fn star_alpha_pulses_per_phase() {
    let a = Star {
        position: Point::ORIGIN,
        radius: 1.0,
        twinkle_ms: 0.0,
    };
    assert!((a.alpha(0.0) - 0.5).abs() < 1e-12);
    let peak = 700.0 * std::f64::consts::FRAC_PI_2;
    assert!((a.alpha(peak) - 1.0).abs() < 1e-12);

    let b = Star {
        twinkle_ms: peak,
        ..a
    };
    assert!((b.alpha(0.0) - 1.0).abs() < 1e-12);
}

#[test]
fn aura_alpha_oscillates_between_bounds() {
    assert!((Starfield::aura_alpha(0.0) - 0.2).abs() < 1e-12);
    let peak = 1000.0 * std::f64::consts::FRAC_PI_2;
    assert!((Starfield::aura_alpha(peak) - 0.35).abs() < 1e-12);
    assert!((Starfield::aura_alpha(3.0 * peak) - 0.05).abs() < 1e-12);
}

#[test]
fn sky_bottom_red_drifts_slowly() {
    let Paint::Linear(g) = Starfield::sky_paint(0.0, viewport()) else {
        panic!("expected linear sky");
    };
    assert_eq!(g.end, Point::new(0.0, 600.0));
    assert!((g.stops[1].color.r * 255.0 - 7.0).abs() < 1e-9);

    let peak = 5000.0 * std::f64::consts::FRAC_PI_2;
    let Paint::Linear(g) = Starfield::sky_paint(peak, viewport()) else {
        panic!("expected linear sky");
    };
    assert!((g.stops[1].color.r * 255.0 - 9.5).abs() < 1e-9);
    assert_eq!(g.stops[0].color, Color::from_rgb8(8, 17, 38));
}

#[test]
fn draw_layers_sky_stars_then_additive_aura() {
    let mut rng = SequenceRng::constant(0.25);
    let field = Starfield::generate(3, viewport(), &mut rng);
    let mut s = RecordingSurface::new(viewport());
    let focal = Point::new(123.0, 45.0);
    field.draw(&mut s, 0.0, focal);

    let ops = s.ops();
    assert_eq!(ops.len(), 5);
    assert!(matches!(&ops[0], DrawOp::FillPath { paint: Paint::Linear(_), .. }));
    for op in &ops[1..4] {
        let DrawOp::FillPath { paint: Paint::Solid(c), composite, .. } = op else {
            panic!("expected star fill");
        };
        assert_eq!(*composite, CompositeMode::SourceOver);
        assert!((c.a - field.stars()[0].alpha(0.0)).abs() < 1e-12);
    }
    let DrawOp::FillPath {
        paint: Paint::Radial(g),
        composite,
        ..
    } = &ops[4]
    else {
        panic!("expected aura fill");
    };
    assert_eq!(*composite, CompositeMode::Lighter);
    assert_eq!(g.center, focal);
    assert_eq!(g.inner_radius, 10.0);
    assert!((g.outer_radius - 420.0).abs() < 1e-9);
    assert_eq!(s.save_depth(), 0);
}
