use super::*;
use crate::foundation::rng::SeededRng;
use crate::render::paint::{CompositeMode, Paint};
use crate::render::record::{DrawOp, RecordingSurface};

#[test]
fn startup_bouquet_sits_above_centre() {
    let mut rng = SeededRng::from_seed_u64(1);
    let vp = Viewport::new(800.0, 600.0).unwrap();
    let scene = Scene::new(vp, SceneOpts::default(), 0.0, &mut rng);
    assert_eq!(scene.bouquet().focal(), Point::new(400.0, 260.0));
    assert!((5..10).contains(&scene.bouquet().len()));
    assert_eq!(scene.starfield().stars().len(), 80);
}

#[test]
fn frame_draws_background_before_bouquet() {
    let mut rng = SeededRng::from_seed_u64(2);
    let vp = Viewport::new(640.0, 480.0).unwrap();
    let opts = SceneOpts {
        star_count: 4,
        ..SceneOpts::default()
    };
    let scene = Scene::new(vp, opts, 0.0, &mut rng);
    let mut s = RecordingSurface::new(vp);
    scene.draw(&mut s, 5_000.0);

    let ops = s.ops();
    assert!(matches!(&ops[0], DrawOp::FillPath { paint: Paint::Linear(_), .. }));
    assert_eq!(ops[5].composite(), Some(CompositeMode::Lighter));
    let DrawOp::FillPath { paint: Paint::Radial(g), .. } = &ops[5] else {
        panic!("expected aura");
    };
    assert_eq!(g.center, scene.bouquet().focal());
    assert_eq!(ops[6], DrawOp::BeginLayer);
    assert_eq!(ops.last(), Some(&DrawOp::EndLayer));
}
