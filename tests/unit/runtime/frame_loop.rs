use super::*;
use crate::foundation::core::Point;
use crate::foundation::rng::SeededRng;
use crate::render::record::{DrawOp, RecordingSurface};
use crate::runtime::host::ScriptedHost;
use crate::scene::SceneOpts;

fn vp() -> Viewport {
    Viewport::new(320.0, 240.0).unwrap()
}

fn new_loop(seed: u64) -> AnimationLoop<SeededRng> {
    let mut rng = SeededRng::from_seed_u64(seed);
    let opts = SceneOpts {
        star_count: 3,
        ..SceneOpts::default()
    };
    let scene = Scene::new(vp(), opts, 0.0, &mut rng);
    AnimationLoop::new(scene, rng)
}

#[test]
fn start_moves_idle_to_scheduled_once() {
    let mut lp = new_loop(1);
    let mut host = ScriptedHost::new(60, 3, vp()).unwrap();
    assert_eq!(lp.state(), LoopState::Idle);
    lp.start(&mut host).unwrap();
    assert_eq!(lp.state(), LoopState::Scheduled);

    let err = lp.start(&mut host).unwrap_err();
    assert!(matches!(err, BouquetError::Loop(_)));
}

#[test]
fn frame_before_start_is_rejected() {
    let mut lp = new_loop(2);
    let mut host = ScriptedHost::new(60, 3, vp()).unwrap();
    let mut s = RecordingSurface::new(vp());
    let err = lp.on_frame(0.0, &mut host, &mut s).unwrap_err();
    assert!(matches!(err, BouquetError::Loop(_)));
    assert!(s.ops().is_empty());
}

#[test]
fn each_frame_redraws_and_reschedules() {
    let mut lp = new_loop(3);
    let mut host = ScriptedHost::new(50, 10, vp()).unwrap();
    let mut s = RecordingSurface::new(vp());
    lp.start(&mut host).unwrap();

    let a = lp.on_frame(100.0, &mut host, &mut s).unwrap();
    let b = lp.on_frame(116.0, &mut host, &mut s).unwrap();

    assert_eq!(a.index, 0);
    assert_eq!(a.dt_ms, 0.0);
    assert_eq!(b.index, 1);
    assert_eq!(b.dt_ms, 16.0);
    assert_eq!(lp.state(), LoopState::Scheduled);
    assert_eq!(lp.frames(), 2);
    // begin_frame clears the recording, so only the second frame is present.
    let layers = s.ops().iter().filter(|op| **op == DrawOp::BeginLayer).count();
    assert_eq!(layers, 1);
}

#[test]
fn pointer_appends_flowers_around_lifted_focal() {
    let mut lp = new_loop(4);
    let before = lp.scene().bouquet().len();
    let rect = vp().rect();
    let added = lp
        .on_pointer(&PointerEvent::click(100.0, 140.0), rect, vp(), 50.0)
        .unwrap();
    assert!((5..10).contains(&added));
    assert_eq!(lp.scene().bouquet().len(), before + added);
    assert_eq!(lp.scene().bouquet().focal(), Point::new(100.0, 100.0));

    let none = lp.on_pointer(&PointerEvent::Touch { touches: vec![] }, rect, vp(), 60.0);
    assert_eq!(none, None);
}

#[test]
fn run_pumps_until_the_host_ends() {
    let mut lp = new_loop(5);
    let resized = Viewport::new(160.0, 120.0).unwrap();
    let mut host = ScriptedHost::new(20, 4, vp())
        .unwrap()
        .with_tap(60.0, 10.0, 90.0)
        .with_resize(110.0, resized);
    let mut s = RecordingSurface::new(vp());
    let before = lp.scene().bouquet().len();

    let mut seen = Vec::new();
    let drawn = lp
        .run(&mut host, &mut s, |info, surface| {
            seen.push((info.index, info.time_ms, surface.viewport()));
            Ok(())
        })
        .unwrap();

    assert_eq!(drawn, 4);
    assert_eq!(lp.state(), LoopState::Idle);
    assert_eq!(
        seen.iter().map(|(_, t, _)| *t).collect::<Vec<_>>(),
        vec![0.0, 50.0, 100.0, 150.0]
    );
    assert_eq!(seen[2].2, vp());
    assert_eq!(seen[3].2, resized);
    assert!(lp.scene().bouquet().len() > before);
}

#[test]
fn run_propagates_callback_errors() {
    let mut lp = new_loop(6);
    let mut host = ScriptedHost::new(30, 5, vp()).unwrap();
    let mut s = RecordingSurface::new(vp());
    let err = lp
        .run(&mut host, &mut s, |info, _| {
            if info.index == 1 {
                Err(BouquetError::encode("sink full"))
            } else {
                Ok(())
            }
        })
        .unwrap_err();
    assert!(matches!(err, BouquetError::Encode(_)));
    assert_eq!(lp.frames(), 2);
}
