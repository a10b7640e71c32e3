use super::*;
use kurbo::Rect;

fn small(w: f64, h: f64, dpr: f64) -> CpuSurface {
    CpuSurface::new(
        Viewport::new(w, h).unwrap(),
        CpuSurfaceOpts {
            device_pixel_ratio: dpr,
            clear: Color::from_rgb8(0, 0, 255),
        },
    )
    .unwrap()
}

#[test]
fn empty_frame_is_clear_colour() {
    let mut s = small(4.0, 4.0, 1.0);
    let f = s.finish_frame().unwrap();
    assert_eq!((f.width, f.height), (4, 4));
    assert!(f.premultiplied);
    assert_eq!(f.pixel(2, 2), Some([0, 0, 255, 255]));
}

#[test]
fn device_pixel_ratio_scales_backing_store_and_commands() {
    let mut s = small(4.0, 3.0, 2.0);
    assert_eq!(s.device_size(), (8, 6));
    s.fill_rect(
        Rect::new(0.0, 0.0, 2.0, 3.0),
        &Paint::Solid(Color::from_rgb8(255, 0, 0)),
    );
    let f = s.finish_frame().unwrap();
    assert_eq!(f.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(6, 1), Some([0, 0, 255, 255]));
}

#[test]
fn layer_content_lands_over_the_backdrop() {
    let mut s = small(4.0, 4.0, 1.0);
    s.begin_layer();
    s.set_composite(CompositeMode::DestinationOver);
    s.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        &Paint::Solid(Color::from_rgb8(0, 255, 0)),
    );
    s.end_layer();
    let f = s.finish_frame().unwrap();
    assert_eq!(f.pixel(1, 1), Some([0, 255, 0, 255]));
}

#[test]
fn unclosed_layer_is_an_error() {
    let mut s = small(4.0, 4.0, 1.0);
    s.begin_layer();
    assert!(s.finish_frame().is_err());
}

#[test]
fn zero_area_and_bad_ratio_are_rejected() {
    let opts = CpuSurfaceOpts::default();
    assert!(CpuSurface::new(Viewport::new(0.0, 10.0).unwrap(), opts).is_err());
    let bad = CpuSurfaceOpts {
        device_pixel_ratio: 0.0,
        ..opts
    };
    assert!(CpuSurface::new(Viewport::new(10.0, 10.0).unwrap(), bad).is_err());
}

#[test]
fn resize_reallocates() {
    let mut s = small(4.0, 4.0, 1.0);
    s.resize_with_ratio(Viewport::new(10.0, 5.0).unwrap(), 1.5).unwrap();
    assert_eq!(s.device_size(), (15, 7));
    assert_eq!(s.viewport(), Viewport::new(10.0, 5.0).unwrap());
    let f = s.finish_frame().unwrap();
    assert_eq!(f.data.len(), 15 * 7 * 4);
}

#[test]
fn begin_frame_discards_previous_content() {
    let mut s = small(4.0, 4.0, 1.0);
    s.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        &Paint::Solid(Color::from_rgb8(255, 0, 0)),
    );
    s.begin_frame();
    let f = s.finish_frame().unwrap();
    assert_eq!(f.pixel(0, 0), Some([0, 0, 255, 255]));

    s.resize(Viewport::new(2.0, 2.0).unwrap()).unwrap();
    assert_eq!(s.device_size(), (2, 2));
}

#[test]
fn composite_modes_see_pixels_drawn_before_a_layer() {
    let mut s = small(4.0, 4.0, 1.0);
    s.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        &Paint::Solid(Color::from_rgb8(100, 0, 0)),
    );

    s.begin_layer();
    s.fill_rect(
        Rect::new(0.0, 0.0, 2.0, 4.0),
        &Paint::Solid(Color::from_rgb8(255, 0, 0)),
    );
    s.save();
    s.set_composite(CompositeMode::DestinationOver);
    s.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        &Paint::Solid(Color::from_rgb8(0, 255, 0)),
    );
    s.restore();
    s.end_layer();

    s.save();
    s.set_composite(CompositeMode::Lighter);
    s.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 1.0),
        &Paint::Solid(Color::from_rgb8(0, 0, 50)),
    );
    s.restore();

    let f = s.finish_frame().unwrap();
    assert_eq!(f.pixel(1, 2), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(3, 2), Some([0, 255, 0, 255]));
    assert_eq!(f.pixel(1, 0), Some([255, 0, 50, 255]));
    assert_eq!(f.pixel(3, 0), Some([0, 255, 50, 255]));
}

#[test]
fn lighter_adds_after_a_closed_layer() {
    let mut s = small(2.0, 2.0, 1.0);
    s.begin_layer();
    s.fill_rect(
        Rect::new(0.0, 0.0, 2.0, 2.0),
        &Paint::Solid(Color::from_rgb8(40, 60, 0)),
    );
    s.end_layer();
    s.set_composite(CompositeMode::Lighter);
    s.fill_rect(
        Rect::new(0.0, 0.0, 2.0, 2.0),
        &Paint::Solid(Color::from_rgb8(10, 20, 0)),
    );
    let f = s.finish_frame().unwrap();
    assert_eq!(f.pixel(0, 0), Some([50, 80, 0, 255]));
}
