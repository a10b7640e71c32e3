use super::*;

#[test]
fn viewport_rejects_negative_and_non_finite() {
    assert!(Viewport::new(-1.0, 10.0).is_err());
    assert!(Viewport::new(10.0, f64::NAN).is_err());
    assert!(Viewport::new(0.0, 0.0).is_ok());
}

#[test]
fn viewport_min_side_and_center() {
    let v = Viewport::new(800.0, 600.0).unwrap();
    assert_eq!(v.min_side(), 600.0);
    assert_eq!(v.center(), Point::new(400.0, 300.0));
    assert!(!v.is_empty());
    assert!(Viewport::new(0.0, 600.0).unwrap().is_empty());
}

