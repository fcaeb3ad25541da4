use super::*;

#[test]
fn default_viewport_is_symmetric_ten() {
    let v = Viewport::default();
    assert_eq!(v, Viewport::new(-10.0, 10.0, -10.0, 10.0));
    assert_eq!(v.width(), 20.0);
    assert_eq!(v.height(), 20.0);
}

#[test]
fn validate_rejects_degenerate_and_non_finite() {
    assert!(Viewport::default().validate().is_ok());
    assert!(Viewport::new(1.0, 1.0, 0.0, 1.0).validate().is_err());
    assert!(Viewport::new(0.0, 1.0, 2.0, -2.0).validate().is_err());
    assert!(Viewport::new(f64::NAN, 1.0, 0.0, 1.0).validate().is_err());
}

#[test]
fn viewport_serializes_with_camel_case_edges() {
    let json = serde_json::to_value(Viewport::new(-1.0, 2.0, -3.0, 4.0)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "xMin": -1.0, "xMax": 2.0, "yMin": -3.0, "yMax": 4.0 })
    );
}

#[test]
fn to_rect_keeps_math_orientation() {
    let r = Viewport::new(-1.0, 2.0, -3.0, 4.0).to_rect();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (-1.0, -3.0, 2.0, 4.0));
}
