use super::*;

#[test]
fn y_on_the_left() {
    let below = parse_inequality("y < x").unwrap();
    assert_eq!(below.boundary, "x");
    assert_eq!(below.direction, ShadeDirection::Below);
    assert!(!below.inclusive);

    let above = parse_inequality("Y>=x^2 - 1").unwrap();
    assert_eq!(above.boundary, "x^2 - 1");
    assert_eq!(above.direction, ShadeDirection::Above);
    assert!(above.inclusive);
}

#[test]
fn y_on_the_right_reads_mirrored() {
    let ineq = parse_inequality("x > y").unwrap();
    assert_eq!(ineq.boundary, "x");
    assert_eq!(ineq.direction, ShadeDirection::Below);

    let ineq = parse_inequality("2x <= y").unwrap();
    assert_eq!(ineq.direction, ShadeDirection::Above);
    assert!(ineq.inclusive);
}

#[test]
fn non_inequalities_are_rejected() {
    assert_eq!(parse_inequality("x^2"), None);
    assert_eq!(parse_inequality("y <"), None);
    assert_eq!(parse_inequality("< x"), None);
    assert_eq!(parse_inequality("x < 2"), None);
    assert_eq!(parse_inequality("yy < x"), None);
}

#[test]
fn inclusive_comparators_win_over_strict_ones() {
    let ineq = parse_inequality("y<=x").unwrap();
    assert_eq!(ineq.boundary, "x");
    assert!(ineq.inclusive);
}

#[test]
fn polygons_are_capped_at_the_viewport_edge() {
    let vp = Viewport::default();
    let boundary = vec![
        GraphPoint::new(0.0, 1.0),
        GraphPoint::new(1.0, 2.0),
        GraphPoint::new(2.0, f64::NAN),
        GraphPoint::new(3.0, 4.0),
        GraphPoint::new(4.0, 5.0),
    ];
    let polys = inequality_polygons(&boundary, &vp, "a", "#123456", ShadeDirection::Below);
    assert_eq!(polys.len(), 2);
    assert_eq!(polys[0].id, "a-shade-0");
    assert_eq!(polys[1].id, "a-shade-1");
    assert_eq!(polys[0].shading_id, "a");
    assert_eq!(polys[0].opacity, INEQUALITY_OPACITY);
    assert_eq!(
        polys[0].points,
        vec![
            GraphPoint::new(0.0, 1.0),
            GraphPoint::new(1.0, 2.0),
            GraphPoint::new(1.0, -10.0),
            GraphPoint::new(0.0, -10.0),
        ]
    );

    let above = inequality_polygons(&boundary, &vp, "a", "#123456", ShadeDirection::Above);
    assert_eq!(above[1].points[2], GraphPoint::new(4.0, 10.0));
}
