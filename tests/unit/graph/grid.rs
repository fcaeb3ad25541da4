use super::*;

#[test]
fn default_viewport_has_eleven_lines_per_axis() {
    let grid = build_grid(&Viewport::default());
    assert_eq!(grid.len(), 22);
    let xs: Vec<_> = grid.iter().filter(|g| g.id.starts_with("grid-x-")).collect();
    assert_eq!(xs.len(), 11);
    assert_eq!(xs[0].points[0], GraphPoint::new(-10.0, -10.0));
    assert_eq!(xs[0].points[1], GraphPoint::new(-10.0, 10.0));
    assert_eq!(xs[10].points[0].x, 10.0);
}

#[test]
fn ids_share_one_counter() {
    let grid = build_grid(&Viewport::default());
    assert_eq!(grid[10].id, "grid-x-10");
    assert_eq!(grid[11].id, "grid-y-11");
    assert_eq!(grid[21].id, "grid-y-21");
}

#[test]
fn exactly_one_axis_per_direction_when_origin_visible() {
    let grid = build_grid(&Viewport::new(-3.7, 8.2, -0.4, 0.9));
    let axes: Vec<_> = grid.iter().filter(|g| g.is_axis).collect();
    assert_eq!(axes.len(), 2);
    assert!(axes[0].id.starts_with("grid-x-"));
    assert_eq!(axes[0].points[0].x, 0.0);
    assert!(axes[1].id.starts_with("grid-y-"));
    assert_eq!(axes[1].points[0].y, 0.0);
}

#[test]
fn origin_outside_viewport_has_no_axis() {
    let grid = build_grid(&Viewport::new(5.0, 15.0, 5.0, 15.0));
    assert!(!grid.is_empty());
    assert!(grid.iter().all(|g| !g.is_axis));
}

#[test]
fn positions_stay_inside_viewport() {
    let vp = Viewport::new(-3.7, 8.2, -123.0, 456.0);
    for g in build_grid(&vp) {
        for p in g.points {
            assert!(p.x >= vp.x_min && p.x <= vp.x_max, "{g:?}");
            assert!(p.y >= vp.y_min && p.y <= vp.y_max, "{g:?}");
        }
    }
}

#[test]
fn degenerate_viewport_uses_unit_step() {
    let grid = build_grid(&Viewport::new(0.0, 0.0, -1.0, 1.0));
    let xs: Vec<_> = grid.iter().filter(|g| g.id.starts_with("grid-x-")).collect();
    assert_eq!(xs.len(), 1);
    assert!(xs[0].is_axis);
}

#[test]
fn non_finite_viewport_yields_no_lines() {
    let grid = build_grid(&Viewport::new(f64::NEG_INFINITY, 1.0, f64::NAN, 1.0));
    assert!(grid.is_empty());
}
