use super::*;

fn pts(ys: &[f64]) -> Vec<GraphPoint> {
    ys.iter()
        .enumerate()
        .map(|(i, &y)| GraphPoint::new(i as f64, y))
        .collect()
}

#[test]
fn all_finite_is_one_run() {
    let points = pts(&[0.0, 1.0, 2.0]);
    let lines = segment_polylines(&points, "a", &LineStyle::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, "a-0");
    assert_eq!(lines[0].line_id, "a");
    assert_eq!(lines[0].points, points);
}

#[test]
fn non_finite_values_split_runs() {
    let points = pts(&[0.0, 1.0, f64::NAN, 2.0, 3.0, f64::INFINITY, 4.0, 5.0]);
    let lines = segment_polylines(&points, "a", &LineStyle::default());
    let ids: Vec<_> = lines.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["a-0", "a-1", "a-2"]);
    assert!(lines.iter().all(|l| l.points.len() == 2));
    assert_eq!(lines[1].points[0], GraphPoint::new(3.0, 2.0));
}

#[test]
fn isolated_points_are_dropped_without_consuming_ids() {
    let points = pts(&[1.0, f64::NAN, 2.0, f64::NAN, 3.0, 4.0]);
    let lines = segment_polylines(&points, "a", &LineStyle::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, "a-0");
    assert_eq!(lines[0].points.len(), 2);
}

#[test]
fn non_finite_x_also_breaks() {
    let points = vec![
        GraphPoint::new(0.0, 0.0),
        GraphPoint::new(1.0, 1.0),
        GraphPoint::new(f64::NAN, 2.0),
        GraphPoint::new(3.0, 3.0),
    ];
    assert_eq!(finite_runs(&points).count(), 1);
}

#[test]
fn empty_and_all_nan_inputs_yield_nothing() {
    assert_eq!(finite_runs(&[]).count(), 0);
    assert_eq!(finite_runs(&pts(&[f64::NAN, f64::NAN])).count(), 0);
}
