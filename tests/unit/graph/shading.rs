use super::*;
use crate::expression::cache::Uncached;
use crate::foundation::core::GraphPoint;
use crate::scene::line::Domain;

fn shade(shading: &[Shading], lines: &[Line], samples: usize) -> Vec<Polygon> {
    build_shading(shading, lines, &Viewport::default(), samples, &mut Uncached)
}

#[test]
fn ribbon_is_top_then_reversed_bottom() {
    let lines = [Line::cartesian("a", "x"), Line::cartesian("b", "0")];
    let polys = shade(&[Shading::between("s", "a", "b", "#00ff00", 0.3)], &lines, 2);
    assert_eq!(polys.len(), 1);
    let p = &polys[0];
    assert_eq!(p.id, "shade-s");
    assert_eq!(p.shading_id, "s");
    assert_eq!(p.color, "#00ff00");
    assert_eq!(p.opacity, 0.3);
    assert_eq!(
        p.points,
        vec![
            GraphPoint::new(-10.0, -10.0),
            GraphPoint::new(0.0, 0.0),
            GraphPoint::new(10.0, 10.0),
            GraphPoint::new(10.0, 0.0),
            GraphPoint::new(0.0, 0.0),
            GraphPoint::new(-10.0, 0.0),
        ]
    );
}

#[test]
fn identical_lines_give_a_degenerate_ribbon() {
    let lines = [Line::cartesian("a", "x^2"), Line::cartesian("b", "x^2")];
    let polys = shade(&[Shading::between("s", "a", "b", "#000", 0.5)], &lines, 10);
    let ring = &polys[0].points;
    assert_eq!(ring.len(), 22);
    let (top, bottom) = ring.split_at(11);
    assert!(top.iter().eq(bottom.iter().rev()));
}

#[test]
fn first_line_domain_drives_both_curves() {
    let lines = [
        Line::cartesian("a", "1").with_domain(Domain::new(0.0, 1.0)),
        Line::cartesian("b", "0"),
    ];
    let polys = shade(&[Shading::between("s", "a", "b", "#000", 0.5)], &lines, 4);
    assert!(polys[0].points.iter().all(|p| (0.0..=1.0).contains(&p.x)));
}

#[test]
fn zero_sample_count_gives_no_ribbon() {
    let lines = [Line::cartesian("a", "x"), Line::cartesian("b", "0")];
    assert!(shade(&[Shading::between("s", "a", "b", "#000", 0.5)], &lines, 0).is_empty());
}

#[test]
fn non_finite_samples_are_dropped_per_curve() {
    let lines = [Line::cartesian("a", "sqrt(x)"), Line::cartesian("b", "0")];
    let polys = shade(&[Shading::between("s", "a", "b", "#000", 0.5)], &lines, 20);
    assert_eq!(polys[0].points.len(), 11 + 21);
}

#[test]
fn unsatisfiable_requests_produce_nothing() {
    let lines = [
        Line::cartesian("a", "x"),
        Line::polar("p", "1"),
        Line::cartesian("bad", "(x"),
        Line::cartesian("gap", "sqrt(-1)"),
    ];
    let requests = [
        Shading::between("missing", "a", "zzz", "#000", 0.5),
        Shading::between("polar", "a", "p", "#000", 0.5),
        Shading::between("syntax", "a", "bad", "#000", 0.5),
        Shading::between("empty", "a", "gap", "#000", 0.5),
        Shading {
            line_ids: vec!["a".into()],
            ..Shading::between("one", "a", "a", "#000", 0.5)
        },
        Shading {
            kind: ShadingKind::Above,
            ..Shading::between("above", "a", "a", "#000", 0.5)
        },
    ];
    assert!(shade(&requests, &lines, 10).is_empty());
}

#[test]
fn hidden_lines_still_shade() {
    let lines = [Line::cartesian("a", "x").hidden(), Line::cartesian("b", "0").hidden()];
    let polys = shade(&[Shading::between("s", "a", "b", "#000", 0.5)], &lines, 4);
    assert_eq!(polys.len(), 1);
}
