use super::*;

fn input() -> RenderInput {
    RenderInput {
        lines: vec![Line::cartesian("a", "sin(x)"), Line::cartesian("b", "cos(x)")],
        shading: vec![Shading::between("s", "a", "b", "#000", 0.3)],
        sample_count: 50,
        ..RenderInput::default()
    }
}

#[test]
fn unchanged_input_reuses_the_snapshot() {
    let mut session = GraphSession::default();
    let first = session.render(&input());
    let second = session.render(&input());
    assert!(Arc::ptr_eq(&first, &second));
    let stats = session.stats();
    assert_eq!((stats.renders, stats.reused), (2, 1));
}

#[test]
fn recompute_token_forces_a_rebuild() {
    let mut session = GraphSession::default();
    let first = session.render(&input());
    let mut bumped = input();
    bumped.recompute_token = 1;
    let second = session.render(&bumped);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    assert_eq!(session.stats().reused, 0);
}

#[test]
fn expressions_are_compiled_once_across_rebuilds() {
    let mut session = GraphSession::default();
    session.render(&input());
    let misses = session.stats().expression_misses;
    assert_eq!(misses, 2);

    let mut moved = input();
    moved.viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0);
    session.render(&moved);
    assert_eq!(session.stats().expression_misses, misses);
}

#[test]
fn session_output_matches_the_pure_pipeline() {
    let mut session = GraphSession::default();
    let i = input();
    let data = session.render(&i);
    let pure = crate::graph::assemble::build_render_data(
        &i.lines,
        &i.shading,
        &i.viewport,
        i.sample_count,
    );
    assert_eq!(*data, pure);
}

#[test]
fn documents_fall_back_to_the_session_sample_count() {
    let mut session = GraphSession::new(SessionOpts {
        sample_count: 8,
        ..SessionOpts::default()
    });
    let doc = GraphDocument {
        lines: vec![Line::cartesian("a", "x")],
        ..GraphDocument::default()
    };
    assert_eq!(session.render_document(&doc).polylines[0].points.len(), 9);

    let doc = GraphDocument {
        samples: Some(3),
        ..doc
    };
    assert_eq!(session.render_document(&doc).polylines[0].points.len(), 4);
}

#[test]
fn clear_drops_cached_state() {
    let mut session = GraphSession::default();
    let first = session.render(&input());
    session.clear();
    let second = session.render(&input());
    assert!(!Arc::ptr_eq(&first, &second));
}
