use super::*;

fn input() -> RenderInput {
    RenderInput {
        lines: vec![
            Line::cartesian("a", "x^2"),
            Line::parametric("p", "cos(t)", "sin(t)"),
        ],
        shading: vec![Shading::between("s", "a", "a", "#000", 0.5)],
        ..RenderInput::default()
    }
}

#[test]
fn equal_inputs_hash_equal() {
    assert_eq!(fingerprint_input(&input()), fingerprint_input(&input()));
}

#[test]
fn every_field_participates() {
    let base = fingerprint_input(&input());
    let edits: Vec<Box<dyn Fn(&mut RenderInput)>> = vec![
        Box::new(|i| i.recompute_token += 1),
        Box::new(|i| i.sample_count += 1),
        Box::new(|i| i.viewport.x_max = 11.0),
        Box::new(|i| i.lines[0] = Line::cartesian("a", "x^3")),
        Box::new(|i| i.lines[0].base_mut().visible = false),
        Box::new(|i| i.lines[0].base_mut().style.dashed = true),
        Box::new(|i| i.lines[0].base_mut().domain = Some(Domain::default())),
        Box::new(|i| i.lines.swap(0, 1)),
        Box::new(|i| i.shading[0].opacity = 0.6),
        Box::new(|i| i.shading[0].expression = Some(String::new())),
        Box::new(|i| i.shading.clear()),
    ];
    for (n, edit) in edits.iter().enumerate() {
        let mut changed = input();
        edit(&mut changed);
        assert_ne!(fingerprint_input(&changed), base, "edit {n} did not change the hash");
    }
}

#[test]
fn string_boundaries_are_length_prefixed() {
    let mut a = input();
    a.lines = vec![Line::parametric("p", "ab", "c")];
    let mut b = input();
    b.lines = vec![Line::parametric("p", "a", "bc")];
    assert_ne!(fingerprint_input(&a), fingerprint_input(&b));
}
