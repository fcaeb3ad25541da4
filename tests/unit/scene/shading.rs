use super::*;

#[test]
fn kinds_serialize_kebab_case() {
    let s = Shading::between("s", "a", "b", "#ff0000", 0.3);
    let value = serde_json::to_value(&s).unwrap();
    assert_eq!(value["kind"], "between-lines");
    assert_eq!(value["lineIds"], serde_json::json!(["a", "b"]));
    assert!(value.get("expression").is_none());

    let kind: ShadingKind = serde_json::from_str("\"below\"").unwrap();
    assert_eq!(kind, ShadingKind::Below);
}

#[test]
fn expression_is_optional_on_input() {
    let s: Shading = serde_json::from_str(
        r##"{"id":"s","kind":"inequality","lineIds":["a"],"color":"#000","opacity":0.2,"expression":"y<x"}"##,
    )
    .unwrap();
    assert_eq!(s.kind, ShadingKind::Inequality);
    assert_eq!(s.expression.as_deref(), Some("y<x"));
}
