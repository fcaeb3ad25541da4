use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

fn texts(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.text).collect()
}

#[test]
fn numbers_identifiers_and_operators() {
    assert_eq!(
        kinds("2*x1+.5"),
        vec![
            TokenKind::Number(2.0),
            TokenKind::Operator(Operator::Mul),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Add),
            TokenKind::Number(0.5),
        ]
    );
    assert_eq!(texts("sin(x_2)"), vec!["sin", "(", "x_2", ")"]);
}

#[test]
fn whitespace_is_skipped_and_offsets_are_bytes() {
    let toks = tokenize(" 12 \t+\nab");
    let offsets: Vec<usize> = toks.iter().map(|t| t.source_index).collect();
    assert_eq!(offsets, vec![1, 5, 7]);
    assert_eq!(toks[0].text, "12");
}

#[test]
fn malformed_numbers_are_nan_literals() {
    let toks = tokenize("1.2.3");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].text, "1.2.3");
    assert!(matches!(toks[0].kind, TokenKind::Number(v) if v.is_nan()));
}

#[test]
fn exponent_notation_is_not_recognized() {
    assert_eq!(texts("1e3"), vec!["1", "e3"]);
}

#[test]
fn unknown_characters_become_single_char_identifiers() {
    let toks = tokenize("θ<2");
    assert_eq!(toks[0].kind, TokenKind::Identifier);
    assert_eq!(toks[0].text, "θ");
    assert_eq!(toks[1].kind, TokenKind::Identifier);
    assert_eq!(toks[1].text, "<");
    assert_eq!(toks[1].source_index, "θ".len());
}

#[test]
fn identifiers_must_start_with_a_letter() {
    assert_eq!(texts("_a"), vec!["_", "a"]);
}

#[test]
fn comma_and_parens_have_their_own_kinds() {
    assert_eq!(
        kinds("(,)"),
        vec![TokenKind::LParen, TokenKind::Comma, TokenKind::RParen]
    );
}

#[test]
fn rejoined_text_reconstructs_non_whitespace_input() {
    for input in ["2x + sin(3 t)", "  a_b*(c-d)^2 ", "1/x, θ", "..5.", "y <= x"] {
        let joined: String = tokenize(input).iter().map(|t| t.text.as_str()).collect();
        let expected: String = input
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\n'))
            .collect();
        assert_eq!(joined, expected, "input {input:?}");
    }
}

#[test]
fn tokenizer_never_emits_negate() {
    assert_eq!(
        kinds("-x"),
        vec![TokenKind::Operator(Operator::Sub), TokenKind::Identifier]
    );
}
