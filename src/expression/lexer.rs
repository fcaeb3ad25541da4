use crate::expression::builtins::Builtin;

/// Arithmetic operators, including the compiler-only unary negate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// Binary `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// Unary `-`. Never produced by the tokenizer.
    Neg,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Binding strength: `+ -` 1, `* /` 2, `^` 3, unary negate 4.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
            Self::Neg => 4,
        }
    }

    /// `^` and unary negate group right-to-left.
    pub fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow | Self::Neg)
    }

    /// Printable form used in postfix listings.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Neg => "neg",
        }
    }
}

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Numeric literal with its parsed value.
    ///
    /// NaN when the text is not a valid number, e.g. `1.2.3`.
    Number(f64),
    /// Arithmetic operator.
    Operator(Operator),
    /// Constant, variable, or not-yet-classified function name.
    Identifier,
    /// Function bound to its argument; assigned by the compiler.
    Function(Builtin),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

/// One lexical unit of an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Classification.
    pub kind: TokenKind,
    /// Source text of the token.
    pub text: String,
    /// Byte offset into the source expression.
    pub source_index: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, source_index: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            source_index,
        }
    }

    /// Ends a value: number, identifier, or `)`.
    pub(crate) fn ends_value(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Number(_) | TokenKind::Identifier | TokenKind::RParen
        )
    }

    /// Starts a value: number, identifier, or `(`.
    pub(crate) fn starts_value(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Number(_) | TokenKind::Identifier | TokenKind::LParen
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Operator(op) => f.write_str(op.symbol()),
            _ => f.write_str(&self.text),
        }
    }
}

/// Split `input` into tokens.
///
/// Never fails: spaces, tabs and newlines are skipped and any unrecognized character becomes a
/// one-character identifier, leaving validity decisions to the compiler and evaluator.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if matches!(c, ' ' | '\t' | '\n') {
            continue;
        }

        let next_is_digit = chars.peek().is_some_and(|&(_, n)| n.is_ascii_digit());
        if c.is_ascii_digit() || (c == '.' && next_is_digit) {
            let mut end = start + c.len_utf8();
            while let Some(&(i, n)) = chars.peek() {
                if !(n.is_ascii_digit() || n == '.') {
                    break;
                }
                end = i + n.len_utf8();
                chars.next();
            }
            let text = &input[start..end];
            let value = text.parse::<f64>().unwrap_or(f64::NAN);
            out.push(Token::new(TokenKind::Number(value), text, start));
            continue;
        }

        if c.is_ascii_alphabetic() {
            let mut end = start + c.len_utf8();
            while let Some(&(i, n)) = chars.peek() {
                if !(n.is_ascii_alphanumeric() || n == '_') {
                    break;
                }
                end = i + n.len_utf8();
                chars.next();
            }
            out.push(Token::new(
                TokenKind::Identifier,
                &input[start..end],
                start,
            ));
            continue;
        }

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            _ => Operator::from_char(c).map_or(TokenKind::Identifier, TokenKind::Operator),
        };
        let end = start + c.len_utf8();
        out.push(Token::new(kind, &input[start..end], start));
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/expression/lexer.rs"]
mod tests;
