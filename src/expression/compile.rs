use crate::expression::builtins::Builtin;
use crate::expression::error::ParseError;
use crate::expression::lexer::{Operator, Token, TokenKind, tokenize};

/// An expression compiled to postfix order.
///
/// Compilation never fails outright: the first syntax error is recorded in [`Self::error`] and
/// `postfix` holds whatever was emitted before it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    /// Tokens in evaluation order.
    pub postfix: Vec<Token>,
    /// First syntax error, if any.
    pub error: Option<ParseError>,
}

impl CompiledExpression {
    /// `true` when compilation found no syntax error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Space-separated postfix listing (`2 x * 1 +`).
    pub fn postfix_text(&self) -> String {
        let parts: Vec<String> = self.postfix.iter().map(Token::to_string).collect();
        parts.join(" ")
    }
}

/// Insert a synthetic `*` between adjacent value tokens (`2x`, `x(x+1)`, `(a)(b)`).
///
/// A built-in function name followed by `(` is a call and is left alone. The synthetic token
/// takes the source offset of the token to its right.
pub fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len() * 2);
    for tok in tokens {
        if let Some(prev) = out.last() {
            let is_call = prev.kind == TokenKind::Identifier
                && tok.kind == TokenKind::LParen
                && Builtin::lookup(&prev.text).is_some();
            if prev.ends_value() && tok.starts_value() && !is_call {
                out.push(Token::new(
                    TokenKind::Operator(Operator::Mul),
                    "*",
                    tok.source_index,
                ));
            }
        }
        out.push(tok);
    }
    out
}

/// A `-` here has no left operand.
fn starts_operand(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(t) => matches!(
            t.kind,
            TokenKind::Operator(_) | TokenKind::Comma | TokenKind::LParen
        ),
    }
}

/// Compile `text` to postfix using operator-precedence (shunting-yard) parsing.
pub fn compile(text: &str) -> CompiledExpression {
    let tokens = insert_implicit_multiplication(tokenize(text));
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut error = None;

    for (i, tok) in tokens.iter().enumerate() {
        let previous = i.checked_sub(1).map(|j| &tokens[j]);
        match tok.kind {
            TokenKind::Number(_) | TokenKind::Function(_) => output.push(tok.clone()),
            TokenKind::Identifier => match Builtin::lookup(&tok.text) {
                Some(f) => stack.push(Token::new(
                    TokenKind::Function(f),
                    tok.text.clone(),
                    tok.source_index,
                )),
                None => output.push(tok.clone()),
            },
            TokenKind::Comma => {
                error = Some(ParseError::multiple_arguments(tok.source_index));
                break;
            }
            TokenKind::Operator(op) => {
                let op = if op == Operator::Sub && starts_operand(previous) {
                    Operator::Neg
                } else {
                    op
                };
                while let Some(top) = stack.last() {
                    let TokenKind::Operator(top_op) = top.kind else {
                        break;
                    };
                    let pops = if op.is_right_associative() {
                        op.precedence() < top_op.precedence()
                    } else {
                        op.precedence() <= top_op.precedence()
                    };
                    if !pops {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(Token::new(
                    TokenKind::Operator(op),
                    tok.text.clone(),
                    tok.source_index,
                ));
            }
            TokenKind::LParen => stack.push(tok.clone()),
            TokenKind::RParen => {
                while stack.last().is_some_and(|t| t.kind != TokenKind::LParen) {
                    output.extend(stack.pop());
                }
                if stack.pop().is_none() {
                    error = Some(ParseError::mismatched_paren(tok.source_index));
                    break;
                }
                // A function directly under the matched `(` owns this group as its argument.
                if stack
                    .last()
                    .is_some_and(|t| matches!(t.kind, TokenKind::Function(_)))
                {
                    output.extend(stack.pop());
                }
            }
        }
    }

    if error.is_none() {
        while let Some(tok) = stack.pop() {
            if tok.kind == TokenKind::LParen {
                error = Some(ParseError::mismatched_paren(tok.source_index));
                break;
            }
            output.push(tok);
        }
    }

    CompiledExpression {
        postfix: output,
        error,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/compile.rs"]
mod tests;
