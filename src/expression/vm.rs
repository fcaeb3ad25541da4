use smallvec::SmallVec;

use crate::expression::builtins;
use crate::expression::compile::CompiledExpression;
use crate::expression::error::EvalError;
use crate::expression::lexer::{Operator, Token, TokenKind};

/// Variable bindings for one evaluation.
///
/// Lookup is exact (case-sensitive). Later bindings shadow earlier ones with the same name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings<'a> {
    vars: SmallVec<[(&'a str, f64); 4]>,
}

impl<'a> Bindings<'a> {
    /// No variables bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::set`].
    pub fn with(mut self, name: &'a str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Bind `name` to `value`.
    pub fn set(&mut self, name: &'a str, value: f64) {
        self.vars.push((name, value));
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Bindings<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

/// Evaluate `expr` against `vars`.
pub fn evaluate(expr: &CompiledExpression, vars: &Bindings<'_>) -> Result<f64, EvalError> {
    let mut stack = Vec::with_capacity(16);
    evaluate_with_stack(expr, &mut stack, |name| vars.get(name))
}

/// Evaluate `expr`, reusing `stack` across calls and resolving variables through `lookup`.
///
/// Constants (`pi`, `e`) are checked before `lookup`.
pub fn evaluate_with_stack(
    expr: &CompiledExpression,
    stack: &mut Vec<f64>,
    mut lookup: impl FnMut(&str) -> Option<f64>,
) -> Result<f64, EvalError> {
    if let Some(err) = &expr.error {
        return Err(EvalError::Compile(err.clone()));
    }
    stack.clear();

    for tok in &expr.postfix {
        match tok.kind {
            TokenKind::Number(v) => stack.push(v),
            TokenKind::Identifier => {
                let v = builtins::constant(&tok.text)
                    .or_else(|| lookup(&tok.text))
                    .ok_or_else(|| EvalError::UnresolvedIdentifier {
                        name: tok.text.clone(),
                        source_index: tok.source_index,
                    })?;
                stack.push(v);
            }
            TokenKind::Operator(Operator::Neg) => {
                let v = pop(stack, tok)?;
                stack.push(-v);
            }
            TokenKind::Operator(op) => {
                let b = pop(stack, tok)?;
                let a = pop(stack, tok)?;
                stack.push(apply_binary(op, a, b));
            }
            TokenKind::Function(f) => {
                let x = pop(stack, tok)?;
                stack.push(f.apply(x));
            }
            TokenKind::LParen | TokenKind::RParen | TokenKind::Comma => {
                return Err(EvalError::UnexpectedToken {
                    text: tok.text.clone(),
                    source_index: tok.source_index,
                });
            }
        }
    }

    match stack.as_slice() {
        [v] => Ok(*v),
        other => Err(EvalError::UnbalancedStack { depth: other.len() }),
    }
}

fn pop(stack: &mut Vec<f64>, tok: &Token) -> Result<f64, EvalError> {
    stack.pop().ok_or_else(|| EvalError::StackUnderflow {
        op: tok.to_string(),
        source_index: tok.source_index,
    })
}

fn apply_binary(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a / b,
        Operator::Pow => builtins::pow(a, b),
        Operator::Neg => -b,
    }
}

/// Compile and evaluate in one step.
pub fn evaluate_text(text: &str, vars: &Bindings<'_>) -> Result<f64, EvalError> {
    evaluate(&crate::expression::compile::compile(text), vars)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/vm.rs"]
mod tests;
