/// First syntax error found while compiling an expression.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error at {source_index}: {message}")]
pub struct ParseError {
    /// Human-readable description.
    pub message: String,
    /// Byte offset of the offending token in the source text.
    pub source_index: usize,
}

impl ParseError {
    pub(crate) fn new(source_index: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source_index,
        }
    }

    pub(crate) fn mismatched_paren(source_index: usize) -> Self {
        Self::new(source_index, "mismatched parenthesis")
    }

    pub(crate) fn multiple_arguments(source_index: usize) -> Self {
        Self::new(source_index, "multi-argument functions are not supported")
    }
}

/// Why an expression produced no value ("undefined").
///
/// Math-domain problems (division by zero, `sqrt(-1)`, ...) are not errors: they evaluate to
/// IEEE infinities or NaN. Only syntax and reference problems end up here.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression carries a compile error.
    #[error("expression has a syntax error: {0}")]
    Compile(ParseError),

    /// An identifier is neither a constant nor a bound variable.
    #[error("unresolved identifier '{name}' at {source_index}")]
    UnresolvedIdentifier {
        /// Identifier text as written.
        name: String,
        /// Byte offset of the identifier.
        source_index: usize,
    },

    /// An operator or function found fewer operands than it needs.
    #[error("missing operand for '{op}' at {source_index}")]
    StackUnderflow {
        /// Operator or function text.
        op: String,
        /// Byte offset of the operator.
        source_index: usize,
    },

    /// Evaluation finished with a stack depth other than one.
    #[error("expression left {depth} values on the stack")]
    UnbalancedStack {
        /// Final stack depth.
        depth: usize,
    },

    /// A token that never appears in well-formed postfix (paren, comma).
    #[error("unexpected token '{text}' at {source_index}")]
    UnexpectedToken {
        /// Token text.
        text: String,
        /// Byte offset of the token.
        source_index: usize,
    },
}
