//! Fixed built-in function and constant tables.
//!
//! Every function is unary. The tables are `const` data; nothing registers new entries at
//! runtime.

use std::f64::consts::{E, PI};

/// A built-in unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `asin`
    Asin,
    /// `acos`
    Acos,
    /// `atan`
    Atan,
    /// `sqrt`
    Sqrt,
    /// `abs`
    Abs,
    /// `ln` (natural logarithm)
    Ln,
    /// `log` (base-10 logarithm)
    Log,
    /// `exp`
    Exp,
    /// `floor`
    Floor,
    /// `ceil`
    Ceil,
    /// `round` (half-way cases toward +inf)
    Round,
    /// `sign`
    Sign,
}

const FUNCTIONS: [(&str, Builtin); 15] = [
    ("sin", Builtin::Sin),
    ("cos", Builtin::Cos),
    ("tan", Builtin::Tan),
    ("asin", Builtin::Asin),
    ("acos", Builtin::Acos),
    ("atan", Builtin::Atan),
    ("sqrt", Builtin::Sqrt),
    ("abs", Builtin::Abs),
    ("ln", Builtin::Ln),
    ("log", Builtin::Log),
    ("exp", Builtin::Exp),
    ("floor", Builtin::Floor),
    ("ceil", Builtin::Ceil),
    ("round", Builtin::Round),
    ("sign", Builtin::Sign),
];

// Matched case-insensitively.
const CONSTANTS: [(&str, f64); 3] = [("pi", PI), ("π", PI), ("e", E)];

impl Builtin {
    /// Resolve a function name (case-sensitive).
    pub fn lookup(name: &str) -> Option<Self> {
        FUNCTIONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, b)| b)
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        FUNCTIONS
            .iter()
            .find(|(_, b)| *b == self)
            .map(|&(n, _)| n)
            .unwrap_or("?")
    }

    /// Apply the function with IEEE semantics (out-of-domain input gives NaN or infinity).
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
            Self::Ln => x.ln(),
            Self::Log => x.log10(),
            Self::Exp => x.exp(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::Round => round_half_up(x),
            Self::Sign => sign(x),
        }
    }
}

/// Value of a named constant, if `name` is one.
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, v)| v)
}

/// `true` when `name` is a built-in function.
pub fn is_function(name: &str) -> bool {
    Builtin::lookup(name).is_some()
}

fn round_half_up(x: f64) -> f64 {
    if x - x.floor() == 0.5 {
        x.ceil()
    } else {
        x.round()
    }
}

fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() { x } else { x.signum() }
}

/// `base ^ exponent`.
///
/// Unlike `f64::powf`, a base of magnitude one raised to a NaN or infinite exponent is NaN.
pub fn pow(base: f64, exponent: f64) -> f64 {
    if base.abs() == 1.0 && !exponent.is_finite() {
        return f64::NAN;
    }
    base.powf(exponent)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/builtins.rs"]
mod tests;
