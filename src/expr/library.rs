//! Numeric function library and named constants.
//!
//! Names follow numpy where numpy and the usual math spellings differ, and
//! both are accepted.

/// Library entry resolved from a call name.
#[derive(Clone, Copy)]
pub(crate) enum Function {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl Function {
    pub(crate) fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unary(_) => write!(f, "Function::Unary(..)"),
            Self::Binary(_) => write!(f, "Function::Binary(..)"),
        }
    }
}

/// Look up a function by name.
pub(crate) fn function(name: &str) -> Option<Function> {
    use Function::{Binary, Unary};
    let entry = match name {
        "sin" => Unary(f64::sin),
        "cos" => Unary(f64::cos),
        "tan" => Unary(f64::tan),
        "asin" | "arcsin" => Unary(f64::asin),
        "acos" | "arccos" => Unary(f64::acos),
        "atan" | "arctan" => Unary(f64::atan),
        "sinh" => Unary(f64::sinh),
        "cosh" => Unary(f64::cosh),
        "tanh" => Unary(f64::tanh),
        "asinh" | "arcsinh" => Unary(f64::asinh),
        "acosh" | "arccosh" => Unary(f64::acosh),
        "atanh" | "arctanh" => Unary(f64::atanh),
        "exp" => Unary(f64::exp),
        "log" | "ln" => Unary(f64::ln),
        "log10" => Unary(f64::log10),
        "log2" => Unary(f64::log2),
        "sqrt" => Unary(f64::sqrt),
        "cbrt" => Unary(f64::cbrt),
        "abs" | "Abs" => Unary(f64::abs),
        "sign" => Unary(sign),
        "floor" => Unary(f64::floor),
        "ceil" => Unary(f64::ceil),
        "round" => Unary(f64::round_ties_even),
        "logb" => Binary(logb),
        "pow" => Binary(f64::powf),
        "atan2" | "arctan2" => Binary(f64::atan2),
        "hypot" => Binary(f64::hypot),
        "min" => Binary(nan_min),
        "max" => Binary(nan_max),
        "mod" => Binary(floor_mod),
        _ => return None,
    };
    Some(entry)
}

/// Look up a named constant.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" | "E" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}

/// Logarithm of `value` in an arbitrary `base`.
fn logb(value: f64, base: f64) -> f64 {
    value.ln() / base.ln()
}

fn sign(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        value
    } else {
        value.signum()
    }
}

// NaN-propagating, unlike f64::min/max.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

/// Remainder with the sign of the divisor.
fn floor_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}
