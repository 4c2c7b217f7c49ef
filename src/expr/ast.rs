//! Parsed expression tree, before names are resolved against the library.

use std::collections::BTreeSet;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a ^ b` or `a ** b`
    Pow,
}

impl BinaryOp {
    /// Binding power used by the Pratt parser.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 10,
            Self::Mul | Self::Div => 20,
            Self::Pow => 30,
        }
    }

    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// Expression tree produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Bare identifier: a constant or the free variable.
    Symbol(String),
    /// Unary negation.
    Neg(Box<Expr>),
    /// Binary operation.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// Call of a library function.
    Call {
        /// Function name as written.
        name: String,
        /// Argument expressions.
        args: Vec<Expr>,
    },
}

impl Expr {
    pub(crate) fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Names referenced as bare symbols anywhere in the tree.
    ///
    /// Call names are not symbols.
    pub fn free_symbols(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Self::Number(_) => {}
            Self::Symbol(name) => {
                out.insert(name.as_str());
            }
            Self::Neg(inner) => inner.collect_symbols(out),
            Self::Binary(_, lhs, rhs) => {
                lhs.collect_symbols(out);
                rhs.collect_symbols(out);
            }
            Self::Call { args, .. } => {
                for arg in args {
                    arg.collect_symbols(out);
                }
            }
        }
    }
}
