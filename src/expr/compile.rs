//! Name resolution and evaluation of parsed expressions.

use crate::error::ParseError;
use crate::expr::ast::{BinaryOp, Expr};
use crate::expr::library::{self, Function};

/// Resolved expression node with library calls bound to function pointers.
#[derive(Debug, Clone)]
enum Node {
    Number(f64),
    Var,
    Neg(Box<Node>),
    Binary(BinaryOp, Box<Node>, Box<Node>),
    Unary(fn(f64) -> f64, Box<Node>),
    Binary2(fn(f64, f64) -> f64, Box<Node>, Box<Node>),
}

impl Node {
    fn eval(&self, var: f64) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Var => var,
            Self::Neg(inner) => -inner.eval(var),
            Self::Binary(op, lhs, rhs) => op.apply(lhs.eval(var), rhs.eval(var)),
            Self::Unary(f, arg) => f(arg.eval(var)),
            Self::Binary2(f, a, b) => f(a.eval(var), b.eval(var)),
        }
    }
}

/// A compiled formula.
///
/// Arity is 1 when the free variable occurs in the formula, 0 otherwise.
/// A constant is evaluated once at compile time and broadcast on sampling.
#[derive(Debug, Clone)]
pub struct CompiledFn {
    variable: String,
    body: Body,
}

#[derive(Debug, Clone)]
enum Body {
    Constant(f64),
    Unary(Node),
}

impl CompiledFn {
    /// Resolve `expr` against the library with `variable` as the free name.
    pub fn from_expr(expr: &Expr, variable: &str) -> Result<Self, ParseError> {
        let node = resolve(expr, variable)?;
        let body = if expr.free_symbols().contains(variable) {
            Body::Unary(node)
        } else {
            Body::Constant(node.eval(f64::NAN))
        };
        Ok(Self {
            variable: variable.to_string(),
            body,
        })
    }

    /// Number of arguments the function takes.
    pub fn arity(&self) -> usize {
        match self.body {
            Body::Constant(_) => 0,
            Body::Unary(_) => 1,
        }
    }

    /// Name of the free variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Evaluate at a single point. Constants ignore the argument.
    pub fn eval(&self, value: f64) -> f64 {
        match &self.body {
            Body::Constant(c) => *c,
            Body::Unary(node) => node.eval(value),
        }
    }

    /// Evaluate elementwise over a domain, or broadcast a constant.
    pub fn eval_many(&self, domain: &[f64]) -> Vec<f64> {
        match &self.body {
            Body::Constant(c) => vec![*c; domain.len()],
            Body::Unary(node) => domain.iter().map(|&v| node.eval(v)).collect(),
        }
    }
}

fn resolve(expr: &Expr, variable: &str) -> Result<Node, ParseError> {
    Ok(match expr {
        Expr::Number(n) => Node::Number(*n),
        Expr::Symbol(name) if name == variable => Node::Var,
        Expr::Symbol(name) => match library::constant(name) {
            Some(value) => Node::Number(value),
            None => return Err(ParseError::UnknownSymbol { name: name.clone() }),
        },
        Expr::Neg(inner) => Node::Neg(Box::new(resolve(inner, variable)?)),
        Expr::Binary(op, lhs, rhs) => Node::Binary(
            *op,
            Box::new(resolve(lhs, variable)?),
            Box::new(resolve(rhs, variable)?),
        ),
        Expr::Call { name, args } => {
            let function = library::function(name)
                .ok_or_else(|| ParseError::UnknownFunction { name: name.clone() })?;
            if args.len() != function.arity() {
                return Err(ParseError::Arity {
                    name: name.clone(),
                    expected: function.arity(),
                    found: args.len(),
                });
            }
            match function {
                Function::Unary(f) => Node::Unary(f, Box::new(resolve(&args[0], variable)?)),
                Function::Binary(f) => Node::Binary2(
                    f,
                    Box::new(resolve(&args[0], variable)?),
                    Box::new(resolve(&args[1], variable)?),
                ),
            }
        }
    })
}
