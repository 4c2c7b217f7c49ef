//! Error types for compilation, evaluation, and configuration.

use thiserror::Error;

use crate::curve::CurveId;
use crate::range::Axis;
use crate::view::Viewport;

/// Errors raised while turning formula text into a callable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The formula is blank.
    #[error("empty formula")]
    Empty,
    /// A character that starts no token.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar {
        /// Offending character.
        ch: char,
        /// Byte offset into the input.
        pos: usize,
    },
    /// A numeric literal that does not parse as a float.
    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber {
        /// Literal text.
        text: String,
        /// Byte offset into the input.
        pos: usize,
    },
    /// A token that does not fit the grammar at this point.
    #[error("expected {expected}, found {found} at position {pos}")]
    UnexpectedToken {
        /// What the parser wanted.
        expected: &'static str,
        /// What it got.
        found: String,
        /// Byte offset into the input.
        pos: usize,
    },
    /// Input ended in the middle of an expression.
    #[error("unexpected end of formula")]
    UnexpectedEnd,
    /// A call to a name missing from the function library.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// Function name.
        name: String,
    },
    /// A free identifier that is neither a constant nor the curve variable.
    #[error("unknown symbol '{name}'")]
    UnknownSymbol {
        /// Symbol name.
        name: String,
    },
    /// A library call with the wrong number of arguments.
    #[error("'{name}' takes {expected} argument(s), got {found}")]
    Arity {
        /// Function name.
        name: String,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },
    /// Nesting or operator chains deeper than the parser accepts.
    #[error("formula nests deeper than {limit} levels at position {pos}")]
    TooDeep {
        /// Maximum accepted depth.
        limit: usize,
        /// Byte offset into the input.
        pos: usize,
    },
}

/// Errors raised while sampling a compiled function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The sampling axis is missing a bound.
    #[error("{axis} range has an unset bound")]
    UnboundedDomain {
        /// Sampling axis.
        axis: Axis,
    },
    /// The sampling axis has a NaN or infinite bound.
    #[error("{axis} range has a non-finite bound")]
    NonFiniteDomain {
        /// Sampling axis.
        axis: Axis,
    },
}

/// Failure of a single curve operation.
///
/// Curve failures are isolated: the owning plot records them and keeps
/// rendering sibling curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// The curve text failed to compile.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The compiled function failed to sample.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// No curve with this identifier exists.
    #[error("no curve with id {0:?}")]
    Missing(CurveId),
}

/// Rejected viewport update.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid viewport x=[{xmin}, {xmax}] y=[{ymin}, {ymax}]")]
pub struct ViewportError {
    /// Requested X minimum.
    pub xmin: f64,
    /// Requested X maximum.
    pub xmax: f64,
    /// Requested Y minimum.
    pub ymin: f64,
    /// Requested Y maximum.
    pub ymax: f64,
}

impl From<Viewport> for ViewportError {
    fn from(viewport: Viewport) -> Self {
        Self {
            xmin: viewport.x.min,
            xmax: viewport.x.max,
            ymin: viewport.y.min,
            ymax: viewport.y.max,
        }
    }
}

/// Errors raised while loading a [`PlotConfig`](crate::config::PlotConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the config schema.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    /// Sampler bounds are inverted.
    #[error("min_points ({min}) exceeds max_points ({max})")]
    PointBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A scalar setting is outside its allowed domain.
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The home viewport is degenerate.
    #[error(transparent)]
    Home(#[from] ViewportError),
}
