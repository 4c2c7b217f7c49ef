//! Curves: one user-entered relation each, turned into a sample buffer.
//!
//! A curve is one of three kinds, each with its own payload:
//!
//! - [`CurveKind::ExplicitY`]: `y = f(x)`, sampled across the X range and
//!   clipped against the Y range.
//! - [`CurveKind::ExplicitX`]: `x = f(y)`, the mirror image.
//! - [`CurveKind::Points`]: literal integer pairs, drawn as given.
//!
//! Failures stay inside the curve. A failed parse or evaluation clears the
//! curve's function and buffer so that no stale line survives.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{CurveError, EvalError};
use crate::expr::{self, CompiledFn};
use crate::geom::Point;
use crate::points::parse_points;
use crate::range::{Axis, DynamicRange};
use crate::render::LineStyle;
use crate::sampler::{SamplerConfig, linspace};
use crate::view::Viewport;

static CURVE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveId(u64);

impl CurveId {
    fn next() -> Self {
        Self(CURVE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Curve kind without payload, used to create curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    /// `y = f(x)`
    ExplicitY,
    /// `x = f(y)`
    ExplicitX,
    /// Literal point list.
    Points,
}

impl CurveType {
    /// Default row label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::ExplicitY => "y =",
            Self::ExplicitX => "x =",
            Self::Points => "points",
        }
    }
}

/// Function-backed curve payload.
#[derive(Debug, Clone, Default)]
pub struct FunctionCurve {
    function: Option<CompiledFn>,
    /// X axis limits.
    pub lim_x: DynamicRange,
    /// Y axis limits.
    pub lim_y: DynamicRange,
}

impl FunctionCurve {
    /// Access the compiled function, if any.
    pub fn function(&self) -> Option<&CompiledFn> {
        self.function.as_ref()
    }

    fn limits(&self, axis: Axis) -> &DynamicRange {
        match axis {
            Axis::X => &self.lim_x,
            Axis::Y => &self.lim_y,
        }
    }

    /// Sample the function along `domain_axis` and clip on the other axis.
    ///
    /// Returned pairs are `(domain, value)`; values out of range or not
    /// finite are replaced with NaN.
    fn sample(
        &self,
        domain_axis: Axis,
        sampler: &SamplerConfig,
    ) -> Result<Vec<(f64, f64)>, EvalError> {
        let Some(function) = &self.function else {
            return Ok(Vec::new());
        };
        let domain_range = self.limits(domain_axis);
        let (Some(min), Some(max)) = (domain_range.min_value(), domain_range.max_value()) else {
            return Err(EvalError::UnboundedDomain { axis: domain_axis });
        };
        if !(min.is_finite() && max.is_finite()) {
            return Err(EvalError::NonFiniteDomain { axis: domain_axis });
        }

        let count = sampler.sample_count(min, max);
        log::debug!("sampling {domain_axis} in [{min}, {max}] with {count} points");

        let clip = match domain_axis {
            Axis::X => &self.lim_y,
            Axis::Y => &self.lim_x,
        };
        let domain = linspace(min, max, count);
        let values = function.eval_many(&domain);
        Ok(domain
            .into_iter()
            .zip(values)
            .map(|(d, v)| {
                let v = if v.is_finite() && clip.in_range(v) {
                    v
                } else {
                    f64::NAN
                };
                (d, v)
            })
            .collect())
    }
}

/// Point-list curve payload.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<(i64, i64)>,
}

impl PointSet {
    /// Access the stored points in insertion order.
    pub fn points(&self) -> &[(i64, i64)] {
        &self.points
    }

    /// Replace the stored points.
    pub fn set_points(&mut self, points: Vec<(i64, i64)>) {
        self.points = points;
    }
}

/// Kind-specific curve state.
#[derive(Debug, Clone)]
pub enum CurveKind {
    /// `y = f(x)`
    ExplicitY(FunctionCurve),
    /// `x = f(y)`
    ExplicitX(FunctionCurve),
    /// Literal point list.
    Points(PointSet),
}

impl CurveKind {
    fn empty(curve_type: CurveType) -> Self {
        match curve_type {
            CurveType::ExplicitY => Self::ExplicitY(FunctionCurve::default()),
            CurveType::ExplicitX => Self::ExplicitX(FunctionCurve::default()),
            CurveType::Points => Self::Points(PointSet::default()),
        }
    }

    /// Payload-free kind tag.
    pub fn curve_type(&self) -> CurveType {
        match self {
            Self::ExplicitY(_) => CurveType::ExplicitY,
            Self::ExplicitX(_) => CurveType::ExplicitX,
            Self::Points(_) => CurveType::Points,
        }
    }
}

/// A curve with its styling and current sample buffer.
#[derive(Debug, Clone)]
pub struct Curve {
    id: CurveId,
    label: String,
    style: LineStyle,
    kind: CurveKind,
    samples: Vec<Point>,
    generation: u64,
}

impl Curve {
    /// Create an empty curve with fully dynamic limits.
    pub fn new(curve_type: CurveType, style: LineStyle) -> Self {
        Self {
            id: CurveId::next(),
            label: curve_type.label().to_string(),
            style,
            kind: CurveKind::empty(curve_type),
            samples: Vec::new(),
            generation: 0,
        }
    }

    /// Access the curve identifier.
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Access the curve label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the curve label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Access the line style.
    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// Replace the line style.
    pub fn set_style(&mut self, style: LineStyle) {
        self.style = style;
    }

    /// Access the kind-specific state.
    pub fn kind(&self) -> &CurveKind {
        &self.kind
    }

    /// Access the current sample buffer. NaN coordinates are gap markers.
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Buffer generation, bumped whenever the buffer is replaced or cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Sample buffer split into X and Y lists.
    pub fn xy_lists(&self) -> (Vec<f64>, Vec<f64>) {
        self.samples.iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Check whether the curve has something to draw from.
    pub fn is_defined(&self) -> bool {
        match &self.kind {
            CurveKind::ExplicitY(f) | CurveKind::ExplicitX(f) => f.function.is_some(),
            CurveKind::Points(set) => !set.points.is_empty(),
        }
    }

    /// Pin or release limits on one axis. Point lists have no limits.
    ///
    /// Returns false when the curve kind carries no limits.
    pub fn set_limits(&mut self, axis: Axis, range: DynamicRange) -> bool {
        match &mut self.kind {
            CurveKind::ExplicitY(f) | CurveKind::ExplicitX(f) => {
                match axis {
                    Axis::X => f.lim_x = range,
                    Axis::Y => f.lim_y = range,
                }
                true
            }
            CurveKind::Points(_) => false,
        }
    }

    /// Access the limits on one axis, if the curve kind has them.
    pub fn limits(&self, axis: Axis) -> Option<&DynamicRange> {
        match &self.kind {
            CurveKind::ExplicitY(f) | CurveKind::ExplicitX(f) => Some(f.limits(axis)),
            CurveKind::Points(_) => None,
        }
    }

    /// Feed the viewport into the dynamic bounds.
    pub fn update_limits(&mut self, viewport: Viewport) {
        if let CurveKind::ExplicitY(f) | CurveKind::ExplicitX(f) = &mut self.kind {
            f.lim_x.update(viewport.x.min, viewport.x.max);
            f.lim_y.update(viewport.y.min, viewport.y.max);
        }
    }

    /// Parse new input text for this curve.
    ///
    /// On a parse failure the previous function and buffer are discarded.
    pub fn process_text(&mut self, text: &str) -> Result<(), CurveError> {
        let result = match &mut self.kind {
            CurveKind::ExplicitY(f) => set_function(f, text, "x"),
            CurveKind::ExplicitX(f) => set_function(f, text, "y"),
            CurveKind::Points(set) => {
                set.set_points(parse_points(text));
                Ok(())
            }
        };
        if result.is_err() {
            self.clear_samples();
        }
        result
    }

    /// Rebuild the sample buffer from the current function and limits.
    ///
    /// A curve without a function draws nothing. An evaluation failure
    /// clears the function and the buffer.
    pub fn draw(&mut self, sampler: &SamplerConfig) -> Result<&[Point], CurveError> {
        let result: Result<Vec<Point>, EvalError> = match &mut self.kind {
            CurveKind::ExplicitY(f) => sample_or_reset(f, Axis::X, sampler)
                .map(|pairs| pairs.into_iter().map(|(x, y)| Point::new(x, y)).collect()),
            CurveKind::ExplicitX(f) => sample_or_reset(f, Axis::Y, sampler)
                .map(|pairs| pairs.into_iter().map(|(y, x)| Point::new(x, y)).collect()),
            CurveKind::Points(set) => Ok(set
                .points
                .iter()
                .map(|&(x, y)| Point::new(x as f64, y as f64))
                .collect()),
        };
        match result {
            Ok(samples) => {
                self.replace_samples(samples);
                Ok(&self.samples)
            }
            Err(err) => {
                self.clear_samples();
                Err(err.into())
            }
        }
    }

    fn replace_samples(&mut self, samples: Vec<Point>) {
        log::trace!("curve {:?}: {} samples", self.id, samples.len());
        self.samples = samples;
        self.generation += 1;
    }

    fn clear_samples(&mut self) {
        self.samples.clear();
        self.generation += 1;
    }
}

fn set_function(curve: &mut FunctionCurve, text: &str, variable: &str) -> Result<(), CurveError> {
    match expr::compile(text, variable) {
        Ok(function) => {
            curve.function = Some(function);
            Ok(())
        }
        Err(err) => {
            curve.function = None;
            Err(err.into())
        }
    }
}

fn sample_or_reset(
    curve: &mut FunctionCurve,
    domain_axis: Axis,
    sampler: &SamplerConfig,
) -> Result<Vec<(f64, f64)>, EvalError> {
    curve.sample(domain_axis, sampler).inspect_err(|_| {
        curve.function = None;
    })
}
