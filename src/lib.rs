//! gpui_curves turns formula text into curves for a pannable, zoomable plot.
//! Curves are resampled for each viewport at a density that grows as the
//! view narrows, and samples outside the configured limits become gaps.

#![forbid(unsafe_code)]

pub mod config;
pub mod curve;
pub mod error;
pub mod expr;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod interaction;
pub mod plot;
pub mod points;
pub mod range;
pub mod render;
pub mod sampler;
pub mod style;
pub mod transform;
pub mod view;

pub use config::PlotConfig;
pub use curve::{Curve, CurveId, CurveKind, CurveType, FunctionCurve, PointSet};
pub use error::{ConfigError, CurveError, EvalError, ParseError, ViewportError};
pub use expr::{CompiledFn, compile};
pub use geom::{Point, ScreenPoint, ScreenRect};
#[cfg(feature = "gpui")]
pub use gpui_backend::paint_plot;
pub use interaction::ScrollDirection;
pub use plot::{Plot, PlotBuilder, RedrawReport};
pub use points::parse_points;
pub use range::{Axis, Bound, DynamicRange};
pub use render::{Color, LineSegment, LineStyle, RenderCommand, RenderList};
pub use sampler::{SamplerConfig, sample_count};
pub use style::Palette;
pub use transform::Transform;
pub use view::{Range, Viewport};
