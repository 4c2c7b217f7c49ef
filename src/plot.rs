//! Plot surface: the ordered curve collection and the live viewport.
//!
//! Every event that changes what is visible (pan, zoom, home, explicit
//! limits, submitting text) runs one redraw pass. A pass feeds the viewport
//! into each curve's dynamic limits and redraws it. A failing curve is
//! cleared and reported; the pass continues with the next one.

use crate::config::PlotConfig;
use crate::curve::{Curve, CurveId, CurveType};
use crate::error::{ConfigError, CurveError, ViewportError};
use crate::geom::ScreenRect;
use crate::interaction::{ScrollDirection, pan_viewport, zoom_viewport};
use crate::render::{LineStyle, RenderCommand, RenderList, build_line_segments};
use crate::style::Palette;
use crate::transform::Transform;
use crate::view::Viewport;

/// Outcome of one redraw pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedrawReport {
    /// Curves whose buffer was rebuilt.
    pub drawn: usize,
    /// Curves that failed, in collection order.
    pub failures: Vec<(CurveId, CurveError)>,
}

impl RedrawReport {
    /// Check whether every curve drew cleanly.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Headless plot surface.
#[derive(Debug, Clone)]
pub struct Plot {
    config: PlotConfig,
    palette: Palette,
    viewport: Viewport,
    curves: Vec<Curve>,
    line_width: f32,
}

impl Plot {
    /// Create a plot with default configuration.
    pub fn new() -> Self {
        PlotBuilder::default().assemble()
    }

    /// Start building a plot with custom configuration.
    pub fn builder() -> PlotBuilder {
        PlotBuilder::default()
    }

    /// Access the configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Access the current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access all curves in display order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Look up a curve.
    pub fn curve(&self, id: CurveId) -> Option<&Curve> {
        self.curves.iter().find(|curve| curve.id() == id)
    }

    /// Look up a curve mutably.
    pub fn curve_mut(&mut self, id: CurveId) -> Option<&mut Curve> {
        self.curves.iter_mut().find(|curve| curve.id() == id)
    }

    /// Append an empty curve with the next palette color.
    pub fn add_curve(&mut self, curve_type: CurveType) -> CurveId {
        let style = LineStyle {
            color: self.palette.next_color(),
            width: self.line_width,
        };
        let curve = Curve::new(curve_type, style);
        let id = curve.id();
        self.curves.push(curve);
        id
    }

    /// Remove a curve and its buffer.
    pub fn remove_curve(&mut self, id: CurveId) -> Option<Curve> {
        let index = self.curves.iter().position(|curve| curve.id() == id)?;
        Some(self.curves.remove(index))
    }

    /// Apply new input text to one curve and draw it.
    ///
    /// The curve's limits are refreshed from the viewport first. On failure
    /// the curve is left empty; other curves are not touched.
    pub fn submit(&mut self, id: CurveId, text: &str) -> Result<(), CurveError> {
        let viewport = self.viewport;
        let sampler = self.config.sampler;
        let curve = self.curve_mut(id).ok_or(CurveError::Missing(id))?;
        curve.update_limits(viewport);
        let result = curve
            .process_text(text)
            .and_then(|()| curve.draw(&sampler).map(|_| ()));
        if let Err(err) = &result {
            log::warn!("curve {id:?} rejected {text:?}: {err}");
        }
        result
    }

    /// Refresh every curve against the current viewport.
    pub fn redraw(&mut self) -> RedrawReport {
        let viewport = self.viewport;
        let sampler = self.config.sampler;
        let mut report = RedrawReport::default();
        for curve in &mut self.curves {
            let id = curve.id();
            curve.update_limits(viewport);
            match curve.draw(&sampler) {
                Ok(_) => report.drawn += 1,
                Err(err) => {
                    log::warn!("curve {id:?} failed to draw: {err}");
                    report.failures.push((id, err));
                }
            }
        }
        log::debug!(
            "redraw x=[{}, {}] y=[{}, {}]: {} drawn, {} failed",
            viewport.x.min,
            viewport.x.max,
            viewport.y.min,
            viewport.y.max,
            report.drawn,
            report.failures.len()
        );
        report
    }

    /// Set explicit axis limits and redraw.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<RedrawReport, ViewportError> {
        if !viewport.is_valid() {
            return Err(viewport.into());
        }
        self.viewport = viewport;
        Ok(self.redraw())
    }

    /// Return to the configured home view and redraw.
    pub fn home(&mut self) -> RedrawReport {
        self.viewport = self.config.home;
        self.redraw()
    }

    /// Zoom one wheel step about the viewport center and redraw.
    pub fn scroll(&mut self, direction: ScrollDirection) -> RedrawReport {
        let factor = direction.factor(self.config.zoom_step);
        self.zoom(factor)
    }

    /// Scale both axes about the viewport center and redraw.
    ///
    /// Factors below 1 zoom in; invalid factors leave the view unchanged.
    pub fn zoom(&mut self, factor: f64) -> RedrawReport {
        self.viewport = zoom_viewport(self.viewport, factor, factor);
        self.redraw()
    }

    /// Shift the view by an offset in data units and redraw.
    pub fn pan(&mut self, dx: f64, dy: f64) -> RedrawReport {
        self.viewport = pan_viewport(self.viewport, dx, dy);
        self.redraw()
    }

    /// Project every curve buffer into `screen`.
    pub fn render_list(&self, screen: ScreenRect) -> RenderList {
        let mut list = RenderList::new();
        let Some(transform) = Transform::new(self.viewport, screen) else {
            return list;
        };
        list.push(RenderCommand::ClipRect(screen));
        for curve in &self.curves {
            let mut segments = Vec::new();
            build_line_segments(curve.samples(), &transform, screen, &mut segments);
            if !segments.is_empty() {
                list.push(RenderCommand::LineSegments {
                    segments,
                    style: curve.style(),
                });
            }
        }
        list.push(RenderCommand::ClipEnd);
        list
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a plot before construction.
#[derive(Debug, Default)]
pub struct PlotBuilder {
    config: PlotConfig,
    palette: Palette,
    line_width: Option<f32>,
}

impl PlotBuilder {
    /// Set the plot configuration.
    pub fn config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the palette used for new curves.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the stroke width used for new curves.
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Validate the configuration and build the plot at its home view.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration fails
    /// [`PlotConfig::validate`].
    pub fn build(self) -> Result<Plot, ConfigError> {
        self.config.validate()?;
        Ok(self.assemble())
    }

    fn assemble(self) -> Plot {
        Plot {
            viewport: self.config.home,
            config: self.config,
            palette: self.palette,
            curves: Vec::new(),
            line_width: self.line_width.unwrap_or(LineStyle::default().width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ScreenPoint;
    use crate::sampler::SamplerConfig;

    fn small_plot() -> Plot {
        let config = PlotConfig {
            sampler: SamplerConfig {
                min_points: 20,
                max_points: 200,
                ..SamplerConfig::default()
            },
            ..PlotConfig::default()
        };
        Plot::builder().config(config).build().expect("valid config")
    }

    #[test]
    fn new_curves_take_palette_colors_in_order() {
        let mut plot = small_plot();
        let palette = Palette::default();
        let a = plot.add_curve(CurveType::ExplicitY);
        let b = plot.add_curve(CurveType::Points);
        let color_a = plot.curve(a).expect("curve a").style().color;
        let color_b = plot.curve(b).expect("curve b").style().color;
        assert_eq!(color_a, palette.colors()[0]);
        assert_eq!(color_b, palette.colors()[1]);
    }

    #[test]
    fn bad_curve_does_not_block_siblings() {
        let mut plot = small_plot();
        let good = plot.add_curve(CurveType::ExplicitY);
        let bad = plot.add_curve(CurveType::ExplicitY);
        let after = plot.add_curve(CurveType::ExplicitX);
        plot.submit(good, "x^2").expect("valid");
        assert!(plot.submit(bad, "x +* 2").is_err());
        plot.submit(after, "y").expect("valid");

        let report = plot.redraw();
        assert!(report.is_clean());
        assert_eq!(report.drawn, 3);
        assert!(!plot.curve(good).expect("good").samples().is_empty());
        assert!(plot.curve(bad).expect("bad").samples().is_empty());
        assert!(!plot.curve(after).expect("after").samples().is_empty());
    }

    #[test]
    fn scroll_up_refines_sampling() {
        let mut plot = small_plot();
        let id = plot.add_curve(CurveType::ExplicitY);
        plot.submit(id, "sin(x)").expect("valid");
        let before = plot.curve(id).expect("curve").samples().len();
        for _ in 0..10 {
            plot.scroll(ScrollDirection::Up);
        }
        let after = plot.curve(id).expect("curve").samples().len();
        assert!(after > before, "{after} <= {before}");
    }

    #[test]
    fn home_restores_configured_view() {
        let mut plot = small_plot();
        plot.pan(3.0, -2.0);
        plot.zoom(0.5);
        assert_ne!(plot.viewport(), plot.config().home);
        plot.home();
        assert_eq!(plot.viewport(), plot.config().home);
    }

    #[test]
    fn degenerate_limits_are_rejected() {
        let mut plot = small_plot();
        let before = plot.viewport();
        assert!(
            plot.set_viewport(Viewport::from_bounds(2.0, 2.0, -1.0, 1.0))
                .is_err()
        );
        assert_eq!(plot.viewport(), before);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let inverted = PlotConfig {
            sampler: SamplerConfig {
                min_points: 10,
                max_points: 5,
                ..SamplerConfig::default()
            },
            ..PlotConfig::default()
        };
        assert!(matches!(
            Plot::builder().config(inverted).build(),
            Err(ConfigError::PointBounds { min: 10, max: 5 })
        ));

        let flat_home = PlotConfig {
            home: Viewport::from_bounds(1.0, 1.0, -1.0, 1.0),
            ..PlotConfig::default()
        };
        assert!(matches!(
            Plot::builder().config(flat_home).build(),
            Err(ConfigError::Home(_))
        ));
        assert!(Plot::builder().build().is_ok());
        assert_eq!(Plot::new().viewport(), PlotConfig::default().home);
    }

    #[test]
    fn missing_curve_is_reported() {
        let mut plot = small_plot();
        let id = plot.add_curve(CurveType::ExplicitY);
        assert!(plot.remove_curve(id).is_some());
        assert_eq!(plot.submit(id, "x"), Err(CurveError::Missing(id)));
        assert!(plot.remove_curve(id).is_none());
    }

    #[test]
    fn render_list_skips_empty_curves() {
        let mut plot = small_plot();
        let drawn = plot.add_curve(CurveType::ExplicitY);
        plot.add_curve(CurveType::ExplicitY);
        plot.submit(drawn, "x").expect("valid");
        let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(200.0, 100.0));
        let list = plot.render_list(screen);
        let lines = list
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::LineSegments { .. }))
            .count();
        assert_eq!(lines, 1);
    }
}
