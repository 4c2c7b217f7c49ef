//! Interaction helpers for panning and zooming.
//!
//! Every helper derives the new viewport from the current one in a single
//! step, and a valid input viewport always yields a valid output.

use crate::geom::ScreenPoint;
use crate::transform::Transform;
use crate::view::Viewport;

/// Mouse wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel up: zoom in.
    Up,
    /// Wheel down: zoom out.
    Down,
}

impl ScrollDirection {
    /// Scale factor for one wheel step of size `step`.
    pub fn factor(self, step: f64) -> f64 {
        match self {
            Self::Up => 1.0 / step,
            Self::Down => step,
        }
    }
}

/// Zoom a viewport about its center.
///
/// Factors below 1 zoom in. A non-positive or non-finite factor is ignored,
/// and so is a result whose span collapses to zero.
pub fn zoom_viewport(viewport: Viewport, factor_x: f64, factor_y: f64) -> Viewport {
    let next = Viewport::new(viewport.x.scaled(factor_x), viewport.y.scaled(factor_y));
    if next.is_valid() { next } else { viewport }
}

/// Pan a viewport by an offset in data units.
pub fn pan_viewport(viewport: Viewport, dx: f64, dy: f64) -> Viewport {
    let next = Viewport::new(viewport.x.shifted(dx), viewport.y.shifted(dy));
    if next.is_valid() { next } else { viewport }
}

/// Pan a viewport so that content follows a pixel drag.
pub fn pan_by_pixels(viewport: Viewport, delta_pixels: ScreenPoint, transform: &Transform) -> Viewport {
    let origin = transform.screen_to_data(ScreenPoint::new(0.0, 0.0));
    let shifted = transform.screen_to_data(delta_pixels);
    pan_viewport(viewport, origin.x - shifted.x, origin.y - shifted.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ScreenRect;

    #[test]
    fn scroll_steps_are_inverse() {
        let start = Viewport::default();
        let step = 1.05;
        let zoomed = zoom_viewport(
            start,
            ScrollDirection::Up.factor(step),
            ScrollDirection::Up.factor(step),
        );
        assert!(zoomed.x.span() < start.x.span());
        let back = zoom_viewport(
            zoomed,
            ScrollDirection::Down.factor(step),
            ScrollDirection::Down.factor(step),
        );
        assert!((back.x.min - start.x.min).abs() < 1e-9);
        assert!((back.y.max - start.y.max).abs() < 1e-9);
    }

    #[test]
    fn zoom_keeps_center_and_order() {
        let start = Viewport::from_bounds(2.0, 6.0, -1.0, 3.0);
        let zoomed = zoom_viewport(start, 0.25, 4.0);
        assert!((zoomed.x.center() - 4.0).abs() < 1e-12);
        assert!((zoomed.y.center() - 1.0).abs() < 1e-12);
        assert!(zoomed.x.min < zoomed.x.max);
        assert!(zoomed.y.min < zoomed.y.max);
    }

    #[test]
    fn invalid_zoom_is_ignored() {
        let start = Viewport::default();
        assert_eq!(zoom_viewport(start, 0.0, 1.0), start);
        assert_eq!(zoom_viewport(start, -1.0, -1.0), start);
    }

    #[test]
    fn pixel_drag_moves_content_with_cursor() {
        let viewport = Viewport::from_bounds(0.0, 10.0, 0.0, 10.0);
        let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 100.0));
        let transform = Transform::new(viewport, screen).expect("valid transform");
        let panned = pan_by_pixels(viewport, ScreenPoint::new(10.0, 10.0), &transform);
        assert!((panned.x.min - -1.0).abs() < 1e-9);
        assert!((panned.y.min - 1.0).abs() < 1e-9);
    }
}
