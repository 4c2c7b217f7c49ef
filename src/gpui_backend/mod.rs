//! GPUI integration for gpui_curves.
//!
//! Hosts own the window, input rows, and event wiring. They call the
//! [`Plot`](crate::plot::Plot) interaction methods from their handlers and
//! paint the result with [`paint_plot`] during prepaint/paint.

mod paint;

pub use paint::paint_plot;
