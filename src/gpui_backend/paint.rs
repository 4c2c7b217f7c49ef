use gpui::{Bounds, ContentMask, PathBuilder, Pixels, Window, point, px};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::plot::Plot;
use crate::render::{Color, LineSegment, LineStyle, RenderCommand};

/// Paint every curve buffer of `plot` inside `bounds`.
///
/// The plot should have been redrawn for its current viewport; this only
/// projects and strokes the existing buffers.
pub fn paint_plot(plot: &Plot, bounds: Bounds<Pixels>, window: &mut Window) {
    let screen = screen_rect(bounds);
    let list = plot.render_list(screen);
    let mut clip_stack: Vec<ContentMask<Pixels>> = Vec::new();
    for command in list.commands() {
        match command {
            RenderCommand::ClipRect(rect) => {
                clip_stack.push(ContentMask {
                    bounds: to_bounds(*rect),
                });
            }
            RenderCommand::ClipEnd => {
                clip_stack.pop();
            }
            RenderCommand::LineSegments { segments, style } => {
                with_clip(window, &clip_stack, |window| {
                    paint_lines(window, segments, *style);
                });
            }
        }
    }
}

fn paint_lines(window: &mut Window, segments: &[LineSegment], style: LineStyle) {
    if segments.is_empty() {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        builder.move_to(point(px(segment.start.x), px(segment.start.y)));
        builder.line_to(point(px(segment.end.x), px(segment.end.y)));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

pub(crate) fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn screen_rect(bounds: Bounds<Pixels>) -> ScreenRect {
    let x = f32::from(bounds.origin.x);
    let y = f32::from(bounds.origin.y);
    ScreenRect::new(
        ScreenPoint::new(x, y),
        ScreenPoint::new(
            x + f32::from(bounds.size.width),
            y + f32::from(bounds.size.height),
        ),
    )
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}

fn with_clip(window: &mut Window, stack: &[ContentMask<Pixels>], f: impl FnOnce(&mut Window)) {
    if let Some(mask) = stack.last() {
        window.with_content_mask(Some(mask.clone()), f);
    } else {
        f(window);
    }
}
