use kurbo::{BezPath, Rect};

use crate::core::geometry::{ChartKind, GeometrySnapshot};
use crate::core::series::format_point_label;
use crate::core::types::{DataPoint, ScreenPoint};
use crate::render::style::{LabelState, Pen};
use crate::render::surface::{ClipShape, PaintSurface};

/// Paints an already-built geometry snapshot onto `surface`.
///
/// In accelerated mode the pass is a no-op because the alternate pipeline
/// owns drawing. Otherwise the clip is selected per chart kind, the path is
/// drawn under the fill policy, and the label overlay is emitted from the
/// cached screen points.
#[allow(clippy::too_many_arguments)]
pub fn paint_sticks(
    surface: &mut dyn PaintSurface,
    snapshot: &GeometrySnapshot,
    points: &[DataPoint],
    domain_size: (f64, f64),
    item_pos: ScreenPoint,
    pen: &Pen,
    points_visible: bool,
    labels: &LabelState,
    kind: ChartKind,
    accelerated: bool,
) {
    if accelerated {
        return;
    }

    surface.save();
    let clip_rect = adjusted_clip_rect(domain_size, item_pos);

    match kind {
        ChartKind::Cartesian => {
            surface.set_clip(ClipShape::Rect(clip_rect));
            draw_with_fill_policy(surface, &snapshot.paint_path, pen, points_visible);
        }
        ChartKind::Polar => {
            let (width, height) = domain_size;
            let half_width = width / 2.0;
            let left = Rect::new(0.0, 0.0, half_width, height);
            let right = Rect::new(half_width, 0.0, width, height);

            surface.set_clip(ClipShape::EllipseIntersectRect {
                ellipse: clip_rect,
                rect: left,
            });
            draw_with_fill_policy(surface, &snapshot.polar_left, pen, points_visible);

            surface.set_clip(ClipShape::EllipseIntersectRect {
                ellipse: clip_rect,
                rect: right,
            });
            draw_with_fill_policy(surface, &snapshot.polar_right, pen, points_visible);

            surface.set_clip(ClipShape::Ellipse(clip_rect));
        }
    }

    if labels.visible {
        surface.set_clipping_enabled(labels.clipping);
        let offset = pen.width / 2.0;
        for (screen, data) in snapshot.screen_points.iter().zip(points) {
            let text = format_point_label(&labels.format, *data);
            surface.draw_label(
                &text,
                ScreenPoint::new(screen.x + offset, screen.y - offset),
                labels.font_size_px,
                labels.color,
            );
        }
    }

    surface.restore();
}

/// Clip rect for the plot area, nudged by the sub-pixel phase of the item
/// position so sticks lying exactly on the plot-area edge still paint,
/// without ever letting the clip extend past the true plot area.
fn adjusted_clip_rect(domain_size: (f64, f64), item_pos: ScreenPoint) -> Rect {
    let (width, height) = domain_size;
    let x1 = item_pos.x - item_pos.x.trunc();
    let y1 = item_pos.y - item_pos.y.trunc();
    let x2 = (width + 0.5) - (width + 0.5).trunc();
    let y2 = (height + 0.5) - (height + 0.5).trunc();
    Rect::new(-x1, -y1, width + x1.max(x2), height + y1.max(y2))
}

fn draw_with_fill_policy(
    surface: &mut dyn PaintSurface,
    path: &BezPath,
    pen: &Pen,
    points_visible: bool,
) {
    if points_visible {
        // Markers read as solid dots when the path is filled with the pen
        // color before stroking.
        surface.fill_path(path, pen.color);
    }
    surface.stroke_path(path, pen);
}
