use kurbo::{BezPath, Cap, Circle, Join, Rect, Shape, Stroke, StrokeOpts, stroke};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::domain::CoordinateDomain;
use crate::core::types::{DataPoint, ScreenPoint};
use crate::error::SticksResult;
use crate::render::Pen;

/// Projection family the geometry is built for.
///
/// A closed set selected by tag; the builder branches explicitly instead of
/// dispatching through a series type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Cartesian,
    Polar,
}

/// Worst-case miter-join expansion of a stroked line, as a multiple of the
/// pen width. Overestimating here is what lets the hit-test shape use one
/// cheap round-join stroke instead of an exact per-join computation while
/// still covering the painted stroke.
pub const STROKE_MARGIN_FACTOR: f64 = 1.42;

/// Flattening tolerance for marker circles and the hit-test stroker.
const PATH_TOLERANCE: f64 = 0.1;

/// Host paint surfaces address invalidation regions with integer
/// coordinates; geometry whose bounds cannot fit is never committed.
const SURFACE_COORDINATE_LIMIT: f64 = i32::MAX as f64;

/// Immutable bundle of computed render state.
///
/// Replaced atomically on every qualifying rebuild; a paint request always
/// observes either the fully-old or fully-new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometrySnapshot {
    /// The thin path handed to the painter (sticks plus optional markers).
    pub paint_path: BezPath,
    /// Stroked expansion of `paint_path` used for pointer hit testing.
    pub hit_path: BezPath,
    /// Bounding rectangle of `hit_path`, never of the raw paint path.
    pub bounds: Rect,
    /// Mapped screen positions retained for label placement.
    pub screen_points: Vec<ScreenPoint>,
    /// Sticks whose tip lies left of the polar center (empty in cartesian mode).
    pub polar_left: BezPath,
    /// Sticks whose tip lies right of the polar center (empty in cartesian mode).
    pub polar_right: BezPath,
}

impl GeometrySnapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paint_path.elements().is_empty()
    }
}

/// Result of one rebuild attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryOutcome {
    /// Geometry was rebuilt; the caller should adopt the new snapshot.
    Committed(GeometrySnapshot),
    /// Bounds exceeded surface coordinate limits; the caller keeps its
    /// previous snapshot and requests a plain repaint.
    BoundsOverflow,
}

/// Builds stick geometry for the current point sequence under `domain`.
///
/// Every point becomes one segment from its mapped screen position to the
/// zero baseline, optionally capped with a circular marker. The returned
/// snapshot carries both the paint path and a stroked hit-test path whose
/// bounding rectangle becomes the renderable bounds.
pub fn build_stick_geometry<D>(
    points: &[DataPoint],
    domain: &D,
    pen: Pen,
    marker_size: f64,
    points_visible: bool,
    kind: ChartKind,
) -> SticksResult<GeometryOutcome>
where
    D: CoordinateDomain + ?Sized,
{
    if points.is_empty() {
        return Ok(GeometryOutcome::Committed(GeometrySnapshot::empty()));
    }

    let screen_points = map_screen_points(points, domain)?;
    let marker = points_visible.then_some(marker_size);

    let mut paint_path = BezPath::new();
    let mut polar_left = BezPath::new();
    let mut polar_right = BezPath::new();
    let mut degenerate_tips = Vec::new();

    match kind {
        ChartKind::Cartesian => {
            let baseline_y = domain.baseline_screen(0.0)?.y;
            for tip in &screen_points {
                let foot = ScreenPoint::new(tip.x, baseline_y);
                push_stick(&mut paint_path, *tip, foot, marker, &mut degenerate_tips);
            }
        }
        ChartKind::Polar => {
            // Angular points wrap, so polar sticks are radial segments
            // split into per-wedge half-paths that the paint pass clips
            // against the left and right plot halves.
            let center_x = domain.visible_size().0 / 2.0;
            for (point, tip) in points.iter().zip(&screen_points) {
                let foot = domain.baseline_screen(point.x)?;
                let half = if tip.x < center_x {
                    &mut polar_left
                } else {
                    &mut polar_right
                };
                push_stick(half, *tip, foot, marker, &mut degenerate_tips);
            }
            for element in polar_left.elements().iter().chain(polar_right.elements()) {
                paint_path.push(*element);
            }
        }
    }

    let margin = pen.width * STROKE_MARGIN_FACTOR;
    // Painters do not honor join styles on plain line draws, so the shape
    // always strokes with round join/cap under the overestimated margin.
    let stroke_style = Stroke::new(margin)
        .with_join(Join::Round)
        .with_caps(Cap::Round)
        .with_miter_limit(pen.miter_limit);
    let mut hit_path = stroke(
        paint_path.elements().iter().copied(),
        &stroke_style,
        &StrokeOpts::default(),
        PATH_TOLERANCE,
    );

    // A stick whose tip sits exactly on the baseline is a zero-length
    // segment the stroker may cull; its round-cap dot still belongs in the
    // hit shape.
    for tip in degenerate_tips {
        for element in Circle::new(tip, margin / 2.0).path_elements(PATH_TOLERANCE) {
            hit_path.push(element);
        }
    }

    let hit_bounds = hit_path.bounding_box();
    let paint_bounds = paint_path.bounding_box();
    if exceeds_surface_limits(hit_bounds) || exceeds_surface_limits(paint_bounds) {
        debug!(
            width = hit_bounds.width(),
            height = hit_bounds.height(),
            "stick geometry bounds exceed surface limits, keeping previous snapshot"
        );
        return Ok(GeometryOutcome::BoundsOverflow);
    }

    Ok(GeometryOutcome::Committed(GeometrySnapshot {
        paint_path,
        hit_path,
        bounds: hit_bounds,
        screen_points,
        polar_left,
        polar_right,
    }))
}

fn map_screen_points<D>(points: &[DataPoint], domain: &D) -> SticksResult<Vec<ScreenPoint>>
where
    D: CoordinateDomain + ?Sized,
{
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| domain.data_to_screen(*point))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| domain.data_to_screen(*point))
            .collect()
    }
}

fn push_stick(
    path: &mut BezPath,
    tip: ScreenPoint,
    foot: ScreenPoint,
    marker: Option<f64>,
    degenerate_tips: &mut Vec<ScreenPoint>,
) {
    path.move_to(tip);
    path.line_to(foot);
    if tip == foot {
        degenerate_tips.push(tip);
    }
    if let Some(radius) = marker {
        for element in Circle::new(tip, radius).path_elements(PATH_TOLERANCE) {
            path.push(element);
        }
    }
}

fn exceeds_surface_limits(bounds: Rect) -> bool {
    bounds.width() > SURFACE_COORDINATE_LIMIT || bounds.height() > SURFACE_COORDINATE_LIMIT
}
