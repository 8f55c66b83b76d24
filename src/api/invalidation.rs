use serde::{Deserialize, Serialize};

use crate::core::series::SticksSeries;
use crate::render::{Color, Pen};

/// Decision produced for one model-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateAction {
    /// Stroke geometry must be recomputed before the next paint.
    Rebuild,
    /// Cached geometry stays valid; only a repaint is required.
    RepaintOnly,
    /// An accelerated pipeline owns drawing; invoke its refresh hook
    /// instead of touching geometry.
    RefreshAccelerated,
}

/// Cached copy of the visual attributes that feed change detection.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualStateSnapshot {
    pub points_visible: bool,
    pub pen: Pen,
    pub marker_size: f64,
    pub labels_visible: bool,
    pub label_format: String,
    pub label_font_size: f64,
    pub label_color: Option<Color>,
    pub label_clipping: bool,
    pub series_visible: bool,
}

/// Two-tier change detector separating geometry rebuilds from cheap repaints.
///
/// Most attribute changes (opacity, label text, colors) leave the stroke
/// geometry valid; only point visibility and, while points are visible, the
/// pen can change the path shape. The cached snapshot is refreshed on every
/// notification regardless of the decision so later comparisons always run
/// against the latest observed state.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidationTracker {
    state: VisualStateSnapshot,
}

impl InvalidationTracker {
    #[must_use]
    pub fn new(series: &SticksSeries, effective_pen: Pen, effective_points_visible: bool) -> Self {
        Self {
            state: capture(series, effective_pen, effective_points_visible),
        }
    }

    #[must_use]
    pub fn state(&self) -> &VisualStateSnapshot {
        &self.state
    }

    pub fn on_series_updated(
        &mut self,
        series: &SticksSeries,
        effective_pen: Pen,
        effective_points_visible: bool,
    ) -> UpdateAction {
        let points_visibility_changed = self.state.points_visible != effective_points_visible;
        let pen_changed = self.state.pen != effective_pen;
        let needs_rebuild =
            points_visibility_changed || (effective_points_visible && pen_changed);
        let series_visibility_toggled = self.state.series_visible != series.is_visible();

        self.state = capture(series, effective_pen, effective_points_visible);

        if needs_rebuild {
            UpdateAction::Rebuild
        } else if series.is_accelerated() && series_visibility_toggled {
            UpdateAction::RefreshAccelerated
        } else {
            UpdateAction::RepaintOnly
        }
    }
}

fn capture(
    series: &SticksSeries,
    effective_pen: Pen,
    effective_points_visible: bool,
) -> VisualStateSnapshot {
    VisualStateSnapshot {
        points_visible: effective_points_visible,
        pen: effective_pen,
        marker_size: series.marker_size(),
        labels_visible: series.labels_visible(),
        label_format: series.label_format().to_owned(),
        label_font_size: series.label_font_size(),
        label_color: series.label_color_override(),
        label_clipping: series.label_clipping(),
        series_visible: series.is_visible(),
    }
}
