use kurbo::{BezPath, Rect};

use crate::core::types::ScreenPoint;
use crate::render::style::{Color, Pen};

/// Clip selection for one draw scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipShape {
    /// Plain rectangular clip (cartesian plot area).
    Rect(Rect),
    /// Elliptical clip inscribed in the given bounds (full polar plot).
    Ellipse(Rect),
    /// Elliptical clip intersected with a rectangle (one polar wedge half).
    EllipseIntersectRect { ellipse: Rect, rect: Rect },
}

/// Contract implemented by any paint backend.
///
/// The compositor issues already-built paths and labels through this
/// boundary so drawing code stays isolated from geometry and model logic.
pub trait PaintSurface {
    fn save(&mut self);

    fn restore(&mut self);

    fn set_clip(&mut self, clip: ClipShape);

    /// Toggles whether the active clip applies to subsequent draws.
    fn set_clipping_enabled(&mut self, enabled: bool);

    fn stroke_path(&mut self, path: &BezPath, pen: &Pen);

    fn fill_path(&mut self, path: &BezPath, color: Color);

    fn draw_label(&mut self, text: &str, position: ScreenPoint, font_size_px: f64, color: Color);
}

/// One recorded `PaintSurface` call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Save,
    Restore,
    SetClip(ClipShape),
    SetClippingEnabled(bool),
    StrokePath {
        element_count: usize,
        pen: Pen,
    },
    FillPath {
        element_count: usize,
        color: Color,
    },
    DrawLabel {
        text: String,
        position: ScreenPoint,
        font_size_px: f64,
        color: Color,
    },
}

/// Recording backend used by tests and headless hosts.
///
/// Captures the draw-call stream instead of rasterizing so assertions can
/// inspect clip selection and fill policy before a real backend exists.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<PaintOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::StrokePath { .. }))
            .count()
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::FillPath { .. }))
            .count()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::DrawLabel { .. }))
            .count()
    }
}

impl PaintSurface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }

    fn set_clip(&mut self, clip: ClipShape) {
        self.ops.push(PaintOp::SetClip(clip));
    }

    fn set_clipping_enabled(&mut self, enabled: bool) {
        self.ops.push(PaintOp::SetClippingEnabled(enabled));
    }

    fn stroke_path(&mut self, path: &BezPath, pen: &Pen) {
        self.ops.push(PaintOp::StrokePath {
            element_count: path.elements().len(),
            pen: *pen,
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.ops.push(PaintOp::FillPath {
            element_count: path.elements().len(),
            color,
        });
    }

    fn draw_label(&mut self, text: &str, position: ScreenPoint, font_size_px: f64, color: Color) {
        self.ops.push(PaintOp::DrawLabel {
            text: text.to_owned(),
            position,
            font_size_px,
            color,
        });
    }
}
