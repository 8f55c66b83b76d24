use crate::core::types::DataPoint;
use crate::render::{Color, Pen};

pub const DEFAULT_MARKER_SIZE: f64 = 5.0;
pub const DEFAULT_LABEL_FORMAT: &str = "@xPoint, @yPoint";

/// Ordered point sequence plus the visual attribute state of one stick series.
///
/// Style fields that can follow the host theme are `Option`s: `None` means
/// "use the theme value for this series' palette slot", `Some` is an explicit
/// user override. The renderer never mutates the model; hosts mutate it and
/// then notify the item (see `SticksItem::handle_updated`).
#[derive(Debug, Clone, PartialEq)]
pub struct SticksSeries {
    points: Vec<DataPoint>,
    pen: Option<Pen>,
    marker_size: f64,
    points_visible: bool,
    visible: bool,
    opacity: f64,
    labels_visible: bool,
    label_format: String,
    label_font_size: f64,
    label_color: Option<Color>,
    label_clipping: bool,
    accelerated: bool,
}

impl Default for SticksSeries {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            pen: None,
            marker_size: DEFAULT_MARKER_SIZE,
            points_visible: false,
            visible: true,
            opacity: 1.0,
            labels_visible: false,
            label_format: DEFAULT_LABEL_FORMAT.to_owned(),
            label_font_size: 11.0,
            label_color: None,
            label_clipping: true,
            accelerated: false,
        }
    }
}

impl SticksSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn append(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn replace_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn pen_override(&self) -> Option<Pen> {
        self.pen
    }

    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = Some(pen);
    }

    pub fn clear_pen_override(&mut self) {
        self.pen = None;
    }

    #[must_use]
    pub fn marker_size(&self) -> f64 {
        self.marker_size
    }

    pub fn set_marker_size(&mut self, marker_size: f64) {
        self.marker_size = marker_size;
    }

    #[must_use]
    pub fn points_visible(&self) -> bool {
        self.points_visible
    }

    pub fn set_points_visible(&mut self, visible: bool) {
        self.points_visible = visible;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    pub fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
    }

    #[must_use]
    pub fn label_format(&self) -> &str {
        &self.label_format
    }

    pub fn set_label_format(&mut self, format: impl Into<String>) {
        self.label_format = format.into();
    }

    #[must_use]
    pub fn label_font_size(&self) -> f64 {
        self.label_font_size
    }

    pub fn set_label_font_size(&mut self, font_size_px: f64) {
        self.label_font_size = font_size_px;
    }

    #[must_use]
    pub fn label_color_override(&self) -> Option<Color> {
        self.label_color
    }

    pub fn set_label_color(&mut self, color: Color) {
        self.label_color = Some(color);
    }

    pub fn clear_label_color_override(&mut self) {
        self.label_color = None;
    }

    #[must_use]
    pub fn label_clipping(&self) -> bool {
        self.label_clipping
    }

    pub fn set_label_clipping(&mut self, clipping: bool) {
        self.label_clipping = clipping;
    }

    /// Whether an accelerated pipeline owns drawing for this series.
    ///
    /// While set, no geometry is built and the software paint pass is a
    /// no-op; the host's accelerated refresh hook takes over.
    #[must_use]
    pub fn is_accelerated(&self) -> bool {
        self.accelerated
    }

    pub fn set_accelerated(&mut self, accelerated: bool) {
        self.accelerated = accelerated;
    }
}

/// Expands `@xPoint` / `@yPoint` placeholders with the point's coordinates.
#[must_use]
pub fn format_point_label(format: &str, point: DataPoint) -> String {
    format
        .replace("@xPoint", &format_coordinate(point.x))
        .replace("@yPoint", &format_coordinate(point.y))
}

fn format_coordinate(value: f64) -> String {
    // f64 Display already picks the shortest round-trip form.
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_format_substitutes_both_placeholders() {
        let label = format_point_label(DEFAULT_LABEL_FORMAT, DataPoint::new(2.0, 3.5));
        assert_eq!(label, "2, 3.5");
    }

    #[test]
    fn label_format_keeps_literal_text() {
        let label = format_point_label("y=@yPoint units", DataPoint::new(0.0, -1.25));
        assert_eq!(label, "y=-1.25 units");
    }

    #[test]
    fn opacity_is_clamped_to_unit_interval() {
        let mut series = SticksSeries::new();
        series.set_opacity(2.5);
        assert!((series.opacity() - 1.0).abs() <= 1e-12);
        series.set_opacity(-0.5);
        assert!(series.opacity().abs() <= 1e-12);
    }
}
