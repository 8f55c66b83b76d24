use kurbo::{BezPath, Rect};
use tracing::debug;

use crate::api::invalidation::{InvalidationTracker, UpdateAction};
use crate::core::domain::CoordinateDomain;
use crate::core::geometry::{ChartKind, GeometryOutcome, GeometrySnapshot, build_stick_geometry};
use crate::core::series::SticksSeries;
use crate::core::types::ScreenPoint;
use crate::error::SticksResult;
use crate::interaction::{EmittedEvents, PointerEventMapper};
use crate::render::{Color, LabelState, PaintSurface, Pen, Theme, paint_sticks};

/// Renderable stick-series item: the facade a charting host embeds.
///
/// Owns the series model, the change tracker, the published geometry
/// snapshot and the pointer state machine. Hosts mutate the series (through
/// `series_mut`) and then call [`SticksItem::handle_updated`]; geometry is
/// rebuilt only when the tracker classifies the change as shape-affecting.
pub struct SticksItem {
    series: SticksSeries,
    tracker: InvalidationTracker,
    snapshot: GeometrySnapshot,
    mapper: PointerEventMapper,
    theme: Theme,
    palette_index: usize,
    host_kind: ChartKind,
    kind_override: Option<ChartKind>,
    points_suppressed: bool,
    position: ScreenPoint,
    repaint_requested: bool,
}

impl SticksItem {
    #[must_use]
    pub fn new(series: SticksSeries, theme: Theme, palette_index: usize) -> Self {
        let effective_pen = series
            .pen_override()
            .unwrap_or_else(|| theme.pen_for_index(palette_index));
        let effective_points_visible = series.points_visible();
        let tracker = InvalidationTracker::new(&series, effective_pen, effective_points_visible);

        Self {
            series,
            tracker,
            snapshot: GeometrySnapshot::empty(),
            mapper: PointerEventMapper::new(),
            theme,
            palette_index,
            host_kind: ChartKind::Cartesian,
            kind_override: None,
            points_suppressed: false,
            position: ScreenPoint::new(0.0, 0.0),
            repaint_requested: false,
        }
    }

    #[must_use]
    pub fn series(&self) -> &SticksSeries {
        &self.series
    }

    /// Mutable model access; follow mutations with [`SticksItem::handle_updated`]
    /// (visual attributes) or [`SticksItem::notify_points_changed`] (data).
    pub fn series_mut(&mut self) -> &mut SticksSeries {
        &mut self.series
    }

    /// Chart kind used for geometry and painting: the forced override when
    /// present, otherwise the host's kind.
    #[must_use]
    pub fn effective_kind(&self) -> ChartKind {
        self.kind_override.unwrap_or(self.host_kind)
    }

    /// Forces the chart kind independently of the host, for renderers used
    /// as sub-components of composite series.
    pub fn force_chart_kind(&mut self, kind: Option<ChartKind>) {
        self.kind_override = kind;
    }

    pub fn set_host_chart_kind(&mut self, kind: ChartKind) {
        self.host_kind = kind;
    }

    /// Disables marker rendering regardless of the series setting; takes
    /// effect on the next `handle_updated`.
    pub fn suppress_points(&mut self) {
        self.points_suppressed = true;
    }

    #[must_use]
    pub fn effective_points_visible(&self) -> bool {
        self.series.points_visible() && !self.points_suppressed
    }

    /// Pen resolved against the theme: the series override when present,
    /// otherwise the palette pen for this item's slot.
    #[must_use]
    pub fn effective_pen(&self) -> Pen {
        self.series
            .pen_override()
            .unwrap_or_else(|| self.theme.pen_for_index(self.palette_index))
    }

    #[must_use]
    pub fn effective_label_color(&self) -> Color {
        self.series
            .label_color_override()
            .unwrap_or_else(|| self.theme.label_color())
    }

    /// Installs a theme. A forced re-theme also clears the series' style
    /// overrides so the palette wins again.
    pub fn apply_theme(&mut self, theme: Theme, palette_index: usize, forced: bool) {
        self.theme = theme;
        self.palette_index = palette_index;
        if forced {
            self.series.clear_pen_override();
            self.series.clear_label_color_override();
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.series.opacity()
    }

    #[must_use]
    pub fn position(&self) -> ScreenPoint {
        self.position
    }

    /// Item position inside the host scene; only the sub-pixel phase
    /// matters, for clip-rect adjustment.
    pub fn set_position(&mut self, position: ScreenPoint) {
        self.position = position;
    }

    /// Classifies the latest model change and rebuilds geometry when the
    /// change is shape-affecting. Always schedules a repaint.
    pub fn handle_updated<D>(&mut self, domain: &D) -> SticksResult<UpdateAction>
    where
        D: CoordinateDomain + ?Sized,
    {
        let action = self.tracker.on_series_updated(
            &self.series,
            self.effective_pen(),
            self.effective_points_visible(),
        );
        if action == UpdateAction::Rebuild {
            self.update_geometry(domain)?;
        }
        self.repaint_requested = true;
        Ok(action)
    }

    /// Rebuilds geometry after the point sequence itself changed.
    pub fn notify_points_changed<D>(&mut self, domain: &D) -> SticksResult<()>
    where
        D: CoordinateDomain + ?Sized,
    {
        self.update_geometry(domain)?;
        self.repaint_requested = true;
        Ok(())
    }

    fn update_geometry<D>(&mut self, domain: &D) -> SticksResult<()>
    where
        D: CoordinateDomain + ?Sized,
    {
        if self.series.is_accelerated() {
            // The accelerated pipeline owns drawing; bounds collapse so the
            // host never invalidates a stale software region.
            if !self.snapshot.is_empty() || self.snapshot.bounds.area() != 0.0 {
                self.snapshot = GeometrySnapshot::empty();
            }
            return Ok(());
        }

        match build_stick_geometry(
            self.series.points(),
            domain,
            self.effective_pen(),
            self.series.marker_size(),
            self.effective_points_visible(),
            self.effective_kind(),
        )? {
            GeometryOutcome::Committed(snapshot) => {
                self.snapshot = snapshot;
            }
            GeometryOutcome::BoundsOverflow => {
                // Stale-but-safe: the previous snapshot stays published and
                // the view still repaints.
                debug!("stick geometry rebuild skipped, repainting with previous snapshot");
            }
        }
        Ok(())
    }

    /// Bounding rectangle of the hit-test shape.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        self.snapshot.bounds
    }

    /// Stroked hit-test path for pointer/selection tests.
    #[must_use]
    pub fn shape(&self) -> &BezPath {
        &self.snapshot.hit_path
    }

    /// The thin path handed to the painter.
    #[must_use]
    pub fn paint_path(&self) -> &BezPath {
        &self.snapshot.paint_path
    }

    #[must_use]
    pub fn snapshot(&self) -> &GeometrySnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn repaint_requested(&self) -> bool {
        self.repaint_requested
    }

    /// Paints the cached snapshot. A no-op while the series is hidden or an
    /// accelerated pipeline owns drawing.
    pub fn paint<D>(&mut self, surface: &mut dyn PaintSurface, domain: &D)
    where
        D: CoordinateDomain + ?Sized,
    {
        self.repaint_requested = false;
        if !self.series.is_visible() {
            return;
        }

        let labels = LabelState {
            visible: self.series.labels_visible(),
            format: self.series.label_format().to_owned(),
            font_size_px: self.series.label_font_size(),
            color: self.effective_label_color(),
            clipping: self.series.label_clipping(),
        };

        paint_sticks(
            surface,
            &self.snapshot,
            self.series.points(),
            domain.visible_size(),
            self.position,
            &self.effective_pen(),
            self.effective_points_visible(),
            &labels,
            self.effective_kind(),
            self.series.is_accelerated(),
        );
    }

    pub fn on_press<D>(&mut self, domain: &D, position: ScreenPoint) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        self.mapper.on_press(domain, position)
    }

    pub fn on_release<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        self.mapper.on_release(domain, position)
    }

    pub fn on_hover_enter<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        self.mapper.on_hover_enter(domain, position)
    }

    pub fn on_hover_leave<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        self.mapper.on_hover_leave(domain, position)
    }

    pub fn on_double_click<D>(
        &mut self,
        domain: &D,
        position: ScreenPoint,
    ) -> SticksResult<EmittedEvents>
    where
        D: CoordinateDomain + ?Sized,
    {
        self.mapper.on_double_click(domain, position)
    }
}
