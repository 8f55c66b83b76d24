use sticks_rs::api::{SticksItem, UpdateAction};
use sticks_rs::core::{
    CartesianDomain, ChartKind, DataPoint, PolarDomain, SticksSeries, Viewport,
};
use sticks_rs::render::{Color, PaintOp, Pen, RecordingSurface, Theme};

fn sample_domain() -> CartesianDomain {
    CartesianDomain::new(0.0, 3.0, -1.0, 4.0, Viewport::new(300, 125)).expect("domain")
}

fn sample_item() -> SticksItem {
    let mut series = SticksSeries::new();
    series.replace_points(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 3.0),
        DataPoint::new(2.0, 1.0),
    ]);
    SticksItem::new(series, Theme::default(), 0)
}

#[test]
fn item_starts_with_empty_geometry() {
    let item = sample_item();
    assert!(item.paint_path().elements().is_empty());
    assert!(item.shape().elements().is_empty());
    assert!((item.bounding_rect().width()).abs() <= 1e-12);
}

#[test]
fn point_changes_rebuild_geometry() {
    let domain = sample_domain();
    let mut item = sample_item();

    item.notify_points_changed(&domain).expect("rebuild");
    assert!(!item.paint_path().elements().is_empty());
    assert_eq!(item.bounding_rect(), item.snapshot().bounds);
    assert!(item.repaint_requested());
}

#[test]
fn opacity_change_repaints_without_touching_geometry() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.notify_points_changed(&domain).expect("rebuild");
    let before = item.snapshot().clone();

    item.series_mut().set_opacity(0.4);
    let action = item.handle_updated(&domain).expect("update");
    assert_eq!(action, UpdateAction::RepaintOnly);
    assert_eq!(item.snapshot(), &before);
}

#[test]
fn points_visibility_toggle_rebuilds_with_markers() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.notify_points_changed(&domain).expect("rebuild");
    let plain_count = item.paint_path().elements().len();

    item.series_mut().set_points_visible(true);
    let action = item.handle_updated(&domain).expect("update");
    assert_eq!(action, UpdateAction::Rebuild);
    assert!(item.paint_path().elements().len() > plain_count);
}

#[test]
fn suppressing_points_drops_markers_again() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.series_mut().set_points_visible(true);
    item.handle_updated(&domain).expect("update");
    let with_markers = item.paint_path().elements().len();

    item.suppress_points();
    let action = item.handle_updated(&domain).expect("update");
    assert_eq!(action, UpdateAction::Rebuild);
    assert!(item.paint_path().elements().len() < with_markers);
    assert!(!item.effective_points_visible());
}

#[test]
fn overflow_keeps_previous_snapshot_and_requests_repaint() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.notify_points_changed(&domain).expect("rebuild");
    let before = item.snapshot().clone();

    let overflow_domain =
        CartesianDomain::new(0.0, 3.0, 0.0, 1e-7, Viewport::new(1000, 1000)).expect("domain");
    item.series_mut().append(DataPoint::new(2.5, 1e6));
    item.notify_points_changed(&overflow_domain).expect("rebuild");

    assert_eq!(item.snapshot(), &before);
    assert!(item.repaint_requested());
}

#[test]
fn accelerated_rebuild_collapses_geometry() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.notify_points_changed(&domain).expect("rebuild");
    assert!(!item.paint_path().elements().is_empty());

    item.series_mut().set_accelerated(true);
    item.series_mut().set_points_visible(true);
    let action = item.handle_updated(&domain).expect("update");
    assert_eq!(action, UpdateAction::Rebuild);
    assert!(item.paint_path().elements().is_empty());
    assert!((item.bounding_rect().width()).abs() <= 1e-12);
}

#[test]
fn accelerated_visibility_toggle_requests_mode_refresh() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.series_mut().set_accelerated(true);
    item.handle_updated(&domain).expect("update");

    item.series_mut().set_visible(false);
    let action = item.handle_updated(&domain).expect("update");
    assert_eq!(action, UpdateAction::RefreshAccelerated);
}

#[test]
fn theme_pen_applies_until_overridden() {
    let domain = sample_domain();
    let mut item = sample_item();
    let theme_pen = Theme::default().pen_for_index(0);
    assert_eq!(item.effective_pen(), theme_pen);

    let override_pen = Pen::new(Color::rgb(0.0, 0.0, 0.0), 3.0);
    item.series_mut().set_pen(override_pen);
    item.handle_updated(&domain).expect("update");
    assert_eq!(item.effective_pen(), override_pen);

    // A forced re-theme clears the override so the palette wins again.
    item.apply_theme(Theme::default(), 0, true);
    assert_eq!(item.effective_pen(), theme_pen);
}

#[test]
fn hidden_series_skips_painting() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.notify_points_changed(&domain).expect("rebuild");
    item.series_mut().set_visible(false);
    item.handle_updated(&domain).expect("update");

    let mut surface = RecordingSurface::new();
    item.paint(&mut surface, &domain);
    assert!(surface.ops.is_empty());
    assert!(!item.repaint_requested());
}

#[test]
fn paint_emits_labels_with_effective_color() {
    let domain = sample_domain();
    let mut item = sample_item();
    item.notify_points_changed(&domain).expect("rebuild");
    item.series_mut().set_labels_visible(true);
    item.handle_updated(&domain).expect("update");

    let mut surface = RecordingSurface::new();
    item.paint(&mut surface, &domain);

    let label_colors: Vec<_> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::DrawLabel { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(label_colors.len(), 3);
    assert_eq!(label_colors[0], Theme::default().label_color());
}

#[test]
fn forced_chart_kind_switches_to_polar_geometry() {
    let polar = PolarDomain::new(0.0, 4.0, 0.0, 2.0, Viewport::new(500, 500)).expect("domain");
    let mut item = sample_item();
    item.force_chart_kind(Some(ChartKind::Polar));
    assert_eq!(item.effective_kind(), ChartKind::Polar);

    item.notify_points_changed(&polar).expect("rebuild");
    let snapshot = item.snapshot();
    assert!(
        !snapshot.polar_left.elements().is_empty() || !snapshot.polar_right.elements().is_empty()
    );

    item.force_chart_kind(None);
    assert_eq!(item.effective_kind(), ChartKind::Cartesian);
}
