use proptest::prelude::*;
use sticks_rs::core::{
    CartesianDomain, ChartKind, CoordinateDomain, DataPoint, GeometryOutcome, Viewport,
    build_stick_geometry,
};
use sticks_rs::render::Pen;

proptest! {
    #[test]
    fn hit_bounds_contain_paint_bounds_for_arbitrary_series(
        xs in proptest::collection::vec(-1_000.0f64..1_000.0, 1..48),
        ys in proptest::collection::vec(-1_000.0f64..1_000.0, 1..48),
        points_visible in any::<bool>()
    ) {
        use kurbo::Shape;

        let len = xs.len().min(ys.len());
        prop_assume!(len >= 1);

        let mut points = Vec::with_capacity(len);
        for i in 0..len {
            points.push(DataPoint::new(xs[i], ys[i]));
        }

        let domain = CartesianDomain::new(-1_000.0, 1_000.0, -1_000.0, 1_000.0, Viewport::new(1200, 700))
            .expect("domain");

        let outcome = build_stick_geometry(
            &points,
            &domain,
            Pen::default(),
            5.0,
            points_visible,
            ChartKind::Cartesian,
        )
        .expect("build");
        let GeometryOutcome::Committed(snapshot) = outcome else {
            panic!("bounded inputs must commit");
        };

        let paint_bounds = snapshot.paint_path.bounding_box();
        let hit_bounds = snapshot.hit_path.bounding_box();

        prop_assert!(hit_bounds.x0 <= paint_bounds.x0);
        prop_assert!(hit_bounds.y0 <= paint_bounds.y0);
        prop_assert!(hit_bounds.x1 >= paint_bounds.x1);
        prop_assert!(hit_bounds.y1 >= paint_bounds.y1);
        prop_assert_eq!(snapshot.bounds, hit_bounds);
    }

    #[test]
    fn committed_bounds_cover_every_mapped_point(
        xs in proptest::collection::vec(-500.0f64..500.0, 1..32),
        ys in proptest::collection::vec(-500.0f64..500.0, 1..32)
    ) {
        let len = xs.len().min(ys.len());
        prop_assume!(len >= 1);

        let mut points = Vec::with_capacity(len);
        for i in 0..len {
            points.push(DataPoint::new(xs[i], ys[i]));
        }

        let domain = CartesianDomain::new(-500.0, 500.0, -500.0, 500.0, Viewport::new(900, 600))
            .expect("domain");

        let outcome = build_stick_geometry(
            &points,
            &domain,
            Pen::default(),
            5.0,
            false,
            ChartKind::Cartesian,
        )
        .expect("build");
        let GeometryOutcome::Committed(snapshot) = outcome else {
            panic!("bounded inputs must commit");
        };

        for (point, screen) in points.iter().zip(&snapshot.screen_points) {
            let mapped = domain.data_to_screen(*point).expect("forward");
            prop_assert!((mapped.x - screen.x).abs() <= 1e-9);
            prop_assert!((mapped.y - screen.y).abs() <= 1e-9);
            prop_assert!(snapshot.bounds.x0 <= screen.x && screen.x <= snapshot.bounds.x1);
            prop_assert!(snapshot.bounds.y0 <= screen.y && screen.y <= snapshot.bounds.y1);
        }
    }

    #[test]
    fn cartesian_round_trip_is_stable_for_arbitrary_screen_points(
        x in 0.0f64..1200.0,
        y in 0.0f64..700.0
    ) {
        use sticks_rs::core::ScreenPoint;

        let domain = CartesianDomain::new(-250.0, 250.0, -80.0, 80.0, Viewport::new(1200, 700))
            .expect("domain");

        let screen = ScreenPoint::new(x, y);
        let data = domain.screen_to_data(screen).expect("inverse");
        let forward = domain.data_to_screen(data).expect("forward");
        prop_assert!((forward.x - screen.x).abs() <= 1e-6);
        prop_assert!((forward.y - screen.y).abs() <= 1e-6);
    }
}
