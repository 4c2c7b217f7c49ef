use gpui_curves::{
    Axis, Bound, CurveError, CurveKind, CurveType, DynamicRange, ParseError, Plot, PlotConfig,
    SamplerConfig, ScrollDirection, Viewport, compile,
};

fn plot_with_points(min_points: usize, max_points: usize) -> Plot {
    let config = PlotConfig {
        sampler: SamplerConfig {
            min_points,
            max_points,
            ..SamplerConfig::default()
        },
        ..PlotConfig::default()
    };
    Plot::builder()
        .config(config)
        .build()
        .expect("valid config")
}

#[test]
fn compiled_functions_evaluate() {
    assert_eq!(compile("x^2", "x").expect("compiles").eval(3.0), 9.0);
    let log = compile("logb(8,2)", "x").expect("compiles");
    assert_eq!(log.arity(), 0);
    assert!((log.eval(123.0) - 3.0).abs() < 1e-12);
    let five = compile("5", "x").expect("compiles");
    assert_eq!(five.arity(), 0);
    assert_eq!(five.eval_many(&[0.0; 17]), vec![5.0; 17]);
}

#[test]
fn reciprocal_breaks_instead_of_spanning_the_axis() {
    let mut plot = plot_with_points(200, 2_000);
    let id = plot.add_curve(CurveType::ExplicitY);
    plot.curve_mut(id)
        .expect("curve")
        .set_limits(Axis::Y, DynamicRange::fixed(-1.0, 1.0));
    plot.submit(id, "1/x").expect("valid");

    let samples = plot.curve(id).expect("curve").samples();
    let gaps: Vec<_> = samples.iter().filter(|p| p.is_gap()).collect();
    assert!(!gaps.is_empty());
    assert!(gaps.iter().all(|p| p.x.abs() <= 1.0 + 1e-9));
    assert!(
        samples
            .iter()
            .filter(|p| !p.is_gap())
            .all(|p| p.y.abs() <= 1.0)
    );
}

#[test]
fn redraw_is_idempotent() {
    let mut plot = plot_with_points(100, 1_000);
    let id = plot.add_curve(CurveType::ExplicitY);
    plot.submit(id, "tan(x)").expect("valid");
    let first = plot.curve(id).expect("curve").samples().to_vec();
    plot.redraw();
    let second = plot.curve(id).expect("curve").samples().to_vec();
    let bits = |points: &[gpui_curves::Point]| -> Vec<(u64, u64)> {
        points.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn zooming_from_twenty_to_two_adds_samples() {
    let mut plot = Plot::new();
    let id = plot.add_curve(CurveType::ExplicitY);
    plot.set_viewport(Viewport::from_bounds(-10.0, 10.0, -10.0, 10.0))
        .expect("valid viewport");
    plot.submit(id, "x").expect("valid");
    let wide = plot.curve(id).expect("curve").samples().len();

    plot.set_viewport(Viewport::from_bounds(-1.0, 1.0, -1.0, 1.0))
        .expect("valid viewport");
    let narrow = plot.curve(id).expect("curve").samples().len();
    assert!(narrow > wide, "{narrow} <= {wide}");
}

#[test]
fn fixed_x_bound_is_not_moved_by_pan() {
    let mut plot = plot_with_points(50, 500);
    let id = plot.add_curve(CurveType::ExplicitY);
    plot.curve_mut(id).expect("curve").set_limits(
        Axis::X,
        DynamicRange::new(Bound::Fixed(0.0), Bound::Dynamic(None)),
    );
    plot.submit(id, "x").expect("valid");
    plot.pan(5.0, 0.0);

    let curve = plot.curve(id).expect("curve");
    let limits = curve.limits(Axis::X).expect("function curve");
    assert_eq!(limits.min, Bound::Fixed(0.0));
    assert_eq!(limits.max_value(), Some(15.0));
    assert_eq!(curve.samples()[0].x, 0.0);
}

#[test]
fn failed_reparse_clears_the_line() {
    let mut plot = plot_with_points(50, 500);
    let id = plot.add_curve(CurveType::ExplicitX);
    plot.submit(id, "y^2").expect("valid");
    assert!(!plot.curve(id).expect("curve").samples().is_empty());

    let err = plot.submit(id, "y^").unwrap_err();
    assert_eq!(err, CurveError::Parse(ParseError::UnexpectedEnd));
    let curve = plot.curve(id).expect("curve");
    assert!(curve.samples().is_empty());
    match curve.kind() {
        CurveKind::ExplicitX(f) => assert!(f.function().is_none()),
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn points_survive_viewport_changes_unchanged() {
    let mut plot = plot_with_points(50, 500);
    let id = plot.add_curve(CurveType::Points);
    plot.submit(id, "(1;2) (-3;4) noise (5;6) (1;)").expect("points");
    plot.scroll(ScrollDirection::Down);
    plot.pan(100.0, 100.0);
    let (xs, ys) = plot.curve(id).expect("curve").xy_lists();
    assert_eq!(xs, vec![1.0, -3.0, 5.0]);
    assert_eq!(ys, vec![2.0, 4.0, 6.0]);
}

#[test]
fn removed_curve_is_gone_from_redraw() {
    let mut plot = plot_with_points(50, 500);
    let keep = plot.add_curve(CurveType::ExplicitY);
    let drop = plot.add_curve(CurveType::ExplicitY);
    plot.submit(keep, "x").expect("valid");
    plot.submit(drop, "-x").expect("valid");
    assert!(plot.remove_curve(drop).is_some());
    let report = plot.redraw();
    assert_eq!(report.drawn, 1);
    assert_eq!(plot.curves().len(), 1);
    assert_eq!(plot.curves()[0].id(), keep);
}
