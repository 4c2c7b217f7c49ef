use gpui_curves::{CurveType, Plot, ScreenPoint, ScreenRect, ScrollDirection};

fn main() {
    let mut plot = Plot::new();
    let parabola = plot.add_curve(CurveType::ExplicitY);
    let sideways = plot.add_curve(CurveType::ExplicitX);
    let points = plot.add_curve(CurveType::Points);

    plot.submit(parabola, "x^2 - 3").expect("valid formula");
    plot.submit(sideways, "sin(y) * 4").expect("valid formula");
    plot.submit(points, "(1;2) (-3;4) (5;6)").expect("points never fail");

    if let Err(err) = plot.submit(parabola, "x^^2") {
        println!("rejected: {err}");
    }
    plot.submit(parabola, "1/x").expect("valid formula");

    for step in 0..5 {
        let report = plot.scroll(ScrollDirection::Up);
        let viewport = plot.viewport();
        let samples = plot
            .curve(parabola)
            .map(|curve| curve.samples().len())
            .unwrap_or_default();
        println!(
            "step {step}: x=[{:.3}, {:.3}] samples={samples} drawn={}",
            viewport.x.min, viewport.x.max, report.drawn
        );
    }

    let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(800.0, 600.0));
    println!("{} render commands", plot.render_list(screen).commands().len());
}
