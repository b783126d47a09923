use plotters::prelude::*;

use bezel::{Bezier, CubicBezier, Point, PointN, QuadraticBezier, Spline};

type P2 = PointN<f64, 2>;

const STEPS: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let quad: QuadraticBezier<P2> = Bezier::new([
        PointN::new([0.2f64, 0.2f64]),
        PointN::new([0.5f64, 0.9f64]),
        PointN::new([0.9f64, 0.1f64]),
    ]);

    let cubic: CubicBezier<P2> = Bezier::new([
        PointN::new([0.1f64, 0.9f64]),
        PointN::new([0.3f64, 0.2f64]),
        PointN::new([0.5f64, 1.6f64]),
        PointN::new([0.8f64, 0.4f64]),
    ]);

    // chart y grows upwards, the canvas convention grows downwards
    let flip = |p: P2| (p.axis(0), 1.0 - p.axis(1));

    let root = BitMapBackend::new("bezel_curves.png", (400, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    // the lower y bound leaves room for the cubic's overshooting
    // control point at y = 1.6
    let mut chart = ChartBuilder::on(&root)
        .caption("Flattened Bezier curves", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0f64..1f64, -0.7f64..1f64)?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(quad.polyline(STEPS).map(flip), &GREEN))?
        .label("quadratic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .draw_series(LineSeries::new(cubic.polyline(STEPS).map(flip), &RED))?
        .label("cubic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    // mark the control points that shape the two curves
    chart.draw_series(
        quad.control_points()
            .into_iter()
            .map(|p| Circle::new(flip(p), 3, GREEN.filled())),
    )?;
    chart.draw_series(
        cubic
            .control_points()
            .into_iter()
            .map(|p| Circle::new(flip(p), 3, RED.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
