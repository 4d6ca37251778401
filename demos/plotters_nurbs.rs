extern crate plotters;
use plotters::prelude::*;

use deboor::{clamped_knots, interpolate_into, Nurbs, PointN};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // control points for the cubic curves
    let cpoints = vec![
        (0f64, 1.77f64),
        (1.1f64, -1f64),
        (4.3f64, 3f64),
        (3.2f64, -4f64),
        (7.3f64, 2.7f64),
        (8.9f64, 1.7f64),
    ];
    let points: Vec<PointN<f64, 2>> = cpoints
        .iter()
        .map(|&(x, y)| PointN::new([x, y]))
        .collect();
    let knots = clamped_knots(points.len(), 3);

    // same control polygon, once plain and once pulled towards the third point
    let plain = Nurbs::new(3, points.clone(), Some(knots.clone()), None)?;
    let weights = vec![1.0, 1.0, 6.0, 1.0, 1.0, 1.0];
    let weighted = Nurbs::new(3, points.clone(), Some(knots), Some(weights))?;

    // render the paths of the curves to desired accuracy, reusing one buffer
    let nsteps: usize = 1000;
    let mut buf = [0.0; 2];
    let mut plain_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    let mut weighted_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    for t in 0..=nsteps {
        let t = t as f64 / nsteps as f64;
        plain.eval_into(t, &mut buf)?;
        plain_graph.push((buf[0], buf[1]));
        weighted.eval_into(t, &mut buf)?;
        weighted_graph.push((buf[0], buf[1]));
    }

    // the uniform default knot vector does not reach the end points
    let mut uniform_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    for t in 0..=nsteps {
        let t = t as f64 / nsteps as f64;
        interpolate_into(t, 3, &points, None, None, &mut buf)?;
        uniform_graph.push((buf[0], buf[1]));
    }

    let root = BitMapBackend::new("nurbs_weights.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Cubic NURBS Curves", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-1.0..10.0, -5.0..5.0)?;

    chart.configure_mesh().draw()?;

    // draw the control points
    chart
        .draw_series(PointSeries::of_element(
            cpoints.clone(),
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(
                        format!("{:?}", coord),
                        (0, 15),
                        ("sans-serif", 15).into_font(),
                    )
            },
        ))?
        .label("Control Points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the control polygon
    chart.draw_series(LineSeries::new(cpoints, BLUE.mix(0.3)))?;

    chart
        .draw_series(LineSeries::new(plain_graph, &RED))?
        .label("clamped, w = 1")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(weighted_graph, &GREEN))?
        .label("clamped, w2 = 6")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .draw_series(LineSeries::new(uniform_graph, &MAGENTA))?
        .label("default knots")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
