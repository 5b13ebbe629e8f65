//! Line-chart rendering with plotters.
//!
//! Charts only receive ordered `(x, y)` samples and labels; they never see the
//! models that produced them.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

/// One panel of a figure.
#[derive(Debug, Clone)]
pub struct Chart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Legend entry; no legend is drawn when `None`.
    pub series_label: Option<&'a str>,
    pub points: Vec<(f64, f64)>,
}

/// Axis range covering `values`, padded by 5 %.
/// A flat or empty series gets a unit-wide range so the axis stays drawable.
pub fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return (-1.0, 1.0);
    }
    let span = max - min;
    if span == 0.0 {
        return (min - 1.0, max + 1.0);
    }
    (min - 0.05 * span, max + 0.05 * span)
}

/// Keeps every `ceil(len / max_points)`-th sample plus the last one.
pub fn decimate(points: &[(f64, f64)], max_points: usize) -> Vec<(f64, f64)> {
    if max_points == 0 || points.len() <= max_points {
        return points.to_vec();
    }
    let stride = points.len().div_ceil(max_points);
    let mut kept: Vec<(f64, f64)> = points.iter().copied().step_by(stride).collect();
    if (points.len() - 1) % stride != 0 {
        kept.push(points[points.len() - 1]);
    }
    kept
}

fn draw_chart(area: &DrawingArea<BitMapBackend<'_>, Shift>, chart: &Chart<'_>) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = axis_range(chart.points.iter().map(|p| p.0));
    let (y_min, y_max) = axis_range(chart.points.iter().map(|p| p.1));

    let mut ctx = ChartBuilder::on(area)
        .caption(chart.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .light_line_style(BLACK.mix(0.08))
        .draw()?;

    let series = ctx.draw_series(LineSeries::new(chart.points.iter().copied(), &BLUE))?;
    if let Some(label) = chart.series_label {
        series
            .label(label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    Ok(())
}

/// Renders `charts` stacked top to bottom into one PNG of `size` pixels.
pub fn render_figure(path: &Path, size: (u32, u32), charts: &[Chart<'_>]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((charts.len().max(1), 1));
    for (panel, chart) in panels.iter().zip(charts) {
        draw_chart(panel, chart)?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_range_pads_span() {
        let (lo, hi) = axis_range([0.0, 10.0].into_iter());
        assert_eq!((lo, hi), (-0.5, 10.5));
    }

    #[test]
    fn test_axis_range_flat_and_empty() {
        assert_eq!(axis_range([3.0, 3.0].into_iter()), (2.0, 4.0));
        assert_eq!(axis_range(std::iter::empty()), (-1.0, 1.0));
        assert_eq!(axis_range([f64::NAN, 1.0].into_iter()), (0.0, 2.0));
    }

    #[test]
    fn test_decimate_keeps_endpoints() {
        let points: Vec<(f64, f64)> = (0..1001).map(|i| (i as f64, i as f64)).collect();
        let kept = decimate(&points, 100);
        assert!(kept.len() <= 101);
        assert_eq!(kept[0], (0.0, 0.0));
        assert_eq!(*kept.last().unwrap(), (1000.0, 1000.0));
        assert!(kept.windows(2).all(|w| w[1].0 > w[0].0));
    }

    #[test]
    fn test_decimate_short_series_untouched() {
        let points = vec![(0.0, 1.0), (1.0, 2.0)];
        assert_eq!(decimate(&points, 10), points);
    }
}
