use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::evaluation::SignalTrace;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("trace has no rows to draw")]
    EmptyTrace,
    #[error("chart backend error: {0}")]
    Backend(String),
}

/// Figure text and dimensions. Defaults match the reference demo.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub size: (u32, u32),
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Simulated Altitude with Kalman Filtering (1D)".into(),
            x_desc: "Time".into(),
            y_desc: "Altitude (m)".into(),
            size: (1024, 640),
        }
    }
}

/// Draws every trace series as a line, plus the reference value as a dashed
/// horizontal line, into an SVG at `path`. Purely observational output; has
/// no effect on filter results.
pub fn render_line_chart<P: AsRef<Path>>(
    path: P,
    trace: &SignalTrace,
    options: &ChartOptions,
) -> Result<(), RenderError> {
    if trace.is_empty() {
        return Err(RenderError::EmptyTrace);
    }

    let (y_min, y_max) = value_bounds(trace);
    let padding = ((y_max - y_min) * 0.05).max(1e-9);
    let x_max = (trace.len().saturating_sub(1)).max(1) as f64;

    let root = SVGBackend::new(path.as_ref(), options.size).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(options.title.as_str(), ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_max, (y_min - padding)..(y_max + padding))
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc(options.x_desc.as_str())
        .y_desc(options.y_desc.as_str())
        .draw()
        .map_err(backend)?;

    for (index, series) in trace.series().iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let points = series
            .values
            .iter()
            .enumerate()
            .map(|(step, &value)| (step as f64, value));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(backend)?
            .label(series.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    if let Some((label, value)) = trace.reference() {
        let color = GREEN.to_rgba();
        chart
            .draw_series(DashedLineSeries::new(
                [(0.0, value), (x_max, value)],
                8,
                5,
                color.stroke_width(1),
            ))
            .map_err(backend)?
            .label(label.to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(1))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(backend)?;

    root.present().map_err(backend)
}

fn value_bounds(trace: &SignalTrace) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for series in trace.series() {
        for &value in &series.values {
            min = min.min(value);
            max = max.max(value);
        }
    }
    if let Some((_, value)) = trace.reference() {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}

fn backend<E: std::fmt::Display>(error: E) -> RenderError {
    RenderError::Backend(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small_trace() -> SignalTrace {
        let mut trace = SignalTrace::with_labels(["Raw", "Filtered"]);
        for (raw, filtered) in [(101.2, 101.2), (98.7, 100.1), (100.9, 100.4)] {
            trace.push_row(&[raw, filtered]).unwrap();
        }
        trace.set_reference("True Altitude", 100.0);
        trace
    }

    #[test]
    fn writes_a_chart_with_every_labeled_series() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("altitude.svg");

        render_line_chart(&path, &small_trace(), &ChartOptions::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Raw"));
        assert!(svg.contains("Filtered"));
        assert!(svg.contains("True Altitude"));
    }

    #[test]
    fn empty_trace_is_rejected_before_touching_the_backend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never.svg");

        let err = render_line_chart(&path, &SignalTrace::default(), &ChartOptions::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::EmptyTrace));
        assert!(!path.exists());
    }
}
