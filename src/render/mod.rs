mod chart;

pub use chart::{ChartOptions, RenderError, render_line_chart};
