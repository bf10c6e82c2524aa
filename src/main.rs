use anyhow::{Context, Result};
use log::info;

use altus::evaluation::{MomentsEstimator, NoiseReductionEvaluator};
use altus::render::{ChartOptions, render_line_chart};
use altus::streams::GaussianLevelGenerator;
use altus::tasks::FilterRunTask;
use altus::ui::cli::drivers::InquireDriver;
use altus::ui::cli::wizard::prompt_run_config;
use altus::ui::types::build::{build_filters, load_config};

const LOG_FREQUENCY: u64 = 25;
const REFERENCE_LABEL: &str = "True Altitude";

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path).with_context(|| format!("loading config {path}"))?,
        None => prompt_run_config(&InquireDriver)?,
    };

    let source = GaussianLevelGenerator::try_from(&config.source).context("building source")?;
    let filters = build_filters(&config.filter, config.filters).context("building filters")?;
    let evaluator = Box::new(NoiseReductionEvaluator::<MomentsEstimator>::default());
    let seed_with_first = config.filter.initial_estimate.is_none();

    let mut task = FilterRunTask::new(
        Box::new(source),
        filters,
        evaluator,
        seed_with_first,
        LOG_FREQUENCY,
    )
    .context("assembling the filter run")?;
    task.run().context("filter run failed")?;
    task.trace_mut()
        .set_reference(REFERENCE_LABEL, config.source.level);

    for measurement in task.performance() {
        info!("{measurement}");
    }
    println!("{}", task.summary());

    if let Some(path) = &config.output.trace_path {
        task.trace()
            .export(path, config.output.trace_format)
            .with_context(|| format!("exporting trace to {}", path.display()))?;
        info!("trace exported to {}", path.display());
    }

    if let Some(path) = &config.output.chart_path {
        render_line_chart(path, task.trace(), &ChartOptions::default())
            .with_context(|| format!("rendering chart to {}", path.display()))?;
        println!("Chart written to {}", path.display());
    }

    Ok(())
}
