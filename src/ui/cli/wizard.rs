use anyhow::Result;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::{
    FilterChoice, KalmanParameters, OutputParameters, RunConfig, SourceParameters,
};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct ChoiceItem {
    choice: FilterChoice,
    text: String,
}

impl Display for ChoiceItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn choice_items() -> Vec<ChoiceItem> {
    FilterChoice::iter()
        .map(|choice| {
            let label = choice
                .get_message()
                .map_or_else(|| choice.to_string(), str::to_string);
            let desc = choice.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            ChoiceItem { choice, text }
        })
        .collect()
}

fn optional_path(answer: String) -> Option<PathBuf> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Walks the user through one full run configuration.
pub fn prompt_run_config<D: PromptDriver>(driver: &D) -> Result<RunConfig> {
    let selected = inquire::Select::new("Which filter(s) should run?", choice_items())
        .with_help_message("Both runs the filters side by side for comparison")
        .prompt()?;

    prompt_parameters(driver, selected.choice)
}

/// Prompts for every scalar parameter; split from the filter selection so
/// the flow is testable with a scripted driver.
pub fn prompt_parameters<D: PromptDriver>(driver: &D, choice: FilterChoice) -> Result<RunConfig> {
    let source_defaults = SourceParameters::default();
    let level = driver.ask_f64(
        "True altitude (m)",
        "Constant level the noisy samples are drawn around",
        source_defaults.level,
        None,
    )?;
    let noise_std = driver.ask_f64(
        "Sensor noise std dev",
        "Standard deviation of the simulated measurement noise",
        source_defaults.noise_std,
        Some(0.0),
    )?;
    let samples = driver.ask_u64(
        "Samples",
        "How many measurements to simulate",
        source_defaults.samples,
        Some(1),
    )?;
    let seed = driver.ask_u64(
        "Seed",
        "PRNG seed, same seed replays the same noise",
        source_defaults.seed,
        None,
    )?;

    let filter_defaults = KalmanParameters::default();
    let process_noise = driver.ask_f64(
        "Process noise (q)",
        "How fast the estimate's uncertainty grows between samples",
        filter_defaults.process_noise,
        Some(0.0),
    )?;
    let measurement_noise = driver.ask_f64(
        "Measurement noise (r)",
        "Assumed sensor error variance, must be positive",
        filter_defaults.measurement_noise,
        None,
    )?;
    let initial_variance = driver.ask_f64(
        "Initial variance (p)",
        "Uncertainty of the starting estimate",
        filter_defaults.initial_variance,
        Some(0.0),
    )?;

    let seed_from_first = driver.ask_bool(
        "Seed the estimate from the first measurement?",
        "Otherwise the filters start from a fixed initial estimate",
        true,
    )?;
    let initial_estimate = if seed_from_first {
        None
    } else {
        Some(driver.ask_f64(
            "Initial estimate (x)",
            "Starting estimate of the hidden value",
            0.0,
            None,
        )?)
    };

    let chart = driver.ask_string(
        "Chart output path",
        "Leave blank to skip rendering",
        "altitude.svg",
    )?;
    let trace = driver.ask_string(
        "Trace export path (CSV)",
        "Leave blank to skip the export",
        "",
    )?;

    Ok(RunConfig {
        source: SourceParameters {
            level,
            noise_std,
            samples,
            seed,
        },
        filter: KalmanParameters {
            process_noise,
            measurement_noise,
            initial_variance,
            initial_estimate,
        },
        filters: choice,
        output: OutputParameters {
            chart_path: optional_path(chart),
            trace_path: optional_path(trace),
            trace_format: Default::default(),
        },
    })
}
