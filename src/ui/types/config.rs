use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumIter, EnumMessage};

use crate::evaluation::TraceFormat;
use crate::filters::ScalarKalman;

const DEFAULT_LEVEL: f64 = 100.0;
const DEFAULT_NOISE_STD: f64 = 1.0;
const DEFAULT_SAMPLES: u64 = 100;

fn default_level() -> f64 {
    DEFAULT_LEVEL
}

fn default_noise_std() -> f64 {
    DEFAULT_NOISE_STD
}

fn default_samples() -> u64 {
    DEFAULT_SAMPLES
}

fn default_process_noise() -> f64 {
    ScalarKalman::DEFAULT_PROCESS_NOISE
}

fn default_measurement_noise() -> f64 {
    ScalarKalman::DEFAULT_MEASUREMENT_NOISE
}

fn default_initial_variance() -> f64 {
    ScalarKalman::DEFAULT_INITIAL_VARIANCE
}

/// Parameters of the simulated altitude sensor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceParameters {
    /// Constant true altitude the noisy samples are drawn around.
    #[serde(default = "default_level")]
    pub level: f64,

    /// Standard deviation of the additive Gaussian sensor noise.
    #[serde(default = "default_noise_std")]
    pub noise_std: f64,

    /// Number of samples to generate.
    #[serde(default = "default_samples")]
    pub samples: u64,

    /// PRNG seed; the reference scenario uses 0.
    #[serde(default)]
    pub seed: u64,
}

impl Default for SourceParameters {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            noise_std: DEFAULT_NOISE_STD,
            samples: DEFAULT_SAMPLES,
            seed: 0,
        }
    }
}

/// Filter configuration shared by every filter the run builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KalmanParameters {
    #[serde(default = "default_process_noise")]
    pub process_noise: f64,

    #[serde(default = "default_measurement_noise")]
    pub measurement_noise: f64,

    #[serde(default = "default_initial_variance")]
    pub initial_variance: f64,

    /// `None` seeds every filter's estimate from the first measurement;
    /// `Some(v)` starts at `v` exactly and the first update runs the full
    /// recursion.
    #[serde(default)]
    pub initial_estimate: Option<f64>,
}

impl Default for KalmanParameters {
    fn default() -> Self {
        Self {
            process_noise: ScalarKalman::DEFAULT_PROCESS_NOISE,
            measurement_noise: ScalarKalman::DEFAULT_MEASUREMENT_NOISE,
            initial_variance: ScalarKalman::DEFAULT_INITIAL_VARIANCE,
            initial_estimate: None,
        }
    }
}

/// Which filter implementations the run compares.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
    EnumMessage,
)]
pub enum FilterChoice {
    #[default]
    #[strum(
        message = "Simple",
        detailed_message = "Hand-written scalar predict/correct recursion"
    )]
    Simple,

    #[strum(
        message = "Linear",
        detailed_message = "General linear form with explicit predict and correct phases"
    )]
    Linear,

    #[strum(message = "Both", detailed_message = "Run both filters side by side")]
    Both,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputParameters {
    /// Chart destination (SVG); `None` skips rendering.
    #[serde(default)]
    pub chart_path: Option<PathBuf>,

    /// Trace export destination; `None` skips the export.
    #[serde(default)]
    pub trace_path: Option<PathBuf>,

    #[serde(default)]
    pub trace_format: TraceFormat,
}

/// Complete description of one filtering run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunConfig {
    #[serde(default)]
    pub source: SourceParameters,

    #[serde(default)]
    pub filter: KalmanParameters,

    #[serde(default)]
    pub filters: FilterChoice,

    #[serde(default)]
    pub output: OutputParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_the_reference_defaults() {
        let config: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.source.level, 100.0);
        assert_eq!(config.source.noise_std, 1.0);
        assert_eq!(config.source.samples, 100);
        assert_eq!(config.source.seed, 0);
        assert_eq!(config.filter.process_noise, 0.01);
        assert_eq!(config.filter.measurement_noise, 1.0);
        assert_eq!(config.filter.initial_variance, 1.0);
        assert_eq!(config.filter.initial_estimate, None);
        assert_eq!(config.filters, FilterChoice::Simple);
        assert!(config.output.chart_path.is_none());
        assert_eq!(config.output.trace_format, TraceFormat::Csv);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config: RunConfig = serde_json::from_str(
            r#"{"source":{"seed":42},"filter":{"initial_estimate":0.0},"filters":"Both"}"#,
        )
        .unwrap();
        assert_eq!(config.source.seed, 42);
        assert_eq!(config.source.level, 100.0);
        assert_eq!(config.filter.initial_estimate, Some(0.0));
        assert_eq!(config.filters, FilterChoice::Both);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RunConfig {
            filters: FilterChoice::Linear,
            output: OutputParameters {
                chart_path: Some(PathBuf::from("out.svg")),
                trace_path: Some(PathBuf::from("trace.tsv")),
                trace_format: TraceFormat::Tsv,
            },
            ..RunConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: RunConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.filters, FilterChoice::Linear);
        assert_eq!(back.output.trace_format, TraceFormat::Tsv);
        assert_eq!(back.output.chart_path, Some(PathBuf::from("out.svg")));
    }
}
