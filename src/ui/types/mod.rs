pub mod build;
mod config;

pub use config::{FilterChoice, KalmanParameters, OutputParameters, RunConfig, SourceParameters};
