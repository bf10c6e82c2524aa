use crate::filters::{LinearKalman, ScalarFilter, ScalarKalman};
use crate::ui::types::{FilterChoice, KalmanParameters, build::BuildError};

pub const SIMPLE_FILTER_LABEL: &str = "Simple Kalman Filter";
pub const LINEAR_FILTER_LABEL: &str = "Linear Kalman Filter";

/// Builds the labeled filter list a run compares.
///
/// When `initial_estimate` is `None` the filters are constructed at the
/// documented default (0.0) and the run seeds them from the first
/// measurement.
pub fn build_filters(
    parameters: &KalmanParameters,
    choice: FilterChoice,
) -> Result<Vec<(String, Box<dyn ScalarFilter>)>, BuildError> {
    let initial_estimate = parameters
        .initial_estimate
        .unwrap_or(ScalarKalman::DEFAULT_INITIAL_ESTIMATE);

    let mut filters: Vec<(String, Box<dyn ScalarFilter>)> = Vec::new();

    if matches!(choice, FilterChoice::Simple | FilterChoice::Both) {
        let filter = ScalarKalman::new(
            parameters.process_noise,
            parameters.measurement_noise,
            parameters.initial_variance,
            initial_estimate,
        )?;
        filters.push((SIMPLE_FILTER_LABEL.into(), Box::new(filter)));
    }

    if matches!(choice, FilterChoice::Linear | FilterChoice::Both) {
        let filter = LinearKalman::constant_level(
            parameters.process_noise,
            parameters.measurement_noise,
            parameters.initial_variance,
            initial_estimate,
        )?;
        filters.push((LINEAR_FILTER_LABEL.into(), Box::new(filter)));
    }

    Ok(filters)
}
