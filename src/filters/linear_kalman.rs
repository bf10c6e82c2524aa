use crate::filters::{FilterError, ScalarFilter};

/// Scalar instance of the general linear Kalman form.
///
/// Carries explicit state-transition (`f`) and observation (`h`)
/// coefficients and runs distinct [`predict`](Self::predict) and
/// [`correct`](Self::correct) phases, the way general filtering libraries
/// structure the recursion. With `f = h = 1` (the
/// [`constant_level`](Self::constant_level) setup) its output matches
/// [`ScalarKalman`](crate::filters::ScalarKalman) step for step.
#[derive(Debug, Clone)]
pub struct LinearKalman {
    transition: f64,
    observation: f64,
    process_noise: f64,
    measurement_noise: f64,
    variance: f64,
    estimate: f64,
}

impl LinearKalman {
    pub fn new(
        transition: f64,
        observation: f64,
        process_noise: f64,
        measurement_noise: f64,
        initial_variance: f64,
        initial_estimate: f64,
    ) -> Result<Self, FilterError> {
        for (name, value) in [
            ("transition", transition),
            ("observation", observation),
            ("process_noise", process_noise),
            ("measurement_noise", measurement_noise),
            ("initial_variance", initial_variance),
            ("initial_estimate", initial_estimate),
        ] {
            if !value.is_finite() {
                return Err(FilterError::InvalidConfiguration(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if measurement_noise <= 0.0 {
            return Err(FilterError::InvalidConfiguration(format!(
                "measurement_noise must be > 0, got {measurement_noise}"
            )));
        }
        if observation == 0.0 {
            return Err(FilterError::InvalidConfiguration(
                "observation coefficient must be non-zero".into(),
            ));
        }

        Ok(Self {
            transition,
            observation,
            process_noise,
            measurement_noise,
            variance: initial_variance,
            estimate: initial_estimate,
        })
    }

    /// The no-motion setup (`f = h = 1`): the hidden value is assumed
    /// constant and measured directly.
    pub fn constant_level(
        process_noise: f64,
        measurement_noise: f64,
        initial_variance: f64,
        initial_estimate: f64,
    ) -> Result<Self, FilterError> {
        Self::new(
            1.0,
            1.0,
            process_noise,
            measurement_noise,
            initial_variance,
            initial_estimate,
        )
    }

    /// Propagates the state through the transition model.
    pub fn predict(&mut self) {
        self.estimate = self.transition * self.estimate;
        self.variance = self.transition * self.variance * self.transition + self.process_noise;
    }

    /// Folds one measurement into the predicted state.
    pub fn correct(&mut self, measurement: f64) -> f64 {
        let residual = measurement - self.observation * self.estimate;
        let innovation_variance =
            self.observation * self.variance * self.observation + self.measurement_noise;
        let gain = self.variance * self.observation / innovation_variance;

        self.estimate += gain * residual;
        self.variance *= 1.0 - gain * self.observation;
        self.estimate
    }
}

impl ScalarFilter for LinearKalman {
    fn seed(&mut self, estimate: f64) {
        self.estimate = estimate;
    }

    fn update(&mut self, measurement: f64) -> f64 {
        if !measurement.is_finite() {
            return self.estimate;
        }
        self.predict();
        self.correct(measurement)
    }

    fn estimate(&self) -> f64 {
        self.estimate
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ScalarKalman;

    #[test]
    fn rejects_invalid_configuration() {
        assert!(matches!(
            LinearKalman::constant_level(0.01, 0.0, 1.0, 0.0),
            Err(FilterError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LinearKalman::new(f64::NAN, 1.0, 0.01, 1.0, 1.0, 0.0),
            Err(FilterError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LinearKalman::new(1.0, 0.0, 0.01, 1.0, 1.0, 0.0),
            Err(FilterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn constant_level_matches_the_simple_filter_exactly() {
        let measurements = [101.8, 98.6, 100.2, 99.1, 103.4, 97.9];
        let mut general = LinearKalman::constant_level(0.01, 1.0, 1.0, 0.0).unwrap();
        let mut simple = ScalarKalman::new(0.01, 1.0, 1.0, 0.0).unwrap();

        for &z in &measurements {
            assert_eq!(general.update(z), simple.update(z));
            assert_eq!(general.variance(), simple.variance());
        }
    }

    #[test]
    fn predict_grows_variance_and_applies_the_transition() {
        let mut kf = LinearKalman::new(2.0, 1.0, 0.5, 1.0, 1.0, 3.0).unwrap();
        kf.predict();
        assert_eq!(kf.estimate(), 6.0);
        assert_eq!(kf.variance(), 2.0 * 1.0 * 2.0 + 0.5);
    }

    #[test]
    fn correct_moves_the_estimate_toward_the_measurement() {
        let mut kf = LinearKalman::constant_level(0.0, 1.0, 1.0, 0.0).unwrap();
        kf.predict();
        let estimate = kf.correct(10.0);
        assert!((estimate - 5.0).abs() < 1e-12);
        assert!((kf.variance() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn non_finite_measurements_are_skipped() {
        let mut kf = LinearKalman::constant_level(0.01, 1.0, 1.0, 7.0).unwrap();
        assert_eq!(kf.update(f64::NAN), 7.0);
        assert_eq!(kf.variance(), 1.0);
    }
}
