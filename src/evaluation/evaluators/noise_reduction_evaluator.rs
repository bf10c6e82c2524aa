use crate::evaluation::{Estimator, Measurement, SignalEvaluator};

/// Compares the spread of the raw and filtered sequences.
///
/// Tracks one spread estimator per sequence and reports:
/// - `raw_std`: spread of the measurements as they arrived;
/// - `filtered_std`: spread of the filter's output;
/// - `reduction_ratio`: `filtered_std / raw_std` (lower is better).
///
/// All updates are online and unbounded.
#[derive(Debug, Default, Clone)]
pub struct NoiseReductionEvaluator<E: Estimator + Default> {
    raw: E,
    filtered: E,
}

impl<E: Estimator + Default> SignalEvaluator for NoiseReductionEvaluator<E> {
    fn reset(&mut self) {
        self.raw = E::default();
        self.filtered = E::default();
    }

    fn add_result(&mut self, raw: f64, filtered: f64) {
        self.raw.add(raw);
        self.filtered.add(filtered);
    }

    fn performance(&self) -> Vec<Measurement> {
        let raw_std = self.raw.estimation();
        let filtered_std = self.filtered.estimation();
        vec![
            Measurement::new("raw_std", raw_std),
            Measurement::new("filtered_std", filtered_std),
            Measurement::new("reduction_ratio", filtered_std / raw_std),
        ]
    }
}
