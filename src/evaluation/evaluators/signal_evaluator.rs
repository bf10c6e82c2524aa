use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Online evaluator of a filtering run.
///
/// A `SignalEvaluator` consumes aligned (raw, filtered) sample pairs and
/// exposes aggregated metrics via [`performance`](Self::performance).
pub trait SignalEvaluator {
    /// Clears internal state/metrics.
    fn reset(&mut self);

    /// Feeds one raw measurement and the filtered estimate produced for it.
    fn add_result(&mut self, raw: f64, filtered: f64);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;

    /// Renders the one-line console comparison of raw vs filtered spread.
    fn summary(&self) -> String {
        let metrics = self.performance();
        let lookup = |name: &str| {
            metrics
                .iter()
                .find(|m| m.name == name)
                .map_or(f64::NAN, |m| m.value)
        };
        format!(
            "Noise reduction: {:.2} -> {:.2}",
            lookup("raw_std"),
            lookup("filtered_std")
        )
    }
}

pub trait SignalEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().unwrap().1
    }
}

impl<T: SignalEvaluator + ?Sized> SignalEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
