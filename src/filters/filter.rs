/// Recursive scalar estimator fed one measurement at a time.
///
/// Implementations hold a running estimate and its uncertainty, refined via
/// [`update`]. Filters are plain mutable values owned by their caller; no
/// internal synchronization, no suspension points.
pub trait ScalarFilter: std::fmt::Debug {
    /// Overwrites the current estimate, leaving the uncertainty untouched.
    ///
    /// Callers that want a filter to start exactly at the first observed
    /// measurement call this before the first [`update`]; the update loop
    /// itself never branches on call count.
    fn seed(&mut self, estimate: f64);

    /// Performs one predict/correct step and returns the updated estimate.
    fn update(&mut self, measurement: f64) -> f64;

    /// Current best estimate of the hidden value.
    fn estimate(&self) -> f64;

    /// Current estimate variance; lower means more confident.
    fn variance(&self) -> f64;
}
