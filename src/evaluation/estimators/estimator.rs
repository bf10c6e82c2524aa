/// Online scalar estimator over a stream of observations.
///
/// Implementations accept values incrementally via [`add`](Estimator::add)
/// and expose a single summary statistic via
/// [`estimation`](Estimator::estimation).
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate of the tracked statistic.
    fn estimation(&self) -> f64;
}
