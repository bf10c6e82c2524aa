use std::io::Error;

/// Pull-based interface for sources of scalar measurements.
///
/// Implementations may represent finite recordings or seeded synthetic
/// generators. Samples are consumed strictly in production order; the
/// downstream filtering recursion is order-dependent.
pub trait SignalSource {
    /// Indicates whether the source *may* produce more samples.
    ///
    /// Finite sources return `false` once exhausted. This call is cheap and
    /// side effect free; once it returns `false`, a subsequent
    /// [`next_sample`](Self::next_sample) must return `None`.
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the source is exhausted.
    fn next_sample(&mut self) -> Option<f64>;

    /// Resets the source to its initial state.
    ///
    /// Generators re-seed their RNG and clear internal counters, so a
    /// restarted source replays the identical sequence.
    fn restart(&mut self) -> Result<(), Error>;
}
