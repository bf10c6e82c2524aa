/// Fixed point of the scalar variance recursion
/// `p <- (p + q) * r / (p + q + r)`, i.e. the uncertainty a filter with
/// process noise `q > 0` and measurement noise `r > 0` settles at on a
/// constant signal.
pub fn steady_state_variance(process_noise: f64, measurement_noise: f64) -> f64 {
    0.5 * process_noise * ((1.0 + 4.0 * measurement_noise / process_noise).sqrt() - 1.0)
}
