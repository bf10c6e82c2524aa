use crate::streams::SignalSource;
use std::io::Error;

/// Signal source backed by a canned sample vector.
pub struct VecSource {
    pub samples: Vec<f64>,
    idx: usize,
}

impl VecSource {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, idx: 0 }
    }
}

impl SignalSource for VecSource {
    fn has_more_samples(&self) -> bool {
        self.idx < self.samples.len()
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }
        let sample = self.samples[self.idx];
        self.idx += 1;
        Some(sample)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
