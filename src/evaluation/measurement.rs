use std::fmt::{Display, Formatter};

/// Summarized scalar metric produced by a signal evaluator.
///
/// Typical examples: `"raw_std"`, `"filtered_std"`, `"reduction_ratio"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={:.6}", self.name, self.value)
    }
}
