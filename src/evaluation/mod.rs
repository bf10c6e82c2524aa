mod estimators;
mod evaluators;
mod measurement;
mod preview;

pub use estimators::{Estimator, MomentsEstimator};
pub use evaluators::{NoiseReductionEvaluator, SignalEvaluator, SignalEvaluatorExt};
pub use measurement::Measurement;
pub use preview::{Series, SignalTrace, TraceFormat};
