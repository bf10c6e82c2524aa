mod estimator;
mod moments_estimator;

pub use estimator::Estimator;
pub use moments_estimator::MomentsEstimator;
