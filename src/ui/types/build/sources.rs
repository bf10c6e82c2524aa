use crate::streams::GaussianLevelGenerator;
use crate::ui::types::{SourceParameters, build::BuildError};
use std::convert::TryFrom;

impl TryFrom<&SourceParameters> for GaussianLevelGenerator {
    type Error = BuildError;

    fn try_from(parameters: &SourceParameters) -> Result<Self, Self::Error> {
        let samples = usize::try_from(parameters.samples)
            .map_err(|_| BuildError::InvalidParameter("samples too large for usize".into()))?;

        GaussianLevelGenerator::new(
            parameters.level,
            parameters.noise_std,
            Some(samples),
            parameters.seed,
        )
        .map_err(BuildError::from)
    }
}
