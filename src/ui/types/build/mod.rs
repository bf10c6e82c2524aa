mod error;
mod filters;
mod sources;

pub use error::BuildError;
pub use filters::{LINEAR_FILTER_LABEL, SIMPLE_FILTER_LABEL, build_filters};

use crate::ui::types::RunConfig;
use std::fs;
use std::path::Path;

/// Loads a [`RunConfig`] from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfig, BuildError> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| BuildError::InvalidParameter(format!("config parse: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_a_config_file() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(tf, r#"{{"source":{{"seed":7,"samples":10}}}}"#).unwrap();

        let config = load_config(tf.path()).unwrap();
        assert_eq!(config.source.seed, 7);
        assert_eq!(config.source.samples, 10);
    }

    #[test]
    fn malformed_json_is_an_invalid_parameter() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(tf, "not json").unwrap();

        let err = load_config(tf.path()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameter(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, BuildError::Io(_)));
    }
}
