use std::path::Path;

use crate::error::SpecError;

use super::types::PerformanceSpec;

/// Reads an SMPS YAML document from `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not valid SMPS YAML.
pub fn load_spec(path: &Path) -> Result<PerformanceSpec, SpecError> {
    let content = std::fs::read_to_string(path).map_err(|err| SpecError::ReadSpec {
        path: path.to_path_buf(),
        source: err,
    })?;
    parse_spec(path, &content)
}

pub(crate) fn parse_spec(path: &Path, content: &str) -> Result<PerformanceSpec, SpecError> {
    serde_yaml::from_str(content).map_err(|err| SpecError::ParseSpec {
        path: path.to_path_buf(),
        source: err,
    })
}
