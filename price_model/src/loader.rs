//! Artifact loading with serialization-format fallback
//!
//! Model artifacts are exported by offline training pipelines in either JSON
//! or bincode. The loader does not require callers to know which: JSON is
//! attempted first, then the same bytes are retried as bincode.

use std::fs;
use std::path::Path;

use crate::error::{ModelError, Result};
use crate::handle::ModelHandle;
use crate::models::ModelArtifact;

/// Deserialize a model artifact from `path` and return an opaque handle.
pub fn load_model(path: &Path) -> Result<ModelHandle> {
    let bytes = fs::read(path)?;
    let artifact = decode_artifact(&bytes).ok_or_else(|| {
        ModelError::LoadError(format!(
            "{} is not a recognized artifact format",
            path.display()
        ))
    })?;
    Ok(artifact.into_handle())
}

fn decode_artifact(bytes: &[u8]) -> Option<ModelArtifact> {
    if let Ok(artifact) = serde_json::from_slice(bytes) {
        return Some(artifact);
    }
    bincode::deserialize(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AutoArimaModel, StateSpaceModel};
    use chrono::Utc;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_artifact(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_json_artifact_loads() {
        let artifact = ModelArtifact::StateSpace(StateSpaceModel::new(10.0, 1.0, 0.5, Utc::now()));
        let file = write_artifact(&serde_json::to_vec(&artifact).unwrap());

        let handle = load_model(file.path()).unwrap();
        assert!(crate::adapter::forecast(&handle, 3).is_ok());
    }

    #[test]
    fn test_bincode_artifact_loads_after_json_miss() {
        let artifact = ModelArtifact::AutoArima(AutoArimaModel::new(
            vec![0.7],
            5.0,
            vec![50.0, 55.0],
            Utc::now(),
        ));
        let file = write_artifact(&bincode::serialize(&artifact).unwrap());

        let handle = load_model(file.path()).unwrap();
        assert!(crate::adapter::forecast(&handle, 2).is_ok());
    }

    #[test]
    fn test_unrecognized_bytes_fail_to_load() {
        let file = write_artifact(b"definitely not a model");
        let err = load_model(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::LoadError(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_model(Path::new("/nonexistent/onion.model")).unwrap_err();
        assert!(matches!(err, ModelError::IoError(_)));
    }
}
