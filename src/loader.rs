//! Loading program and athlete documents from disk.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::model::{Athlete, Program};

/// Read a JSON document of any deserializable type.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_program(path: &Path) -> Result<Program> {
    let program: Program = load_json(path)?;
    log::info!(
        "Loaded program '{}' ({} weeks) from {:?}",
        program.name,
        program.weeks.len(),
        path
    );
    Ok(program)
}

pub fn load_athlete(path: &Path) -> Result<Athlete> {
    let athlete: Athlete = load_json(path)?;
    log::info!("Loaded athlete profile '{}' from {:?}", athlete.name, path);
    Ok(athlete)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_program(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let path = std::env::temp_dir().join(format!("iron-instruction-{}.json", std::process::id()));
        std::fs::write(&path, "{ \"id\": 3 }").unwrap();
        let err = load_program(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, AppError::Json { .. }));
    }
}
