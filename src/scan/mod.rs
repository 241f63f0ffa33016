pub mod filesystem;

use crate::error::{RepocheckError, Result};
use crate::types::snapshot::RepositorySnapshot;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub source: PathBuf,
    pub snapshot: RepositorySnapshot,
}

/// Reads snapshots from a JSON file (one object or an array) or from every
/// `*.json` file below a directory.
pub fn load_snapshots(path: &Path) -> Result<Vec<LoadedSnapshot>> {
    if !path.exists() {
        return Err(RepocheckError::PathNotFound(path.display().to_string()));
    }

    let files = if path.is_dir() {
        filesystem::list_json_files(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut loaded = Vec::new();
    for file in files {
        let snapshots = read_document(&file)?;
        debug!(source = %file.display(), count = snapshots.len(), "loaded snapshots");
        loaded.extend(snapshots.into_iter().map(|snapshot| LoadedSnapshot {
            source: file.clone(),
            snapshot,
        }));
    }
    Ok(loaded)
}

pub fn load_all(paths: &[PathBuf]) -> Result<Vec<LoadedSnapshot>> {
    let mut loaded = Vec::new();
    for path in paths {
        loaded.extend(load_snapshots(path)?);
    }
    Ok(loaded)
}

fn read_document(path: &Path) -> Result<Vec<RepositorySnapshot>> {
    let content = std::fs::read_to_string(path)?;
    let parse_error = |e: serde_json::Error| {
        RepocheckError::SnapshotParse(format!("{}: {}", path.display(), e))
    };
    // Dispatch on the document shape so field errors are reported as-is.
    let snapshots = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<RepositorySnapshot>>(&content).map_err(parse_error)?
    } else {
        vec![serde_json::from_str::<RepositorySnapshot>(&content).map_err(parse_error)?]
    };

    for snapshot in &snapshots {
        for field in snapshot.unknown_fields() {
            warn!(
                source = %path.display(),
                repository = %snapshot.identity.full_name(),
                field,
                "ignoring unknown snapshot field"
            );
        }
    }
    Ok(snapshots)
}
