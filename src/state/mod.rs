//! Local state file for the managed group
//!
//! The state file records the id and last-known attributes of the one group
//! this working directory manages. It is plain JSON so it can be inspected
//! and committed alongside the configuration that produced it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};
use crate::provider::ResourceData;

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

/// Default state file name, relative to the working directory
pub const DEFAULT_STATE_PATH: &str = "sds_group.state.json";

/// On-disk representation of a managed resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    pub format_version: u32,
    pub resource_type: String,
    #[serde(flatten)]
    pub data: ResourceData,
}

impl StateFile {
    pub fn new(resource_type: &str, data: ResourceData) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            resource_type: resource_type.to_string(),
            data,
        }
    }
}

/// Handle on a state file location
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
    resource_type: String,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>, resource_type: &str) -> Self {
        Self {
            path: path.into(),
            resource_type: resource_type.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the managed resource, `None` when no state file exists
    pub fn load(&self) -> Result<Option<ResourceData>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let state: StateFile =
            serde_json::from_str(&contents).map_err(|e| StateError::ParseError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        if state.resource_type != self.resource_type {
            return Err(StateError::ResourceTypeMismatch {
                expected: self.resource_type.clone(),
                found: state.resource_type,
            }
            .into());
        }

        if state.format_version > FORMAT_VERSION {
            return Err(StateError::ParseError {
                path: self.path.display().to_string(),
                reason: format!("unsupported format_version {}", state.format_version),
            }
            .into());
        }

        Ok(Some(state.data))
    }

    /// Load the managed resource, failing when nothing is managed
    pub fn load_managed(&self) -> Result<ResourceData> {
        match self.load()? {
            Some(data) if !data.id().is_empty() => Ok(data),
            _ => Err(StateError::NotManaged.into()),
        }
    }

    /// Persist resource data. An empty id means the resource is gone, so the
    /// file is removed instead.
    pub fn save(&self, data: &ResourceData) -> Result<()> {
        if data.id().is_empty() {
            return self.remove();
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let state = StateFile::new(&self.resource_type, data.clone());
        let contents = serde_json::to_string_pretty(&state)?;
        std::fs::write(&self.path, contents)?;

        log::debug!("Saved state for {} to {}", data.id(), self.path.display());
        Ok(())
    }

    /// Remove the state file if present
    pub fn remove(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Removed state file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
