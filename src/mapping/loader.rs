// src/mapping/loader.rs
//
// Resolves mapping names to files under a mappings directory and reads them.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::cleaner::clean_mapping;
use crate::error::MappingError;

/// Extension appended to mapping names that don't already carry it.
pub const MAPPING_EXTENSION: &str = ".txt";

/// Default mappings directory name, looked up next to the executable.
pub const DEFAULT_MAPPINGS_DIR: &str = "mappings";

/// Loads mapping files from a single base directory.
#[derive(Clone, Debug)]
pub struct MappingLoader {
    base_dir: PathBuf,
}

impl MappingLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Loader rooted at `mappings/` beside the running executable.
    /// Falls back to `./mappings` if the executable path is unavailable.
    pub fn beside_executable() -> Self {
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_MAPPINGS_DIR)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPINGS_DIR));
        Self::new(base)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path a mapping name refers to. Names containing `.txt` anywhere are
    /// used as given; all others get `.txt` appended.
    pub fn resolve(&self, name: &str) -> PathBuf {
        if name.contains(MAPPING_EXTENSION) {
            self.base_dir.join(name)
        } else {
            self.base_dir.join(format!("{}{}", name, MAPPING_EXTENSION))
        }
    }

    /// Raw contents of the named mapping.
    pub fn load(&self, name: &str) -> Result<String, MappingError> {
        let path = self.resolve(name);
        debug!("[mapping] Loading '{}' from {}", name, path.display());

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!("[mapping] Read {} bytes", text.len());
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(MappingError::NotFound { path }),
            Err(source) => Err(MappingError::Unreadable { path, source }),
        }
    }

    /// Contents of the named mapping, cleaned to a single line.
    pub fn load_clean(&self, name: &str) -> Result<String, MappingError> {
        self.load(name).map(|text| clean_mapping(&text))
    }
}

// ============================================================================
// Tests
// ============================================================================
