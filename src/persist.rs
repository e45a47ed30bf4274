use std::fs;
use std::io;
use std::path::PathBuf;

use crate::data::Entry;
use crate::errors::*;

/// Reads and rewrites the whole entry list as one JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> JsonFile {
        JsonFile { path: path.into() }
    }

    /// A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No data file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e).chain_err(|| ErrorKind::Persistence(self.path.clone())),
        };

        let entries: Vec<Entry> = serde_json::from_str(&raw)
            .map_err(|e| ErrorKind::CorruptStore(self.path.clone(), e.to_string()))?;

        info!("Loaded {} entries from {}", entries.len(), self.path.display());

        Ok(entries)
    }

    /// Overwrites the file with `entries`, creating parent directories as needed.
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).chain_err(|| ErrorKind::Persistence(self.path.clone()))?;
        }

        fs::write(&self.path, json).chain_err(|| ErrorKind::Persistence(self.path.clone()))?;

        info!("Saved {} entries to {}", entries.len(), self.path.display());

        Ok(())
    }
}
