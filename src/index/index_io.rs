use std::fs;
use std::path::Path;

use super::{Index, IndexError};

impl Index {
    /// Serialize as a JSON object. Thai text is written as-is, not escaped.
    pub fn to_json(&self, pretty: bool) -> Result<String, IndexError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path, pretty: bool) -> Result<(), IndexError> {
        let json = self.to_json(pretty)?;
        write_atomic(path, json.as_bytes())
    }

    pub fn open(path: &Path) -> Result<Self, IndexError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Write `bytes` next to `path` and rename into place, so readers never see
/// a half-written file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), IndexError> {
    let tmp = path.with_extension("tmp");
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
