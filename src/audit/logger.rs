//! Append-only JSONL audit file

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{FintrackError, FintrackResult};

use super::entry::AuditEntry;

/// The audit log file, one JSON object per line
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single write
    pub fn append(&self, entry: &AuditEntry) -> FintrackResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(&line).map_err(|e| self.io_error("write", e))?;

        Ok(())
    }

    /// The last `limit` entries, oldest first; a missing file has none
    pub fn recent(&self, limit: usize) -> FintrackResult<Vec<AuditEntry>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        let mut window = VecDeque::new();
        let stream = serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>();

        for entry in stream {
            let entry = entry.map_err(|e| {
                FintrackError::Json(format!(
                    "Corrupt audit log {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
            if window.len() == limit {
                window.pop_front();
            }
            window.push_back(entry);
        }

        Ok(window.into())
    }

    fn io_error(&self, action: &str, err: io::Error) -> FintrackError {
        FintrackError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}
