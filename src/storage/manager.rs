use std::fs;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::StorageError;
use crate::model::Activity;

/// File name of the activity list inside the data directory.
const ACTIVITIES_FILE: &str = "activities.jsonl";

/// Manages JSONL-based activity persistence.
///
/// The active id is session state and is never written.
#[derive(Debug, Clone)]
pub struct ActivityManager {
    path: PathBuf,
}

impl ActivityManager {
    /// Creates a manager storing activities under `data_dir`.
    ///
    /// The directory is created if it does not already exist.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(ACTIVITIES_FILE),
        })
    }

    /// Returns the path of the activity file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all activities in stored order.
    ///
    /// A missing file yields an empty list. Blank lines are skipped.
    pub fn load(&self) -> Result<Vec<Activity>, StorageError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let activities = BufReader::new(file)
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| {
                let line = line?;
                serde_json::from_str(&line).map_err(StorageError::Json)
            })
            .collect::<Result<Vec<Activity>, StorageError>>()?;

        debug!(count = activities.len(), path = %self.path.display(), "loaded activities");
        Ok(activities)
    }

    /// Writes the complete activity list, replacing the previous file.
    pub fn save(&self, activities: &[Activity]) -> Result<(), StorageError> {
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        for activity in activities {
            serde_json::to_writer(&mut writer, activity)?;
            writeln!(writer)?;
        }
        writer.flush()?;

        debug!(count = activities.len(), path = %self.path.display(), "saved activities");
        Ok(())
    }
}
