//! Live record storage backed by files in a private directory.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::debug;
use uuid::Uuid;

use crate::ports::storage::{BoxError, CreateOutcome, RecordStorage};

/// Age after which an orphaned staging file may be deleted. Live writers
/// hold theirs for milliseconds.
pub const STALE_STAGING_AGE: Duration = Duration::from_secs(10 * 60);

/// Directory-backed storage where each key is one file under `root`.
///
/// Records are staged in a uniquely named temporary file and hard-linked
/// into place. The link fails with `AlreadyExists` when another writer got
/// there first, which makes creation atomic across threads and processes
/// and keeps partially written records invisible to readers.
///
/// On filesystems without hard links the record is created directly with
/// an exclusive open instead. Staging files left behind by a writer that died
/// mid-write are removed once they are older than [`STALE_STAGING_AGE`].
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `root`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the storage root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn staging_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()))
    }

    /// Deletes staging files for `key` last modified before `cutoff`.
    fn remove_stale_staging(&self, key: &str, cutoff: SystemTime) {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return;
        };
        let prefix = format!(".{key}.");
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !(name.starts_with(&prefix) && name.ends_with(".tmp")) {
                continue;
            }
            let stale = entry
                .metadata()
                .and_then(|m| m.modified())
                .is_ok_and(|modified| modified < cutoff);
            if stale && fs::remove_file(entry.path()).is_ok() {
                debug!(file = %name, "removed orphaned staging file");
            }
        }
    }
}

impl RecordStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, BoxError> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn create_if_absent(&self, key: &str, contents: &str) -> Result<CreateOutcome, BoxError> {
        fs::create_dir_all(&self.root)?;
        if let Some(cutoff) = SystemTime::now().checked_sub(STALE_STAGING_AGE) {
            self.remove_stale_staging(key, cutoff);
        }

        let target = self.record_path(key);
        let staging = self.staging_path(key);
        if let Err(err) = write_synced(&staging, contents) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }

        let linked = fs::hard_link(&staging, &target);
        let _ = fs::remove_file(&staging);

        match linked {
            Ok(()) => Ok(CreateOutcome::Created),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CreateOutcome::Existing(fs::read_to_string(&target)?))
            }
            Err(err) if err.kind() == io::ErrorKind::Unsupported => {
                debug!("hard links unsupported, creating record with an exclusive open");
                Ok(create_exclusive(&target, contents)?)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn location(&self, key: &str) -> String {
        self.record_path(key).display().to_string()
    }
}

/// Creates `target` with an exclusive open, for filesystems without links.
fn create_exclusive(target: &Path, contents: &str) -> io::Result<CreateOutcome> {
    match write_synced(target, contents) {
        Ok(()) => Ok(CreateOutcome::Created),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Ok(CreateOutcome::Existing(fs::read_to_string(target)?))
        }
        Err(err) => Err(err),
    }
}

fn write_synced(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::options().write(true).create_new(true).open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
