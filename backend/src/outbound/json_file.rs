//! Whole-document JSON files inside a capability-scoped data directory.
//!
//! Reads treat a missing file as absent. Writes pretty-print with four-space
//! indentation, keep non-ASCII characters as UTF-8 and replace the target
//! through a temporary file and rename so a crash never leaves half a file.
//! Filesystem calls run on the blocking pool.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cap_std::fs::{Dir, OpenOptions};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Failure reading or writing a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonFileError {
    /// The file exists but does not decode into the expected shape.
    #[error("{file} is not valid JSON: {message}")]
    Malformed { file: String, message: String },
    /// The filesystem refused the read or write.
    #[error("{file} could not be accessed: {message}")]
    Io { file: String, message: String },
}

/// A single JSON file, addressed by name within a directory handle.
#[derive(Clone)]
pub struct JsonFile {
    dir: Arc<Dir>,
    name: String,
}

impl JsonFile {
    /// `name` must be a plain file name; cap-std rejects paths escaping `dir`.
    pub fn new(dir: Arc<Dir>, name: impl Into<String>) -> Self {
        Self {
            dir,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Decode the file, or `None` when it does not exist.
    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, JsonFileError> {
        let dir = Arc::clone(&self.dir);
        let name = self.name.clone();
        let contents = tokio::task::spawn_blocking(move || match dir.read_to_string(&name) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await
        .map_err(|err| self.io_error(err))?
        .map_err(|err| self.io_error(err))?;

        contents
            .map(|text| {
                serde_json::from_str(&text).map_err(|err| JsonFileError::Malformed {
                    file: self.name.clone(),
                    message: err.to_string(),
                })
            })
            .transpose()
    }

    /// Replace the file with `value`.
    pub async fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), JsonFileError> {
        let bytes = to_pretty_json(value).map_err(|err| self.io_error(err))?;
        let dir = Arc::clone(&self.dir);
        let name = self.name.clone();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &name, &bytes))
            .await
            .map_err(|err| self.io_error(err))?
            .map_err(|err| self.io_error(err))
    }

    fn io_error(&self, err: impl ToString) -> JsonFileError {
        JsonFileError::Io {
            file: self.name.clone(),
            message: err.to_string(),
        }
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut bytes = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(bytes)
}

fn write_atomic(dir: &Dir, name: &str, contents: &[u8]) -> io::Result<()> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{name}.tmp.{}.{counter}", std::process::id());

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let written = dir.open_with(&tmp_name, &options).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    let renamed = written.and_then(|()| replace(dir, &tmp_name, name));
    if renamed.is_err() {
        if let Err(error) = dir.remove_file(&tmp_name) {
            debug!(file = %tmp_name, %error, "temporary file not removed");
        }
    }
    renamed
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}
