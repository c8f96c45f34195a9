// File: src/persistence.rs
use crate::error::{Error, Result};
use crate::overrides::Overrides;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Durable key-value storage for encoded override records, keyed by primary language subtag.
pub trait OverrideBackend: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored for `key` yet.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn store(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// One file per language inside a data directory, replaced atomically on every write.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("overrides-{key}.bin"))
    }
}

impl OverrideBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let file = match File::open(self.path_for(key)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut bytes = Vec::new();
        BufReader::new(file).read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }

    fn store(&self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Write next to the target so the final rename stays on one filesystem.
        let temp_file = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            writer.write_all(bytes)?;
            writer.flush()?;
        }
        temp_file
            .persist(self.path_for(key))
            .map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

/// Process-local backend, used by tests and by hosts that persist elsewhere.
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.records.lock().get(key).cloned())
    }

    fn store(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.records.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

pub fn encode(language: &str, overrides: &Overrides) -> Result<Vec<u8>> {
    bincode::serialize(overrides).map_err(|source| Error::Encode {
        language: language.to_string(),
        source,
    })
}

pub fn decode(language: &str, bytes: &[u8]) -> Result<Overrides> {
    bincode::deserialize(bytes).map_err(|source| Error::Decode {
        language: language.to_string(),
        source,
    })
}
