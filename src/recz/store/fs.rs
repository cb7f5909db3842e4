use super::DataStore;
use crate::error::Result;
use crate::model::Record;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// File-backed store holding one JSON array.
///
/// The file is opened once and the handle kept for the process lifetime.
/// Concurrent invocations against the same file are unsupported; the last
/// writer wins.
pub struct FileStore {
    file: File,
}

impl FileStore {
    /// Open the storage file read-write, creating it if absent.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;
        Ok(Self { file })
    }
}

impl DataStore for FileStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut data = String::new();
        self.file.read_to_string(&mut data)?;

        if data.is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> = serde_json::from_str(&data)?;
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let data = serde_json::to_vec(records)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.set_len(0)?;
        self.file.write_all(&data)?;
        Ok(())
    }
}
