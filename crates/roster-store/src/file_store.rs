use crate::{FILE_EXTENSION, LocalStore, StoreError, StoreResult};

use std::io::ErrorKind;
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::{debug, info};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// One JSON file per key inside a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    write_seq: AtomicU64,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_seq: AtomicU64::new(0),
        }
    }

    /// File backing `key`.
    ///
    /// `[A-Za-z0-9.-]` pass through. Every other byte, `_` included, becomes
    /// `_XX` (uppercase hex), so distinct keys never share a file.
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        if key.trim().is_empty() {
            return Err(StoreError::invalid_key(key));
        }

        let mut encoded = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-') {
                encoded.push(char::from(byte));
            } else {
                let _ = write!(encoded, "_{byte:02X}");
            }
        }

        Ok(self.dir.join(format!("{encoded}.{FILE_EXTENSION}")))
    }
}

#[async_trait]
impl LocalStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => {
                debug!("Read {} bytes from {path:?}", contents.len());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No stored value at {path:?}");
                Ok(None)
            }
            Err(e) => Err(StoreError::file_read(path, e)),
        }
    }

    /// Writes to a temp file, syncs it, then renames over the final path so a
    /// crash mid-write never leaves a truncated value behind.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        let temp_path = final_path.with_extension(format!(
            "{FILE_EXTENSION}.tmp.{}.{seq}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Saved {} bytes to {final_path:?}", value.len());
        Ok(())
    }
}
