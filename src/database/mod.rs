use crate::utils::AppError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Flat-file document store: one JSON array per collection under `data_dir`.
///
/// Cloning is cheap and clones share the per-collection write locks, so every
/// actix worker serializes writes to the same file.
#[derive(Clone)]
pub struct JsonDatabase {
    data_dir: PathBuf,
    locks: Arc<StdMutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl JsonDatabase {
    pub async fn new(data_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await?;

        log::info!("🗂️  JSON store ready at {}", data_dir.display());

        Ok(Self {
            data_dir,
            locks: Arc::new(StdMutex::new(HashMap::new())),
        })
    }

    pub fn collection<T>(&self, name: &str) -> JsonCollection<T> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            locks.entry(name.to_string()).or_default().clone()
        };

        JsonCollection {
            name: name.to_string(),
            path: self.data_dir.join(format!("{}.json", name)),
            lock,
            _marker: PhantomData,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Handle on a single collection file.
pub struct JsonCollection<T> {
    name: String,
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> Result<bool, AppError> {
        Ok(tokio::fs::try_exists(&self.path).await?)
    }

    /// Loads every record. A missing file is an empty collection.
    pub async fn read_all(&self) -> Result<Vec<T>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(|source| AppError::ParseError {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Replaces the whole collection.
    pub async fn write_all(&self, records: &[T]) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        self.persist(records).await
    }

    /// Read-modify-write under the collection lock.
    ///
    /// Nothing is written when `f` fails.
    pub async fn mutate<R, F>(&self, f: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, AppError>,
    {
        let _guard = self.lock.lock().await;

        let mut records = self.read_all().await?;
        let result = f(&mut records)?;
        self.persist(&records).await?;

        Ok(result)
    }

    async fn persist(&self, records: &[T]) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(records).map_err(|source| AppError::SerializeError {
            name: self.name.clone(),
            source,
        })?;

        // Readers never see a half-written file: write aside, then rename over.
        let tmp_path = self
            .path
            .with_file_name(format!(".{}.{}.tmp", self.name, Uuid::new_v4()));

        tokio::fs::write(&tmp_path, &json).await?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        log::debug!("💾 Persisted {} record(s) to {}", records.len(), self.path.display());

        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::JsonDatabase;
    use tempfile::TempDir;

    /// Fresh database in a temporary directory. Keep the `TempDir` alive for
    /// as long as the database is used.
    pub async fn temp_database() -> (TempDir, JsonDatabase) {
        let dir = tempfile::tempdir().unwrap();
        let db = JsonDatabase::new(dir.path()).await.unwrap();
        (dir, db)
    }
}
