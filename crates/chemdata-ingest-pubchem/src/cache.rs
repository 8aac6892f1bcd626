//! On-disk compound cache.
//!
//! One JSON file per query. The file name is the SHA-256 of the normalized
//! query (trimmed, lowercased), so names containing path separators or
//! differing only in case are safe and share one entry. The query as typed is
//! kept inside the entry.
//!
//! Entries never expire. A bad record stays until it is evicted.

use chemdata_model::CompoundRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt cache entry {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The query as the caller spelled it when the entry was written.
    pub query: String,
    pub fetched_at: DateTime<Utc>,
    pub compound: CompoundRecord,
}

#[derive(Debug, Clone)]
pub struct CompoundCache {
    dir: PathBuf,
}

impl CompoundCache {
    /// Open (and create if missing) a cache directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| CacheError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Hex SHA-256 of the normalized query.
    pub fn key(name: &str) -> String {
        let normalized = name.trim().to_lowercase();
        let digest = Sha256::digest(normalized.as_bytes());
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest.iter() {
            let _ = write!(&mut out, "{:02x}", b);
        }
        out
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::key(name)))
    }

    pub fn get(&self, name: &str) -> Result<Option<CacheEntry>, CacheError> {
        let path = self.path_for(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };
        let entry = serde_json::from_str(&text).map_err(|source| CacheError::Json { path, source })?;
        Ok(Some(entry))
    }

    /// Write (or overwrite) the entry for `name`. Returns the file written.
    pub fn put(&self, name: &str, compound: &CompoundRecord) -> Result<PathBuf, CacheError> {
        let path = self.path_for(name);
        let entry = CacheEntry {
            query: name.to_string(),
            fetched_at: Utc::now(),
            compound: compound.clone(),
        };
        let json = serde_json::to_string_pretty(&entry).map_err(|source| CacheError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| CacheError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Remove the entry for `name`. Returns whether one existed.
    pub fn evict(&self, name: &str) -> Result<bool, CacheError> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }
}
