//! Local asset lookup with fallback URLs, and the resume download.
//!
//! Lookups never fail: a missing file, an unreadable directory or a bad path
//! all resolve to the fallback.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::content::AssetRef;
use crate::logging::log_asset_lookup;

/// `path` if a file exists there (relative to `root`), else `fallback`.
pub fn resolve(root: &Path, path: &str, fallback: &str) -> String {
    if root.join(path).is_file() {
        path.to_string()
    } else {
        fallback.to_string()
    }
}

pub trait AssetResolver: Send + Sync {
    fn resolve(&self, path: &str, fallback: &str) -> String;

    fn url_for(&self, asset: &AssetRef) -> String {
        self.resolve(asset.path, asset.fallback)
    }

    /// Whether a local file is present, without consulting any fallback.
    fn exists(&self, path: &str) -> bool {
        self.resolve(path, "") == path
    }
}

/// Checks the filesystem on every lookup.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetResolver for FsResolver {
    fn resolve(&self, path: &str, fallback: &str) -> String {
        let url = resolve(&self.root, path, fallback);
        log_asset_lookup(path, url == path, false);
        url
    }
}

/// Remembers whether each distinct path existed the first time it was asked for.
#[derive(Debug)]
pub struct CachedResolver {
    root: PathBuf,
    seen: Mutex<HashMap<String, bool>>,
}

impl CachedResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            seen: Mutex::new(HashMap::new()),
        }
    }

    pub fn cached_paths(&self) -> usize {
        self.seen.lock().map(|m| m.len()).unwrap_or(0)
    }
}

impl AssetResolver for CachedResolver {
    fn resolve(&self, path: &str, fallback: &str) -> String {
        let Ok(mut seen) = self.seen.lock() else {
            return resolve(&self.root, path, fallback);
        };
        let cached = seen.contains_key(path);
        let found = *seen
            .entry(path.to_string())
            .or_insert_with(|| self.root.join(path).is_file());
        log_asset_lookup(path, found, cached);
        if found {
            path.to_string()
        } else {
            fallback.to_string()
        }
    }
}

pub fn build_resolver(root: &Path, cache: bool) -> Box<dyn AssetResolver> {
    if cache {
        Box::new(CachedResolver::new(root))
    } else {
        Box::new(FsResolver::new(root))
    }
}

/// A downloadable file loaded fully into memory.
#[derive(Debug, Clone)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub etag: String,
}

/// Read a file for download. `None` when it is missing or unreadable.
pub fn load_download(root: &Path, path: &str) -> Option<Download> {
    let bytes = std::fs::read(root.join(path)).ok()?;
    let etag = format!("\"{}\"", hex::encode(Sha256::digest(&bytes)));
    Some(Download { bytes, etag })
}
