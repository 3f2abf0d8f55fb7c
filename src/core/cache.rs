//! Two-tier cache for API payloads that never change once final
//!
//! - L1: in-memory LRU cache for repeated lookups within a run
//! - L2: JSON files under the user cache directory, shared between runs
//!
//! Disk reads promote entries into memory. Disk write failures are reported
//! to the caller but never poison the memory tier.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::cli::types::ids::WarTag;

/// Path: ~/.cache/cwl-perf
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("cwl-perf")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Key usable for both the memory and the disk tier
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File stem used for the disk tier; must be filesystem safe
    fn to_file_key(&self) -> String;

    fn to_file_path(&self, root: &Path) -> PathBuf {
        root.join(format!("{}.json", self.to_file_key()))
    }
}

/// Cache key for a single league war
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WarCacheKey {
    pub war_tag: WarTag,
}

impl CacheKey for WarCacheKey {
    fn to_file_key(&self) -> String {
        format!("war_{}", self.war_tag.as_str().trim_start_matches('#'))
    }
}

/// Cache combining an LRU memory tier with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Arc<Mutex<LruCache<K, V>>>,
    memory_capacity: usize,
    root: PathBuf,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a cache persisting under [`cache_root`]
    pub fn new(memory_capacity: usize) -> Self {
        Self::with_root(memory_capacity, cache_root())
    }

    /// Create a cache persisting under `root`
    pub fn with_root(memory_capacity: usize, root: PathBuf) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            memory_capacity: capacity.get(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Ok(mut memory) = self.memory_cache.lock() {
            if let Some(value) = memory.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.get_from_disk(key)?;
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key.clone(), value.clone());
        }
        Some(value)
    }

    /// Put an item into both tiers; the memory tier is updated even if the disk write fails
    pub fn put(&self, key: K, value: V) -> std::io::Result<()> {
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key.clone(), value.clone());
        }

        self.put_to_disk(&key, &value)
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path(&self.root);
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let path = key.to_file_path(&self.root);
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }

    /// Drop an entry from both tiers
    pub fn invalidate(&self, key: &K) -> std::io::Result<()> {
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.pop(key);
        }

        let path = key.to_file_path(&self.root);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.clear();
        }
    }

    /// (entries in memory, memory capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        let used = self
            .memory_cache
            .lock()
            .map(|memory| memory.len())
            .unwrap_or(0);
        (used, self.memory_capacity)
    }
}
