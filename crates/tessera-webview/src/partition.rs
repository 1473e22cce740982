//! Storage partition keys.
//!
//! A partition scopes one pane's cookies, cache, and local storage. The key
//! combines the pane URL, the run identity, and the pane index, so two panes
//! on the same URL never share storage and runs over a different address
//! sequence never see each other's state.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tessera_common::RunIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoragePartition {
    pub url: String,
    pub identity: RunIdentity,
    pub index: usize,
}

impl StoragePartition {
    pub fn new(url: impl Into<String>, identity: RunIdentity, index: usize) -> Self {
        Self {
            url: url.into(),
            identity,
            index,
        }
    }

    /// `persist:{url}~{identity}#{index}`
    pub fn key(&self) -> String {
        format!("persist:{}~{}#{}", self.url, self.identity, self.index)
    }

    /// Filesystem-safe directory name derived from the key.
    pub fn dir_name(&self) -> String {
        Sha256::digest(self.key().as_bytes())
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// Data directory for this partition under `root`.
    pub fn data_dir(&self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }
}

impl fmt::Display for StoragePartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RunIdentity {
        RunIdentity::from_urls(&["https://a.com", "https://a.com"])
    }

    #[test]
    fn key_format() {
        let id = identity();
        let p = StoragePartition::new("https://a.com", id.clone(), 1);
        assert_eq!(p.key(), format!("persist:https://a.com~{id}#1"));
        assert_eq!(p.to_string(), p.key());
    }

    #[test]
    fn same_url_different_index_is_distinct() {
        let a = StoragePartition::new("https://a.com", identity(), 0);
        let b = StoragePartition::new("https://a.com", identity(), 1);
        assert_ne!(a.key(), b.key());
        assert_ne!(a.dir_name(), b.dir_name());
    }

    #[test]
    fn different_run_is_distinct() {
        let other = RunIdentity::from_urls(&["https://a.com"]);
        let a = StoragePartition::new("https://a.com", identity(), 0);
        let b = StoragePartition::new("https://a.com", other, 0);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn dir_name_is_stable_hex() {
        let a = StoragePartition::new("https://a.com/?q=a/b", identity(), 0);
        let b = StoragePartition::new("https://a.com/?q=a/b", identity(), 0);
        assert_eq!(a.dir_name(), b.dir_name());
        assert_eq!(a.dir_name().len(), 64);
        assert!(!a.dir_name().contains('/'));
        assert_eq!(
            a.data_dir(Path::new("/data")),
            Path::new("/data").join(a.dir_name())
        );
    }
}
