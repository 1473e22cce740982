//! Run identity: a SHA-256 digest over the ordered, marker-stripped URL list.
//!
//! Identical address sequences always share an identity, so storage
//! partitions persist between runs that open the same set of pages in the
//! same order. Dark markers are not part of the hashed text.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::address::Address;

/// Separator placed between URLs before hashing.
const URL_SEPARATOR: &str = "~";

/// Lowercase hex SHA-256 digest (64 characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunIdentity(String);

impl RunIdentity {
    pub fn from_urls<S: AsRef<str>>(urls: &[S]) -> Self {
        let mut hasher = Sha256::new();
        for (i, url) in urls.iter().enumerate() {
            if i > 0 {
                hasher.update(URL_SEPARATOR.as_bytes());
            }
            hasher.update(url.as_ref().as_bytes());
        }
        let digest = hasher.finalize();
        Self(digest.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn from_addresses(addresses: &[Address]) -> Self {
        let urls: Vec<&str> = addresses.iter().map(|a| a.url.as_str()).collect();
        Self::from_urls(&urls)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
