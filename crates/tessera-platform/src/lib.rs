pub mod browser;
pub mod paths;

pub use browser::{ExternalBrowser, SystemBrowser};
pub use paths::{data_dir, ensure_dir, partitions_dir};
