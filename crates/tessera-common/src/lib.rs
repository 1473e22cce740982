pub mod address;
pub mod errors;
pub mod identity;
pub mod types;

pub use address::{parse_addresses, Address, DEFAULT_DARK_MARKER};
pub use errors::{BootstrapError, ConfigError, PlatformError, TesseraError};
pub use identity::RunIdentity;
pub use types::{Color, PaneId, Rect};

pub type Result<T> = std::result::Result<T, TesseraError>;
