//! Configuration schema types for Tessera.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bootstrap;
mod system;
mod theme;
mod window;

pub use bootstrap::*;
pub use system::*;
pub use theme::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Tessera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseraConfig {
    pub bootstrap: BootstrapConfig,
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
