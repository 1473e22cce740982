//! Pre-window bootstrap.
//!
//! Resolves the shared user agent and, when any pane asks for it, the
//! dark-mode injection script. Stages run strictly in order
//! (`NeedDarkScript -> NeedUserAgent -> Ready`) and each runs at most once
//! per process; the window is only built after `Ready`.

mod sequence;
mod source;
mod types;
mod user_agent;


pub use sequence::BootstrapCoordinator;
pub use source::{BootstrapSource, HttpSource};
pub use types::{BootStage, BootstrapState, ResolvedBootstrap};
pub use user_agent::select_user_agent;
