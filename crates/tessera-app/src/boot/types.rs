use std::sync::Arc;

/// Bootstrap stage, derived from what is still missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    /// Dark mode was requested and the script fetch has not been attempted.
    NeedDarkScript,
    /// No user agent yet.
    NeedUserAgent,
    /// Everything panes need is available.
    Ready,
}

/// Shared bootstrap results. Only `BootstrapCoordinator` writes to it.
#[derive(Debug, Clone, Default)]
pub struct BootstrapState {
    pub(super) user_agent: Option<String>,
    pub(super) dark_script: Option<String>,
    /// One-shot flag, cleared before the fetch is attempted.
    pub(super) dark_pending: bool,
}

impl BootstrapState {
    pub fn new(dark_requested: bool, fixed_user_agent: Option<String>) -> Self {
        Self {
            user_agent: fixed_user_agent,
            dark_script: None,
            dark_pending: dark_requested,
        }
    }

    pub fn stage(&self) -> BootStage {
        if self.dark_pending {
            BootStage::NeedDarkScript
        } else if self.user_agent.is_none() {
            BootStage::NeedUserAgent
        } else {
            BootStage::Ready
        }
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn dark_script(&self) -> Option<&str> {
        self.dark_script.as_deref()
    }

    /// Immutable snapshot, available once the state is `Ready`.
    pub fn resolved(&self) -> Option<ResolvedBootstrap> {
        if self.stage() != BootStage::Ready {
            return None;
        }
        Some(ResolvedBootstrap {
            user_agent: self.user_agent.clone()?,
            dark_script: self.dark_script.as_deref().map(Arc::from),
        })
    }
}

/// What every pane is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBootstrap {
    pub user_agent: String,
    /// Script text with its activation call appended.
    pub dark_script: Option<Arc<str>>,
}
