use tessera_common::BootstrapError;
use tessera_config::BootstrapConfig;
use tracing::{info, warn};

use super::source::BootstrapSource;
use super::types::{BootStage, BootstrapState, ResolvedBootstrap};
use super::user_agent::select_user_agent;

/// Drives `BootstrapState` to `Ready`, one stage at a time.
pub struct BootstrapCoordinator<S> {
    source: S,
    config: BootstrapConfig,
}

impl<S: BootstrapSource> BootstrapCoordinator<S> {
    pub fn new(source: S, config: BootstrapConfig) -> Self {
        Self { source, config }
    }

    /// Run every outstanding stage and return the resolved snapshot.
    ///
    /// Calling this again on a resolved state performs no fetches. Any
    /// stage failure is returned as-is and must abort startup.
    pub async fn resolve(
        &self,
        state: &mut BootstrapState,
    ) -> Result<ResolvedBootstrap, BootstrapError> {
        loop {
            match state.stage() {
                BootStage::NeedDarkScript => self.run_dark_stage(state).await?,
                BootStage::NeedUserAgent => self.run_user_agent_stage(state).await?,
                BootStage::Ready => break,
            }
        }
        state.resolved().ok_or_else(|| self.no_user_agent())
    }

    async fn run_dark_stage(&self, state: &mut BootstrapState) -> Result<(), BootstrapError> {
        state.dark_pending = false;
        let url = &self.config.dark_script_url;
        info!(url = %url, "fetching dark-mode script");

        let script = self.source.fetch_text(url).await?;
        if script.trim().is_empty() {
            warn!(url = %url, "dark-mode script is empty");
        }
        state.dark_script = Some(format!("{script};{}", self.config.dark_activation));
        Ok(())
    }

    async fn run_user_agent_stage(&self, state: &mut BootstrapState) -> Result<(), BootstrapError> {
        let url = &self.config.user_agent_url;
        info!(url = %url, "discovering user agent");

        let html = self.source.fetch_text(url).await?;
        let user_agent = select_user_agent(
            &html,
            &self.config.user_agent_selector,
            &self.config.user_agent_marker,
        )?
        .ok_or_else(|| self.no_user_agent())?;

        info!(user_agent = %user_agent, "user agent selected");
        state.user_agent = Some(user_agent);
        Ok(())
    }

    fn no_user_agent(&self) -> BootstrapError {
        BootstrapError::NoUserAgent {
            url: self.config.user_agent_url.clone(),
            marker: self.config.user_agent_marker.clone(),
        }
    }
}
