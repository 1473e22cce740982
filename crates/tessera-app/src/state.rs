//! Process-wide state built once at startup and passed by reference.

use tessera_common::{parse_addresses, Address, RunIdentity};
use tessera_config::TesseraConfig;

use crate::boot::BootstrapState;

pub struct AppState {
    pub config: TesseraConfig,
    pub addresses: Vec<Address>,
    pub identity: RunIdentity,
    /// Open devtools for each pane.
    pub devtools: bool,
    pub bootstrap: BootstrapState,
}

impl AppState {
    pub fn new<S: AsRef<str>>(config: TesseraConfig, raw_addresses: &[S], devtools: bool) -> Self {
        let addresses = parse_addresses(raw_addresses, config.theme.marker_char());
        let identity = RunIdentity::from_addresses(&addresses);
        let dark_requested = addresses.iter().any(|a| a.dark_requested);
        let bootstrap = BootstrapState::new(dark_requested, config.bootstrap.user_agent.clone());
        Self {
            config,
            addresses,
            identity,
            devtools,
            bootstrap,
        }
    }

    /// Whether any pane asked for dark rendering.
    pub fn wants_dark(&self) -> bool {
        self.addresses.iter().any(|a| a.dark_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boot::BootStage;

    #[test]
    fn light_run_starts_at_user_agent_stage() {
        let state = AppState::new(TesseraConfig::default(), &["a.com", "b.com"], false);
        assert!(!state.wants_dark());
        assert_eq!(state.bootstrap.stage(), BootStage::NeedUserAgent);
        assert_eq!(state.addresses[1].url, "https://b.com");
    }

    #[test]
    fn dark_run_starts_at_dark_stage() {
        let state = AppState::new(TesseraConfig::default(), &["^a.com", "b.com"], false);
        assert!(state.wants_dark());
        assert_eq!(state.bootstrap.stage(), BootStage::NeedDarkScript);
    }

    #[test]
    fn fixed_user_agent_skips_scrape() {
        let mut config = TesseraConfig::default();
        config.bootstrap.user_agent = Some("Mozilla/5.0 Chrome/126".into());
        let state = AppState::new(config, &["a.com"], false);
        assert_eq!(state.bootstrap.stage(), BootStage::Ready);
    }

    #[test]
    fn configured_marker_is_used() {
        let mut config = TesseraConfig::default();
        config.theme.dark_marker = "!".into();
        let state = AppState::new(config, &["!a.com", "^b.com"], false);
        assert!(state.addresses[0].dark_requested);
        assert!(!state.addresses[1].dark_requested);
        assert_eq!(state.addresses[1].url, "https://^b.com");
    }

    #[test]
    fn identity_ignores_dark_markers() {
        let a = AppState::new(TesseraConfig::default(), &["^a.com", "b.com"], false);
        let b = AppState::new(TesseraConfig::default(), &["a.com", "b.com"], false);
        assert_eq!(a.identity, b.identity);
    }
}
