use std::path::PathBuf;
use std::sync::Arc;

use tessera_common::{Address, Color, PaneId, RunIdentity};
use tessera_config::ThemeConfig;
use tessera_webview::{PaneWebViewConfig, StoragePartition};

use crate::boot::ResolvedBootstrap;

const FALLBACK_LIGHT: Color = Color {
    r: 0xf0,
    g: 0xf0,
    b: 0xf0,
    a: 0xff,
};
const FALLBACK_DARK: Color = Color {
    r: 0x12,
    g: 0x12,
    b: 0x12,
    a: 0xff,
};

/// Everything needed to build one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneDescriptor {
    pub pane_id: PaneId,
    pub url: String,
    pub partition: StoragePartition,
    pub background: Color,
    pub user_agent: String,
    /// Present only for panes that asked for dark rendering.
    pub dark_script: Option<Arc<str>>,
}

impl PaneDescriptor {
    pub fn dark(&self) -> bool {
        self.dark_script.is_some()
    }
}

/// Builds pane descriptors from the resolved bootstrap and run identity.
pub struct PaneFactory<'a> {
    identity: &'a RunIdentity,
    bootstrap: &'a ResolvedBootstrap,
    light: Color,
    dark: Color,
    devtools: bool,
    partitions_root: Option<PathBuf>,
}

impl<'a> PaneFactory<'a> {
    pub fn new(
        identity: &'a RunIdentity,
        bootstrap: &'a ResolvedBootstrap,
        theme: &ThemeConfig,
        devtools: bool,
    ) -> Self {
        Self {
            identity,
            bootstrap,
            light: Color::from_hex(&theme.light_background).unwrap_or(FALLBACK_LIGHT),
            dark: Color::from_hex(&theme.dark_background).unwrap_or(FALLBACK_DARK),
            devtools,
            partitions_root: None,
        }
    }

    /// Root directory for per-partition storage.
    pub fn with_partitions_root(mut self, root: PathBuf) -> Self {
        self.partitions_root = Some(root);
        self
    }

    pub fn describe(&self, address: &Address) -> PaneDescriptor {
        let dark_script = if address.dark_requested {
            self.bootstrap.dark_script.clone()
        } else {
            None
        };
        PaneDescriptor {
            pane_id: PaneId(address.index as u32),
            url: address.url.clone(),
            partition: StoragePartition::new(
                address.url.clone(),
                self.identity.clone(),
                address.index,
            ),
            background: if address.dark_requested {
                self.dark
            } else {
                self.light
            },
            user_agent: self.bootstrap.user_agent.clone(),
            dark_script,
        }
    }

    pub fn describe_all(&self, addresses: &[Address]) -> Vec<PaneDescriptor> {
        addresses.iter().map(|a| self.describe(a)).collect()
    }

    /// Webview settings for a pane. Panes start hidden until their first load.
    pub fn webview_config(&self, desc: &PaneDescriptor) -> PaneWebViewConfig {
        PaneWebViewConfig {
            url: desc.url.clone(),
            partition: desc.partition.key(),
            data_directory: self
                .partitions_root
                .as_ref()
                .map(|root| desc.partition.data_dir(root)),
            user_agent: Some(desc.user_agent.clone()),
            background: desc.background,
            devtools: self.devtools,
            visible: false,
        }
    }
}
