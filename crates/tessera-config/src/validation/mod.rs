//! Full configuration validation.
//!
//! Checks URLs, colors, timeouts, and the dark marker, collecting every
//! problem into a single `ConfigError`.

mod helpers;


use crate::schema::TesseraConfig;
use tessera_common::ConfigError;

use helpers::{validate_color, validate_http_url, validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TesseraConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_bootstrap(&mut errors, config);
    validate_theme(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_bootstrap(errors: &mut Vec<String>, config: &TesseraConfig) {
    let b = &config.bootstrap;
    validate_http_url(errors, "bootstrap.user_agent_url", &b.user_agent_url);
    validate_http_url(errors, "bootstrap.dark_script_url", &b.dark_script_url);
    validate_non_empty(errors, "bootstrap.user_agent_selector", &b.user_agent_selector);
    validate_non_empty(errors, "bootstrap.user_agent_marker", &b.user_agent_marker);
    if let Some(ua) = &b.user_agent {
        validate_non_empty(errors, "bootstrap.user_agent", ua);
    }
    validate_range(
        errors,
        "bootstrap.connect_timeout_secs",
        b.connect_timeout_secs,
        1,
        300,
    );
    validate_range(errors, "bootstrap.timeout_secs", b.timeout_secs, 1, 300);
}

fn validate_theme(errors: &mut Vec<String>, config: &TesseraConfig) {
    let t = &config.theme;
    validate_color(errors, "theme.light_background", &t.light_background);
    validate_color(errors, "theme.dark_background", &t.dark_background);
    if t.dark_marker.chars().count() != 1 {
        errors.push(format!(
            "theme.dark_marker = {:?} must be exactly one character",
            t.dark_marker
        ));
    }
}
