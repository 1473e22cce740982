//! Shared validation helpers.

use tessera_common::Color;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a `#rrggbb` or `#rrggbbaa` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !value.starts_with('#') || Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a valid hex color"));
    }
}

/// Push an error unless `value` is an http(s) URL.
pub(crate) fn validate_http_url(errors: &mut Vec<String>, name: &str, value: &str) {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        errors.push(format!("{name} = {value:?} must be an http(s) URL"));
    }
}

pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
