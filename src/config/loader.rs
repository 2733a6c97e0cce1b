// src/config/loader.rs
//! TOML configuration loader

use crate::config::ProcessingConfig;
use crate::error::{SignalError, SignalResult};
use std::path::Path;
use tracing::debug;

/// Load a [`ProcessingConfig`] from a TOML file.
///
/// Missing keys fall back to their documented defaults; unknown keys are an
/// error so a typo cannot silently deactivate a setting.
pub fn load_processing_config(path: impl AsRef<Path>) -> SignalResult<ProcessingConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let config = parse_processing_config(&text)?;
    debug!(path = %path.display(), "loaded processing configuration");
    Ok(config)
}

fn parse_processing_config(text: &str) -> SignalResult<ProcessingConfig> {
    toml::from_str(text).map_err(|e| SignalError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_processing_config(
            r#"
            sampling_rate_hz = 4000.0
            force_lowpass_hz = 20.0

            [bandpass]
            highpass_hz = 20.0
            lowpass_hz = 450.0

            [envelope]
            window_ms = 100.0
            mode = "mean"
            "#,
        )
        .unwrap();
        assert_eq!(config.sampling_rate_hz, 4000.0);
        assert_eq!(config.bandpass.highpass_hz, 20.0);
        assert_eq!(config.envelope.window_ms, 100.0);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = parse_processing_config("").unwrap();
        assert_eq!(config, ProcessingConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = parse_processing_config("sampling_rate_hz = ").unwrap_err();
        assert!(matches!(err, SignalError::Config(_)));
    }

    #[test]
    fn test_invalid_mode_string_is_a_config_error() {
        let err = parse_processing_config(
            r#"
            [envelope]
            mode = "median"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SignalError::Config(_)));
    }
}
