// src/processing/mod.rs
//! Time-domain processing for recorded EMG and force signals

pub mod envelope;
pub mod filters;
pub mod mvc;
pub mod preprocess;
pub mod window;

pub use envelope::{envelope, moving_mean, moving_rms};
pub use filters::{filter_bandpass, filter_lowpass};
pub use mvc::{find_peak, mvc_reference, reference};
pub use preprocess::{rectify, remove_mean, variability, Variability};
pub use window::WindowSpec;

use crate::error::SignalError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Statistic applied to each window of a moving-window computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatMode {
    /// Root-mean-square: `sqrt(mean(x^2))`
    Rms,
    /// Arithmetic mean
    Mean,
}

impl FromStr for StatMode {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rms" => Ok(StatMode::Rms),
            "mean" => Ok(StatMode::Mean),
            other => Err(SignalError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for StatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatMode::Rms => write!(f, "rms"),
            StatMode::Mean => write!(f, "mean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("rms".parse::<StatMode>().unwrap(), StatMode::Rms);
        assert_eq!("mean".parse::<StatMode>().unwrap(), StatMode::Mean);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let err = "median".parse::<StatMode>().unwrap_err();
        match err {
            SignalError::InvalidMode(mode) => assert_eq!(mode, "median"),
            other => panic!("expected InvalidMode, got {:?}", other),
        }
    }

    #[test]
    fn test_mode_display_roundtrip() {
        for mode in [StatMode::Rms, StatMode::Mean] {
            assert_eq!(mode.to_string().parse::<StatMode>().unwrap(), mode);
        }
    }
}
