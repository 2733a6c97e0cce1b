// src/config/mod.rs
//! Processing configuration
//!
//! Filter cut-offs and envelope parameters are carried in an explicit
//! configuration structure passed at call sites, so the behavior of an
//! analysis is traceable without knowing any function's default bindings.

pub mod loader;

pub use loader::load_processing_config;

use crate::processing::filters::BandpassConfig;
use crate::processing::window::WindowSpec;
use crate::processing::StatMode;
use serde::{Deserialize, Serialize};

/// Complete configuration for one analysis pass over a recorded trial.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Sampling rate of the recorded signals (Hz)
    #[serde(default = "defaults::sampling_rate_hz")]
    pub sampling_rate_hz: f64,

    /// EMG band-pass cut-offs
    #[serde(default)]
    pub bandpass: BandpassConfig,

    /// Low-pass cut-off for force-transducer signals (Hz)
    #[serde(default = "defaults::force_lowpass_hz")]
    pub force_lowpass_hz: f64,

    /// Moving-window envelope parameters
    #[serde(default)]
    pub envelope: EnvelopeConfig,
}

/// Moving-window envelope parameters.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeConfig {
    /// Window of time for moving statistics (ms)
    #[serde(default = "defaults::window_ms")]
    pub window_ms: f64,

    /// Statistic applied to each window
    #[serde(default = "defaults::mode")]
    pub mode: StatMode,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            sampling_rate_hz: defaults::sampling_rate_hz(),
            bandpass: BandpassConfig::default(),
            force_lowpass_hz: defaults::force_lowpass_hz(),
            envelope: EnvelopeConfig::default(),
        }
    }
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            window_ms: defaults::window_ms(),
            mode: defaults::mode(),
        }
    }
}

impl ProcessingConfig {
    /// Window specification for the configured envelope.
    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec::new(self.sampling_rate_hz, self.envelope.window_ms)
    }
}

/// Default value providers
mod defaults {
    use crate::processing::StatMode;

    pub fn sampling_rate_hz() -> f64 {
        2000.0
    }
    pub fn force_lowpass_hz() -> f64 {
        30.0
    }
    pub fn window_ms() -> f64 {
        50.0
    }
    pub fn mode() -> StatMode {
        StatMode::Rms
    }
}
