// src/spectral/mod.rs
//! Spectral analysis of recorded signals
//!
//! A power spectral density analysis ([`welch`]) is performed first; the band
//! locator and power-fraction calculator then operate on its `(freqs, pxx)`
//! output.

pub mod band;
pub mod events;
pub mod welch;

pub use band::{band_power_fraction, locate_band, FrequencyBand};
pub use events::{digital_edges, EdgeIndices};
pub use welch::{welch, Psd};
