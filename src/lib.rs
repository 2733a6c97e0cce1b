//! biosig-core: signal processing for biomechanics research
//!
//! This library filters, rectifies, windows, and summarizes recorded
//! electromyography (EMG) and force-transducer signals, and computes
//! spectral-power proportions from a power spectrum. It provides:
//!
//! - Zero-phase Butterworth band-pass and low-pass filtering
//! - Moving-window RMS and mean-normalized envelopes with edge-shrinking windows
//! - MVC peak location and reference-window aggregation
//! - Welch power spectral density with band location and power fractions
//! - Readers for tab-separated channel data and session log files
//!
//! Every routine is a pure (or near-pure) transform over a one-dimensional
//! `f64` sample sequence: inputs are never mutated, nothing is cached between
//! calls, and concurrent callers on independent data need no synchronization.
//!
//! # Quick Start
//!
//! ```rust
//! use biosig_core::processing::{self, StatMode, WindowSpec};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A rectified EMG trial at 2 kHz
//!     let emg: Vec<f64> = (0..4000).map(|i| (i as f64 * 0.01).sin().abs()).collect();
//!     let spec = WindowSpec::new(2000.0, 50.0);
//!
//!     // MVC reference, then envelope in %MVC
//!     let mvc = processing::mvc_reference(&emg, &spec, StatMode::Mean)?;
//!     let envelope = processing::moving_mean(&emg, mvc, &spec)?;
//!     assert_eq!(envelope.len(), emg.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod processing;
pub mod spectral;

// Re-export commonly used types for convenience
pub use config::{load_processing_config, EnvelopeConfig, ProcessingConfig};
pub use error::{BandBound, SignalError, SignalResult};
pub use processing::{
    envelope, filter_bandpass, filter_lowpass, find_peak, moving_mean, moving_rms, mvc_reference,
    rectify, reference, remove_mean, variability, StatMode, Variability, WindowSpec,
};
pub use processing::filters::BandpassConfig;
pub use spectral::{
    band_power_fraction, digital_edges, locate_band, welch, EdgeIndices, FrequencyBand, Psd,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
