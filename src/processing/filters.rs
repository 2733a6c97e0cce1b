// src/processing/filters.rs
//! Butterworth filtering with zero-phase application
//!
//! EMG signals are band-pass filtered before rectification; force-transducer
//! signals are low-pass filtered. Filters are 4th-order Butterworth designs
//! built from cascaded second-order sections via the bilinear transform, and
//! applied forward-backward so the output has no phase distortion. Output
//! length always equals input length.

use crate::error::{SignalError, SignalResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Filter order used throughout (two cascaded second-order sections).
const FILTER_ORDER: usize = 4;

/// Band-pass cut-off configuration, passed explicitly at call sites.
///
/// Defaults follow common surface-EMG practice: 30 Hz high-pass to reject
/// motion artifact, 500 Hz low-pass below the usual EMG bandwidth ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandpassConfig {
    /// High pass cut-off (Hz)
    #[serde(default = "default_highpass_hz")]
    pub highpass_hz: f64,
    /// Low pass cut-off (Hz)
    #[serde(default = "default_lowpass_hz")]
    pub lowpass_hz: f64,
}

fn default_highpass_hz() -> f64 {
    30.0
}

fn default_lowpass_hz() -> f64 {
    500.0
}

impl Default for BandpassConfig {
    fn default() -> Self {
        Self {
            highpass_hz: default_highpass_hz(),
            lowpass_hz: default_lowpass_hz(),
        }
    }
}

/// Apply a zero-phase band-pass filter to a recorded signal (usually EMG).
///
/// The band is realized as a high-pass cascade at `config.highpass_hz`
/// followed by a low-pass cascade at `config.lowpass_hz`.
pub fn filter_bandpass(
    signal: &[f64],
    freq_hz: f64,
    config: &BandpassConfig,
) -> SignalResult<Vec<f64>> {
    if signal.is_empty() {
        return Err(SignalError::EmptyInput {
            operation: "filter_bandpass",
        });
    }
    validate_cutoff(config.highpass_hz, freq_hz)?;
    validate_cutoff(config.lowpass_hz, freq_hz)?;
    if config.highpass_hz >= config.lowpass_hz {
        return Err(SignalError::InvalidBand {
            highpass_hz: config.highpass_hz,
            lowpass_hz: config.lowpass_hz,
        });
    }

    debug!(
        highpass_hz = config.highpass_hz,
        lowpass_hz = config.lowpass_hz,
        freq_hz,
        "designing band-pass butterworth cascade"
    );

    let mut sections = butterworth_sections(config.highpass_hz, freq_hz, Band::Highpass);
    sections.extend(butterworth_sections(config.lowpass_hz, freq_hz, Band::Lowpass));
    Ok(filtfilt(&sections, signal))
}

/// Apply a zero-phase low-pass filter to a recorded transducer signal (eg. force).
pub fn filter_lowpass(signal: &[f64], freq_hz: f64, lowpass_hz: f64) -> SignalResult<Vec<f64>> {
    if signal.is_empty() {
        return Err(SignalError::EmptyInput {
            operation: "filter_lowpass",
        });
    }
    validate_cutoff(lowpass_hz, freq_hz)?;

    debug!(lowpass_hz, freq_hz, "designing low-pass butterworth cascade");

    let sections = butterworth_sections(lowpass_hz, freq_hz, Band::Lowpass);
    Ok(filtfilt(&sections, signal))
}

fn validate_cutoff(cutoff_hz: f64, freq_hz: f64) -> SignalResult<()> {
    let nyquist_hz = freq_hz / 2.0;
    if !(cutoff_hz > 0.0 && cutoff_hz < nyquist_hz) {
        return Err(SignalError::InvalidCutoff {
            cutoff_hz,
            freq_hz,
            nyquist_hz,
        });
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Band {
    Lowpass,
    Highpass,
}

/// One second-order section in Direct Form II transposed.
#[derive(Debug, Clone, Copy)]
struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
}

impl Biquad {
    /// Bilinear-transform design with pre-warped `k = tan(pi*fc/fs)` and
    /// section quality factor `q`.
    fn design(k: f64, q: f64, band: Band) -> Self {
        let k2 = k * k;
        let norm = 1.0 / (1.0 + k / q + k2);
        let (b0, b1, b2) = match band {
            Band::Lowpass => (k2 * norm, 2.0 * k2 * norm, k2 * norm),
            Band::Highpass => (norm, -2.0 * norm, norm),
        };
        Self {
            b0,
            b1,
            b2,
            a1: 2.0 * (k2 - 1.0) * norm,
            a2: (1.0 - k / q + k2) * norm,
        }
    }

    fn run(&self, signal: &[f64]) -> Vec<f64> {
        let mut z1 = 0.0;
        let mut z2 = 0.0;
        signal
            .iter()
            .map(|&x| {
                let y = self.b0 * x + z1;
                z1 = self.b1 * x - self.a1 * y + z2;
                z2 = self.b2 * x - self.a2 * y;
                y
            })
            .collect()
    }
}

/// Cascaded second-order sections of an even-order Butterworth filter.
///
/// Section quality factors come from the Butterworth pole angles:
/// `q_k = 1 / (2*cos(pi*(2k+1)/(2*order)))`.
fn butterworth_sections(cutoff_hz: f64, freq_hz: f64, band: Band) -> Vec<Biquad> {
    let k = (PI * cutoff_hz / freq_hz).tan();
    (0..FILTER_ORDER / 2)
        .map(|section| {
            let theta = PI * (2 * section + 1) as f64 / (2 * FILTER_ORDER) as f64;
            let q = 1.0 / (2.0 * theta.cos());
            Biquad::design(k, q, band)
        })
        .collect()
}

/// Forward-backward application of a section cascade.
///
/// The signal is extended at both ends by odd reflection before filtering to
/// suppress the startup transient, then filtered once forward and once in
/// reverse so the cascade's phase response cancels.
fn filtfilt(sections: &[Biquad], signal: &[f64]) -> Vec<f64> {
    let padlen = (3 * (2 * sections.len() + 1)).min(signal.len().saturating_sub(1));
    let n = signal.len();

    let mut extended = Vec::with_capacity(n + 2 * padlen);
    for i in (1..=padlen).rev() {
        extended.push(2.0 * signal[0] - signal[i]);
    }
    extended.extend_from_slice(signal);
    for i in 1..=padlen {
        extended.push(2.0 * signal[n - 1] - signal[n - 1 - i]);
    }

    let mut filtered = extended;
    for section in sections {
        filtered = section.run(&filtered);
    }
    filtered.reverse();
    for section in sections {
        filtered = section.run(&filtered);
    }
    filtered.reverse();

    filtered[padlen..padlen + n].to_vec()
}
