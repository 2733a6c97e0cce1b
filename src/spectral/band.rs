// src/spectral/band.rs
//! Frequency-band location and spectral power proportion
//!
//! Both routines operate on the output of a power spectral density analysis
//! (see [`crate::spectral::welch`]): an array of sample frequencies and the
//! power spectrum over those bins.

use crate::error::{BandBound, SignalError, SignalResult};
use tracing::info;

/// Start and stop bounds of a nominated frequency bandwidth, located in a
/// frequency-bin array.
///
/// `start_idx <= stop_idx` holds whenever the requested band limits are
/// ordered; callers passing an inverted band get inverted indices back and
/// must handle or reject them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    /// Index of the bin nearest the lower band limit
    pub start_idx: usize,
    /// Frequency value at `start_idx` (Hz)
    pub start_val: f64,
    /// Index of the bin nearest the upper band limit
    pub stop_idx: usize,
    /// Frequency value at `stop_idx` (Hz)
    pub stop_val: f64,
}

/// Find the start and stop indices and values of a nominated frequency
/// bandwidth in an array of sample frequencies.
///
/// Each band limit resolves to the bin with the smallest absolute difference
/// to the target, first minimal match winning. Band limits above the declared
/// low-pass cut-off are rejected, since bins beyond the cut-off hold no
/// meaningful power.
pub fn locate_band(
    freqs: &[f64],
    lowpass_hz: f64,
    band_low_hz: f64,
    band_high_hz: f64,
) -> SignalResult<FrequencyBand> {
    let (start_idx, start_val) = find_nearest(freqs, lowpass_hz, band_low_hz, BandBound::Lower)?;
    let (stop_idx, stop_val) = find_nearest(freqs, lowpass_hz, band_high_hz, BandBound::Upper)?;
    Ok(FrequencyBand {
        start_idx,
        start_val,
        stop_idx,
        stop_val,
    })
}

/// Nearest index and value of a nominated frequency in a frequency array.
fn find_nearest(
    freqs: &[f64],
    lowpass_hz: f64,
    limit_hz: f64,
    bound: BandBound,
) -> SignalResult<(usize, f64)> {
    if limit_hz > lowpass_hz {
        return Err(SignalError::FrequencyOutOfRange {
            bound,
            requested_hz: limit_hz,
            lowpass_hz,
        });
    }
    if freqs.is_empty() {
        return Err(SignalError::EmptyInput {
            operation: "find_nearest",
        });
    }

    let mut idx = 0;
    let mut best = (freqs[0] - limit_hz).abs();
    for (i, &f) in freqs.iter().enumerate().skip(1) {
        let diff = (f - limit_hz).abs();
        if diff < best {
            idx = i;
            best = diff;
        }
    }
    Ok((idx, freqs[idx]))
}

/// Proportion of spectral power over a nominated frequency bandwidth, in percent.
///
/// Integrates the power spectrum with the trapezoidal rule (unit bin spacing)
/// over the full range and over the half-open slice `[start_idx, stop_idx)`
/// (`stop_idx` itself excluded), then returns `100 * band / full`. The
/// computed percentage is also reported through the log, separate from the
/// returned value.
pub fn band_power_fraction(
    power_spectrum: &[f64],
    start_idx: usize,
    stop_idx: usize,
) -> SignalResult<f64> {
    let area_full = trapezoid(power_spectrum);
    if area_full == 0.0 {
        return Err(SignalError::ZeroSpectralPower);
    }

    let start = start_idx.min(power_spectrum.len());
    let stop = stop_idx.min(power_spectrum.len());
    let area_band = if start < stop {
        trapezoid(&power_spectrum[start..stop])
    } else {
        0.0
    };

    let percent = area_band / area_full * 100.0;
    info!("proportion of power in bandwidth (%): {:.3}", percent);
    Ok(percent)
}

/// Trapezoidal integral with unit spacing. Fewer than two points integrate to 0.
fn trapezoid(y: &[f64]) -> f64 {
    y.windows(2).map(|pair| (pair[0] + pair[1]) / 2.0).sum()
}
