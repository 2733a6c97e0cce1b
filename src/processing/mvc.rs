// src/processing/mvc.rs
//! Maximum voluntary contraction (MVC) reference extraction
//!
//! Normalizing an envelope to %MVC needs a single reference scalar. The peak
//! of the MVC trial anchors a fixed-width window, and the reference value is
//! the RMS or mean over that window.

use super::window::WindowSpec;
use super::StatMode;
use crate::error::{SignalError, SignalResult};

/// Find the index and value of the global maximum of a signal.
///
/// Ties resolve to the lowest index. NaN samples never compare greater and are
/// skipped.
pub fn find_peak(signal: &[f64]) -> SignalResult<(usize, f64)> {
    if signal.is_empty() {
        return Err(SignalError::EmptyInput {
            operation: "find_peak",
        });
    }

    let mut peak_index = 0;
    let mut peak_value = signal[0];
    for (i, &value) in signal.iter().enumerate().skip(1) {
        if value > peak_value {
            peak_index = i;
            peak_value = value;
        }
    }
    Ok((peak_index, peak_value))
}

/// Average reference value over a `2*halfwidth` window centered on `peak_index`.
///
/// The window is `signal[peak_index-halfwidth .. peak_index+halfwidth]` with
/// both bounds clamped to the valid index range. Clamping the lower bound to 0
/// is required: letting it go negative would silently read from the tail of
/// the sequence under wraparound indexing. A degenerate window (halfwidth 0)
/// yields NaN.
pub fn reference(
    signal: &[f64],
    peak_index: usize,
    halfwidth: usize,
    mode: StatMode,
) -> SignalResult<f64> {
    if signal.is_empty() {
        return Err(SignalError::EmptyInput {
            operation: "reference",
        });
    }

    let start = peak_index.saturating_sub(halfwidth);
    let stop = (peak_index + halfwidth).min(signal.len());
    let window = &signal[start.min(stop)..stop];

    let len = window.len() as f64;
    let value = match mode {
        StatMode::Rms => (window.iter().map(|&x| x * x).sum::<f64>() / len).sqrt(),
        StatMode::Mean => window.iter().sum::<f64>() / len,
    };
    Ok(value)
}

/// Locate the MVC peak and compute the reference value in one step.
pub fn mvc_reference(signal: &[f64], spec: &WindowSpec, mode: StatMode) -> SignalResult<f64> {
    let (peak_index, _) = find_peak(signal)?;
    reference(signal, peak_index, spec.halfwidth_samples(), mode)
}
