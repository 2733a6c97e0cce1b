// src/processing/envelope.rs
//! Moving-window envelope computation for rectified EMG signals
//!
//! The envelope of a signal is a same-length sequence where element `i` is a
//! statistic (RMS or mean) of a window centered on sample `i`. Windows are
//! truncated at both edges of the signal rather than padded or mirrored, and
//! the final index is never computed: it keeps the initial 0.0 fill value.
//! That last-index behavior is part of the output contract relied on by
//! downstream analyses and must not be "fixed" to a fully-computed policy.

use super::window::WindowSpec;
use super::StatMode;
use crate::error::{SignalError, SignalResult};

/// Compute a moving windowed statistic across an entire signal.
///
/// For each output index `i` in `[0, len-1)` the window is:
///
/// - `signal[0 .. i+halfwidth]` while `i < halfwidth` (grows from the start),
/// - `signal[i-halfwidth .. len-1]` once `i + halfwidth > len` (shrinks toward
///   the end, excluding the very last sample),
/// - the full symmetric `signal[i-halfwidth .. i+halfwidth]` otherwise.
///
/// In `Mean` mode a `normalizer` (typically an MVC reference value) converts
/// the output to a percentage via `value / normalizer * 100`; `Rms` mode never
/// normalizes. A degenerate `halfwidth` of 0 produces NaN at symmetric indices
/// (mean over an empty window).
///
/// Runs in O(n·w); each window is evaluated directly.
pub fn envelope(
    signal: &[f64],
    halfwidth: usize,
    mode: StatMode,
    normalizer: Option<f64>,
) -> SignalResult<Vec<f64>> {
    if signal.is_empty() {
        return Err(SignalError::EmptyInput {
            operation: "envelope",
        });
    }

    let n = signal.len();
    let mut out = vec![0.0; n];

    // Window is smaller at the start and the end of the signal. The loop
    // stops one short of the end, so out[n-1] keeps its fill value.
    for i in 0..n - 1 {
        let window = if i < halfwidth {
            &signal[0..(i + halfwidth).min(n)]
        } else if i + halfwidth > n {
            &signal[i - halfwidth..n - 1]
        } else {
            &signal[i - halfwidth..i + halfwidth]
        };

        let value = window_stat(window, mode);
        out[i] = match (mode, normalizer) {
            (StatMode::Mean, Some(mvc)) => value / mvc * 100.0,
            _ => value,
        };
    }

    Ok(out)
}

/// Moving root-mean-square envelope of a signal (usually rectified EMG).
pub fn moving_rms(signal: &[f64], spec: &WindowSpec) -> SignalResult<Vec<f64>> {
    envelope(signal, spec.halfwidth_samples(), StatMode::Rms, None)
}

/// Moving average envelope normalized to an MVC reference, in %MVC.
pub fn moving_mean(signal: &[f64], mvc: f64, spec: &WindowSpec) -> SignalResult<Vec<f64>> {
    envelope(signal, spec.halfwidth_samples(), StatMode::Mean, Some(mvc))
}

fn window_stat(window: &[f64], mode: StatMode) -> f64 {
    let len = window.len() as f64;
    match mode {
        StatMode::Rms => (window.iter().map(|&x| x * x).sum::<f64>() / len).sqrt(),
        StatMode::Mean => window.iter().sum::<f64>() / len,
    }
}
