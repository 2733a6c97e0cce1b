// src/spectral/welch.rs
//! Welch power spectral density estimate
//!
//! Produces the `(freqs, pxx)` pair consumed by the band locator and the
//! power-fraction calculator: Hann-windowed segments with 50% overlap,
//! one-sided density normalization in V²/Hz, averaged across segments.

use crate::error::{SignalError, SignalResult};
use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

/// One-sided power spectral density estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Psd {
    /// Sample frequencies (Hz), `nperseg/2 + 1` bins from DC to Nyquist
    pub freqs: Vec<f64>,
    /// Power spectral density per bin (V²/Hz)
    pub pxx: Vec<f64>,
}

/// Estimate the power spectral density of a signal using Welch's method.
///
/// `nperseg` is the segment length; it is clamped to the signal length, and 0
/// selects a single segment spanning the whole signal. Overlap is fixed at
/// 50%.
pub fn welch(signal: &[f64], freq_hz: f64, nperseg: usize) -> SignalResult<Psd> {
    if signal.is_empty() {
        return Err(SignalError::EmptyInput { operation: "welch" });
    }

    let nperseg = if nperseg == 0 {
        signal.len()
    } else {
        nperseg.min(signal.len())
    };
    let noverlap = nperseg / 2;
    let hop = nperseg - noverlap;

    let window = hann_window(nperseg);
    // density normalization uses the window power, not the segment length
    let win_norm: f64 = window.iter().map(|w| w * w).sum();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(nperseg);

    let n_freq = nperseg / 2 + 1;
    let mut accum = vec![0.0; n_freq];
    let mut segments = 0usize;

    let mut start = 0;
    loop {
        let mut buf: Vec<Complex<f64>> = signal[start..start + nperseg]
            .iter()
            .zip(window.iter())
            .map(|(&x, &w)| Complex::new(x * w, 0.0))
            .collect();
        fft.process(&mut buf);

        for (k, value) in accum.iter_mut().enumerate() {
            let mut v = buf[k].norm_sqr() / (freq_hz * win_norm);
            // one-sided spectrum doubles every bin except DC and Nyquist
            if k != 0 && !(nperseg % 2 == 0 && k == nperseg / 2) {
                v *= 2.0;
            }
            *value += v;
        }
        segments += 1;

        if start + hop + nperseg > signal.len() || hop == 0 {
            break;
        }
        start += hop;
    }

    let inv = 1.0 / segments as f64;
    for v in &mut accum {
        *v *= inv;
    }

    let freqs = (0..n_freq)
        .map(|k| k as f64 * freq_hz / nperseg as f64)
        .collect();

    Ok(Psd { freqs, pxx: accum })
}

fn hann_window(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    let nm1 = (n - 1) as f64;
    (0..n)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / nm1).cos()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(freq_hz: f64, fs: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / fs).sin())
            .collect()
    }

    #[test]
    fn test_welch_output_dimensions() {
        let signal = tone(50.0, 1000.0, 2048);
        let psd = welch(&signal, 1000.0, 256).unwrap();
        assert_eq!(psd.freqs.len(), 129);
        assert_eq!(psd.pxx.len(), 129);
        assert_eq!(psd.freqs[0], 0.0);
        assert!((psd.freqs[128] - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_welch_peak_at_tone_frequency() {
        // 125 Hz lands exactly on bin 32 for nperseg 256 at 1 kHz
        let signal = tone(125.0, 1000.0, 4096);
        let psd = welch(&signal, 1000.0, 256).unwrap();

        let peak_bin = psd
            .pxx
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 32);
        assert!((psd.freqs[peak_bin] - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_welch_total_power_approximates_signal_power() {
        // unit-amplitude sine carries power 0.5
        let signal = tone(125.0, 1000.0, 8192);
        let psd = welch(&signal, 1000.0, 256).unwrap();
        let df = 1000.0 / 256.0;
        let total: f64 = psd.pxx.iter().sum::<f64>() * df;
        assert!((total - 0.5).abs() < 0.1, "total power {}", total);
    }

    #[test]
    fn test_welch_nperseg_clamped_to_signal_length() {
        let signal = tone(10.0, 100.0, 64);
        let psd = welch(&signal, 100.0, 1024).unwrap();
        assert_eq!(psd.freqs.len(), 33);
    }

    #[test]
    fn test_welch_empty_signal() {
        assert!(matches!(
            welch(&[], 1000.0, 256).unwrap_err(),
            SignalError::EmptyInput { .. }
        ));
    }

    #[test]
    fn test_welch_feeds_band_power_fraction() {
        use crate::spectral::band::{band_power_fraction, locate_band};

        let signal = tone(125.0, 1000.0, 4096);
        let psd = welch(&signal, 1000.0, 256).unwrap();
        let band = locate_band(&psd.freqs, 500.0, 100.0, 150.0).unwrap();
        let percent = band_power_fraction(&psd.pxx, band.start_idx, band.stop_idx).unwrap();
        assert!(percent > 90.0, "tone power outside its band: {}", percent);
    }
}
