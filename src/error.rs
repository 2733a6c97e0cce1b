// src/error.rs
//! Unified error handling for biosig-core
//!
//! Every routine raises its error at the point of detection and never
//! substitutes a default value for a detected error condition. Callers decide
//! whether to retry or abort.

use thiserror::Error;

/// Which end of a requested frequency band violated the low-pass cut-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandBound {
    /// Lower limit of the bandwidth
    Lower,
    /// Upper limit of the bandwidth
    Upper,
}

impl std::fmt::Display for BandBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandBound::Lower => write!(f, "lower"),
            BandBound::Upper => write!(f, "upper"),
        }
    }
}

/// Unified error type for all signal-processing operations
#[derive(Debug, Error)]
pub enum SignalError {
    /// A statistic was requested over a zero-length signal
    #[error("empty input signal in {operation}")]
    EmptyInput {
        /// Operation that required a non-empty signal
        operation: &'static str,
    },

    /// Unsupported statistic mode string (supported: "rms", "mean")
    #[error("invalid statistic mode '{0}', expected 'rms' or 'mean'")]
    InvalidMode(String),

    /// A nominated band frequency exceeds the declared low-pass cut-off
    #[error("{bound} band limit {requested_hz} Hz is greater than the low pass cut-off {lowpass_hz} Hz")]
    FrequencyOutOfRange {
        /// Which band bound violated the cut-off
        bound: BandBound,
        /// The requested frequency (Hz)
        requested_hz: f64,
        /// The declared low-pass cut-off (Hz)
        lowpass_hz: f64,
    },

    /// Total spectral power integrates to zero, the power fraction is undefined
    #[error("total spectral power is zero, cannot compute band power fraction")]
    ZeroSpectralPower,

    /// Filter cut-off outside the open interval (0, freq/2)
    #[error("cut-off {cutoff_hz} Hz is outside (0, {nyquist_hz}) for sampling rate {freq_hz} Hz")]
    InvalidCutoff {
        /// Requested cut-off (Hz)
        cutoff_hz: f64,
        /// Sampling rate (Hz)
        freq_hz: f64,
        /// Nyquist frequency (Hz)
        nyquist_hz: f64,
    },

    /// Band-pass cut-offs out of order
    #[error("high-pass cut-off {highpass_hz} Hz must be below the low-pass cut-off {lowpass_hz} Hz")]
    InvalidBand {
        /// High-pass cut-off (Hz)
        highpass_hz: f64,
        /// Low-pass cut-off (Hz)
        lowpass_hz: f64,
    },

    /// Channel map was empty or referenced a column missing from the data file
    #[error("invalid channel map: {0}")]
    InvalidChannelMap(String),

    /// A required field was absent from a session log file
    #[error("session log is missing required field '{0}'")]
    MissingLogField(&'static str),

    /// A data or log line could not be parsed
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Human-readable parse failure description
        reason: String,
    },

    /// Configuration file could not be parsed or failed validation
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying IO failure while reading a data or log file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for signal-processing operations
pub type SignalResult<T> = Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SignalError::FrequencyOutOfRange {
            bound: BandBound::Upper,
            requested_hz: 60.0,
            lowpass_hz: 40.0,
        };
        let display = format!("{}", err);
        assert!(display.contains("upper"));
        assert!(display.contains("60"));
        assert!(display.contains("40"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SignalError>();
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: SignalError = io_err.into();
        assert!(matches!(err, SignalError::Io(_)));
    }
}
