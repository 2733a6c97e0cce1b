// src/io/mod.rs
//! Data-file and session-log readers
//!
//! Recorded trials arrive as tab-separated text with one row per sample and
//! one column per channel, plus a space-separated "key value" log file with
//! the per-subject calibration and demographic record. The processing and
//! spectral layers consume only the plain arrays and scalars produced here,
//! never file paths.

use crate::error::{SignalError, SignalResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Channel-name to column-index mapping for a data file. Columns are
/// zero-indexed. Construct a fresh map per call site; there is no implicit
/// default.
pub type ChannelMap = HashMap<String, usize>;

/// Per-subject record parsed from a session log file.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLog {
    /// Subject identifier
    pub subject_id: String,
    /// Calibration scale for transducer 1
    pub scale1: f64,
    /// Calibration scale for transducer 2
    pub scale2: f64,
    /// Sampling rate (Hz)
    pub freq_hz: f64,
    /// Subject age (years)
    pub age: u32,
    /// Subject sex as recorded
    pub sex: String,
    /// Subject height (m)
    pub height_m: f64,
    /// Subject weight (kg)
    pub weight_kg: f64,
}

/// Read channel data from a tab-separated data text file.
///
/// Returns one sample vector per named channel. The channel map must be
/// non-empty and every referenced column must exist on every data row; blank
/// lines are skipped.
pub fn read_channels(
    path: impl AsRef<Path>,
    channels: &ChannelMap,
) -> SignalResult<HashMap<String, Vec<f64>>> {
    if channels.is_empty() {
        return Err(SignalError::InvalidChannelMap(
            "no channel keys and columns were specified".to_string(),
        ));
    }

    let text = std::fs::read_to_string(path.as_ref())?;
    let mut data: HashMap<String, Vec<f64>> =
        channels.keys().map(|k| (k.clone(), Vec::new())).collect();

    for (line_no, line) in text.lines().enumerate() {
        let row = line.trim();
        if row.is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split('\t').collect();

        for (name, &column) in channels {
            let field = fields.get(column).ok_or_else(|| {
                SignalError::InvalidChannelMap(format!(
                    "channel '{}' wants column {} but line {} has {} columns",
                    name,
                    column,
                    line_no + 1,
                    fields.len()
                ))
            })?;
            let value: f64 = field.trim().parse().map_err(|_| SignalError::Parse {
                line: line_no + 1,
                reason: format!("'{}' is not a number (channel '{}')", field, name),
            })?;
            if let Some(samples) = data.get_mut(name) {
                samples.push(value);
            }
        }
    }

    debug!(
        channels = channels.len(),
        samples = data.values().next().map(|v| v.len()).unwrap_or(0),
        "read channel data"
    );
    Ok(data)
}

/// Read the per-subject record from a session log text file.
///
/// Recognized lines, space-separated:
///
/// ```text
/// subject number <id>
/// transducer 1 calibration: <scale>
/// transducer 2 calibration: <scale>
/// sampling rate: <freq>
/// age: <years>
/// sex: <sex>
/// height: <meters>
/// weight: <kg>
/// ```
///
/// Every field is required; a missing field is an error.
pub fn read_session_log(path: impl AsRef<Path>) -> SignalResult<SessionLog> {
    let text = std::fs::read_to_string(path.as_ref())?;

    let mut subject_id = None;
    let mut scale1 = None;
    let mut scale2 = None;
    let mut freq_hz = None;
    let mut age = None;
    let mut sex = None;
    let mut height_m = None;
    let mut weight_kg = None;

    for (line_no, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.trim().split(' ').collect();
        match fields.as_slice() {
            ["subject", "number", id] => subject_id = Some(id.to_string()),
            ["transducer", "1", "calibration:", value] => {
                scale1 = Some(parse_field(value, line_no)?)
            }
            ["transducer", "2", "calibration:", value] => {
                scale2 = Some(parse_field(value, line_no)?)
            }
            ["sampling", "rate:", value] => freq_hz = Some(parse_field(value, line_no)?),
            ["age:", value] => {
                age = Some(value.parse::<u32>().map_err(|_| SignalError::Parse {
                    line: line_no + 1,
                    reason: format!("'{}' is not a valid age", value),
                })?)
            }
            ["sex:", value] => sex = Some(value.to_string()),
            ["height:", value] => height_m = Some(parse_field(value, line_no)?),
            ["weight:", value] => weight_kg = Some(parse_field(value, line_no)?),
            _ => {}
        }
    }

    Ok(SessionLog {
        subject_id: subject_id.ok_or(SignalError::MissingLogField("subject number"))?,
        scale1: scale1.ok_or(SignalError::MissingLogField("transducer 1 calibration"))?,
        scale2: scale2.ok_or(SignalError::MissingLogField("transducer 2 calibration"))?,
        freq_hz: freq_hz.ok_or(SignalError::MissingLogField("sampling rate"))?,
        age: age.ok_or(SignalError::MissingLogField("age"))?,
        sex: sex.ok_or(SignalError::MissingLogField("sex"))?,
        height_m: height_m.ok_or(SignalError::MissingLogField("height"))?,
        weight_kg: weight_kg.ok_or(SignalError::MissingLogField("weight"))?,
    })
}

fn parse_field(value: &str, line_no: usize) -> SignalResult<f64> {
    value.parse().map_err(|_| SignalError::Parse {
        line: line_no + 1,
        reason: format!("'{}' is not a number", value),
    })
}

/// Remove offset and calibrate raw voltage to meaningful values:
/// `(x - offset) * scale`.
pub fn calibrate(signal: &[f64], scale: f64, offset: f64) -> Vec<f64> {
    signal.iter().map(|&x| (x - offset) * scale).collect()
}

/// Sample times in seconds for `n` samples at the given sampling rate.
pub fn make_time(freq_hz: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / freq_hz).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibrate_is_affine() {
        let calibrated = calibrate(&[1.0, 2.0, 3.0], 2.0, 0.5);
        assert_eq!(calibrated, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_make_time_spacing() {
        let time = make_time(1000.0, 4);
        assert_eq!(time, vec![0.0, 0.001, 0.002, 0.003]);
    }

    #[test]
    fn test_empty_channel_map_is_rejected() {
        let err = read_channels("nonexistent.txt", &ChannelMap::new()).unwrap_err();
        assert!(matches!(err, SignalError::InvalidChannelMap(_)));
    }
}
