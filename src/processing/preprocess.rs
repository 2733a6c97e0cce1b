// src/processing/preprocess.rs
//! Signal conditioning applied before windowed statistics

use crate::error::{SignalError, SignalResult};

/// Remove the mean from a recorded signal.
///
/// Returns a new signal; the input is never mutated. An empty input produces
/// an empty output.
pub fn remove_mean(signal: &[f64]) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }
    let mean = signal.iter().sum::<f64>() / signal.len() as f64;
    signal.iter().map(|&x| x - mean).collect()
}

/// Rectify a recorded signal (usually EMG) to absolute values.
pub fn rectify(signal: &[f64]) -> Vec<f64> {
    signal.iter().map(|&x| x.abs()).collect()
}

/// Variability summary of a recorded transducer signal (eg. force).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variability {
    /// Population standard deviation
    pub std_dev: f64,
    /// Coefficient of variation: std_dev / mean
    pub cv: f64,
}

/// Standard deviation and coefficient of variation of a signal.
pub fn variability(signal: &[f64]) -> SignalResult<Variability> {
    if signal.is_empty() {
        return Err(SignalError::EmptyInput {
            operation: "variability",
        });
    }

    let n = signal.len() as f64;
    let mean = signal.iter().sum::<f64>() / n;
    let variance = signal.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    Ok(Variability {
        std_dev,
        cv: std_dev / mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_mean_centers_signal() {
        let centered = remove_mean(&[1.0, 2.0, 3.0]);
        assert_eq!(centered, vec![-1.0, 0.0, 1.0]);
        let residual: f64 = centered.iter().sum();
        assert!(residual.abs() < 1e-12);
    }

    #[test]
    fn test_remove_mean_empty_input() {
        assert!(remove_mean(&[]).is_empty());
    }

    #[test]
    fn test_rectify() {
        assert_eq!(rectify(&[-1.0, 2.0, -3.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_variability_of_constant_signal() {
        let v = variability(&[4.0; 20]).unwrap();
        assert_eq!(v.std_dev, 0.0);
        assert_eq!(v.cv, 0.0);
    }

    #[test]
    fn test_variability_known_values() {
        // population std of [2, 4, 4, 4, 5, 5, 7, 9] is 2, mean 5
        let v = variability(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((v.std_dev - 2.0).abs() < 1e-12);
        assert!((v.cv - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_variability_empty_signal() {
        assert!(matches!(
            variability(&[]).unwrap_err(),
            SignalError::EmptyInput { .. }
        ));
    }
}
