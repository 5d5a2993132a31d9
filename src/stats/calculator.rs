//! Error Calculator Module
//! Measures Q1.16 approximations against the exact reciprocal square root.

use statrs::statistics::Statistics;

/// Q1.16 scale factor: 65536 represents 1.0.
pub const Q16_ONE: f64 = 65536.0;

/// Mean/max summary for one error series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub label: String,
    pub count: usize,
    pub mean: f64,
    pub max: f64,
}

/// Converts fixed-point approximations into real-valued error magnitudes.
pub struct ErrorCalculator;

impl ErrorCalculator {
    /// Exact reciprocal square root of `x`, scaled to Q1.16 units.
    ///
    /// The parser rejects out-of-domain rows, so `x >= 1` holds here.
    fn reference_q16(x: u32) -> f64 {
        debug_assert!(x > 0, "reference is undefined for x = 0");
        Q16_ONE / (x as f64).sqrt()
    }

    /// Absolute deviation of every approximation from the exact reference,
    /// one output series per input series, order preserved.
    pub fn compute_errors(x_values: &[u32], approximations: &[Vec<u32>]) -> Vec<Vec<f64>> {
        let references: Vec<f64> = x_values.iter().map(|&x| Self::reference_q16(x)).collect();

        approximations
            .iter()
            .map(|series| {
                series
                    .iter()
                    .zip(&references)
                    .map(|(&approx, &reference)| (approx as f64 - reference).abs())
                    .collect()
            })
            .collect()
    }

    /// Mean and maximum error for one series.
    pub fn summarize(label: &str, errors: &[f64]) -> SeriesSummary {
        SeriesSummary {
            label: label.to_string(),
            count: errors.len(),
            mean: errors.mean(),
            max: errors.max(),
        }
    }
}
