//! Min–max normalization of raw metrics.
//!
//! Each criterion is rescaled onto [0, 1] independently (normalization
//! is never cross-metric): the sample minimum maps to 0, the maximum
//! to 1. A column whose values are all equal carries no discriminating
//! information and maps to the constant 0 instead of dividing by zero;
//! that criterion then contributes nothing to the objective for the run.

use crate::domain::MetricTensor;

/// Rescales a column onto [0, 1] via min–max scaling.
///
/// When every value is equal (or the slice is empty) the result is all
/// zeros, per the degenerate-column policy above.
///
/// # Example
///
/// ```
/// use stockwise_core::normalize::min_max_scale;
///
/// assert_eq!(min_max_scale(&[2.0, 4.0, 6.0]), vec![0.0, 0.5, 1.0]);
/// assert_eq!(min_max_scale(&[3.0, 3.0]), vec![0.0, 0.0]);
/// ```
pub fn min_max_scale(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = column_range(values) else {
        return Vec::new();
    };
    if max > min {
        values.iter().map(|v| (v - min) / (max - min)).collect()
    } else {
        vec![0.0; values.len()]
    }
}

fn column_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

/// A metric tensor whose values are guaranteed to lie in [0, 1].
///
/// Produced by whole-tensor min–max scaling of a raw [`MetricTensor`];
/// the guarantee is the normalizer's output contract, not re-checked on
/// access.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedMetric {
    inner: MetricTensor,
}

impl NormalizedMetric {
    /// Normalizes a raw tensor over its entire value range.
    pub fn from_raw(raw: &MetricTensor) -> Self {
        let (warehouses, orders, products) = raw.shape();
        let inner = match raw.min_max() {
            Some((min, max)) if max > min => {
                MetricTensor::from_fn(raw.name(), warehouses, orders, products, |w, o, p| {
                    (raw.get(w, o, p) - min) / (max - min)
                })
            }
            _ => MetricTensor::filled(raw.name(), warehouses, orders, products, 0.0),
        };
        NormalizedMetric { inner }
    }

    /// The normalized value at one index triple.
    #[inline]
    pub fn get(&self, w: usize, o: usize, p: usize) -> f64 {
        self.inner.get(w, o, p)
    }

    /// The underlying tensor.
    pub fn as_tensor(&self) -> &MetricTensor {
        &self.inner
    }

    /// The metric's name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_map_to_zero_and_one() {
        let scaled = min_max_scale(&[10.0, 55.0, 100.0]);
        assert_eq!(scaled[0], 0.0);
        assert_eq!(scaled[1], 0.5);
        assert_eq!(scaled[2], 1.0);
    }

    #[test]
    fn test_all_values_in_unit_interval() {
        let raw = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        for v in min_max_scale(&raw) {
            assert!((0.0..=1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_degenerate_column_maps_to_zero() {
        assert_eq!(min_max_scale(&[7.0, 7.0, 7.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(min_max_scale(&[0.0]), vec![0.0]);
    }

    #[test]
    fn test_empty_column() {
        assert!(min_max_scale(&[]).is_empty());
    }

    #[test]
    fn test_tensor_normalization_preserves_shape() {
        let raw = MetricTensor::from_fn("cost", 2, 2, 3, |w, o, p| (w + o + p) as f64);
        let norm = NormalizedMetric::from_raw(&raw);
        assert_eq!(norm.as_tensor().shape(), (2, 2, 3));
        // Raw minimum (0,0,0) -> 0, raw maximum (1,1,2) -> 1.
        assert_eq!(norm.get(0, 0, 0), 0.0);
        assert_eq!(norm.get(1, 1, 2), 1.0);
    }

    #[test]
    fn test_degenerate_tensor() {
        let raw = MetricTensor::filled("days", 2, 2, 2, 5.0);
        let norm = NormalizedMetric::from_raw(&raw);
        for w in 0..2 {
            for o in 0..2 {
                for p in 0..2 {
                    assert_eq!(norm.get(w, o, p), 0.0);
                }
            }
        }
    }
}
