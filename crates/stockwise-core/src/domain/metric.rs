//! Dense metric tensors over the (warehouse, order, product) space.

use crate::error::{Result, SourcingError};

/// A dense (warehouse, order, product) measurement tensor.
///
/// Values are stored row-major: warehouse-major, then order, then
/// product, matching the layout of the tabular metric relations. Every
/// index triple must have a value; sparse metrics are not supported.
///
/// # Example
///
/// ```
/// use stockwise_core::MetricTensor;
///
/// let cost = MetricTensor::from_fn("cost", 2, 1, 2, |w, _o, p| {
///     (10 * (w + 1) + p) as f64
/// });
/// assert_eq!(cost.shape(), (2, 1, 2));
/// assert_eq!(cost.get(1, 0, 1), 21.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MetricTensor {
    name: String,
    warehouses: usize,
    orders: usize,
    products: usize,
    values: Vec<f64>,
}

impl MetricTensor {
    /// Builds a tensor from row-major values.
    ///
    /// # Errors
    ///
    /// Returns an error when the value count does not equal
    /// `warehouses * orders * products`.
    pub fn new(
        name: impl Into<String>,
        warehouses: usize,
        orders: usize,
        products: usize,
        values: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        let expected = warehouses * orders * products;
        if values.len() != expected {
            return Err(SourcingError::ShapeMismatch {
                name,
                expected,
                actual: values.len(),
            });
        }
        Ok(MetricTensor {
            name,
            warehouses,
            orders,
            products,
            values,
        })
    }

    /// Builds a tensor by evaluating `f` at every index triple.
    pub fn from_fn(
        name: impl Into<String>,
        warehouses: usize,
        orders: usize,
        products: usize,
        mut f: impl FnMut(usize, usize, usize) -> f64,
    ) -> Self {
        let mut values = Vec::with_capacity(warehouses * orders * products);
        for w in 0..warehouses {
            for o in 0..orders {
                for p in 0..products {
                    values.push(f(w, o, p));
                }
            }
        }
        MetricTensor {
            name: name.into(),
            warehouses,
            orders,
            products,
            values,
        }
    }

    /// Builds a tensor holding the same value everywhere.
    pub fn filled(
        name: impl Into<String>,
        warehouses: usize,
        orders: usize,
        products: usize,
        value: f64,
    ) -> Self {
        MetricTensor {
            name: name.into(),
            warehouses,
            orders,
            products,
            values: vec![value; warehouses * orders * products],
        }
    }

    /// The tensor's metric name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension sizes as (warehouses, orders, products).
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.warehouses, self.orders, self.products)
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when any dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    fn offset(&self, w: usize, o: usize, p: usize) -> usize {
        (w * self.orders + o) * self.products + p
    }

    /// The value at one index triple.
    ///
    /// # Panics
    ///
    /// Panics when an index is out of range for the tensor's shape.
    #[inline]
    pub fn get(&self, w: usize, o: usize, p: usize) -> f64 {
        debug_assert!(w < self.warehouses && o < self.orders && p < self.products);
        self.values[self.offset(w, o, p)]
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest stored value; `None` for an empty tensor.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let t = MetricTensor::new("cost", 2, 2, 2, (0..8).map(f64::from).collect()).unwrap();
        assert_eq!(t.get(0, 0, 0), 0.0);
        assert_eq!(t.get(0, 0, 1), 1.0);
        assert_eq!(t.get(0, 1, 0), 2.0);
        assert_eq!(t.get(1, 0, 0), 4.0);
        assert_eq!(t.get(1, 1, 1), 7.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = MetricTensor::new("days", 2, 2, 2, vec![1.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            SourcingError::ShapeMismatch { expected: 8, actual: 7, .. }
        ));
    }

    #[test]
    fn test_from_fn_matches_get() {
        let t = MetricTensor::from_fn("distance", 3, 2, 4, |w, o, p| (w * 100 + o * 10 + p) as f64);
        for w in 0..3 {
            for o in 0..2 {
                for p in 0..4 {
                    assert_eq!(t.get(w, o, p), (w * 100 + o * 10 + p) as f64);
                }
            }
        }
    }

    #[test]
    fn test_min_max() {
        let t = MetricTensor::new("cost", 1, 1, 3, vec![4.0, -1.0, 9.0]).unwrap();
        assert_eq!(t.min_max(), Some((-1.0, 9.0)));

        let empty = MetricTensor::filled("cost", 0, 1, 3, 0.0);
        assert!(empty.is_empty());
        assert_eq!(empty.min_max(), None);
    }
}
