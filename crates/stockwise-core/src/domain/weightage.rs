//! Criterion weights for the sourcing objective.

use std::collections::BTreeMap;

use crate::error::{Result, SourcingError};

/// Map keys accepted by [`Weightage::from_map`], in canonical order.
pub const WEIGHT_KEYS: [&str; 4] = ["Cost", "Priority", "Distance", "Days"];

/// The four scalar importance coefficients combined linearly in the
/// route objective.
///
/// Every weight must be finite and non-negative. A zero weight removes
/// that criterion's influence entirely.
///
/// # Example
///
/// ```
/// use stockwise_core::Weightage;
///
/// let w = Weightage::new(1.0, 0.8, 0.6, 0.4).unwrap();
/// assert_eq!(w.cost, 1.0);
/// assert!(Weightage::new(-1.0, 0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weightage {
    /// Emphasis on low shipping cost.
    pub cost: f64,
    /// Emphasis on routing through high-priority warehouses.
    pub priority: f64,
    /// Emphasis on short shipping distance.
    pub distance: f64,
    /// Emphasis on short delivery lead time.
    pub days: f64,
}

impl Weightage {
    /// Equal emphasis on every criterion.
    pub const UNIFORM: Weightage = Weightage {
        cost: 1.0,
        priority: 1.0,
        distance: 1.0,
        days: 1.0,
    };

    /// Creates a validated weight record.
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative, NaN, or infinite.
    pub fn new(cost: f64, priority: f64, distance: f64, days: f64) -> Result<Self> {
        let weightage = Weightage {
            cost,
            priority,
            distance,
            days,
        };
        weightage.validate()?;
        Ok(weightage)
    }

    /// Parses the `{Cost, Priority, Distance, Days}` map shape used by
    /// tabular inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the four keys is missing, if the map
    /// carries an unrecognized key, or if a value fails validation.
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self> {
        for key in map.keys() {
            if !WEIGHT_KEYS.contains(&key.as_str()) {
                return Err(SourcingError::UnknownWeight(key.clone()));
            }
        }
        let fetch = |key: &str| -> Result<f64> {
            map.get(key)
                .copied()
                .ok_or_else(|| SourcingError::MissingWeight(key.to_string()))
        };
        Weightage::new(
            fetch("Cost")?,
            fetch("Priority")?,
            fetch("Distance")?,
            fetch("Days")?,
        )
    }

    /// Checks that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("Cost", self.cost),
            ("Priority", self.priority),
            ("Distance", self.distance),
            ("Days", self.days),
        ] {
            if !value.is_finite() {
                return Err(SourcingError::NonFinite {
                    kind: "weight",
                    subject: key.to_string(),
                });
            }
            if value < 0.0 {
                return Err(SourcingError::Negative {
                    kind: "weight",
                    subject: key.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
