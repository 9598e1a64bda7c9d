//! Route scoring.
//!
//! A route's score is its objective coefficient: the negated weighted
//! sum of the four normalized criteria. Maximizing total score over an
//! allocation therefore minimizes weighted cost/distance/days and
//! steers volume toward high-priority warehouses. All normalized
//! inputs lie in [0, 1] and weights are non-negative, so a score is
//! never positive; 0 marks a route that is best on every weighted
//! criterion.

use stockwise_core::Weightage;

/// Computes one route's objective coefficient from normalized criteria.
///
/// `priority` is the warehouse's normalized priority rank, broadcast
/// across every route leaving that warehouse; the other three values
/// are route-level.
///
/// # Example
///
/// ```
/// use stockwise_core::Weightage;
/// use stockwise_model::route_score;
///
/// let w = Weightage::UNIFORM;
/// // Best on every criterion: nothing to penalize.
/// assert_eq!(route_score(&w, 0.0, 0.0, 0.0, 0.0), 0.0);
/// // Worst on every criterion with uniform weights.
/// assert_eq!(route_score(&w, 1.0, 1.0, 1.0, 1.0), -4.0);
/// ```
#[inline]
pub fn route_score(
    weightage: &Weightage,
    cost: f64,
    priority: f64,
    distance: f64,
    days: f64,
) -> f64 {
    -(weightage.cost * cost
        + weightage.priority * priority
        + weightage.distance * distance
        + weightage.days * days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weights_ignore_criteria() {
        let w = Weightage::new(0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(route_score(&w, 1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_single_criterion() {
        let w = Weightage::new(2.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(route_score(&w, 0.5, 1.0, 1.0, 1.0), -1.0);
    }

    #[test]
    fn test_never_positive() {
        let w = Weightage::new(1.0, 0.8, 0.6, 0.4).unwrap();
        for step in 0..=4 {
            let v = step as f64 / 4.0;
            assert!(route_score(&w, v, v, v, v) <= 0.0);
        }
    }

    #[test]
    fn test_priority_broadcast_term() {
        let w = Weightage::new(0.0, 0.8, 0.0, 0.0).unwrap();
        // Only the priority term contributes.
        assert_eq!(route_score(&w, 0.9, 1.0, 0.9, 0.9), -0.8);
        assert_eq!(route_score(&w, 0.9, 0.0, 0.9, 0.9), 0.0);
    }
}
