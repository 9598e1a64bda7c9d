//! The solver seam: any backend that can allocate a [`SourcingModel`].

use std::fmt;

use stockwise_model::SourcingModel;

/// Outcome classification of a solve attempt.
///
/// Everything except [`Optimal`](SolutionStatus::Optimal) short-circuits
/// solution extraction; the status travels to the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// An optimal assignment was found
    Optimal,
    /// The constraints admit no assignment
    Infeasible,
    /// The objective can be improved without bound
    Unbounded,
    /// The backend could not classify the outcome
    Undefined,
    /// No solve was attempted
    NotSolved,
}

impl SolutionStatus {
    /// True for [`Optimal`](SolutionStatus::Optimal) only.
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolutionStatus::Optimal)
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::Undefined => write!(f, "Undefined"),
            SolutionStatus::NotSolved => write!(f, "Not Solved"),
        }
    }
}

/// A solve result: a status plus, when optimal, one quantity per model
/// variable in model order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Outcome classification.
    pub status: SolutionStatus,
    /// Flat per-variable quantities; empty unless the status is optimal.
    pub quantities: Vec<i64>,
    /// Objective value as reported by the backend.
    pub objective: Option<f64>,
}

impl Solution {
    /// An optimal solution with its assignment and objective value.
    pub fn optimal(quantities: Vec<i64>, objective: f64) -> Self {
        Solution {
            status: SolutionStatus::Optimal,
            quantities,
            objective: Some(objective),
        }
    }

    /// A failed solve carrying only its status.
    pub fn failed(status: SolutionStatus) -> Self {
        Solution {
            status,
            quantities: Vec::new(),
            objective: None,
        }
    }

    /// True when the carried status is optimal.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }
}

/// Contract for solver backends.
///
/// Implementations never touch identifiers or raw metrics; they see the
/// index-addressed model only. Failures are reported through
/// [`SolutionStatus`], not through panics or errors.
pub trait SourcingSolver: Send + Sync {
    /// Computes an assignment for the model.
    fn solve(&self, model: &SourcingModel) -> Solution;

    /// Name of this backend, for logging.
    fn name(&self) -> &str;
}
