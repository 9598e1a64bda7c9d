//! A canned-response backend.
//!
//! Lets callers exercise status propagation and extraction without a
//! real solve. Ships in the library proper so downstream crates can
//! test their own pipelines against the solver contract.

use stockwise_model::SourcingModel;

use crate::solver::{Solution, SolutionStatus, SourcingSolver};

/// Returns the same [`Solution`] for every model it is handed.
#[derive(Debug, Clone)]
pub struct StubSolver {
    solution: Solution,
}

impl StubSolver {
    /// A stub that answers every solve with `solution`.
    pub fn returning(solution: Solution) -> Self {
        StubSolver { solution }
    }

    /// A stub that reports `status` and no assignment.
    pub fn failing(status: SolutionStatus) -> Self {
        StubSolver::returning(Solution::failed(status))
    }
}

impl SourcingSolver for StubSolver {
    fn solve(&self, _model: &SourcingModel) -> Solution {
        self.solution.clone()
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwise_model::ModelBuilder;
    use stockwise_test::{single_route_instance, standard_weightage};

    #[test]
    fn test_stub_returns_canned_solution() {
        let instance = single_route_instance();
        let model = ModelBuilder::new(&instance, standard_weightage())
            .build()
            .unwrap();
        let stub = StubSolver::returning(Solution::optimal(vec![2], -1.5));
        let solution = stub.solve(&model);
        assert_eq!(solution.quantities, [2]);
        assert_eq!(solution.objective, Some(-1.5));

        let failing = StubSolver::failing(SolutionStatus::Unbounded);
        assert_eq!(failing.solve(&model).status, SolutionStatus::Unbounded);
    }
}
