//! The batch pipeline: validate, build, solve, extract.
//!
//! One call runs one optimization over an immutable snapshot of the
//! inputs. Nothing is shared between runs; callers wanting concurrent
//! runs hand each its own instance.

use stockwise_config::RunConfig;
use stockwise_core::{Result, SourcingInstance, SourcingReport, Weightage};
use stockwise_model::ModelBuilder;
use tracing::{info, warn};

use crate::extract::extract_report;
use crate::flow::FlowSolver;
use crate::solver::{SolutionStatus, SourcingSolver};

/// What one optimization run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The backend proved an optimal assignment.
    Solved {
        report: SourcingReport,
        objective: f64,
    },
    /// Nothing to allocate: the instance has no warehouses or no
    /// orders. The relations are empty and the objective is zero.
    Trivial { report: SourcingReport },
    /// The backend failed; the status is the authoritative signal.
    Failed { status: SolutionStatus },
}

impl RunOutcome {
    /// The reporting relations, when the run produced any.
    pub fn report(&self) -> Option<&SourcingReport> {
        match self {
            RunOutcome::Solved { report, .. } | RunOutcome::Trivial { report } => Some(report),
            RunOutcome::Failed { .. } => None,
        }
    }

    /// True when the backend proved optimality.
    pub fn is_solved(&self) -> bool {
        matches!(self, RunOutcome::Solved { .. })
    }
}

/// Runs the pipeline with an injected solver backend.
///
/// Input-shape defects surface as errors before the solver is invoked;
/// solver failures surface as [`RunOutcome::Failed`] and never as a
/// partial report.
pub fn run<S>(
    instance: &SourcingInstance,
    weightage: Weightage,
    solver: &S,
) -> Result<RunOutcome>
where
    S: SourcingSolver + ?Sized,
{
    let model = ModelBuilder::new(instance, weightage).build()?;
    if model.is_trivial() {
        info!(event = "solve_skipped", reason = "trivial model");
        return Ok(RunOutcome::Trivial {
            report: SourcingReport::empty(),
        });
    }

    info!(
        event = "solve_start",
        solver = solver.name(),
        warehouses = model.catalog().warehouse_count(),
        orders = model.catalog().order_count(),
        products = model.catalog().product_count(),
        variables = model.variable_count(),
    );
    let solution = solver.solve(&model);
    if !solution.is_optimal() {
        warn!(event = "solve_failed", status = %solution.status);
        return Ok(RunOutcome::Failed {
            status: solution.status,
        });
    }

    // extract_report rejects mis-sized assignments before the objective
    // fallback evaluates them.
    let report = extract_report(&model, &solution)?;
    let objective = solution
        .objective
        .unwrap_or_else(|| model.objective_value(&solution.quantities));
    info!(
        event = "solve_end",
        objective,
        shipped = report.total_shipped(),
    );
    Ok(RunOutcome::Solved { report, objective })
}

/// Runs the pipeline with the bundled [`FlowSolver`] configured from a
/// [`RunConfig`].
pub fn run_with_config(instance: &SourcingInstance, config: &RunConfig) -> Result<RunOutcome> {
    let solver = FlowSolver::new()
        .with_parallel(config.solver.parallel)
        .with_score_epsilon(config.solver.score_epsilon);
    run(instance, config.weightage(), &solver)
}
