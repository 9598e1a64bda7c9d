//! Solver engine for stockwise.
//!
//! Exposes the [`SourcingSolver`] contract, the bundled [`FlowSolver`]
//! backend, solution extraction into reporting relations, and the
//! validate-build-solve-extract pipeline entry points.

pub mod extract;
pub mod flow;
pub mod pipeline;
pub mod solver;
pub mod stub;

pub use extract::extract_report;
pub use flow::{FlowSolver, DEFAULT_SCORE_EPSILON};
pub use pipeline::{run, run_with_config, RunOutcome};
pub use solver::{Solution, SolutionStatus, SourcingSolver};
pub use stub::StubSolver;
