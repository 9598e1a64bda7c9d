//! Stockwise - a warehouse sourcing optimizer in Rust
//!
//! Allocates multi-product warehouse stock to orders by maximizing a
//! weighted score over cost, warehouse priority, distance, and delivery
//! days, subject to per-warehouse stock and per-order demand ceilings.
//!
//! # Example
//!
//! ```rust
//! use stockwise::prelude::*;
//!
//! let instance = SourcingInstance::new(
//!     vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
//!     vec![Order::new("O1").with_demand("P1", 5)],
//!     MetricTensor::filled("cost", 1, 1, 1, 50.0),
//!     MetricTensor::filled("distance", 1, 1, 1, 120.0),
//!     MetricTensor::filled("days", 1, 1, 1, 3.0),
//! );
//!
//! let outcome = run(&instance, Weightage::UNIFORM, &FlowSolver::new()).unwrap();
//! let report = outcome.report().unwrap();
//! assert_eq!(report.total_shipped(), 5);
//! ```

// Domain entities and reporting relations
pub use stockwise_core::{
    min_max_scale, FulfillmentRecord, MetricTensor, NormalizedMetric, Order, Result,
    SourcingError, SourcingInstance, SourcingReport, StockStatusRecord, Warehouse, Weightage,
};

// Model construction
pub use stockwise_model::{
    route_score, validate_instance, EntityCatalog, ModelBuilder, ProductModel, RouteVar,
    SourcingModel,
};

// Solver contract, backends, and the pipeline entry points
pub use stockwise_solver::{
    extract_report, run, run_with_config, FlowSolver, RunOutcome, Solution, SolutionStatus,
    SourcingSolver, StubSolver, DEFAULT_SCORE_EPSILON,
};

// Configuration
pub use stockwise_config::{
    ConfigError, GeneratorConfig, OutputConfig, RangeConfig, RunConfig, SolverConfig,
    WeightsConfig,
};

// Synthetic instance generation
pub use stockwise_gen::generate;

// Reporting
pub use stockwise_report::{
    aggregate_allocations, AllocationCsv, FulfillmentCsv, RouteAllocation, StockStatusCsv,
};

pub mod prelude {
    pub use super::{
        aggregate_allocations, generate, run, run_with_config, FlowSolver, MetricTensor, Order,
        RunConfig, RunOutcome, SourcingInstance, SourcingReport, SourcingSolver, Warehouse,
        Weightage,
    };
}
