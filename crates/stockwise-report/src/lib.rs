//! Reporting utilities for the stockwise sourcing optimizer.
//!
//! Consumes the [`SourcingReport`](stockwise_core::report::SourcingReport)
//! produced by solution extraction and prepares it for presentation:
//!
//! - [`aggregate_allocations`] groups fulfillment rows by
//!   (warehouse, order) route for network-style rendering
//! - [`FulfillmentCsv`], [`StockStatusCsv`] and [`AllocationCsv`]
//!   render the relations as CSV
//!
//! # Example
//!
//! ```
//! use stockwise_core::report::{FulfillmentRecord, SourcingReport};
//! use stockwise_report::{aggregate_allocations, AllocationCsv};
//!
//! let report = SourcingReport {
//!     fulfillment: vec![FulfillmentRecord {
//!         warehouse: "W1".into(),
//!         product: "P1".into(),
//!         order: "O1".into(),
//!         quantity: 5,
//!     }],
//!     stock_status: Vec::new(),
//! };
//!
//! let routes = aggregate_allocations(&report);
//! let csv = AllocationCsv::to_string(&routes);
//! assert!(csv.contains("W1,O1,P1 (5),5"));
//! ```

mod aggregate;
mod export;

pub use aggregate::{aggregate_allocations, RouteAllocation};
pub use export::{AllocationCsv, FulfillmentCsv, StockStatusCsv};
