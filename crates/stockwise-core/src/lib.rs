//! Stockwise Core - Domain types for the sourcing optimizer
//!
//! This crate provides the fundamental types shared by every stockwise
//! crate:
//! - Domain entities describing a run's inputs (warehouses, orders,
//!   weights, metric tensors)
//! - Min–max normalization onto the common [0, 1] scale
//! - The reporting relations produced after a solve
//! - The crate-wide error type

pub mod domain;
pub mod error;
pub mod normalize;
pub mod report;

pub use domain::{MetricTensor, Order, SourcingInstance, Warehouse, Weightage};
pub use error::{Result, SourcingError};
pub use normalize::{min_max_scale, NormalizedMetric};
pub use report::{FulfillmentRecord, SourcingReport, StockStatusRecord};
