//! Domain entities for sourcing runs
//!
//! These types describe one optimization run's inputs:
//! - `Warehouse`: supply side, per-product stock plus a priority rank
//! - `Order`: demand side, per-product demand ceilings
//! - `Weightage`: the four criterion weights of the objective
//! - `MetricTensor`: dense per-route measurements (cost, distance, days)
//! - `SourcingInstance`: the full immutable input snapshot

mod instance;
mod metric;
mod order;
mod warehouse;
mod weightage;

pub use instance::SourcingInstance;
pub use metric::MetricTensor;
pub use order::Order;
pub use warehouse::Warehouse;
pub use weightage::{Weightage, WEIGHT_KEYS};
