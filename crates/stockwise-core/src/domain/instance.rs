//! Immutable input snapshot for one optimization run.

use super::{MetricTensor, Order, Warehouse};

/// Everything a single sourcing run consumes: warehouses with stock and
/// priority, orders with demand, and the three raw route metrics.
///
/// Instances are read-only once handed to the pipeline. Validation of
/// key sets, signs, and tensor shapes happens at model-build time, not
/// here, so partially constructed instances are representable.
#[derive(Clone, Debug, PartialEq)]
pub struct SourcingInstance {
    /// Supply side, with per-product stock and a priority rank each.
    pub warehouses: Vec<Warehouse>,
    /// Demand side, with per-product demand ceilings.
    pub orders: Vec<Order>,
    /// Shipping cost per (warehouse, order, product) route.
    pub costs: MetricTensor,
    /// Shipping distance per route.
    pub distances: MetricTensor,
    /// Delivery lead time in days per route.
    pub days: MetricTensor,
}

impl SourcingInstance {
    /// Assembles an instance from its parts.
    pub fn new(
        warehouses: Vec<Warehouse>,
        orders: Vec<Order>,
        costs: MetricTensor,
        distances: MetricTensor,
        days: MetricTensor,
    ) -> Self {
        SourcingInstance {
            warehouses,
            orders,
            costs,
            distances,
            days,
        }
    }

    /// Number of warehouses.
    pub fn warehouse_count(&self) -> usize {
        self.warehouses.len()
    }

    /// Number of orders.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// True when there is nothing to allocate: no warehouses or no orders.
    pub fn is_trivial(&self) -> bool {
        self.warehouses.is_empty() || self.orders.is_empty()
    }

    /// Raw warehouse priority column, in warehouse order.
    pub fn priorities(&self) -> Vec<f64> {
        self.warehouses.iter().map(|w| w.priority).collect()
    }
}
