//! Small, hand-checkable sourcing instances.
//!
//! Each fixture is sized so the optimal allocation can be verified by
//! inspection. Metric tensors are uniform unless a scenario needs a
//! discriminating column.

use stockwise_core::{MetricTensor, Order, SourcingInstance, Warehouse, Weightage};

/// The stock run weights: cost 1.0, priority 0.8, distance 0.6, days 0.4.
pub fn standard_weightage() -> Weightage {
    Weightage {
        cost: 1.0,
        priority: 0.8,
        distance: 0.6,
        days: 0.4,
    }
}

/// Uniform cost/distance/days tensors for the given dimensions.
pub fn uniform_metrics(
    warehouses: usize,
    orders: usize,
    products: usize,
) -> (MetricTensor, MetricTensor, MetricTensor) {
    (
        MetricTensor::filled("cost", warehouses, orders, products, 50.0),
        MetricTensor::filled("distance", warehouses, orders, products, 120.0),
        MetricTensor::filled("days", warehouses, orders, products, 3.0),
    )
}

/// One warehouse, one order, one product: stock 5, demand 5, uniform
/// metrics. The optimal allocation ships exactly 5 units.
pub fn single_route_instance() -> SourcingInstance {
    let (costs, distances, days) = uniform_metrics(1, 1, 1);
    SourcingInstance::new(
        vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
        vec![Order::new("O1").with_demand("P1", 5)],
        costs,
        distances,
        days,
    )
}

/// One warehouse with stock 3; two orders demanding 5 each, identical
/// metrics. Total shipped must equal 3; the split is solver tie-breaking.
pub fn stock_constrained_instance() -> SourcingInstance {
    let (costs, distances, days) = uniform_metrics(1, 2, 1);
    SourcingInstance::new(
        vec![Warehouse::new("W1", 1.0).with_stock("P1", 3)],
        vec![
            Order::new("O1").with_demand("P1", 5),
            Order::new("O2").with_demand("P1", 5),
        ],
        costs,
        distances,
        days,
    )
}

/// Two warehouses with stock 10 each; one order demanding 4. W1 carries
/// the better (smaller) priority rank; cost/distance/days are equal
/// between warehouses, so a priority-weighted solve must draw all 4
/// units from W1.
pub fn demand_constrained_instance() -> SourcingInstance {
    let (costs, distances, days) = uniform_metrics(2, 1, 1);
    SourcingInstance::new(
        vec![
            Warehouse::new("W1", 1.0).with_stock("P1", 10),
            Warehouse::new("W2", 5.0).with_stock("P1", 10),
        ],
        vec![Order::new("O1").with_demand("P1", 4)],
        costs,
        distances,
        days,
    )
}

/// Negative stock, which must be rejected at model-build time.
pub fn negative_stock_instance() -> SourcingInstance {
    let (costs, distances, days) = uniform_metrics(1, 1, 1);
    SourcingInstance::new(
        vec![Warehouse::new("W1", 1.0).with_stock("P1", -2)],
        vec![Order::new("O1").with_demand("P1", 5)],
        costs,
        distances,
        days,
    )
}

/// Warehouse and order product key sets disagree (P2 vs P3), which must
/// be rejected at model-build time.
pub fn mismatched_product_instance() -> SourcingInstance {
    let (costs, distances, days) = uniform_metrics(1, 1, 2);
    SourcingInstance::new(
        vec![Warehouse::new("W1", 1.0).with_stock("P1", 5).with_stock("P2", 5)],
        vec![Order::new("O1").with_demand("P1", 5).with_demand("P3", 5)],
        costs,
        distances,
        days,
    )
}

/// Two warehouses, two orders, two products, with per-product cost
/// structure chosen so each product's cheapest routing differs: P1 is
/// cheap out of W1, P2 is cheap out of W2. Exercises the per-product
/// decomposition.
pub fn two_product_instance() -> SourcingInstance {
    let costs = MetricTensor::from_fn("cost", 2, 2, 2, |w, _o, p| {
        if w == p {
            10.0
        } else {
            200.0
        }
    });
    let distances = MetricTensor::filled("distance", 2, 2, 2, 80.0);
    let days = MetricTensor::filled("days", 2, 2, 2, 2.0);
    SourcingInstance::new(
        vec![
            Warehouse::new("W1", 1.0).with_stock("P1", 6).with_stock("P2", 6),
            Warehouse::new("W2", 1.0).with_stock("P1", 6).with_stock("P2", 6),
        ],
        vec![
            Order::new("O1").with_demand("P1", 3).with_demand("P2", 3),
            Order::new("O2").with_demand("P1", 3).with_demand("P2", 3),
        ],
        costs,
        distances,
        days,
    )
}
