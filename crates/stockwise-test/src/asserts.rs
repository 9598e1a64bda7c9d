//! Allocation invariant checks shared across crates.
//!
//! Each check panics with a descriptive message on violation, so they
//! can be called directly from `#[test]` functions.

use std::collections::BTreeMap;

use stockwise_core::{SourcingInstance, SourcingReport};

/// Asserts every fulfillment quantity is non-negative.
pub fn assert_quantities_non_negative(report: &SourcingReport) {
    for row in &report.fulfillment {
        assert!(
            row.quantity >= 0,
            "negative quantity {} on route {}->{} for {}",
            row.quantity,
            row.warehouse,
            row.order,
            row.product,
        );
    }
}

/// Asserts per-(warehouse, product) stock accounting holds: the status
/// relation matches the instance's initial stock, `initial == supplied
/// + remaining`, `remaining >= 0`, and `supplied` equals the sum of the
/// fulfillment rows for that pair.
pub fn assert_stock_conserved(report: &SourcingReport, instance: &SourcingInstance) {
    let mut shipped: BTreeMap<(&str, &str), i64> = BTreeMap::new();
    for row in &report.fulfillment {
        *shipped
            .entry((row.warehouse.as_str(), row.product.as_str()))
            .or_insert(0) += row.quantity;
    }

    for status in &report.stock_status {
        let key = (status.warehouse.as_str(), status.product.as_str());
        assert_eq!(
            status.initial,
            status.supplied + status.remaining,
            "stock books don't balance for {}/{}",
            status.warehouse,
            status.product,
        );
        assert!(
            status.remaining >= 0,
            "negative remaining stock for {}/{}",
            status.warehouse,
            status.product,
        );
        assert_eq!(
            status.supplied,
            shipped.get(&key).copied().unwrap_or(0),
            "supplied diverges from fulfillment rows for {}/{}",
            status.warehouse,
            status.product,
        );

        let warehouse = instance
            .warehouses
            .iter()
            .find(|w| w.id == status.warehouse)
            .unwrap_or_else(|| panic!("unknown warehouse {} in stock status", status.warehouse));
        assert_eq!(
            status.initial,
            warehouse.stock(&status.product),
            "initial stock diverges from instance for {}/{}",
            status.warehouse,
            status.product,
        );
    }
}

/// Asserts no (order, product) pair receives more than its demand.
pub fn assert_demand_respected(report: &SourcingReport, instance: &SourcingInstance) {
    let mut received: BTreeMap<(&str, &str), i64> = BTreeMap::new();
    for row in &report.fulfillment {
        *received
            .entry((row.order.as_str(), row.product.as_str()))
            .or_insert(0) += row.quantity;
    }

    for ((order_id, product), &total) in &received {
        let order = instance
            .orders
            .iter()
            .find(|o| o.id == *order_id)
            .unwrap_or_else(|| panic!("unknown order {order_id} in fulfillment"));
        assert!(
            total <= order.demand(product),
            "order {} received {} of {} but demanded {}",
            order_id,
            total,
            product,
            order.demand(product),
        );
    }
}

/// Runs every allocation invariant in one call.
pub fn assert_allocation_valid(report: &SourcingReport, instance: &SourcingInstance) {
    assert_quantities_non_negative(report);
    assert_stock_conserved(report, instance);
    assert_demand_respected(report, instance);
}
