//! Grouping of fulfillment rows into per-route allocations.
//!
//! A network rendering of a solved run draws one edge per
//! (warehouse, order) pair, labelled with every product shipped along
//! it and weighted by the summed quantity. This module performs that
//! grouping; drawing is left to the caller.

use std::collections::HashMap;

use stockwise_core::report::SourcingReport;

/// Every shipment travelling one warehouse-to-order route, with the
/// per-product quantities and their sum.
///
/// Zero-quantity items stay in the group. Callers that only want
/// routes carrying stock filter with [`RouteAllocation::is_shipped`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteAllocation {
    warehouse: String,
    order: String,
    items: Vec<(String, i64)>,
    total: i64,
}

impl RouteAllocation {
    /// Source warehouse identifier.
    pub fn warehouse(&self) -> &str {
        &self.warehouse
    }

    /// Destination order identifier.
    pub fn order(&self) -> &str {
        &self.order
    }

    /// The (product, quantity) pairs on this route, in fulfillment
    /// row order.
    pub fn items(&self) -> &[(String, i64)] {
        &self.items
    }

    /// Total units across every product on this route.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// True when at least one unit travels this route.
    pub fn is_shipped(&self) -> bool {
        self.total > 0
    }

    /// Rendered label for the route, `"P1 (3), P2 (5)"` style.
    pub fn label(&self) -> String {
        self.items
            .iter()
            .map(|(product, quantity)| format!("{} ({})", product, quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Groups the fulfillment relation by (warehouse, order) pair.
///
/// Groups appear in first-appearance order over the fulfillment rows,
/// and items keep their row order within each group. Nothing is
/// filtered: a route whose rows are all zero still yields a group
/// with `total == 0`.
///
/// # Example
///
/// ```
/// use stockwise_core::report::{FulfillmentRecord, SourcingReport};
/// use stockwise_report::aggregate_allocations;
///
/// let report = SourcingReport {
///     fulfillment: vec![
///         FulfillmentRecord {
///             warehouse: "W1".into(),
///             product: "P1".into(),
///             order: "O1".into(),
///             quantity: 3,
///         },
///         FulfillmentRecord {
///             warehouse: "W1".into(),
///             product: "P2".into(),
///             order: "O1".into(),
///             quantity: 5,
///         },
///     ],
///     stock_status: Vec::new(),
/// };
///
/// let routes = aggregate_allocations(&report);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].total(), 8);
/// assert_eq!(routes[0].label(), "P1 (3), P2 (5)");
/// ```
pub fn aggregate_allocations(report: &SourcingReport) -> Vec<RouteAllocation> {
    let mut routes: Vec<RouteAllocation> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for record in &report.fulfillment {
        let key = (record.warehouse.clone(), record.order.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            routes.push(RouteAllocation {
                warehouse: record.warehouse.clone(),
                order: record.order.clone(),
                items: Vec::new(),
                total: 0,
            });
            routes.len() - 1
        });
        let route = &mut routes[slot];
        route.items.push((record.product.clone(), record.quantity));
        route.total += record.quantity;
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwise_core::report::FulfillmentRecord;

    fn record(w: &str, p: &str, o: &str, q: i64) -> FulfillmentRecord {
        FulfillmentRecord {
            warehouse: w.to_string(),
            product: p.to_string(),
            order: o.to_string(),
            quantity: q,
        }
    }

    fn report(rows: Vec<FulfillmentRecord>) -> SourcingReport {
        SourcingReport {
            fulfillment: rows,
            stock_status: Vec::new(),
        }
    }

    #[test]
    fn test_groups_by_warehouse_order_pair() {
        let report = report(vec![
            record("W1", "P1", "O1", 3),
            record("W1", "P1", "O2", 1),
            record("W1", "P2", "O1", 5),
            record("W2", "P1", "O1", 2),
        ]);

        let routes = aggregate_allocations(&report);
        assert_eq!(routes.len(), 3);

        assert_eq!(routes[0].warehouse(), "W1");
        assert_eq!(routes[0].order(), "O1");
        assert_eq!(
            routes[0].items(),
            &[("P1".to_string(), 3), ("P2".to_string(), 5)]
        );
        assert_eq!(routes[0].total(), 8);

        assert_eq!(routes[1].warehouse(), "W1");
        assert_eq!(routes[1].order(), "O2");
        assert_eq!(routes[1].total(), 1);

        assert_eq!(routes[2].warehouse(), "W2");
        assert_eq!(routes[2].total(), 2);
    }

    #[test]
    fn test_first_appearance_order_is_stable() {
        let report = report(vec![
            record("W2", "P1", "O1", 1),
            record("W1", "P1", "O1", 1),
            record("W2", "P2", "O1", 1),
        ]);

        let routes = aggregate_allocations(&report);
        assert_eq!(routes[0].warehouse(), "W2");
        assert_eq!(routes[1].warehouse(), "W1");
        assert_eq!(routes[0].items().len(), 2);
    }

    #[test]
    fn test_zero_quantity_routes_are_kept() {
        let report = report(vec![
            record("W1", "P1", "O1", 0),
            record("W1", "P1", "O2", 4),
        ]);

        let routes = aggregate_allocations(&report);
        assert_eq!(routes.len(), 2);
        assert!(!routes[0].is_shipped());
        assert!(routes[1].is_shipped());

        let shipped: Vec<_> = routes.iter().filter(|r| r.is_shipped()).collect();
        assert_eq!(shipped.len(), 1);
        assert_eq!(shipped[0].order(), "O2");
    }

    #[test]
    fn test_label_lists_every_item() {
        let report = report(vec![
            record("W1", "P1", "O1", 3),
            record("W1", "P2", "O1", 0),
        ]);

        let routes = aggregate_allocations(&report);
        assert_eq!(routes[0].label(), "P1 (3), P2 (0)");
    }

    #[test]
    fn test_empty_report_yields_no_routes() {
        let routes = aggregate_allocations(&SourcingReport::empty());
        assert!(routes.is_empty());
    }
}
