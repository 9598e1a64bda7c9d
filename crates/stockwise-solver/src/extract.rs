//! Converts a raw assignment into the reporting relations.
//!
//! Fulfillment covers the full warehouse x product x order
//! cross-product, one row per route whether or not anything shipped;
//! routes without a decision variable report quantity 0. Stock status
//! carries one row per (warehouse, product) with the before and after
//! accounting. Extraction is pure: no rounding, no re-optimization.

use stockwise_core::{
    FulfillmentRecord, Result, SourcingError, SourcingReport, StockStatusRecord,
};
use stockwise_model::SourcingModel;

use crate::solver::Solution;

/// Builds the fulfillment and stock-status relations for an optimal
/// solution.
///
/// # Errors
///
/// Returns [`SourcingError::InvalidState`] when the solution's status
/// is not optimal or its assignment does not match the model's
/// variable count. Non-optimal statuses never yield a partial report.
pub fn extract_report(model: &SourcingModel, solution: &Solution) -> Result<SourcingReport> {
    if !solution.is_optimal() {
        return Err(SourcingError::InvalidState(format!(
            "Cannot extract a report from a {} solution",
            solution.status
        )));
    }
    if model.is_trivial() {
        return Ok(SourcingReport::empty());
    }
    if solution.quantities.len() != model.variable_count() {
        return Err(SourcingError::InvalidState(format!(
            "Solution carries {} quantities for a model with {} variables",
            solution.quantities.len(),
            model.variable_count()
        )));
    }

    let catalog = model.catalog();
    let warehouses = catalog.warehouse_count();
    let orders = catalog.order_count();
    let products = catalog.product_count();

    // Scatter the flat assignment into a dense grid so structurally
    // absent routes report zero.
    let mut shipped = vec![0i64; warehouses * orders * products];
    for (p, sub) in model.submodels().iter().enumerate() {
        let range = model.route_range(p);
        for (route, &quantity) in sub.routes().iter().zip(&solution.quantities[range]) {
            shipped[(route.warehouse * orders + route.order) * products + p] = quantity;
        }
    }

    let mut fulfillment = Vec::with_capacity(warehouses * products * orders);
    let mut stock_status = Vec::with_capacity(warehouses * products);
    for w in 0..warehouses {
        for p in 0..products {
            let mut supplied = 0;
            for o in 0..orders {
                let quantity = shipped[(w * orders + o) * products + p];
                supplied += quantity;
                fulfillment.push(FulfillmentRecord {
                    warehouse: catalog.warehouse(w).to_string(),
                    product: catalog.product(p).to_string(),
                    order: catalog.order(o).to_string(),
                    quantity,
                });
            }
            let initial = model.submodels()[p].stock()[w];
            stock_status.push(StockStatusRecord {
                warehouse: catalog.warehouse(w).to_string(),
                product: catalog.product(p).to_string(),
                initial,
                supplied,
                remaining: initial - supplied,
            });
        }
    }

    Ok(SourcingReport {
        fulfillment,
        stock_status,
    })
}
