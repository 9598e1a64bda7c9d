//! Reporting relations produced by solution extraction.
//!
//! Two relations describe one solved run: `Fulfillment` (shipped
//! quantity per route, zero-quantity routes included) and `StockStatus`
//! (per-warehouse, per-product inventory accounting). Both are plain
//! data, fully derivable from a solution and the input entities.

/// One allocation row: the shipped quantity for a single
/// (warehouse, order, product) route.
///
/// Zero-quantity rows are kept deliberately; downstream consumers
/// decide whether to filter them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FulfillmentRecord {
    /// Source warehouse identifier.
    pub warehouse: String,
    /// Product identifier.
    pub product: String,
    /// Destination order identifier.
    pub order: String,
    /// Units shipped on this route; non-negative and integral.
    pub quantity: i64,
}

/// Per-(warehouse, product) inventory accounting after allocation.
///
/// Always satisfies `initial == supplied + remaining`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockStatusRecord {
    /// Warehouse identifier.
    pub warehouse: String,
    /// Product identifier.
    pub product: String,
    /// Stock on hand before the run.
    pub initial: i64,
    /// Units shipped across all orders.
    pub supplied: i64,
    /// Stock left after the run.
    pub remaining: i64,
}

/// The two reporting relations for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourcingReport {
    /// One row per (warehouse, order, product) route of the model.
    pub fulfillment: Vec<FulfillmentRecord>,
    /// One row per (warehouse, product) pair.
    pub stock_status: Vec<StockStatusRecord>,
}

impl SourcingReport {
    /// A report with no rows, as produced for a trivial model.
    pub fn empty() -> Self {
        SourcingReport::default()
    }

    /// True when both relations are empty.
    pub fn is_empty(&self) -> bool {
        self.fulfillment.is_empty() && self.stock_status.is_empty()
    }

    /// Total units shipped across every route.
    pub fn total_shipped(&self) -> i64 {
        self.fulfillment.iter().map(|r| r.quantity).sum()
    }

    /// Total units shipped into one order.
    pub fn shipped_to(&self, order: &str) -> i64 {
        self.fulfillment
            .iter()
            .filter(|r| r.order == order)
            .map(|r| r.quantity)
            .sum()
    }

    /// Total units shipped out of one warehouse.
    pub fn shipped_from(&self, warehouse: &str) -> i64 {
        self.fulfillment
            .iter()
            .filter(|r| r.warehouse == warehouse)
            .map(|r| r.quantity)
            .sum()
    }
}
