//! Warehouse entity.

use std::collections::BTreeMap;

/// A warehouse holding per-product stock.
///
/// `priority` is rank-like: a numerically smaller value marks a
/// higher-priority warehouse, which the objective prefers to route
/// through when the priority weight is non-zero.
///
/// # Example
///
/// ```
/// use stockwise_core::Warehouse;
///
/// let w = Warehouse::new("W1", 1.0)
///     .with_stock("P1", 40)
///     .with_stock("P2", 15);
///
/// assert_eq!(w.stock("P1"), 40);
/// assert_eq!(w.stock("P3"), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Warehouse {
    /// Unique warehouse identifier.
    pub id: String,
    /// Priority rank; smaller is better.
    pub priority: f64,
    /// Stock on hand per product identifier.
    pub stock: BTreeMap<String, i64>,
}

impl Warehouse {
    /// Creates a warehouse with the given identifier and priority rank.
    pub fn new(id: impl Into<String>, priority: f64) -> Self {
        Warehouse {
            id: id.into(),
            priority,
            stock: BTreeMap::new(),
        }
    }

    /// Declares stock of one product.
    pub fn with_stock(mut self, product: impl Into<String>, units: i64) -> Self {
        self.stock.insert(product.into(), units);
        self
    }

    /// Stock on hand for one product; zero for an undeclared product.
    pub fn stock(&self, product: &str) -> i64 {
        self.stock.get(product).copied().unwrap_or(0)
    }

    /// Product identifiers this warehouse declares, in sorted order.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.stock.keys().map(String::as_str)
    }
}
