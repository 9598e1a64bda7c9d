//! Order entity.

use std::collections::BTreeMap;

/// A customer order demanding per-product quantities.
///
/// Demand is a ceiling, not a commitment: the optimizer may ship less
/// than the demanded quantity when stock runs out, never more.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    /// Demanded units per product identifier.
    pub demand: BTreeMap<String, i64>,
}

impl Order {
    /// Creates an order with the given identifier and no demand lines.
    pub fn new(id: impl Into<String>) -> Self {
        Order {
            id: id.into(),
            demand: BTreeMap::new(),
        }
    }

    /// Declares demand for one product.
    pub fn with_demand(mut self, product: impl Into<String>, units: i64) -> Self {
        self.demand.insert(product.into(), units);
        self
    }

    /// Demanded units for one product; zero for an undeclared product.
    pub fn demand(&self, product: &str) -> i64 {
        self.demand.get(product).copied().unwrap_or(0)
    }

    /// Product identifiers this order declares, in sorted order.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.demand.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_lookup() {
        let o = Order::new("O1").with_demand("P1", 4).with_demand("P2", 0);
        assert_eq!(o.demand("P1"), 4);
        assert_eq!(o.demand("P2"), 0);
        assert_eq!(o.demand("P3"), 0);
    }
}
