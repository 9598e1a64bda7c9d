//! The sourcing model: one transportation sub-model per product.
//!
//! Stock and demand constraints never couple two different products,
//! so the full |W| × |O| × |P| program decomposes exactly into |P|
//! independent (warehouse, order) transportation problems. The model
//! stores each sub-model's variables in a flat array addressed by
//! integer indices; identifiers live once in the [`EntityCatalog`].

use std::ops::Range;

/// Name registry mapping dense indices to identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityCatalog {
    warehouses: Vec<String>,
    orders: Vec<String>,
    products: Vec<String>,
}

impl EntityCatalog {
    /// Builds a catalog from identifier lists.
    pub fn new(warehouses: Vec<String>, orders: Vec<String>, products: Vec<String>) -> Self {
        EntityCatalog {
            warehouses,
            orders,
            products,
        }
    }

    /// Warehouse identifier at a dense index.
    ///
    /// # Panics
    ///
    /// Panics when `idx` is not below [`warehouse_count`](Self::warehouse_count).
    pub fn warehouse(&self, idx: usize) -> &str {
        &self.warehouses[idx]
    }

    /// Order identifier at a dense index.
    ///
    /// # Panics
    ///
    /// Panics when `idx` is not below [`order_count`](Self::order_count).
    pub fn order(&self, idx: usize) -> &str {
        &self.orders[idx]
    }

    /// Product identifier at a dense index.
    ///
    /// # Panics
    ///
    /// Panics when `idx` is not below [`product_count`](Self::product_count).
    pub fn product(&self, idx: usize) -> &str {
        &self.products[idx]
    }

    /// All warehouse identifiers, in index order.
    pub fn warehouses(&self) -> &[String] {
        &self.warehouses
    }

    /// All order identifiers, in index order.
    pub fn orders(&self) -> &[String] {
        &self.orders
    }

    /// All product identifiers, in index order.
    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// Number of warehouses.
    pub fn warehouse_count(&self) -> usize {
        self.warehouses.len()
    }

    /// Number of orders.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// One decision variable: a materialized (warehouse, order) route for
/// the sub-model's product, carrying its objective coefficient.
///
/// Routes where either the warehouse stocks none of the product or the
/// order demands none of it are structurally zero and never
/// materialized; extraction reports them with quantity 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteVar {
    /// Dense warehouse index into the catalog.
    pub warehouse: usize,
    /// Dense order index into the catalog.
    pub order: usize,
    /// Objective coefficient; never positive for built models.
    pub score: f64,
}

/// The transportation sub-model for a single product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductModel {
    product: usize,
    routes: Vec<RouteVar>,
    stock: Vec<i64>,
    demand: Vec<i64>,
}

impl ProductModel {
    /// Assembles a sub-model from its parts.
    ///
    /// `stock` is indexed by warehouse, `demand` by order; both are the
    /// constraint right-hand sides for this product.
    pub fn new(product: usize, routes: Vec<RouteVar>, stock: Vec<i64>, demand: Vec<i64>) -> Self {
        ProductModel {
            product,
            routes,
            stock,
            demand,
        }
    }

    /// Dense product index into the catalog.
    pub fn product(&self) -> usize {
        self.product
    }

    /// The materialized decision variables.
    pub fn routes(&self) -> &[RouteVar] {
        &self.routes
    }

    /// Per-warehouse stock ceilings for this product.
    pub fn stock(&self) -> &[i64] {
        &self.stock
    }

    /// Per-order demand ceilings for this product.
    pub fn demand(&self) -> &[i64] {
        &self.demand
    }

    /// Number of materialized decision variables.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// The full optimization problem for one run.
///
/// Built once per run by the model builder and consumed exactly once
/// by a solver. An empty model (no warehouses or no orders) is the
/// trivial case: nothing to solve, empty reports.
#[derive(Clone, Debug, PartialEq)]
pub struct SourcingModel {
    catalog: EntityCatalog,
    submodels: Vec<ProductModel>,
    offsets: Vec<usize>,
    variable_count: usize,
}

impl SourcingModel {
    /// Assembles a model from a catalog and per-product sub-models.
    pub fn new(catalog: EntityCatalog, submodels: Vec<ProductModel>) -> Self {
        let mut offsets = Vec::with_capacity(submodels.len());
        let mut total = 0;
        for sub in &submodels {
            offsets.push(total);
            total += sub.route_count();
        }
        SourcingModel {
            catalog,
            submodels,
            offsets,
            variable_count: total,
        }
    }

    /// The identifier registry.
    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }

    /// The per-product sub-models, in product index order.
    pub fn submodels(&self) -> &[ProductModel] {
        &self.submodels
    }

    /// Total number of materialized decision variables.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// The slice of a flat assignment belonging to one sub-model.
    ///
    /// # Panics
    ///
    /// Panics when `submodel` is not below the catalog's
    /// [`product_count`](EntityCatalog::product_count).
    pub fn route_range(&self, submodel: usize) -> Range<usize> {
        let start = self.offsets[submodel];
        start..start + self.submodels[submodel].route_count()
    }

    /// True when the model has nothing to allocate: no warehouses or no
    /// orders, hence no decision variables.
    pub fn is_trivial(&self) -> bool {
        self.catalog.warehouse_count() == 0 || self.catalog.order_count() == 0
    }

    /// Evaluates the objective for a flat assignment aligned with the
    /// model's variables.
    ///
    /// # Panics
    ///
    /// Panics when `quantities` does not hold exactly
    /// [`variable_count`](Self::variable_count) values.
    pub fn objective_value(&self, quantities: &[i64]) -> f64 {
        assert_eq!(quantities.len(), self.variable_count);
        let mut total = 0.0;
        for (idx, sub) in self.submodels.iter().enumerate() {
            let range = self.route_range(idx);
            for (route, &q) in sub.routes().iter().zip(&quantities[range]) {
                total += q as f64 * route.score;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> EntityCatalog {
        EntityCatalog::new(
            vec!["W1".into(), "W2".into()],
            vec!["O1".into()],
            vec!["P1".into(), "P2".into()],
        )
    }

    fn model() -> SourcingModel {
        let p1 = ProductModel::new(
            0,
            vec![
                RouteVar { warehouse: 0, order: 0, score: -1.0 },
                RouteVar { warehouse: 1, order: 0, score: -2.0 },
            ],
            vec![4, 6],
            vec![8],
        );
        let p2 = ProductModel::new(
            1,
            vec![RouteVar { warehouse: 1, order: 0, score: 0.0 }],
            vec![0, 3],
            vec![2],
        );
        SourcingModel::new(catalog(), vec![p1, p2])
    }

    #[test]
    fn test_variable_count_and_ranges() {
        let m = model();
        assert_eq!(m.variable_count(), 3);
        assert_eq!(m.route_range(0), 0..2);
        assert_eq!(m.route_range(1), 2..3);
    }

    #[test]
    fn test_objective_value() {
        let m = model();
        // 2 * -1.0 + 1 * -2.0 + 5 * 0.0
        assert_eq!(m.objective_value(&[2, 1, 5]), -4.0);
        assert_eq!(m.objective_value(&[0, 0, 0]), 0.0);
    }

    #[test]
    fn test_trivial_detection() {
        let empty = SourcingModel::new(EntityCatalog::default(), Vec::new());
        assert!(empty.is_trivial());
        assert!(!model().is_trivial());
    }
}
