//! Turns a validated instance into a [`SourcingModel`].
//!
//! Building normalizes every criterion to `[0, 1]`, computes one route
//! score per materialized (warehouse, order, product) combination, and
//! lays the variables out per product. Priorities normalize over the
//! warehouse column; cost, distance, and days normalize over their full
//! tensors.

use stockwise_core::{min_max_scale, NormalizedMetric, Result, SourcingInstance, Weightage};
use tracing::debug;

use crate::model::{EntityCatalog, ProductModel, RouteVar, SourcingModel};
use crate::score::route_score;
use crate::validate::validate_instance;

/// Builds a [`SourcingModel`] from an instance and a weightage.
///
/// ```
/// use stockwise_core::{MetricTensor, Order, SourcingInstance, Warehouse, Weightage};
/// use stockwise_model::ModelBuilder;
///
/// let instance = SourcingInstance::new(
///     vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
///     vec![Order::new("O1").with_demand("P1", 5)],
///     MetricTensor::filled("cost", 1, 1, 1, 50.0),
///     MetricTensor::filled("distance", 1, 1, 1, 120.0),
///     MetricTensor::filled("days", 1, 1, 1, 3.0),
/// );
/// let model = ModelBuilder::new(&instance, Weightage::UNIFORM).build()?;
/// assert_eq!(model.variable_count(), 1);
/// # Ok::<(), stockwise_core::SourcingError>(())
/// ```
pub struct ModelBuilder<'a> {
    instance: &'a SourcingInstance,
    weightage: Weightage,
}

impl<'a> ModelBuilder<'a> {
    /// Binds an instance and a weightage for building.
    pub fn new(instance: &'a SourcingInstance, weightage: Weightage) -> Self {
        ModelBuilder {
            instance,
            weightage,
        }
    }

    /// Validates the input and builds the model.
    ///
    /// Routes where the warehouse stocks zero of the product or the
    /// order demands zero of it carry no decision variable; extraction
    /// fills them in with quantity 0. A trivial instance produces a
    /// model with no variables.
    pub fn build(self) -> Result<SourcingModel> {
        validate_instance(self.instance, &self.weightage)?;

        let instance = self.instance;
        let warehouse_ids: Vec<String> =
            instance.warehouses.iter().map(|w| w.id.clone()).collect();
        let order_ids: Vec<String> = instance.orders.iter().map(|o| o.id.clone()).collect();

        if instance.is_trivial() {
            let catalog = EntityCatalog::new(warehouse_ids, order_ids, Vec::new());
            return Ok(SourcingModel::new(catalog, Vec::new()));
        }

        let products: Vec<String> = instance.warehouses[0]
            .products()
            .map(str::to_string)
            .collect();

        let norm_priority = min_max_scale(&instance.priorities());
        let norm_cost = NormalizedMetric::from_raw(&instance.costs);
        let norm_distance = NormalizedMetric::from_raw(&instance.distances);
        let norm_days = NormalizedMetric::from_raw(&instance.days);

        let mut submodels = Vec::with_capacity(products.len());
        for (p, product) in products.iter().enumerate() {
            let stock: Vec<i64> = instance
                .warehouses
                .iter()
                .map(|w| w.stock(product))
                .collect();
            let demand: Vec<i64> = instance.orders.iter().map(|o| o.demand(product)).collect();

            let mut routes = Vec::new();
            for (w, &available) in stock.iter().enumerate() {
                if available == 0 {
                    continue;
                }
                for (o, &wanted) in demand.iter().enumerate() {
                    if wanted == 0 {
                        continue;
                    }
                    routes.push(RouteVar {
                        warehouse: w,
                        order: o,
                        score: route_score(
                            &self.weightage,
                            norm_cost.get(w, o, p),
                            norm_priority[w],
                            norm_distance.get(w, o, p),
                            norm_days.get(w, o, p),
                        ),
                    });
                }
            }
            submodels.push(ProductModel::new(p, routes, stock, demand));
        }

        let catalog = EntityCatalog::new(warehouse_ids, order_ids, products);
        let model = SourcingModel::new(catalog, submodels);
        debug!(
            event = "model_built",
            warehouses = model.catalog().warehouse_count(),
            orders = model.catalog().order_count(),
            products = model.catalog().product_count(),
            variables = model.variable_count(),
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwise_core::{MetricTensor, Order, SourcingError, Warehouse};
    use stockwise_test::instances::negative_stock_instance;
    use stockwise_test::{
        demand_constrained_instance, single_route_instance, standard_weightage,
        two_product_instance,
    };

    #[test]
    fn test_single_route_model() {
        let instance = single_route_instance();
        let model = ModelBuilder::new(&instance, standard_weightage())
            .build()
            .unwrap();
        assert_eq!(model.variable_count(), 1);
        assert_eq!(model.catalog().products(), ["P1"]);
        let sub = &model.submodels()[0];
        assert_eq!(sub.stock(), [5]);
        assert_eq!(sub.demand(), [5]);
        // Uniform metrics and one warehouse: every column degenerates to 0.
        assert_eq!(sub.routes()[0].score, 0.0);
    }

    #[test]
    fn test_priority_discriminates_routes() {
        let instance = demand_constrained_instance();
        let model = ModelBuilder::new(&instance, standard_weightage())
            .build()
            .unwrap();
        let routes = model.submodels()[0].routes();
        assert_eq!(routes.len(), 2);
        // W1 holds the better priority rank; after normalization it
        // scores 0 and W2 scores -0.8 (the priority weight).
        assert_eq!(routes[0].warehouse, 0);
        assert_eq!(routes[0].score, 0.0);
        assert_eq!(routes[1].warehouse, 1);
        assert!((routes[1].score + 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_scores_never_positive() {
        let instance = two_product_instance();
        let model = ModelBuilder::new(&instance, standard_weightage())
            .build()
            .unwrap();
        for sub in model.submodels() {
            for route in sub.routes() {
                assert!(route.score <= 0.0, "route score {} > 0", route.score);
            }
        }
        assert_eq!(model.variable_count(), 8);
    }

    #[test]
    fn test_zero_stock_routes_not_materialized() {
        let instance = SourcingInstance::new(
            vec![
                Warehouse::new("W1", 1.0).with_stock("P1", 0),
                Warehouse::new("W2", 2.0).with_stock("P1", 7),
            ],
            vec![
                Order::new("O1").with_demand("P1", 4),
                Order::new("O2").with_demand("P1", 0),
            ],
            MetricTensor::filled("cost", 2, 2, 1, 50.0),
            MetricTensor::filled("distance", 2, 2, 1, 120.0),
            MetricTensor::filled("days", 2, 2, 1, 3.0),
        );
        let model = ModelBuilder::new(&instance, standard_weightage())
            .build()
            .unwrap();
        let routes = model.submodels()[0].routes();
        assert_eq!(routes.len(), 1);
        assert_eq!((routes[0].warehouse, routes[0].order), (1, 0));
    }

    #[test]
    fn test_trivial_instance_builds_empty_model() {
        let instance = SourcingInstance::new(
            vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
            Vec::new(),
            MetricTensor::filled("cost", 0, 0, 0, 0.0),
            MetricTensor::filled("distance", 0, 0, 0, 0.0),
            MetricTensor::filled("days", 0, 0, 0, 0.0),
        );
        let model = ModelBuilder::new(&instance, standard_weightage())
            .build()
            .unwrap();
        assert!(model.is_trivial());
        assert_eq!(model.variable_count(), 0);
        assert_eq!(model.catalog().warehouses(), ["W1"]);
    }

    #[test]
    fn test_invalid_instance_rejected() {
        let instance = negative_stock_instance();
        let err = ModelBuilder::new(&instance, standard_weightage())
            .build()
            .unwrap_err();
        assert!(matches!(err, SourcingError::Negative { kind: "stock", .. }));
    }
}
