//! Instance validation ahead of model building.
//!
//! The builder refuses malformed input instead of producing a model
//! whose solution would be meaningless. Checks run in a fixed order so
//! an instance with several defects reports the same error every time.

use stockwise_core::{Result, SourcingError, SourcingInstance, Weightage};

use std::collections::BTreeSet;

/// Validates an instance and weightage pair for model building.
///
/// Checks, in order: weight values, duplicate identifiers, warehouse
/// priorities, product key-set agreement, stock and demand signs, and
/// finally metric tensor dimensions and values. Trivial instances
/// (no warehouses or no orders) skip the product and metric checks
/// since nothing will be allocated from them.
pub fn validate_instance(instance: &SourcingInstance, weightage: &Weightage) -> Result<()> {
    weightage.validate()?;

    check_unique_ids("warehouse", instance.warehouses.iter().map(|w| w.id.as_str()))?;
    check_unique_ids("order", instance.orders.iter().map(|o| o.id.as_str()))?;

    for warehouse in &instance.warehouses {
        if !warehouse.priority.is_finite() {
            return Err(SourcingError::NonFinite {
                kind: "priority",
                subject: format!("warehouse `{}`", warehouse.id),
            });
        }
        if warehouse.priority < 0.0 {
            return Err(SourcingError::Negative {
                kind: "priority",
                subject: format!("warehouse `{}`", warehouse.id),
                value: warehouse.priority,
            });
        }
    }

    if !instance.is_trivial() {
        check_product_sets(instance)?;
    }

    for warehouse in &instance.warehouses {
        for product in warehouse.products() {
            let units = warehouse.stock(product);
            if units < 0 {
                return Err(SourcingError::Negative {
                    kind: "stock",
                    subject: format!("warehouse `{}`, product `{}`", warehouse.id, product),
                    value: units as f64,
                });
            }
        }
    }
    for order in &instance.orders {
        for product in order.products() {
            let units = order.demand(product);
            if units < 0 {
                return Err(SourcingError::Negative {
                    kind: "demand",
                    subject: format!("order `{}`, product `{}`", order.id, product),
                    value: units as f64,
                });
            }
        }
    }

    if !instance.is_trivial() {
        check_metrics(instance)?;
    }

    Ok(())
}

fn check_unique_ids<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SourcingError::DuplicateEntity {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Every warehouse must stock the same product set, every order must
/// demand the same product set, and the two sets must agree.
fn check_product_sets(instance: &SourcingInstance) -> Result<()> {
    let first_warehouse = &instance.warehouses[0];
    let stocked: Vec<&str> = first_warehouse.products().collect();
    for warehouse in &instance.warehouses[1..] {
        let products: Vec<&str> = warehouse.products().collect();
        if products != stocked {
            return Err(SourcingError::ProductMismatch(format!(
                "warehouse `{}` does not stock the same product set as warehouse `{}`",
                warehouse.id, first_warehouse.id
            )));
        }
    }

    let first_order = &instance.orders[0];
    let demanded: Vec<&str> = first_order.products().collect();
    for order in &instance.orders[1..] {
        let products: Vec<&str> = order.products().collect();
        if products != demanded {
            return Err(SourcingError::ProductMismatch(format!(
                "order `{}` does not demand the same product set as order `{}`",
                order.id, first_order.id
            )));
        }
    }

    if stocked != demanded {
        return Err(SourcingError::ProductMismatch(format!(
            "orders demand [{}] but warehouses stock [{}]",
            demanded.join(", "),
            stocked.join(", ")
        )));
    }
    Ok(())
}

fn check_metrics(instance: &SourcingInstance) -> Result<()> {
    let expected = (
        instance.warehouse_count(),
        instance.order_count(),
        instance.warehouses[0].products().count(),
    );
    for tensor in [&instance.costs, &instance.distances, &instance.days] {
        if tensor.shape() != expected {
            return Err(SourcingError::WrongDimensions {
                name: tensor.name().to_string(),
                expected,
                actual: tensor.shape(),
            });
        }
        for w in 0..expected.0 {
            for o in 0..expected.1 {
                for p in 0..expected.2 {
                    let value = tensor.get(w, o, p);
                    if !value.is_finite() {
                        return Err(SourcingError::NonFinite {
                            kind: "metric",
                            subject: metric_subject(instance, tensor.name(), w, o, p),
                        });
                    }
                    if value < 0.0 {
                        return Err(SourcingError::Negative {
                            kind: "metric",
                            subject: metric_subject(instance, tensor.name(), w, o, p),
                            value,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

fn metric_subject(
    instance: &SourcingInstance,
    name: &str,
    w: usize,
    o: usize,
    p: usize,
) -> String {
    let product = instance.warehouses[w]
        .products()
        .nth(p)
        .unwrap_or("?")
        .to_string();
    format!(
        "`{}` at ({}, {}, {})",
        name, instance.warehouses[w].id, instance.orders[o].id, product
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwise_core::{MetricTensor, Order, Warehouse};
    use stockwise_test::instances::{
        mismatched_product_instance, negative_stock_instance, single_route_instance,
        standard_weightage, uniform_metrics,
    };

    #[test]
    fn test_valid_instance_passes() {
        let instance = single_route_instance();
        assert!(validate_instance(&instance, &standard_weightage()).is_ok());
    }

    #[test]
    fn test_negative_stock_rejected() {
        let instance = negative_stock_instance();
        let err = validate_instance(&instance, &standard_weightage()).unwrap_err();
        assert!(matches!(err, SourcingError::Negative { kind: "stock", .. }));
    }

    #[test]
    fn test_negative_demand_rejected() {
        let (costs, distances, days) = uniform_metrics(1, 1, 1);
        let instance = SourcingInstance::new(
            vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
            vec![Order::new("O1").with_demand("P1", -3)],
            costs,
            distances,
            days,
        );
        let err = validate_instance(&instance, &standard_weightage()).unwrap_err();
        assert!(matches!(err, SourcingError::Negative { kind: "demand", .. }));
    }

    #[test]
    fn test_duplicate_warehouse_rejected() {
        let (costs, distances, days) = uniform_metrics(2, 1, 1);
        let instance = SourcingInstance::new(
            vec![
                Warehouse::new("W1", 1.0).with_stock("P1", 5),
                Warehouse::new("W1", 2.0).with_stock("P1", 5),
            ],
            vec![Order::new("O1").with_demand("P1", 4)],
            costs,
            distances,
            days,
        );
        let err = validate_instance(&instance, &standard_weightage()).unwrap_err();
        assert!(matches!(
            err,
            SourcingError::DuplicateEntity { kind: "warehouse", .. }
        ));
    }

    #[test]
    fn test_mismatched_products_rejected() {
        let instance = mismatched_product_instance();
        let err = validate_instance(&instance, &standard_weightage()).unwrap_err();
        assert!(matches!(err, SourcingError::ProductMismatch(_)));
    }

    #[test]
    fn test_wrong_tensor_dimensions_rejected() {
        let (_, distances, days) = uniform_metrics(1, 1, 1);
        let costs = MetricTensor::filled("cost", 2, 1, 1, 50.0);
        let instance = SourcingInstance::new(
            vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
            vec![Order::new("O1").with_demand("P1", 4)],
            costs,
            distances,
            days,
        );
        let err = validate_instance(&instance, &standard_weightage()).unwrap_err();
        assert!(matches!(
            err,
            SourcingError::WrongDimensions {
                expected: (1, 1, 1),
                actual: (2, 1, 1),
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_metric_rejected() {
        let (costs, distances, _) = uniform_metrics(1, 1, 1);
        let days = MetricTensor::filled("days", 1, 1, 1, f64::NAN);
        let instance = SourcingInstance::new(
            vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
            vec![Order::new("O1").with_demand("P1", 4)],
            costs,
            distances,
            days,
        );
        let err = validate_instance(&instance, &standard_weightage()).unwrap_err();
        assert!(matches!(err, SourcingError::NonFinite { kind: "metric", .. }));
    }

    #[test]
    fn test_negative_priority_rejected() {
        let (costs, distances, days) = uniform_metrics(1, 1, 1);
        let instance = SourcingInstance::new(
            vec![Warehouse::new("W1", -1.0).with_stock("P1", 5)],
            vec![Order::new("O1").with_demand("P1", 4)],
            costs,
            distances,
            days,
        );
        let err = validate_instance(&instance, &standard_weightage()).unwrap_err();
        assert!(matches!(
            err,
            SourcingError::Negative { kind: "priority", .. }
        ));
    }

    #[test]
    fn test_trivial_instance_passes_without_metrics() {
        let instance = SourcingInstance::new(
            vec![Warehouse::new("W1", 1.0).with_stock("P1", 5)],
            Vec::new(),
            MetricTensor::filled("cost", 0, 0, 0, 0.0),
            MetricTensor::filled("distance", 0, 0, 0, 0.0),
            MetricTensor::filled("days", 0, 0, 0, 0.0),
        );
        assert!(validate_instance(&instance, &standard_weightage()).is_ok());
    }
}
