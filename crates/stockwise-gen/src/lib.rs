//! Seeded synthetic sourcing instances.
//!
//! Draws warehouses, orders, and metric tensors from the inclusive
//! ranges in a [`GeneratorConfig`]. The same configuration and seed
//! always produce the same instance, so generated fixtures can be
//! referenced from tests and benchmarks by seed alone.
//!
//! Identifiers are `W1..Wn`, `O1..On`, and `P1..Pn`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use stockwise_config::{ConfigError, GeneratorConfig, RangeConfig};
use stockwise_core::{MetricTensor, Order, SourcingInstance, Warehouse};

/// Generates one instance from a configuration and a seed.
///
/// Sampling order is fixed: warehouse priorities and stocks first, then
/// order demands, then the cost, distance, and days tensors.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when a sampling range is empty or
/// extends below zero.
pub fn generate(config: &GeneratorConfig, seed: u64) -> Result<SourcingInstance, ConfigError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let product_ids: Vec<String> = (1..=config.products).map(|p| format!("P{p}")).collect();

    let mut warehouses = Vec::with_capacity(config.warehouses);
    for w in 1..=config.warehouses {
        let priority = draw(&mut rng, config.priority) as f64;
        let mut warehouse = Warehouse::new(format!("W{w}"), priority);
        for product in &product_ids {
            warehouse = warehouse.with_stock(product, draw(&mut rng, config.stock));
        }
        warehouses.push(warehouse);
    }

    let mut orders = Vec::with_capacity(config.orders);
    for o in 1..=config.orders {
        let mut order = Order::new(format!("O{o}"));
        for product in &product_ids {
            order = order.with_demand(product, draw(&mut rng, config.demand));
        }
        orders.push(order);
    }

    let costs = metric(&mut rng, "cost", config, config.cost);
    let distances = metric(&mut rng, "distance", config, config.distance);
    let days = metric(&mut rng, "days", config, config.days);

    Ok(SourcingInstance::new(
        warehouses, orders, costs, distances, days,
    ))
}

fn draw(rng: &mut ChaCha8Rng, range: RangeConfig) -> i64 {
    rng.random_range(range.min..=range.max)
}

fn metric(
    rng: &mut ChaCha8Rng,
    name: &str,
    config: &GeneratorConfig,
    range: RangeConfig,
) -> MetricTensor {
    MetricTensor::from_fn(
        name,
        config.warehouses,
        config.orders,
        config.products,
        |_, _, _| draw(rng, range) as f64,
    )
}
