//! Retail Sourcing Example
//!
//! Generates a synthetic sourcing instance (warehouses holding product
//! stock, orders demanding products), allocates stock to orders with
//! the bundled flow solver, and writes the reporting relations as CSV
//! files.
//!
//! Usage:
//!
//! ```text
//! retail-sourcing [CONFIG] [SEED]
//! ```
//!
//! `CONFIG` is a TOML file overriding any subset of the defaults and
//! `SEED` makes the generated instance reproducible; without arguments
//! a default instance is generated from seed 42. Set
//! `RUST_LOG=stockwise_solver=info` to watch the pipeline events.

use std::env;
use std::fs;
use std::io;

use stockwise::prelude::*;
use stockwise::{AllocationCsv, FulfillmentCsv, RouteAllocation, StockStatusCsv};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED: u64 = 42;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    println!("Stockwise Retail Sourcing Example");
    println!("=================================\n");

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => match RunConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Cannot load config {}: {}", path, err);
                return;
            }
        },
        None => RunConfig::default(),
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        return;
    }

    let seed = match args.get(2) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("Seed must be a non-negative integer, got `{}`", raw);
                return;
            }
        },
        None => DEFAULT_SEED,
    };

    let instance = match generate(&config.generator, seed) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("Cannot generate an instance: {}", err);
            return;
        }
    };
    println!(
        "Problem: {} warehouses, {} orders, {} products (seed {})",
        instance.warehouse_count(),
        instance.order_count(),
        config.generator.products,
        seed
    );

    println!("Running the flow solver...\n");
    let outcome = match run_with_config(&instance, &config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Invalid instance: {}", err);
            return;
        }
    };

    let report = match &outcome {
        RunOutcome::Solved { report, objective } => {
            println!("Status: Optimal (objective {:.4})", objective);
            report
        }
        RunOutcome::Trivial { report } => {
            println!("Status: Optimal (nothing to allocate)");
            report
        }
        RunOutcome::Failed { status } => {
            eprintln!("Solve failed with status {}", status);
            return;
        }
    };

    println!("\nFulfillment:");
    print!("{}", FulfillmentCsv::to_string(report));
    println!("\nStock status:");
    print!("{}", StockStatusCsv::to_string(report));

    let routes = aggregate_allocations(report);
    print_allocations(report, &routes);

    if let Err(err) = write_reports(report, &routes, &config) {
        eprintln!("Cannot write reports: {}", err);
    }
}

/// Prints every route carrying stock, one line per (warehouse, order)
/// pair.
fn print_allocations(report: &SourcingReport, routes: &[RouteAllocation]) {
    let shipped: Vec<_> = routes.iter().filter(|r| r.is_shipped()).collect();
    if shipped.is_empty() {
        println!("\nNo stock was allocated.");
        return;
    }

    println!("\nAllocations:");
    for route in &shipped {
        let items = route
            .items()
            .iter()
            .filter(|(_, quantity)| *quantity > 0)
            .map(|(product, quantity)| format!("{} ({})", product, quantity))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {} -> {}: {} [total {}]",
            route.warehouse(),
            route.order(),
            items,
            route.total()
        );
    }
    println!("\nTotal shipped: {} units", report.total_shipped());
}

/// Writes the three CSV relations into the configured output directory.
fn write_reports(
    report: &SourcingReport,
    routes: &[RouteAllocation],
    config: &RunConfig,
) -> io::Result<()> {
    let dir = &config.output.directory;
    fs::create_dir_all(dir)?;

    FulfillmentCsv::to_file(report, dir.join("fulfillment.csv"))?;
    StockStatusCsv::to_file(report, dir.join("stock_status.csv"))?;
    AllocationCsv::to_file(routes, dir.join("allocations.csv"))?;

    println!("Reports written to {}", dir.display());
    Ok(())
}
