//! Shared test fixtures for stockwise crates.
//!
//! This crate provides canned sourcing instances and invariant
//! assertions for testing. It depends only on `stockwise-core` so that
//! every other crate can consume it as a dev-dependency.
//!
//! - [`instances`] - small, hand-checkable sourcing instances
//! - [`asserts`] - allocation invariant checks shared across crates
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! stockwise-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use stockwise_test::instances::{single_route_instance, standard_weightage};
//! use stockwise_test::asserts::assert_stock_conserved;
//! ```

pub mod asserts;
pub mod instances;

pub use instances::{
    demand_constrained_instance, single_route_instance, standard_weightage,
    stock_constrained_instance, two_product_instance,
};
