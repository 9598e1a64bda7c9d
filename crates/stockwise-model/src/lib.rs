//! Model building for stockwise.
//!
//! This crate turns a [`SourcingInstance`](stockwise_core::SourcingInstance)
//! into a [`SourcingModel`]: validated input, normalized criteria, and a
//! flat, index-addressed variable array per product. Solvers consume the
//! model; they never touch identifiers or raw metrics.

pub mod builder;
pub mod model;
pub mod score;
pub mod validate;

pub use builder::ModelBuilder;
pub use model::{EntityCatalog, ProductModel, RouteVar, SourcingModel};
pub use score::route_score;
pub use validate::validate_instance;
