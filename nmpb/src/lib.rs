//! road traffic sound power emission following the French NMPB-Routes-96 method,
//! the road traffic computation method referenced by Directive 2002/49/EC.
//!
//! the entry point is [`model::EmissionModel`], or the [`model::compute_power`]
//! shorthand when only the total level is needed.
pub mod app;
pub mod config;
pub mod model;
