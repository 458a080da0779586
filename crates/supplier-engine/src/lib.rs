//! Supplier revenue-share distribution and reconciliation engine.
//!
//! - [`distribution`] turns a stake amount into discrete node bins
//! - [`builder`] resolves per-service revenue share and endpoints for a supplier
//! - [`comparator`] diffs two supplier config sets independent of ordering
//! - [`reconcile`] decides what a drifted supplier needs
//!
//! The computation modules are pure; they never log, retry or swallow errors.

pub mod builder;
pub mod comparator;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod interpolate;
pub mod key_state;
pub mod reconcile;
pub mod revshare;
pub mod settings;
pub mod types;
