//! metafeat-core - Pairwise arithmetic feature expansion
//!
//! Derives "metafeatures" from a numeric feature matrix by combining every
//! pair of feature columns with a fixed set of binary operations:
//!
//! - **Multiply**: `a*b` for every unordered pair, squares included
//! - **Divide**: `a/b` and `b/a` for every distinct pair, with a sentinel
//!   substituted for division by zero
//! - **Add**: `a+b` for every distinct pair
//! - **Subtract**: `a-b` for every distinct pair (left column first)
//!
//! # Pipeline
//!
//! [`plan`] sizes the output, [`generate`] fills it, and [`assemble`] lays out
//! `target | features | metafeatures`. [`expand`] runs all three.
//!
//! Nothing in this crate performs I/O; tables come from and go to
//! `metafeat-io`.

pub mod assemble;
pub mod config;
pub mod generator;
pub mod ops;
pub mod planner;
pub mod table;

pub use assemble::*;
pub use config::*;
pub use generator::*;
pub use ops::*;
pub use planner::*;
pub use table::*;
