//! Sorting benchmark for train schedule records.
//!
//! Loads schedule records from a CSV file, sorts independent copies with
//! several algorithms, and reports how long each sort took.

pub mod bench;
pub mod csv;
pub mod domain;
pub mod error;
pub mod sort;
