//! Motion profiles, ground-truth labels and the benchmark catalog.

pub mod catalog;
pub mod profile;
