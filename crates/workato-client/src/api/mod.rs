//! Endpoint methods on [`WorkatoClient`](crate::WorkatoClient), grouped by resource family.

pub mod connections;
pub mod connectors;
pub mod jobs;
pub mod lookup_tables;
pub mod packages;
pub mod recipes;

/// Default page size for recipe versions and lookup table listings.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Default page size for lookup table row listings.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 500;
