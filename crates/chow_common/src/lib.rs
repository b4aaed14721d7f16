//! Chow Common - restaurant catalog normalization shared by the daemon.
//!
//! Turns listings from seed lists and scrapers into canonical records with
//! stable ids and resolved state / LGA fields, merges sources into one
//! deduplicated catalog and caches it for a fixed time-to-live.

pub mod cache;
pub mod ident;
pub mod locations;
pub mod merge;
pub mod resolver;
pub mod restaurant;
pub mod seed;

pub use cache::{CatalogCache, DEFAULT_TTL_SECS};
pub use ident::restaurant_id;
pub use merge::{merge, Catalog, MergeReport, SourceBatch, SourceOutcome, SourceReport, SourceStatus};
pub use resolver::{resolve, ResolvedLocation};
pub use restaurant::{normalize, NormalizeError, RawRestaurant, Restaurant, DEFAULT_CUISINE};
