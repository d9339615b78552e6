//! # Core types and logic for gnomfreq
//!
//! This crate holds everything needed to turn a list of variant identifiers into
//! population-specific allele frequencies, without any knowledge of how requests
//! reach the gnomAD API or where results end up:
//!
//! - [`query`] builds the GraphQL payload for one variant, reference build and data category.
//! - [`frequency`] extracts allele counts for a population and derives a frequency.
//! - [`driver`] runs the exome -> genome fallback for each variant and paces requests.
//!
//! The network and the report file plug in through the [`driver::VariantSource`] and
//! [`driver::ResultSink`] traits.
pub mod consts;
pub mod driver;
pub mod errors;
pub mod frequency;
pub mod models;
pub mod pacing;
pub mod query;

// re-expose the common surface
pub use driver::{ResolverConfig, Resolver, ResultSink, RunSummary, VariantSource};
pub use errors::*;
pub use frequency::{PopulationLookup, get_allele_counts, get_variant_freq};
pub use models::*;
pub use pacing::{PacingPolicy, RequestPacer};
pub use query::{QueryPayload, build_query};
