//! HTTP access to the gnomAD GraphQL API.
//!
//! [`client::GnomadClient`] implements [`gnomfreq_core::VariantSource`], so it can be
//! handed straight to a [`gnomfreq_core::Resolver`].
pub mod client;
pub mod consts;
pub mod utils;

pub use client::{GnomadClient, GnomadClientBuilder, interpret_body};
