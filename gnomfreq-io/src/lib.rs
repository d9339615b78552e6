//! # Input/Output utilities for gnomfreq.
//!
//! Reading the variant list a run starts from, and writing the tab-separated
//! frequency report it produces.
//!
pub mod consts;
pub mod error;
pub mod report;
pub mod variants;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use report::*;
pub use variants::*;
