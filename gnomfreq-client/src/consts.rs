//! Constants for the gnomAD client configuration.

/// Environment variable name for overriding the gnomAD API endpoint.
///
/// # Example
///
/// ```bash
/// export GNOMAD_API=https://gnomad.broadinstitute.org/api
/// ```
pub const GNOMAD_API_ENV: &str = "GNOMAD_API";

/// Public gnomAD GraphQL endpoint.
pub const DEFAULT_GNOMAD_API: &str = "https://gnomad.broadinstitute.org/api";

/// Per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const USER_AGENT: &str = concat!("gnomfreq/", env!("CARGO_PKG_VERSION"));
