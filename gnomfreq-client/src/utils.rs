use std::env;

use super::consts::{DEFAULT_GNOMAD_API, GNOMAD_API_ENV};

/// Get the gnomAD API endpoint from the environment, or the public default.
///
/// # Returns
/// - url of the GraphQL endpoint
pub fn get_default_gnomad_api() -> String {
    env::var(GNOMAD_API_ENV)
        .ok()
        .filter(|api| !api.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GNOMAD_API.to_string())
}
