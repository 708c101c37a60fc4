use std::{env, fmt::Display, str::FromStr};

use tracing::warn;

/// Reads `key` and parses it, falling back to `default` when the variable is
/// unset or does not parse.
pub fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default");
            default
        }),
        Err(_) => default,
    }
}
