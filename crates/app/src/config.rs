//! Environment-driven configuration.

use katalog_core::{DomainError, DomainResult};
use katalog_products::{DEFAULT_CHEAP_THRESHOLD, DEFAULT_EXPENSIVE_THRESHOLD, DEFAULT_TAX_RATE};

/// Tunable knobs for the demo. Everything has a sensible default; malformed
/// or negative environment values fall back to the default with a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub tax_rate: f64,
    pub expensive_threshold: f64,
    pub cheap_threshold: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            expensive_threshold: DEFAULT_EXPENSIVE_THRESHOLD,
            cheap_threshold: DEFAULT_CHEAP_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Read configuration from `KATALOG_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tax_rate: env_f64("KATALOG_TAX_RATE", defaults.tax_rate),
            expensive_threshold: env_f64(
                "KATALOG_EXPENSIVE_THRESHOLD",
                defaults.expensive_threshold,
            ),
            cheap_threshold: env_f64("KATALOG_CHEAP_THRESHOLD", defaults.cheap_threshold),
        }
    }
}

/// Validate one configuration value: a finite, non-negative number.
fn parse_amount(key: &str, raw: &str) -> DomainResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| DomainError::validation(format!("{key}: `{raw}` is not a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{key}: `{raw}` must be finite and non-negative"
        )));
    }
    Ok(value)
}

fn env_f64(key: &str, default: f64) -> f64 {
    match std::env::var(key) {
        Ok(raw) => match parse_amount(key, &raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "using default");
                default
            }
        },
        Err(_) => default,
    }
}
