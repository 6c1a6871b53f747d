//! Runtime configuration loaded from environment variables.

use domain::TaxRate;

/// POS configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `TAX_RATE_BPS` — cart tax rate in basis points (default: `500`, i.e. 5% GST)
/// - `FIRST_TICKET` — first ticket number of the session (default: `1234`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub tax_rate_bps: u32,
    pub first_ticket: u64,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            tax_rate_bps: std::env::var("TAX_RATE_BPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            first_ticket: std::env::var("FIRST_TICKET")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1234),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the configured cart tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_basis_points(self.tax_rate_bps)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tax_rate_bps: 500,
            first_ticket: 1234,
            log_level: "info".to_string(),
        }
    }
}
