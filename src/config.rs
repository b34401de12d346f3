use crate::error::{LedgerError, Result};

/// Artificial extraction delay for the simulated OCR client (milliseconds).
/// Stands in for the processing time of a hosted OCR call.
pub const MOCK_INTAKE_DELAY_MS: u64 = 2_000;

/// Channel capacity for intake outcome delivery. One extraction is in flight
/// at a time, so this only needs headroom for a consumer that lags a little.
pub const INTAKE_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Simulated extraction delay in milliseconds (INTAKE_DELAY_MS).
    pub intake_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            intake_delay_ms: match std::env::var("INTAKE_DELAY_MS") {
                Ok(raw) => raw.parse::<u64>().map_err(|_| {
                    LedgerError::Config("INTAKE_DELAY_MS must be a non-negative integer".to_string())
                })?,
                Err(_) => MOCK_INTAKE_DELAY_MS,
            },
        })
    }
}
