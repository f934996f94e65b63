//! Service configuration from the process environment

use std::env;
use std::path::PathBuf;

/// Commodities the service attempts to load models for at startup.
pub const KNOWN_COMMODITIES: [&str; 4] = ["onion", "potato", "wheat", "rice"];

/// Commodity whose model backs requests for commodities without their own,
/// and the default when a request names none.
pub const DEFAULT_COMMODITY: &str = "onion";

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Directory holding model artifacts and historical CSV files
    pub data_dir: PathBuf,
}

impl ServiceConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything absent or unparseable.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8000);
        let data_dir = env::var("MANDI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            host,
            port,
            data_dir,
        }
    }
}
