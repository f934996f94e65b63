//! # price_model
//!
//! Fitted commodity price models and the forecast interface adapter.
//!
//! Model artifacts are exported by offline training pipelines from several
//! mutually incompatible forecasting libraries. This crate loads them behind
//! an opaque [`ModelHandle`] and recovers a uniform `Vec<f64>` forecast by
//! probing a fixed, priority-ordered list of calling conventions:
//!
//! 1. `predict(n_periods)` (auto-ARIMA family)
//! 2. `get_forecast(steps)` with a predicted-mean summary (state-space family)
//! 3. `forecast(steps)` (Box-Jenkins family)
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use price_model::{adapter, ModelRepository};
//!
//! let repo = ModelRepository::load(Path::new("."), &["onion", "potato"], "onion");
//! if let Some(handle) = repo.get("onion") {
//!     let predictions = adapter::forecast(&handle, 7)?;
//!     assert_eq!(predictions.len(), 7);
//! }
//! # Ok::<(), price_model::ModelError>(())
//! ```

pub mod adapter;
pub mod error;
mod handle;
pub mod loader;
pub mod models;
pub mod repository;

// Re-export commonly used types
pub use crate::error::{ModelError, Result};
pub use crate::handle::ModelHandle;
pub use crate::loader::load_model;
pub use crate::models::ModelArtifact;
pub use crate::repository::ModelRepository;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
