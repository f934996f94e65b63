//! Startup-time model repository keyed by commodity

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::handle::ModelHandle;
use crate::loader::load_model;

/// Forecasting models loaded once at startup, keyed by lowercase commodity
/// name. Handles are shared; a commodity without its own artifact may alias
/// the default commodity's handle.
#[derive(Debug, Default)]
pub struct ModelRepository {
    models: HashMap<String, Arc<ModelHandle>>,
}

impl ModelRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `<commodity>.model` artifacts from `dir` for each known
    /// commodity.
    ///
    /// Individual load failures are logged and swallowed, never fatal. After
    /// loading, every commodity still without a handle borrows the default
    /// commodity's handle when that one loaded.
    pub fn load(dir: &Path, commodities: &[&str], default_commodity: &str) -> Self {
        let mut models = HashMap::new();

        for name in commodities {
            let key = name.to_lowercase();
            let path = dir.join(format!("{key}.model"));
            if !path.exists() {
                tracing::debug!(commodity = %key, "no model artifact present");
                continue;
            }
            match load_model(&path) {
                Ok(handle) => {
                    tracing::info!(commodity = %key, path = %path.display(), "model loaded");
                    models.insert(key, Arc::new(handle));
                }
                Err(err) => {
                    tracing::warn!(commodity = %key, error = %err, "skipping unloadable model");
                }
            }
        }

        // Reuse the default commodity's model for anything that did not load
        let default_key = default_commodity.to_lowercase();
        if let Some(fallback) = models.get(&default_key).cloned() {
            for name in commodities {
                models
                    .entry(name.to_lowercase())
                    .or_insert_with(|| Arc::clone(&fallback));
            }
        }

        Self { models }
    }

    /// Register a handle directly (embedders and tests).
    pub fn insert(&mut self, commodity: &str, handle: ModelHandle) {
        self.models.insert(commodity.to_lowercase(), Arc::new(handle));
    }

    /// Look up the model for a commodity; the name is matched lowercased.
    pub fn get(&self, commodity: &str) -> Option<Arc<ModelHandle>> {
        self.models.get(&commodity.to_lowercase()).cloned()
    }

    /// True when no model at all is available.
    pub fn is_cold(&self) -> bool {
        self.models.is_empty()
    }

    /// Number of commodities with a resolvable model.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when the repository holds no models.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
