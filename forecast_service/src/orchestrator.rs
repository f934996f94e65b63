//! Request orchestration: validate, resolve the model, forecast, assemble
//!
//! Stateless across requests. Steps, commodity and context all carry
//! defaults, so parsing never fails a request; the only user-visible errors
//! are model resolution and the adapter giving up.

use serde::Serialize;
use serde_json::Value;

use market_history::{FacetKind, MarketHistory, PriceBounds};
use price_model::{adapter, ModelRepository};

use crate::config::DEFAULT_COMMODITY;
use crate::error::{Result, ServiceError};

/// Default forecast horizon when the request does not specify one.
pub const DEFAULT_STEPS: usize = 7;
/// Smallest accepted horizon.
pub const MIN_STEPS: usize = 1;
/// Largest accepted horizon.
pub const MAX_STEPS: usize = 30;

/// Optional descriptive fields accompanying a forecast request.
///
/// Echoed back unchanged; not used to condition the forecast. Absent fields
/// are omitted from the serialized response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(rename = "dateISO", skip_serializing_if = "Option::is_none")]
    pub date_iso: Option<String>,
}

impl RequestContext {
    /// Collect the known context fields from a request body, ignoring
    /// everything else.
    fn from_body(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            state: field("state"),
            district: field("district"),
            market: field("market"),
            variety: field("variety"),
            grade: field("grade"),
            date_iso: field("dateISO"),
        }
    }
}

/// A validated forecast request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    /// Lowercased commodity name
    pub commodity: String,
    /// Horizon, already clamped into the accepted window
    pub steps: usize,
    /// Echo-only context fields
    pub context: RequestContext,
}

impl ForecastQuery {
    /// Build a query from an optional JSON body. Every field degrades to
    /// its default instead of failing.
    pub fn from_body(body: Option<&Value>) -> Self {
        let null = Value::Null;
        let body = body.unwrap_or(&null);
        let commodity = body
            .get("commodity")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COMMODITY)
            .to_lowercase();

        Self {
            commodity,
            steps: coerce_steps(body.get("steps")),
            context: RequestContext::from_body(body),
        }
    }
}

/// Clamp a requested horizon into `[MIN_STEPS, MAX_STEPS]`. Numbers and
/// numeric strings are accepted; anything else falls back to the default.
fn coerce_steps(raw: Option<&Value>) -> usize {
    let requested = match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match requested {
        Some(n) => n.clamp(MIN_STEPS as i64, MAX_STEPS as i64) as usize,
        None => DEFAULT_STEPS,
    }
}

/// Uniform forecast payload returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    /// Titlecased commodity name for display
    pub commodity: String,
    pub steps: usize,
    pub predictions: Vec<f64>,
    #[serde(rename = "priceBounds")]
    pub price_bounds: PriceBounds,
    pub context: RequestContext,
}

/// Facet listing payload.
#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    pub commodity: String,
    pub scope: String,
    pub items: Vec<String>,
}

/// Composes the model repository and the historical statistics engine into
/// the per-request flow.
#[derive(Debug)]
pub struct Orchestrator {
    repository: ModelRepository,
    history: MarketHistory,
}

impl Orchestrator {
    /// Compose the two engines.
    pub fn new(repository: ModelRepository, history: MarketHistory) -> Self {
        Self {
            repository,
            history,
        }
    }

    /// Number of commodities with a resolvable model.
    pub fn loaded_models(&self) -> usize {
        self.repository.len()
    }

    /// Serve one forecast request end to end.
    pub fn forecast(&self, query: &ForecastQuery) -> Result<ForecastResponse> {
        let handle = self
            .repository
            .get(&query.commodity)
            .ok_or_else(|| ServiceError::ModelNotLoaded(query.commodity.clone()))?;

        let predictions = adapter::forecast(&handle, query.steps)?;
        let price_bounds = self.history.price_bounds(&query.commodity);

        Ok(ForecastResponse {
            commodity: titlecase(&query.commodity),
            steps: query.steps,
            predictions,
            price_bounds,
            context: query.context.clone(),
        })
    }

    /// Serve one facet listing request; degrades instead of failing.
    pub fn facets(
        &self,
        commodity: Option<&str>,
        scope: Option<&str>,
        state: Option<&str>,
        district: Option<&str>,
    ) -> MetaResponse {
        let commodity = commodity
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COMMODITY)
            .to_lowercase();
        let facet = FacetKind::from_scope(scope.unwrap_or("states"));
        let items = self.history.facet_values(&commodity, facet, state, district);

        MetaResponse {
            commodity,
            scope: facet.as_str().to_string(),
            items,
        }
    }
}

/// Display form of a commodity name: first letter upper, rest lower.
fn titlecase(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
