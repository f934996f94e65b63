use std::fs;
use std::path::Path;

use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use tempfile::TempDir;

use forecast_service::config::{DEFAULT_COMMODITY, KNOWN_COMMODITIES};
use forecast_service::{ForecastQuery, Orchestrator, ServiceError};
use market_history::MarketHistory;
use price_model::models::{ModelArtifact, StateSpaceModel};
use price_model::{ModelHandle, ModelRepository};

fn write_model(dir: &Path, commodity: &str) {
    let artifact = ModelArtifact::StateSpace(StateSpaceModel::new(1000.0, 10.0, 25.0, Utc::now()));
    fs::write(
        dir.join(format!("{commodity}.model")),
        serde_json::to_vec(&artifact).unwrap(),
    )
    .unwrap();
}

fn orchestrator_with_onion(dir: &TempDir) -> Orchestrator {
    write_model(dir.path(), "onion");
    let repository = ModelRepository::load(dir.path(), &KNOWN_COMMODITIES, DEFAULT_COMMODITY);
    Orchestrator::new(repository, MarketHistory::new(dir.path()))
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(30)]
fn test_predictions_match_every_valid_horizon(#[case] steps: usize) {
    let dir = TempDir::new().unwrap();
    let orchestrator = orchestrator_with_onion(&dir);

    let body = json!({"steps": steps});
    let response = orchestrator
        .forecast(&ForecastQuery::from_body(Some(&body)))
        .unwrap();

    assert_eq!(response.steps, steps);
    assert_eq!(response.predictions.len(), steps);
    assert!(response.predictions.iter().all(|v| v.is_finite()));
}

#[test]
fn test_full_response_shape() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("onion.csv"),
        "state,min_price,max_price\nBihar,100,200\nBihar,50,300\n",
    )
    .unwrap();
    let orchestrator = orchestrator_with_onion(&dir);

    let body = json!({
        "commodity": "Onion",
        "steps": 3,
        "state": "Bihar",
        "district": "Patna"
    });
    let response = orchestrator
        .forecast(&ForecastQuery::from_body(Some(&body)))
        .unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["commodity"], "Onion");
    assert_eq!(value["steps"], 3);
    assert_eq!(value["predictions"].as_array().unwrap().len(), 3);
    assert_eq!(value["priceBounds"], json!({"min": 50.0, "max": 300.0}));
    assert_eq!(
        value["context"],
        json!({"state": "Bihar", "district": "Patna"})
    );
}

#[test]
fn test_missing_history_uses_default_bounds_in_response() {
    let dir = TempDir::new().unwrap();
    let orchestrator = orchestrator_with_onion(&dir);

    let response = orchestrator
        .forecast(&ForecastQuery::from_body(None))
        .unwrap();
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["priceBounds"], json!({"min": 200.0, "max": 7000.0}));
}

#[test]
fn test_unknown_known_commodity_rides_the_default_model() {
    let dir = TempDir::new().unwrap();
    // Only the default commodity's artifact exists on disk
    let orchestrator = orchestrator_with_onion(&dir);

    let body = json!({"commodity": "WHEAT", "steps": 2});
    let response = orchestrator
        .forecast(&ForecastQuery::from_body(Some(&body)))
        .unwrap();

    assert_eq!(response.commodity, "Wheat");
    assert_eq!(response.predictions.len(), 2);
}

#[test]
fn test_cold_repository_surfaces_model_not_loaded() {
    let dir = TempDir::new().unwrap();
    let repository = ModelRepository::load(dir.path(), &KNOWN_COMMODITIES, DEFAULT_COMMODITY);
    let orchestrator = Orchestrator::new(repository, MarketHistory::new(dir.path()));

    let err = orchestrator
        .forecast(&ForecastQuery::from_body(None))
        .unwrap_err();

    assert!(matches!(err, ServiceError::ModelNotLoaded(_)));
    assert_eq!(err.to_string(), "model not loaded for commodity: onion");
}

#[test]
fn test_unsupported_model_interface_is_a_request_error() {
    let dir = TempDir::new().unwrap();
    let mut repository = ModelRepository::new();
    repository.insert("onion", ModelHandle::new(vec![1u8, 2, 3]));
    let orchestrator = Orchestrator::new(repository, MarketHistory::new(dir.path()));

    let err = orchestrator
        .forecast(&ForecastQuery::from_body(None))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unsupported model interface for automatic forecasting"
    );
}

#[test]
fn test_malformed_steps_still_produces_a_forecast() {
    let dir = TempDir::new().unwrap();
    let orchestrator = orchestrator_with_onion(&dir);

    let body = json!({"steps": "not-a-number"});
    let response = orchestrator
        .forecast(&ForecastQuery::from_body(Some(&body)))
        .unwrap();
    assert_eq!(response.steps, 7);
}

#[test]
fn test_meta_listing_with_filters_and_unknown_scope() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("onion.csv"),
        "your_state,your_district,your_variety\n\
         Bihar,Patna,Red\n\
         Bihar,Gaya,Nasik\n\
         Odisha,Cuttack,Red\n",
    )
    .unwrap();
    let orchestrator = Orchestrator::new(ModelRepository::new(), MarketHistory::new(dir.path()));

    let states = orchestrator.facets(Some("onion"), Some("states"), None, None);
    assert_eq!(states.scope, "states");
    assert_eq!(states.items, vec!["Bihar", "Odisha"]);

    let filtered = orchestrator.facets(Some("onion"), Some("districts"), Some("bihar"), None);
    assert_eq!(filtered.items, vec!["Gaya", "Patna"]);

    // Unrecognized scopes fall through to varieties
    let fallback = orchestrator.facets(Some("onion"), Some("grades"), None, None);
    assert_eq!(fallback.scope, "varieties");
    assert_eq!(fallback.items, vec!["Nasik", "Red"]);

    // Defaults: commodity onion, scope states
    let defaults = orchestrator.facets(None, None, None, None);
    assert_eq!(defaults.commodity, "onion");
    assert_eq!(defaults.scope, "states");
}

#[test]
fn test_meta_listing_degrades_to_empty_for_missing_history() {
    let dir = TempDir::new().unwrap();
    let orchestrator = Orchestrator::new(ModelRepository::new(), MarketHistory::new(dir.path()));

    let listing = orchestrator.facets(Some("potato"), Some("markets"), None, None);
    assert_eq!(listing.commodity, "potato");
    assert!(listing.items.is_empty());
}

#[test]
fn test_query_parsing_is_total_over_arbitrary_json() {
    // No combination of junk fields may panic or error at the parse stage
    let bodies = [
        json!(null),
        json!([1, 2, 3]),
        json!({"steps": {"nested": true}, "commodity": 42}),
        json!("just a string"),
    ];
    for body in &bodies {
        let query = ForecastQuery::from_body(Some(body));
        assert_eq!(query.commodity, DEFAULT_COMMODITY);
        assert_eq!(query.steps, 7);
    }
}

#[test]
fn test_error_payload_preserves_adapter_message() {
    let err: Value = json!({
        "error": ServiceError::ModelNotLoaded("potato".to_string()).to_string()
    });
    assert_eq!(err["error"], "model not loaded for commodity: potato");
}
