//! Read-time statistics over per-commodity historical files

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use csv::ReaderBuilder;

use crate::bounds::{default_bounds, PriceBounds};
use crate::columns::{clean_cell, ColumnIndex};
use crate::error::Result;
use crate::facets::FacetKind;

/// Historical statistics engine over one directory of `<commodity>.csv`
/// files.
///
/// Price bounds are computed lazily on the first request per commodity and
/// memoized for the process lifetime; a race between two first requests
/// computes the same value twice and is harmless. Facet catalogs are
/// recomputed per request, and a missing or unreadable source degrades to an
/// empty catalog rather than an error.
#[derive(Debug)]
pub struct MarketHistory {
    data_dir: PathBuf,
    bounds_memo: RwLock<HashMap<String, PriceBounds>>,
}

impl MarketHistory {
    /// Create an engine over `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            bounds_memo: RwLock::new(HashMap::new()),
        }
    }

    fn csv_path(&self, commodity: &str) -> PathBuf {
        self.data_dir.join(format!("{commodity}.csv"))
    }

    /// Observed `[min, max]` price range for `commodity`.
    ///
    /// Falls back to the documented default table when the history is
    /// missing, unreadable or yields no numeric values. The result, fallback
    /// included, is memoized until the process restarts.
    pub fn price_bounds(&self, commodity: &str) -> PriceBounds {
        let key = commodity.to_lowercase();

        if let Some(bounds) = self
            .bounds_memo
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&key)
        {
            return *bounds;
        }

        let mut bounds = self.scan_bounds(&key).unwrap_or(PriceBounds::UNKNOWN);
        if bounds.is_unknown() {
            tracing::debug!(commodity = %key, "no usable price history, using default bounds");
            bounds = default_bounds(&key);
        }

        self.bounds_memo
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, bounds);
        bounds
    }

    fn scan_bounds(&self, commodity: &str) -> Result<PriceBounds> {
        let file = File::open(self.csv_path(commodity))?;
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
        let columns = ColumnIndex::resolve(reader.headers()?);

        let mut bounds = PriceBounds::UNKNOWN;
        let mut row_values = Vec::with_capacity(3);
        for record in reader.records() {
            let record = record?;
            row_values.clear();
            for index in [columns.min_price, columns.modal_price, columns.max_price] {
                let Some(index) = index else { continue };
                let Some(cell) = record.get(index) else {
                    continue;
                };
                // Non-parseable cells are skipped, not fatal
                if let Ok(value) = clean_cell(cell).parse::<f64>() {
                    row_values.push(value);
                }
            }
            bounds.absorb(&row_values);
        }

        Ok(bounds)
    }

    /// Sorted distinct values for `facet`, optionally restricted by exact
    /// case-insensitive state and/or district filters.
    ///
    /// Distinctness is on the exact cell bytes; values differing only in
    /// case remain separate entries, ordered adjacently by the
    /// case-insensitive sort. A missing or unreadable source yields an empty
    /// catalog.
    pub fn facet_values(
        &self,
        commodity: &str,
        facet: FacetKind,
        state_filter: Option<&str>,
        district_filter: Option<&str>,
    ) -> Vec<String> {
        let key = commodity.to_lowercase();
        match self.scan_facets(&key, facet, state_filter, district_filter) {
            Ok(items) => items,
            Err(err) => {
                tracing::debug!(commodity = %key, error = %err, "facet scan degraded to empty");
                Vec::new()
            }
        }
    }

    fn scan_facets(
        &self,
        commodity: &str,
        facet: FacetKind,
        state_filter: Option<&str>,
        district_filter: Option<&str>,
    ) -> Result<Vec<String>> {
        let file = File::open(self.csv_path(commodity))?;
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
        let columns = ColumnIndex::resolve(reader.headers()?);

        let state_filter = state_filter
            .map(str::to_lowercase)
            .filter(|f| !f.is_empty());
        let district_filter = district_filter
            .map(str::to_lowercase)
            .filter(|f| !f.is_empty());

        let mut counts: HashMap<String, u64> = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let cell = |index: Option<usize>| {
                index
                    .and_then(|i| record.get(i))
                    .map(clean_cell)
                    .unwrap_or("")
            };

            let state = cell(columns.state);
            let district = cell(columns.district);
            if let Some(filter) = &state_filter {
                if state.to_lowercase() != *filter {
                    continue;
                }
            }
            if let Some(filter) = &district_filter {
                if district.to_lowercase() != *filter {
                    continue;
                }
            }

            let value = match facet {
                FacetKind::States => state,
                FacetKind::Districts => district,
                FacetKind::Markets => cell(columns.market),
                FacetKind::Varieties => cell(columns.variety),
            };
            if value.is_empty() {
                continue;
            }
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }

        // Only the distinct keys survive; ties between casings break on the
        // exact bytes so the order stays deterministic
        let mut items: Vec<String> = counts.into_keys().collect();
        items.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        Ok(items)
    }
}
