//! Facet dimensions of a historical price row

use std::fmt;

/// One of the four descriptive dimensions used to filter and group
/// historical price rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    States,
    Districts,
    Markets,
    Varieties,
}

impl FacetKind {
    /// Parse a request scope, case-insensitively. Anything unrecognized
    /// selects varieties.
    pub fn from_scope(scope: &str) -> Self {
        match scope.to_lowercase().as_str() {
            "states" => FacetKind::States,
            "districts" => FacetKind::Districts,
            "markets" => FacetKind::Markets,
            _ => FacetKind::Varieties,
        }
    }

    /// Canonical scope name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::States => "states",
            FacetKind::Districts => "districts",
            FacetKind::Markets => "markets",
            FacetKind::Varieties => "varieties",
        }
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
