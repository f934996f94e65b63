//! # market_history
//!
//! Historical mandi price statistics derived at read time from flat CSV
//! files, one file per commodity.
//!
//! Two derivations are offered, both tolerant of loosely formatted input
//! (header-name synonyms, quoted cells, missing columns, unparseable
//! values):
//!
//! - **Price bounds**: the observed `[min, max]` price range, with a
//!   literal per-commodity default table when the history is unusable.
//! - **Facet catalogs**: sorted distinct states, districts, markets or
//!   varieties, optionally filtered, degrading to empty when the source is
//!   unavailable.
//!
//! The historical files are consumed read-only; nothing here mutates them.

pub mod bounds;
mod columns;
pub mod error;
pub mod facets;
pub mod history;

// Re-export commonly used types
pub use crate::bounds::PriceBounds;
pub use crate::error::HistoryError;
pub use crate::facets::FacetKind;
pub use crate::history::MarketHistory;
