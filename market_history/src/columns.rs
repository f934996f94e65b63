//! Header synonym matching for loosely formatted historical files
//!
//! Source files come from several upload paths, so the same logical column
//! appears under different spellings. Positions are resolved once per file
//! from the normalized header row, never re-derived per data row.

use csv::StringRecord;

const MIN_PRICE: &[&str] = &["min_price", "min price", "min"];
const MAX_PRICE: &[&str] = &["max_price", "max price", "max"];
const MODAL_PRICE: &[&str] = &["modal_price", "modal price", "price"];
const STATE: &[&str] = &["your_state", "state"];
const DISTRICT: &[&str] = &["your_district", "district"];
const MARKET: &[&str] = &["your_market", "market"];
const VARIETY: &[&str] = &["your_variety", "variety"];

/// Normalize a header or data cell: trim whitespace, strip surrounding
/// quotes.
pub(crate) fn clean_cell(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}

/// Resolved column positions for one file's header row. Missing columns stay
/// `None` and the corresponding value is absent for every row.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ColumnIndex {
    pub min_price: Option<usize>,
    pub max_price: Option<usize>,
    pub modal_price: Option<usize>,
    pub state: Option<usize>,
    pub district: Option<usize>,
    pub market: Option<usize>,
    pub variety: Option<usize>,
}

impl ColumnIndex {
    /// Resolve positions from the header row, comparing case-insensitively
    /// against the synonym tables.
    pub(crate) fn resolve(header: &StringRecord) -> Self {
        let normalized: Vec<String> = header
            .iter()
            .map(|cell| clean_cell(cell).to_lowercase())
            .collect();
        let find = |names: &[&str]| normalized.iter().position(|h| names.contains(&h.as_str()));

        Self {
            min_price: find(MIN_PRICE),
            max_price: find(MAX_PRICE),
            modal_price: find(MODAL_PRICE),
            state: find(STATE),
            district: find(DISTRICT),
            market: find(MARKET),
            variety: find(VARIETY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_resolve_case_insensitively() {
        let header = StringRecord::from(vec!["\"Min Price\"", "MAX_PRICE", "Price", "Your_State"]);
        let columns = ColumnIndex::resolve(&header);
        assert_eq!(columns.min_price, Some(0));
        assert_eq!(columns.max_price, Some(1));
        assert_eq!(columns.modal_price, Some(2));
        assert_eq!(columns.state, Some(3));
        assert_eq!(columns.district, None);
    }

    #[test]
    fn test_clean_cell_strips_quotes_and_whitespace() {
        assert_eq!(clean_cell("  \"Min Price\"  "), "Min Price");
        assert_eq!(clean_cell("min"), "min");
        assert_eq!(clean_cell(""), "");
    }
}
