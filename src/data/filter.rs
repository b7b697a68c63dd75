use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;

use super::model::Record;

// ---------------------------------------------------------------------------
// Filter parameters: the two user-selected criteria
// ---------------------------------------------------------------------------

/// Brand picker value: the "all brands" sentinel or one exact brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum BrandSelection {
    #[default]
    All,
    Only(String),
}

impl FromStr for BrandSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" | "all" => Ok(BrandSelection::All),
            other => Ok(BrandSelection::Only(other.to_string())),
        }
    }
}

/// The two filter criteria, combined with logical AND.
///
/// The engine accepts any real threshold; the 0–1000 slider range lives with
/// the front end (see the constants in [`crate::state`]).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Keep listings whose discount price is present and at least this value.
    pub min_discount_price: f64,
    /// Keep one brand, or all of them.
    pub brand: BrandSelection,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            min_discount_price: 0.0,
            brand: BrandSelection::All,
        }
    }
}

impl FilterParams {
    /// Whether one record passes both criteria.
    ///
    /// A missing discount price never passes: missing is not zero. Brand
    /// comparison is exact and case-sensitive.
    pub fn admits(&self, record: &Record) -> bool {
        let price_ok = record
            .discount_price_usd
            .is_some_and(|p| p >= self.min_discount_price);
        let brand_ok = match &self.brand {
            BrandSelection::All => true,
            BrandSelection::Only(name) => record.brand == *name,
        };
        price_ok && brand_ok
    }
}

/// Records passing the current criteria, source order preserved.
pub fn apply<'a>(records: &'a [Record], params: &FilterParams) -> Vec<&'a Record> {
    records.iter().filter(|r| params.admits(r)).collect()
}

/// Index form of [`apply`], for callers that cache positions.
pub fn filtered_indices(records: &[Record], params: &FilterParams) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| params.admits(r))
        .map(|(i, _)| i)
        .collect()
}
