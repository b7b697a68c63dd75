use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one catalog listing
// ---------------------------------------------------------------------------

/// A single parsed product listing (one data row of the source table).
///
/// Numeric fields that were absent or unparseable in the source are `None`.
/// `None` is a missing measurement, not zero: every consumer skips it when
/// averaging or sizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// Category key for every grouping stage.
    pub brand: String,
    /// Item identifier within a brand.
    pub product_name: String,
    pub camera: String,
    pub description: String,
    pub link: String,
    pub actual_price_usd: Option<f64>,
    pub discount_price_usd: Option<f64>,
    pub display_size_inch: Option<f64>,
    pub ram_gb: Option<i64>,
    pub ratings: Option<i64>,
    pub reviews: Option<i64>,
    pub stars: Option<f64>,
    pub storage_gb: Option<i64>,
}

// ---------------------------------------------------------------------------
// SchemaField – the fixed column schema of the feed
// ---------------------------------------------------------------------------

/// One column of the fixed catalog schema.
///
/// Header names are known in advance, not discovered: `from_header` resolves
/// a header cell so data tokens can be assigned by the header's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaField {
    Brand,
    Camera,
    Description,
    Link,
    ProductName,
    ActualPriceUsd,
    DiscountPriceUsd,
    DisplaySizeInch,
    RamGb,
    Ratings,
    Reviews,
    Stars,
    StorageGb,
}

impl SchemaField {
    /// Resolve a trimmed header cell to its schema column.
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "Brand" => Some(Self::Brand),
            "Camera" => Some(Self::Camera),
            "Description" => Some(Self::Description),
            "Link" => Some(Self::Link),
            "Product Name" => Some(Self::ProductName),
            "Actual price (USD)" => Some(Self::ActualPriceUsd),
            "Discount price (USD)" => Some(Self::DiscountPriceUsd),
            "Display Size (inch)" => Some(Self::DisplaySizeInch),
            "Ram (Gb)" => Some(Self::RamGb),
            "Ratings" => Some(Self::Ratings),
            "Reviews" => Some(Self::Reviews),
            "Stars" => Some(Self::Stars),
            "Storage (GB)" => Some(Self::StorageGb),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// NumericField – the columns a view can aggregate over
// ---------------------------------------------------------------------------

/// A numeric column, for parameterising means and tree weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NumericField {
    ActualPriceUsd,
    DiscountPriceUsd,
    DisplaySizeInch,
    RamGb,
    Ratings,
    Reviews,
    Stars,
    StorageGb,
}

impl NumericField {
    /// The field's value for `record`, integer columns widened to `f64`.
    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            NumericField::ActualPriceUsd => record.actual_price_usd,
            NumericField::DiscountPriceUsd => record.discount_price_usd,
            NumericField::DisplaySizeInch => record.display_size_inch,
            NumericField::RamGb => record.ram_gb.map(|v| v as f64),
            NumericField::Ratings => record.ratings.map(|v| v as f64),
            NumericField::Reviews => record.reviews.map(|v| v as f64),
            NumericField::Stars => record.stars,
            NumericField::StorageGb => record.storage_gb.map(|v| v as f64),
        }
    }
}

// ---------------------------------------------------------------------------
// CatalogStore – the complete loaded catalog
// ---------------------------------------------------------------------------

/// The full parsed catalog: source-ordered records plus a brand index.
/// Read-only after construction; a new load replaces it wholesale.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStore {
    /// All listings, in source row order (header excluded).
    pub records: Vec<Record>,
    /// Sorted unique brand names, for brand pickers. The "all brands"
    /// sentinel is the consumer's to prepend.
    pub brands: Vec<String>,
}

impl CatalogStore {
    /// Build the brand index from freshly parsed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let brand_set: BTreeSet<String> =
            records.iter().map(|r| r.brand.clone()).collect();
        CatalogStore {
            records,
            brands: brand_set.into_iter().collect(),
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str) -> Record {
        Record {
            brand: brand.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn brand_index_is_sorted_and_unique() {
        let store = CatalogStore::from_records(vec![
            record("XIAOMI"),
            record("APPLE"),
            record("XIAOMI"),
            record("HONOR"),
        ]);
        assert_eq!(store.brands, vec!["APPLE", "HONOR", "XIAOMI"]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn numeric_field_widens_integers() {
        let rec = Record {
            ram_gb: Some(8),
            stars: Some(4.5),
            ..Record::default()
        };
        assert_eq!(NumericField::RamGb.value(&rec), Some(8.0));
        assert_eq!(NumericField::Stars.value(&rec), Some(4.5));
        assert_eq!(NumericField::StorageGb.value(&rec), None);
    }

    #[test]
    fn header_resolution_is_exact() {
        assert_eq!(
            SchemaField::from_header("Discount price (USD)"),
            Some(SchemaField::DiscountPriceUsd)
        );
        assert_eq!(SchemaField::from_header("discount price (usd)"), None);
        assert_eq!(SchemaField::from_header("Unknown"), None);
    }
}
