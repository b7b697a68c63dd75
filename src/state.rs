use crate::data::aggregate::{self, BrandMean, ScatterPoint};
use crate::data::filter::{filtered_indices, BrandSelection, FilterParams};
use crate::data::hierarchy::{build_tree, CatalogTree};
use crate::data::model::{CatalogStore, NumericField, Record};

// ---------------------------------------------------------------------------
// Pipeline state
// ---------------------------------------------------------------------------

/// Price slider bounds a front end presents. Advisory only: the filter
/// engine itself accepts any real threshold.
pub const PRICE_SLIDER_MIN: f64 = 0.0;
pub const PRICE_SLIDER_MAX: f64 = 1000.0;
pub const PRICE_SLIDER_STEP: f64 = 10.0;

/// The pipeline state a front end drives, independent of rendering.
pub struct ViewState {
    /// Loaded catalog (None until the load resolves).
    pub store: Option<CatalogStore>,

    /// Current filter criteria.
    pub params: FilterParams,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message for the front end.
    pub status_message: Option<String>,

    /// Whether a catalog load is in flight. While true, every view below
    /// reads as empty — a valid state, not an error.
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            store: None,
            params: FilterParams::default(),
            visible_indices: Vec::new(),
            status_message: None,
            loading: false,
        }
    }
}

impl ViewState {
    /// Ingest a newly loaded catalog, atomically replacing the previous one,
    /// and reset the criteria to their initial values.
    pub fn set_store(&mut self, store: CatalogStore) {
        self.params = FilterParams::default();
        self.visible_indices = (0..store.len()).collect();
        self.store = Some(store);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute the visible subset after a criteria change. Always a full
    /// re-run; a superseded result is simply discarded.
    pub fn refilter(&mut self) {
        if let Some(store) = &self.store {
            self.visible_indices = filtered_indices(&store.records, &self.params);
        }
    }

    /// Set the price threshold and refilter.
    pub fn set_min_price(&mut self, value: f64) {
        self.params.min_discount_price = value;
        self.refilter();
    }

    /// Set the brand selection and refilter.
    pub fn set_brand(&mut self, brand: BrandSelection) {
        self.params.brand = brand;
        self.refilter();
    }

    /// The records behind `visible_indices`.
    pub fn visible_records(&self) -> Vec<&Record> {
        match &self.store {
            Some(store) => self
                .visible_indices
                .iter()
                .map(|&i| &store.records[i])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Bar view over the visible records: mean of `field` per brand,
    /// ascending.
    pub fn bar_view(&self, field: NumericField) -> Vec<BrandMean> {
        aggregate::mean_by_brand(&self.visible_records(), field)
    }

    /// Scatter view over the visible records: two means per brand.
    pub fn scatter_view(&self, field_a: NumericField, field_b: NumericField) -> Vec<ScatterPoint> {
        aggregate::dual_mean_by_brand(&self.visible_records(), field_a, field_b)
    }

    /// Treemap view over the visible records, area-sized by `weight_field`.
    pub fn tree_view(&self, weight_field: NumericField) -> CatalogTree {
        build_tree(&self.visible_records(), weight_field)
    }
}
