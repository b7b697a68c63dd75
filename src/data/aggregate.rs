use std::collections::HashMap;

use serde::Serialize;

use super::model::{NumericField, Record};

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Partition records by brand: groups in first-seen order, members in input
/// order. Every record lands in exactly one group.
pub(crate) fn group_by_brand<'a>(records: &[&'a Record]) -> Vec<(String, Vec<&'a Record>)> {
    let mut groups: Vec<(String, Vec<&'a Record>)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for &record in records {
        match index.get(record.brand.as_str()) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(record.brand.as_str(), groups.len());
                groups.push((record.brand.clone(), vec![record]));
            }
        }
    }
    groups
}

/// Arithmetic mean over the members that define `field`; `None` when every
/// member is missing it. Missing cells are excluded, never counted as zero.
fn mean_of(members: &[&Record], field: NumericField) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in members {
        if let Some(v) = field.value(record) {
            sum += v;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

// ---------------------------------------------------------------------------
// Bar view: one mean per brand, ascending
// ---------------------------------------------------------------------------

/// One bar: a brand and its mean over the chosen field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandMean {
    pub brand: String,
    /// `None` when no member of the brand had the field. Keep such bars out
    /// of axis domains; they are not zero-height.
    pub mean: Option<f64>,
}

/// Group by brand and average `field` within each group.
///
/// Sorted ascending by mean; brands with no defined mean sort after every
/// defined one; ties break on the brand name so repeated runs agree.
pub fn mean_by_brand(records: &[&Record], field: NumericField) -> Vec<BrandMean> {
    let mut means: Vec<BrandMean> = group_by_brand(records)
        .into_iter()
        .map(|(brand, members)| BrandMean {
            mean: mean_of(&members, field),
            brand,
        })
        .collect();
    means.sort_by(|a, b| match (a.mean, b.mean) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.brand.cmp(&b.brand)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.brand.cmp(&b.brand),
    });
    means
}

// ---------------------------------------------------------------------------
// Scatter view: two independent means per brand
// ---------------------------------------------------------------------------

/// One scatter mark: a brand with its two coordinate means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub brand: String,
    pub mean_a: Option<f64>,
    pub mean_b: Option<f64>,
}

/// Brands a front end labels directly next to their marks by default.
pub const DEFAULT_LABELED_BRANDS: [&str; 9] = [
    "VOX", "KARBONN", "ITEL", "LAVA", "CMF", "GOOGLE", "APPLE", "HONOR", "XIAOMI",
];

/// Fixed axis ceilings for the storage-vs-stars scatter. The coordinate
/// system is pinned rather than data-driven: with so few marks, one outlier
/// brand would otherwise crush the rest of the cloud.
pub const STORAGE_AXIS_MAX_GB: f64 = 450.0;
pub const STARS_AXIS_MAX: f64 = 5.0;

/// Group by brand and compute two means independently, each over the members
/// that define its field. Output keeps first-seen brand order; the consumer
/// owns the coordinate system.
pub fn dual_mean_by_brand(
    records: &[&Record],
    field_a: NumericField,
    field_b: NumericField,
) -> Vec<ScatterPoint> {
    group_by_brand(records)
        .into_iter()
        .map(|(brand, members)| ScatterPoint {
            mean_a: mean_of(&members, field_a),
            mean_b: mean_of(&members, field_b),
            brand,
        })
        .collect()
}

/// The points whose brand is on the caller's label allow-list. Pure lookup;
/// the aggregates are untouched.
pub fn labeled<'a>(points: &'a [ScatterPoint], allowed: &[&str]) -> Vec<&'a ScatterPoint> {
    points
        .iter()
        .filter(|p| allowed.contains(&p.brand.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(brand: &str, stars: Option<f64>, storage: Option<i64>) -> Record {
        Record {
            brand: brand.to_string(),
            stars,
            storage_gb: storage,
            ..Record::default()
        }
    }

    #[test]
    fn bar_means_sort_ascending_with_exact_values() {
        let records = vec![
            listing("Acme", Some(4.0), None),
            listing("Acme", Some(2.0), None),
            listing("Zed", Some(5.0), None),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let means = mean_by_brand(&refs, NumericField::Stars);
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].brand, "Acme");
        assert_eq!(means[0].mean, Some(3.0));
        assert_eq!(means[1].brand, "Zed");
        assert_eq!(means[1].mean, Some(5.0));
    }

    #[test]
    fn missing_values_are_excluded_from_the_mean() {
        let records = vec![
            listing("CMF", Some(4.0), None),
            listing("CMF", None, None),
            listing("CMF", Some(2.0), None),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let means = mean_by_brand(&refs, NumericField::Stars);
        // Two defined cells out of three members: mean over two, not three.
        assert_eq!(means[0].mean, Some(3.0));
    }

    #[test]
    fn all_missing_group_reports_missing_mean_and_sorts_last() {
        let records = vec![
            listing("ITEL", None, None),
            listing("APPLE", Some(4.5), None),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let means = mean_by_brand(&refs, NumericField::Stars);
        assert_eq!(means[0].brand, "APPLE");
        assert_eq!(means[1].brand, "ITEL");
        assert_eq!(means[1].mean, None);
    }

    #[test]
    fn group_sizes_sum_to_input_size() {
        let records = vec![
            listing("A", None, None),
            listing("B", None, None),
            listing("A", None, None),
            listing("C", None, None),
            listing("B", None, None),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let total: usize = group_by_brand(&refs)
            .iter()
            .map(|(_, members)| members.len())
            .sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn scatter_keeps_first_seen_order_and_independent_means() {
        let records = vec![
            listing("HONOR", Some(4.0), Some(256)),
            listing("GOOGLE", Some(4.5), None),
            listing("HONOR", None, Some(128)),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let points = dual_mean_by_brand(&refs, NumericField::StorageGb, NumericField::Stars);
        assert_eq!(points[0].brand, "HONOR");
        assert_eq!(points[1].brand, "GOOGLE");
        // Storage averages both cells, stars only the defined one.
        assert_eq!(points[0].mean_a, Some(192.0));
        assert_eq!(points[0].mean_b, Some(4.0));
        assert_eq!(points[1].mean_a, None);
        assert_eq!(points[1].mean_b, Some(4.5));
    }

    #[test]
    fn label_lookup_does_not_touch_the_points() {
        let records = vec![
            listing("VOX", Some(4.0), Some(64)),
            listing("NOKIA", Some(3.0), Some(32)),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let points = dual_mean_by_brand(&refs, NumericField::StorageGb, NumericField::Stars);
        let flagged = labeled(&points, &DEFAULT_LABELED_BRANDS);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].brand, "VOX");
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_views() {
        let refs: Vec<&Record> = Vec::new();
        assert!(mean_by_brand(&refs, NumericField::Stars).is_empty());
        assert!(dual_mean_by_brand(&refs, NumericField::StorageGb, NumericField::Stars).is_empty());
    }
}
