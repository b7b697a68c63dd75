use serde::Serialize;

use super::aggregate::group_by_brand;
use super::model::{NumericField, Record};

// ---------------------------------------------------------------------------
// Tree model: root → brand → product
// ---------------------------------------------------------------------------

/// Root of the treemap tree. Aggregate weight is the sum over brand nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogTree {
    pub name: String,
    pub weight: f64,
    pub children: Vec<BrandNode>,
}

/// One brand's slice of the tree. Kept even with zero admitted leaves; the
/// consumer decides whether zero-area nodes are drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandNode {
    pub name: String,
    pub weight: f64,
    pub children: Vec<LeafNode>,
}

/// One product. `details` is opaque payload for tooltips and the like; the
/// builder reads nothing from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafNode {
    pub name: String,
    pub weight: f64,
    pub details: Record,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Assemble the two-level tree used for area sizing by `weight_field`.
///
/// A record becomes a leaf only when the weight field holds a positive,
/// finite number; everything else contributes no area and is dropped
/// silently rather than defaulted to a minimum size. Brand order is
/// first-seen and leaf order is input order, so the same filtered set always
/// yields a layout-equivalent tree.
pub fn build_tree(records: &[&Record], weight_field: NumericField) -> CatalogTree {
    let children: Vec<BrandNode> = group_by_brand(records)
        .into_iter()
        .map(|(brand, members)| {
            let leaves: Vec<LeafNode> = members
                .into_iter()
                .filter_map(|record| {
                    let weight = weight_field
                        .value(record)
                        .filter(|w| w.is_finite() && *w > 0.0)?;
                    Some(LeafNode {
                        name: record.product_name.clone(),
                        weight,
                        details: record.clone(),
                    })
                })
                .collect();
            let weight = leaves.iter().map(|leaf| leaf.weight).sum();
            BrandNode {
                name: brand,
                weight,
                children: leaves,
            }
        })
        .collect();

    let weight = children.iter().map(|node| node.weight).sum();
    CatalogTree {
        name: "Root".to_string(),
        weight,
        children,
    }
}
