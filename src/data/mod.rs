/// Data layer: parsing, filtering, and the three aggregate views.
///
/// Architecture:
/// ```text
///  catalog .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  tolerant parse → CatalogStore
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CatalogStore  │  Vec<Record>, brand index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  price + brand criteria → visible subset
///   └──────────┘
///        │
///        ├───────────────┬────────────────┐
///        ▼               ▼                ▼
///   ┌─────────┐    ┌──────────┐    ┌───────────┐
///   │   bar    │    │ scatter  │    │ hierarchy │
///   └─────────┘    └──────────┘    └───────────┘
/// ```
pub mod aggregate;
pub mod filter;
pub mod hierarchy;
pub mod loader;
pub mod model;
