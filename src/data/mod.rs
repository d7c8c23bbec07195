/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → HrDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ HrDataset  │  Vec<EmployeeRecord>, sorted filter options
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  department / county selection → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  mean salary per department, job-title counts
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
