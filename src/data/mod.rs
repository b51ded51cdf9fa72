/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file, derive cost_numeric → ProgramDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ProgramDataset │  Vec<ProgramRecord>, distinct values per dimension
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌───────────┐
///   │  filter  │ ──▶ │ aggregate │  mean per university, top-k, summary
///   └──────────┘     └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export  │  filtered rows → CSV / JSON
///   └──────────┘
/// ```

pub mod aggregate;
pub mod cost;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
