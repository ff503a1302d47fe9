/// Data layer: core types, loading, and acquisition.
///
/// Architecture:
/// ```text
///   remote URL
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  download once if the cache file is missing
///   └──────────┘
///        │
///        ▼
///   .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  named equal-length columns, typed accessors
///   └──────────┘
/// ```
pub mod fetch;
pub mod loader;
pub mod model;
