//! Data layer: records, loading, and queries.
//!
//! Architecture:
//! ```text
//!  data.csv (URL or local path)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  fetch    │  raw text, async
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV → PopulationDataset (bad rows dropped)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────────┐
//!   │PopulationDataset│  Vec<PopulationRecord>, distinct countries/years
//!   └─────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  query    │  filter, top-N, per-country series
//!   └──────────┘
//! ```

pub mod fetch;
pub mod loader;
pub mod model;
pub mod query;
