/// Data layer: core types, loading, and load errors.
///
/// Architecture:
/// ```text
///   run log (.csv)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip header, parse rows → ScoreSeries
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ScoreSeries  │  time_steps[i] ↔ scores[i]
///   └─────────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
