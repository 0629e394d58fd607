/// Analytics report view-model
pub mod analytics;
/// Per-day counting over a trailing window
pub mod buckets;
/// Month grids and month navigation
pub mod calendar;
/// Calendar view-model
pub mod calendar_view;
/// Event narrowing by area and text
pub mod filter;
/// Dashboard headline counts
pub mod overview;
/// Top-N orderings
pub mod ranking;
/// Per-event, per-area and global statistics
pub mod rollup;
