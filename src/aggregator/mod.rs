//! Pure aggregation over Codeforces data
//!
//! Nothing here performs I/O; callers fetch the raw API payloads and persist
//! or serve the results.

pub mod contests;
pub mod submissions;

pub use contests::{Snapshot, SnapshotBuilder, categorize_contests};
pub use submissions::{SolveStats, classify_submissions};
