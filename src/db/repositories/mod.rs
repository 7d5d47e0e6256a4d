//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod problem_repo;
pub mod snapshot_repo;
pub mod visit_repo;

pub use contest_repo::ContestRepository;
pub use problem_repo::ProblemRepository;
pub use snapshot_repo::SnapshotRepository;
pub use visit_repo::VisitRepository;
