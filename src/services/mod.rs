//! Business logic services

pub mod contest_service;
pub mod problem_service;
pub mod refresh_service;
pub mod user_service;
pub mod visit_service;

pub use contest_service::ContestService;
pub use problem_service::ProblemService;
pub use refresh_service::{RefreshOutcome, RefreshService, RefreshStats};
pub use user_service::UserService;
pub use visit_service::VisitService;
