//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod division;
pub mod problem;
pub mod submission;
pub mod visit;

pub use contest::*;
pub use division::*;
pub use problem::*;
pub use submission::*;
pub use visit::*;
