//! User statistics request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH};
use crate::utils::validation::handle_charset;

/// `/users/{handle}` path parameters
#[derive(Debug, Deserialize, Validate)]
pub struct HandlePath {
    #[validate(
        length(min = MIN_HANDLE_LENGTH, max = MAX_HANDLE_LENGTH),
        custom(function = "handle_charset")
    )]
    pub handle: String,
}

/// Field solved problems are ordered by
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Time,
    Rating,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Statistics query parameters
///
/// The date filter applies only when both `from` and `to` are given; `to`
/// includes the whole day.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StatsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}
