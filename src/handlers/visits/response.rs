//! Visit counter response DTOs

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VisitCountResponse {
    pub count: i64,
}
