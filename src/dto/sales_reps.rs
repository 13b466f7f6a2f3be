//! DTOs for the sales rep listing and lookup endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::sales_rep::{SalesRep, SortBy, SortOrder};

/// Query parameters accepted by `GET /sales-reps`.
#[derive(Debug, Default, Deserialize)]
pub struct SalesRepsQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    /// Filter by deal status.
    pub status: Option<String>,
    /// Filter by deal amount (exact match).
    pub amount: Option<f64>,
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Pagination parameters accepted by the by-region and by-role endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

/// Result payload returned by the listing endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepsPage {
    /// Total number of records matching the filters, before pagination.
    pub total_data: usize,
    /// Page of records requested by the caller.
    pub sales_reps: Vec<SalesRep>,
}
