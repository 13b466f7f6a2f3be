use serde::{Deserialize, Serialize};

/// A sales representative record together with its associated deal.
///
/// Records are owned by an external data-management process; this service
/// only ever reads them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SalesRep {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub region: String,
    pub email: String,
    pub deal_status: String,
    pub deal_amount: f64,
}

/// Field a sales rep listing can be ordered by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Id,
    Name,
    Role,
    Region,
}

/// Direction applied to the sort field.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}
