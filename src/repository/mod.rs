use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::sales_rep::{SalesRep, SortBy, SortOrder},
    repository::errors::{RepositoryError, RepositoryResult},
};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod sales_rep;

/// Number of items returned per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Criteria accepted by [`SalesRepReader::list_sales_reps`].
///
/// Absent fields impose no constraint; supplied filters are AND-ed together.
#[derive(Debug, Clone, Default)]
pub struct SalesRepListQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub deal_status: Option<String>,
    pub deal_amount: Option<f64>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub pagination: Option<Pagination>,
}

impl SalesRepListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn deal_status(mut self, status: impl Into<String>) -> Self {
        self.deal_status = Some(status.into());
        self
    }

    pub fn deal_amount(mut self, amount: f64) -> Self {
        self.deal_amount = Some(amount);
        self
    }

    pub fn sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait SalesRepReader {
    fn get_sales_rep_by_id(&self, id: i32) -> RepositoryResult<Option<SalesRep>>;
    fn list_sales_reps(&self, query: SalesRepListQuery)
    -> RepositoryResult<(usize, Vec<SalesRep>)>;
}

/// Diesel-backed repository over the shared connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(get_connection(&self.pool)?)
    }
}
