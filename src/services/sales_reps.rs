use crate::domain::sales_rep::SalesRep;
pub use crate::dto::sales_reps::{PageQuery, SalesRepsPage, SalesRepsQuery};
use crate::repository::{DEFAULT_PAGE_SIZE, SalesRepListQuery, SalesRepReader};
use crate::services::{ServiceError, ServiceResult};

/// Builds the pagination arguments from optional request parameters.
///
/// Page and size both default and clamp to at least one.
fn page_and_size(page: Option<usize>, size: Option<usize>) -> (usize, usize) {
    (
        page.unwrap_or(1).max(1),
        size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
    )
}

/// Returns the filtered, sorted page of sales reps with the total match count.
pub fn list_sales_reps<R>(repo: &R, params: SalesRepsQuery) -> ServiceResult<SalesRepsPage>
where
    R: SalesRepReader + ?Sized,
{
    let (page, size) = page_and_size(params.page, params.size);

    let mut query = SalesRepListQuery::new()
        .sort(
            params.sort_by.unwrap_or_default(),
            params.sort_order.unwrap_or_default(),
        )
        .paginate(page, size);

    if let Some(id) = params.id {
        query = query.id(id);
    }
    if let Some(name) = params.name {
        query = query.name(name);
    }
    if let Some(role) = params.role {
        query = query.role(role);
    }
    if let Some(region) = params.region {
        query = query.region(region);
    }
    if let Some(email) = params.email {
        query = query.email(email);
    }
    if let Some(status) = params.status {
        query = query.deal_status(status);
    }
    if let Some(amount) = params.amount {
        query = query.deal_amount(amount);
    }

    let (total_data, sales_reps) = repo.list_sales_reps(query).map_err(ServiceError::from)?;

    Ok(SalesRepsPage {
        total_data,
        sales_reps,
    })
}

/// Returns the page of sales reps assigned to the given region.
pub fn list_sales_reps_by_region<R>(
    repo: &R,
    region: &str,
    params: PageQuery,
) -> ServiceResult<SalesRepsPage>
where
    R: SalesRepReader + ?Sized,
{
    let (page, size) = page_and_size(params.page, params.size);
    let query = SalesRepListQuery::new().region(region).paginate(page, size);

    let (total_data, sales_reps) = repo.list_sales_reps(query).map_err(ServiceError::from)?;

    Ok(SalesRepsPage {
        total_data,
        sales_reps,
    })
}

/// Returns the page of sales reps holding the given role.
pub fn list_sales_reps_by_role<R>(
    repo: &R,
    role: &str,
    params: PageQuery,
) -> ServiceResult<SalesRepsPage>
where
    R: SalesRepReader + ?Sized,
{
    let (page, size) = page_and_size(params.page, params.size);
    let query = SalesRepListQuery::new().role(role).paginate(page, size);

    let (total_data, sales_reps) = repo.list_sales_reps(query).map_err(ServiceError::from)?;

    Ok(SalesRepsPage {
        total_data,
        sales_reps,
    })
}

/// Fetches a single sales rep, failing with [`ServiceError::NotFound`] when
/// the identifier does not exist.
pub fn get_sales_rep_by_id<R>(repo: &R, id: i32) -> ServiceResult<SalesRep>
where
    R: SalesRepReader + ?Sized,
{
    repo.get_sales_rep_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}
