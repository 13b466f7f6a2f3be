//! Repository implementation for sales representatives.

use diesel::prelude::*;

use crate::{
    domain::sales_rep::{SalesRep, SortBy, SortOrder},
    repository::{DieselRepository, SalesRepListQuery, SalesRepReader, errors::RepositoryResult},
};

impl SalesRepReader for DieselRepository {
    fn get_sales_rep_by_id(&self, id: i32) -> RepositoryResult<Option<SalesRep>> {
        use crate::models::sales_rep::SalesRep as DbSalesRep;
        use crate::schema::sales_reps;

        let mut conn = self.conn()?;
        let rep = sales_reps::table
            .find(id)
            .first::<DbSalesRep>(&mut conn)
            .optional()?;

        Ok(rep.map(Into::into))
    }

    fn list_sales_reps(
        &self,
        query: SalesRepListQuery,
    ) -> RepositoryResult<(usize, Vec<SalesRep>)> {
        use crate::models::sales_rep::SalesRep as DbSalesRep;
        use crate::schema::sales_reps;

        let mut conn = self.conn()?;

        // Fixed conjunction of the supplied criteria, built once for the
        // count and once for the page query.
        let filtered = || {
            let mut q = sales_reps::table.into_boxed();
            if let Some(id) = query.id {
                q = q.filter(sales_reps::id.eq(id));
            }
            if let Some(name) = &query.name {
                q = q.filter(sales_reps::name.eq(name));
            }
            if let Some(role) = &query.role {
                q = q.filter(sales_reps::role.eq(role));
            }
            if let Some(region) = &query.region {
                q = q.filter(sales_reps::region.eq(region));
            }
            if let Some(email) = &query.email {
                q = q.filter(sales_reps::email.eq(email));
            }
            if let Some(status) = &query.deal_status {
                q = q.filter(sales_reps::deal_status.eq(status));
            }
            if let Some(amount) = query.deal_amount {
                q = q.filter(sales_reps::deal_amount.eq(amount));
            }
            q
        };

        let total: i64 = filtered().count().get_result(&mut conn)?;

        // Ties on non-id sort keys break by id ascending so pages stay
        // deterministic.
        let mut page_query = match (query.sort_by, query.sort_order) {
            (SortBy::Id, SortOrder::Asc) => filtered().order(sales_reps::id.asc()),
            (SortBy::Id, SortOrder::Desc) => filtered().order(sales_reps::id.desc()),
            (SortBy::Name, SortOrder::Asc) => filtered()
                .order(sales_reps::name.asc())
                .then_order_by(sales_reps::id.asc()),
            (SortBy::Name, SortOrder::Desc) => filtered()
                .order(sales_reps::name.desc())
                .then_order_by(sales_reps::id.asc()),
            (SortBy::Role, SortOrder::Asc) => filtered()
                .order(sales_reps::role.asc())
                .then_order_by(sales_reps::id.asc()),
            (SortBy::Role, SortOrder::Desc) => filtered()
                .order(sales_reps::role.desc())
                .then_order_by(sales_reps::id.asc()),
            (SortBy::Region, SortOrder::Asc) => filtered()
                .order(sales_reps::region.asc())
                .then_order_by(sales_reps::id.asc()),
            (SortBy::Region, SortOrder::Desc) => filtered()
                .order(sales_reps::region.desc())
                .then_order_by(sales_reps::id.asc()),
        };

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            page_query = page_query.limit(per_page).offset((page - 1) * per_page);
        }

        let items = page_query
            .load::<DbSalesRep>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<SalesRep>>();

        Ok((total as usize, items))
    }
}
