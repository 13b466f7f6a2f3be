//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::sales_rep::SalesRep;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SalesRepListQuery, SalesRepReader};

mock! {
    pub Repository {}

    impl SalesRepReader for Repository {
        fn get_sales_rep_by_id(&self, id: i32) -> RepositoryResult<Option<SalesRep>>;
        fn list_sales_reps(
            &self,
            query: SalesRepListQuery,
        ) -> RepositoryResult<(usize, Vec<SalesRep>)>;
    }
}
