use diesel::prelude::*;

use crate::domain::sales_rep::SalesRep as DomainSalesRep;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sales_reps)]
/// Diesel model for [`crate::domain::sales_rep::SalesRep`].
pub struct SalesRep {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub region: String,
    pub email: String,
    pub deal_status: String,
    pub deal_amount: f64,
}

impl From<SalesRep> for DomainSalesRep {
    fn from(rep: SalesRep) -> Self {
        Self {
            id: rep.id,
            name: rep.name,
            role: rep.role,
            region: rep.region,
            email: rep.email,
            deal_status: rep.deal_status,
            deal_amount: rep.deal_amount,
        }
    }
}
