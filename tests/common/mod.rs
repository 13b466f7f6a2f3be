use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use salesrep_api::db::{DbPool, establish_connection_pool};
use salesrep_api::domain::sales_rep::SalesRep;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database in a temporary directory, migrated and pooled.
///
/// The directory and its database files are removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir.path().join(name).display().to_string();
        let pool = establish_connection_pool(&database_url).expect("failed to build pool");

        {
            let mut conn = pool.get().expect("failed to get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[allow(dead_code)]
pub fn insert_sales_reps(pool: &DbPool, reps: &[SalesRep]) {
    use salesrep_api::schema::sales_reps;

    let mut conn = pool.get().expect("failed to get connection");
    for rep in reps {
        diesel::insert_into(sales_reps::table)
            .values((
                sales_reps::id.eq(rep.id),
                sales_reps::name.eq(&rep.name),
                sales_reps::role.eq(&rep.role),
                sales_reps::region.eq(&rep.region),
                sales_reps::email.eq(&rep.email),
                sales_reps::deal_status.eq(&rep.deal_status),
                sales_reps::deal_amount.eq(rep.deal_amount),
            ))
            .execute(&mut conn)
            .expect("failed to insert sales rep");
    }
}

#[allow(dead_code)]
pub fn sample_rep(id: i32, name: &str, role: &str, region: &str) -> SalesRep {
    SalesRep {
        id,
        name: name.to_string(),
        role: role.to_string(),
        region: region.to_string(),
        email: format!("rep{id}@example.com"),
        deal_status: "In Progress".to_string(),
        deal_amount: 1000.0 * id as f64,
    }
}
