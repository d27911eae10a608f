pub use sea_orm_migration::prelude::*;

mod m20260301_000001_profile;
mod m20260301_000002_bread_type;
mod m20260301_000003_batch;
mod m20260301_000004_sales_log;
mod m20260301_000005_remaining_bread;
mod m20260301_000006_shift_feedback;
mod m20260301_000007_activity;
mod m20260301_000008_staff_session;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_profile::Migration),
            Box::new(m20260301_000002_bread_type::Migration),
            Box::new(m20260301_000003_batch::Migration),
            Box::new(m20260301_000004_sales_log::Migration),
            Box::new(m20260301_000005_remaining_bread::Migration),
            Box::new(m20260301_000006_shift_feedback::Migration),
            Box::new(m20260301_000007_activity::Migration),
            Box::new(m20260301_000008_staff_session::Migration),
        ]
    }
}
