pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_goal_tracker_table;
mod m20260301_000002_create_timer_setting_table;
mod m20260301_000003_create_user_alert_table;
mod m20260301_000004_create_faction_tables;
mod m20260301_000005_create_user_reminder_tables;
mod m20260301_000006_create_trophy_tables;
mod m20260301_000007_create_special_battle_timer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_goal_tracker_table::Migration),
            Box::new(m20260301_000002_create_timer_setting_table::Migration),
            Box::new(m20260301_000003_create_user_alert_table::Migration),
            Box::new(m20260301_000004_create_faction_tables::Migration),
            Box::new(m20260301_000005_create_user_reminder_tables::Migration),
            Box::new(m20260301_000006_create_trophy_tables::Migration),
            Box::new(m20260301_000007_create_special_battle_timer_table::Migration),
        ]
    }
}
