pub use sea_orm_migration::prelude::*;

mod m20260820_090000_expenses;
mod m20260820_091500_salary;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260820_090000_expenses::Migration),
            Box::new(m20260820_091500_salary::Migration),
        ]
    }
}
