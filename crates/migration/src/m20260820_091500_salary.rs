use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Salary::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Salary::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Salary::Amount).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Salary::Table).to_owned())
            .await
    }
}

/// The table keeps the singular name used by the service since its first
/// deployment.
#[derive(Iden)]
pub enum Salary {
    Table,
    Id,
    Amount,
}
