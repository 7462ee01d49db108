use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchPosition::Table)
                    .if_not_exists()
                    .col(uuid(BranchPosition::Id).primary_key())
                    .col(uuid(BranchPosition::DepartmentId).not_null())
                    .col(string_len(BranchPosition::Code, 32).not_null())
                    .col(string_len(BranchPosition::Title, 128).not_null())
                    .col(text_null(BranchPosition::Description))
                    .col(boolean(BranchPosition::IsActive).default(true))
                    .col(timestamp_with_time_zone(BranchPosition::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BranchPosition::UpdatedAt).not_null())
                    .col(string_len_null(BranchPosition::CreatedBy, 64))
                    .col(string_len_null(BranchPosition::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_position_department")
                            .from(BranchPosition::Table, BranchPosition::DepartmentId)
                            .to(BranchDepartment::Table, BranchDepartment::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BranchPosition::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BranchPosition {
    Table,
    Id,
    DepartmentId,
    Code,
    Title,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum BranchDepartment { Table, Id }
