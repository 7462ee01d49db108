use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchDepartment::Table)
                    .if_not_exists()
                    .col(uuid(BranchDepartment::Id).primary_key())
                    .col(uuid(BranchDepartment::BranchId).not_null())
                    .col(string_len(BranchDepartment::Code, 32).not_null())
                    .col(string_len(BranchDepartment::Name, 128).not_null())
                    .col(text_null(BranchDepartment::Description))
                    .col(boolean(BranchDepartment::IsActive).default(true))
                    .col(timestamp_with_time_zone(BranchDepartment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BranchDepartment::UpdatedAt).not_null())
                    .col(string_len_null(BranchDepartment::CreatedBy, 64))
                    .col(string_len_null(BranchDepartment::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_branch")
                            .from(BranchDepartment::Table, BranchDepartment::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BranchDepartment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BranchDepartment {
    Table,
    Id,
    BranchId,
    Code,
    Name,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum Branch { Table, Id }
