//! Create the append-only `bank_audit_log` and `branch_audit_log` tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankAuditLog::Table)
                    .if_not_exists()
                    .col(uuid(BankAuditLog::Id).primary_key())
                    .col(uuid(BankAuditLog::BankId).not_null())
                    .col(string_len(BankAuditLog::Action, 16).not_null())
                    .col(string_len(BankAuditLog::EntityName, 64).not_null())
                    .col(uuid(BankAuditLog::EntityId).not_null())
                    .col(json_binary_null(BankAuditLog::Metadata))
                    .col(string_len_null(BankAuditLog::IpAddress, 64))
                    .col(string_len_null(BankAuditLog::UserId, 64))
                    .col(timestamp_with_time_zone(BankAuditLog::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bank_audit_bank")
                            .from(BankAuditLog::Table, BankAuditLog::BankId)
                            .to(Bank::Table, Bank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BranchAuditLog::Table)
                    .if_not_exists()
                    .col(uuid(BranchAuditLog::Id).primary_key())
                    .col(uuid(BranchAuditLog::BranchId).not_null())
                    .col(string_len(BranchAuditLog::Action, 16).not_null())
                    .col(string_len(BranchAuditLog::EntityName, 64).not_null())
                    .col(uuid(BranchAuditLog::EntityId).not_null())
                    .col(json_binary_null(BranchAuditLog::Metadata))
                    .col(string_len_null(BranchAuditLog::IpAddress, 64))
                    .col(string_len_null(BranchAuditLog::UserId, 64))
                    .col(timestamp_with_time_zone(BranchAuditLog::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_audit_branch")
                            .from(BranchAuditLog::Table, BranchAuditLog::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BranchAuditLog::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(BankAuditLog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BankAuditLog { Table, Id, BankId, Action, EntityName, EntityId, Metadata, IpAddress, UserId, CreatedAt }

#[derive(DeriveIden)]
enum BranchAuditLog { Table, Id, BranchId, Action, EntityName, EntityId, Metadata, IpAddress, UserId, CreatedAt }

#[derive(DeriveIden)]
enum Bank { Table, Id }

#[derive(DeriveIden)]
enum Branch { Table, Id }
