use anyhow::Result;
use sea_orm::{EntityTrait, TransactionTrait};

use super::{insert_bank, insert_division, setup_test_db};
use crate::{bank, bank_division};

#[tokio::test]
async fn test_rollback_discards_inserts() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    let bank = insert_bank(&txn, "Rolled back").await?;
    let division = insert_division(&txn, bank.id).await?;
    txn.rollback().await?;

    assert!(bank::Entity::find_by_id(bank.id).one(&db).await?.is_none());
    assert!(bank_division::Entity::find_by_id(division.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_commit_persists_inserts() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    let bank = insert_bank(&txn, "Committed").await?;
    txn.commit().await?;

    assert!(bank::Entity::find_by_id(bank.id).one(&db).await?.is_some());
    bank::Entity::delete_by_id(bank.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_failed_statement_leaves_earlier_rows_uncommitted() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    let bank = insert_bank(&txn, "Partial").await?;
    // Unknown parent id violates the FK and aborts the transaction.
    let res = insert_division(&txn, uuid::Uuid::new_v4()).await;
    assert!(res.is_err());
    txn.rollback().await?;

    assert!(bank::Entity::find_by_id(bank.id).one(&db).await?.is_none());
    Ok(())
}
