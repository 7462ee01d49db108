use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set};
use uuid::Uuid;

use super::{insert_bank, insert_branch, insert_division, insert_region, setup_test_db};
use crate::{
    bank, bank_audit_log, bank_division, bank_holiday, bank_region, branch, branch_hours,
    enums::{AuditAction, BranchStatus, DayOfWeek},
};

#[tokio::test]
async fn test_bank_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = insert_bank(&db, "First National").await?;
    let found = bank::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|b| b.name.as_str()), Some("First National"));

    let by_code = bank::Entity::find().filter(bank::Column::Code.eq(created.code.clone())).one(&db).await?;
    assert_eq!(by_code.map(|b| b.id), Some(created.id));

    let mut active = created.clone().into_active_model();
    active.name = Set("First National Bank".into());
    active.updated_at = Set(Utc::now().fixed_offset());
    let updated = active.update(&db).await?;
    assert_eq!(updated.name, "First National Bank");
    assert_eq!(updated.created_at, created.created_at);

    bank::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(bank::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_bank_code_rejected() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let first = insert_bank(&db, "Dup A").await?;
    let mut clash = first.clone().into_active_model();
    clash.id = Set(Uuid::new_v4());
    let err = clash.reset_all().insert(&db).await;
    assert!(err.is_err(), "unique bank code must be enforced");

    bank::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_hierarchy_and_restricted_delete() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let bank = insert_bank(&db, "Hierarchy").await?;
    let division = insert_division(&db, bank.id).await?;
    let region = insert_region(&db, division.id).await?;
    let branch = insert_branch(&db, bank.id, Some(region.id)).await?;
    assert_eq!(branch.status, BranchStatus::Open);

    // Structural parents cannot be removed while children exist.
    assert!(bank::Entity::delete_by_id(bank.id).exec(&db).await.is_err());

    // Removing the region detaches the branch instead of deleting it.
    bank_region::Entity::delete_by_id(region.id).exec(&db).await?;
    let detached = branch::Entity::find_by_id(branch.id).one(&db).await?.expect("branch kept");
    assert_eq!(detached.region_id, None);

    branch::Entity::delete_by_id(branch.id).exec(&db).await?;
    bank_division::Entity::delete_by_id(division.id).exec(&db).await?;
    bank::Entity::delete_by_id(bank.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_dependent_rows_cascade_with_branch() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let bank = insert_bank(&db, "Cascade").await?;
    let branch = insert_branch(&db, bank.id, None).await?;
    let now = Utc::now().fixed_offset();

    let hours = branch_hours::ActiveModel {
        id: Set(Uuid::new_v4()),
        branch_id: Set(branch.id),
        day_of_week: Set(DayOfWeek::Monday),
        open_time: Set(NaiveTime::from_hms_opt(9, 0, 0)),
        close_time: Set(NaiveTime::from_hms_opt(17, 0, 0)),
        is_closed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(None),
        updated_by: Set(None),
    }
    .insert(&db)
    .await?;

    let holiday = bank_holiday::ActiveModel {
        id: Set(Uuid::new_v4()),
        bank_id: Set(None),
        branch_id: Set(Some(branch.id)),
        name: Set("Local fair".into()),
        holiday_date: Set(NaiveDate::from_ymd_opt(2025, 6, 1).expect("date")),
        is_recurring: Set(true),
        description: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(None),
        updated_by: Set(None),
    }
    .insert(&db)
    .await?;

    branch::Entity::delete_by_id(branch.id).exec(&db).await?;
    assert!(branch_hours::Entity::find_by_id(hours.id).one(&db).await?.is_none());
    assert!(bank_holiday::Entity::find_by_id(holiday.id).one(&db).await?.is_none());

    bank::Entity::delete_by_id(bank.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_holiday_requires_scope() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let now = Utc::now().fixed_offset();
    let res = bank_holiday::ActiveModel {
        id: Set(Uuid::new_v4()),
        bank_id: Set(None),
        branch_id: Set(None),
        name: Set("Nowhere".into()),
        holiday_date: Set(NaiveDate::from_ymd_opt(2025, 1, 1).expect("date")),
        is_recurring: Set(false),
        description: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(None),
        updated_by: Set(None),
    }
    .insert(&db)
    .await;
    assert!(res.is_err(), "check constraint must reject unscoped holiday");
    Ok(())
}

#[tokio::test]
async fn test_audit_metadata_roundtrip() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let bank = insert_bank(&db, "Audited").await?;
    let log = bank_audit_log::ActiveModel {
        id: Set(Uuid::new_v4()),
        bank_id: Set(bank.id),
        action: Set(AuditAction::Updated),
        entity_name: Set("Bank".into()),
        entity_id: Set(bank.id),
        metadata: Set(Some(serde_json::json!({"field": "name", "old": "A", "new": "B"}))),
        ip_address: Set(Some("10.0.0.1".into())),
        user_id: Set(Some("auditor".into())),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(&db)
    .await?;

    let found = bank_audit_log::Entity::find_by_id(log.id).one(&db).await?.expect("log");
    assert_eq!(found.action, AuditAction::Updated);
    assert_eq!(found.metadata.as_ref().and_then(|m| m.get("field")).and_then(|v| v.as_str()), Some("name"));

    bank::Entity::delete_by_id(bank.id).exec(&db).await?;
    assert!(bank_audit_log::Entity::find_by_id(log.id).one(&db).await?.is_none());
    Ok(())
}
