
/// Insert/read/update/delete against the real schema
pub mod crud_tests;

/// Transaction handling tests
pub mod transaction_tests;

use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::{bank, bank_division, bank_region, branch, db::connect, enums::BranchStatus};

/// Returns `None` when DB tests are disabled or the database is unreachable.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

pub(crate) fn unique_code(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &suffix[..12])
}

pub(crate) async fn insert_bank<C: sea_orm::ConnectionTrait>(db: &C, name: &str) -> Result<bank::Model> {
    let now = Utc::now().fixed_offset();
    let model = bank::ActiveModel {
        id: Set(Uuid::new_v4()),
        code: Set(unique_code("BK")),
        name: Set(name.to_string()),
        swift_code: Set(None),
        country_code: Set(Some("GB".into())),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(Some("tests".into())),
        updated_by: Set(None),
    };
    Ok(model.insert(db).await?)
}

pub(crate) async fn insert_division<C: sea_orm::ConnectionTrait>(db: &C, bank_id: Uuid) -> Result<bank_division::Model> {
    let now = Utc::now().fixed_offset();
    let model = bank_division::ActiveModel {
        id: Set(Uuid::new_v4()),
        bank_id: Set(bank_id),
        code: Set(unique_code("DIV")),
        name: Set("Retail".into()),
        description: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(None),
        updated_by: Set(None),
    };
    Ok(model.insert(db).await?)
}

pub(crate) async fn insert_region<C: sea_orm::ConnectionTrait>(db: &C, division_id: Uuid) -> Result<bank_region::Model> {
    let now = Utc::now().fixed_offset();
    let model = bank_region::ActiveModel {
        id: Set(Uuid::new_v4()),
        division_id: Set(division_id),
        code: Set(unique_code("RG")),
        name: Set("North".into()),
        description: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(None),
        updated_by: Set(None),
    };
    Ok(model.insert(db).await?)
}

pub(crate) async fn insert_branch<C: sea_orm::ConnectionTrait>(db: &C, bank_id: Uuid, region_id: Option<Uuid>) -> Result<branch::Model> {
    let now = Utc::now().fixed_offset();
    let model = branch::ActiveModel {
        id: Set(Uuid::new_v4()),
        bank_id: Set(bank_id),
        region_id: Set(region_id),
        code: Set(unique_code("BR")),
        name: Set("High Street".into()),
        address_line1: Set("1 High Street".into()),
        address_line2: Set(None),
        city: Set("Leeds".into()),
        state: Set(None),
        postal_code: Set(Some("LS1 1AA".into())),
        country_code: Set(Some("GB".into())),
        phone: Set(None),
        email: Set(None),
        status: Set(BranchStatus::Open),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(None),
        updated_by: Set(None),
    };
    Ok(model.insert(db).await?)
}
