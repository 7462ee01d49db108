//! Services over the real schema. Skipped without a reachable database.
use uuid::Uuid;

use crate::dto::{BankDivisionDto, BankDto, BranchDto};
use crate::errors::ServiceError;
use crate::filter::{FilterCriteria, FilterOperator, SortDirection};
use crate::services::{Repositories, Services};
use crate::test_support::get_db;

fn code(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().simple().to_string()[..10])
}

async fn services() -> Option<Services> {
    get_db().await.map(|db| Services::new(Repositories::seaorm(&db)))
}

#[tokio::test]
async fn bank_round_trip_through_postgres() {
    let Some(s) = services().await else { return };
    let created = s
        .banks
        .create_bank(BankDto { code: code("PG"), name: "Postgres Bank".into(), ..Default::default() })
        .await
        .unwrap();
    let id = created.id.unwrap();
    let fetched = s.banks.get_bank_by_id(id).await.unwrap();
    assert_eq!(fetched.code, created.code);
    assert_eq!(fetched.name, "Postgres Bank");

    let mut body = fetched.clone();
    body.name = "Renamed".into();
    body.id = Some(Uuid::new_v4());
    let updated = s.banks.update_bank(id, body).await.unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.audit.created_at, fetched.audit.created_at);

    s.banks.delete_bank(id).await.unwrap();
    let err = s.banks.delete_bank(id).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Bank not found with ID: {}", id));
}

#[tokio::test]
async fn filter_like_and_paging_in_sql() {
    let Some(s) = services().await else { return };
    let bank_id = s
        .banks
        .create_bank(BankDto { code: code("FL"), name: "Filter Bank".into(), ..Default::default() })
        .await
        .unwrap()
        .id
        .unwrap();
    for (i, name) in ["North Retail", "South Retail", "Treasury"].iter().enumerate() {
        s.divisions
            .create_bank_division_for_bank(
                bank_id,
                BankDivisionDto { code: format!("D{}", i), name: name.to_string(), ..Default::default() },
            )
            .await
            .unwrap();
    }
    let criteria = FilterCriteria::new()
        .with("name", FilterOperator::Like, "retail")
        .sorted_by("name", SortDirection::Asc)
        .paged(0, 1);
    let page = s.divisions.filter_bank_divisions_for_bank(bank_id, &criteria).await.unwrap();
    assert_eq!(page.total_elements, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].name, "North Retail");

    let bad = FilterCriteria::new().where_eq("nope", 1);
    assert!(matches!(s.divisions.filter_bank_divisions(&bad).await, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn bank_with_branches_cannot_be_deleted() {
    let Some(s) = services().await else { return };
    let bank_id = s
        .banks
        .create_bank(BankDto { code: code("RS"), name: "Restrict Bank".into(), ..Default::default() })
        .await
        .unwrap()
        .id
        .unwrap();
    s.branches
        .create_branch(BranchDto {
            bank_id: Some(bank_id),
            code: "HQ".into(),
            name: "Head office".into(),
            address_line1: "1 Bank St".into(),
            city: "Leeds".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(matches!(s.banks.delete_bank(bank_id).await, Err(ServiceError::Db(_))));
}
