use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bank, bank_region, enums::BranchStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bank_id: Uuid,
    pub region_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: BranchStatus,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Bank, Region }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Bank => Entity::belongs_to(bank::Entity).from(Column::BankId).to(bank::Column::Id).into(),
            Relation::Region => Entity::belongs_to(bank_region::Entity).from(Column::RegionId).to(bank_region::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
