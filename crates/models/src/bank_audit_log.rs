use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bank, enums::AuditAction};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bank_audit_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bank_id: Uuid,
    pub action: AuditAction,
    pub entity_name: String,
    pub entity_id: Uuid,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub metadata: Option<Json>,
    pub ip_address: Option<String>,
    pub user_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Bank }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Bank => Entity::belongs_to(bank::Entity).from(Column::BankId).to(bank::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
