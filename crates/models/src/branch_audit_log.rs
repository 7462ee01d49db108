use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{branch, enums::AuditAction};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch_audit_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub branch_id: Uuid,
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
pub enum Relation { Branch }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Branch => Entity::belongs_to(branch::Entity).from(Column::BranchId).to(branch::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
