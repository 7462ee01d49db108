use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bank;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "working_calendar")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bank_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// IANA zone name, e.g. `Europe/London`.
    pub timezone: String,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Bank }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Bank => Entity::belongs_to(bank::Entity).from(Column::BankId).to(bank::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
