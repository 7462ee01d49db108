use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bank, branch};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bank_holiday")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bank_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub name: String,
    pub holiday_date: Date,
    /// Repeats every year on the same month/day.
    pub is_recurring: bool,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Bank, Branch }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Bank => Entity::belongs_to(bank::Entity).from(Column::BankId).to(bank::Column::Id).into(),
            Relation::Branch => Entity::belongs_to(branch::Entity).from(Column::BranchId).to(branch::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
