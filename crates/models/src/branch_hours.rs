use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{branch, enums::DayOfWeek};

/// Opening hours of a branch for one day of the week.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch_hours")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub branch_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
    pub is_closed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Branch }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Branch => Entity::belongs_to(branch::Entity).from(Column::BranchId).to(branch::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
