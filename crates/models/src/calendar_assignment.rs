use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{branch, branch_department, branch_position, working_calendar};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calendar_assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub calendar_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub position_id: Option<Uuid>,
    pub effective_from: Date,
    pub effective_to: Option<Date>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl Model {
    /// Active and `on` falls inside `[effective_from, effective_to]`.
    pub fn is_effective_on(&self, on: Date) -> bool {
        self.is_active && self.effective_from <= on && self.effective_to.map_or(true, |to| on <= to)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Calendar, Branch, Department, Position }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Calendar => Entity::belongs_to(working_calendar::Entity).from(Column::CalendarId).to(working_calendar::Column::Id).into(),
            Relation::Branch => Entity::belongs_to(branch::Entity).from(Column::BranchId).to(branch::Column::Id).into(),
            Relation::Department => Entity::belongs_to(branch_department::Entity).from(Column::DepartmentId).to(branch_department::Column::Id).into(),
            Relation::Position => Entity::belongs_to(branch_position::Entity).from(Column::PositionId).to(branch_position::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
