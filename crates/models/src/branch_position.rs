use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::branch_department;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch_position")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub department_id: Uuid,
    pub code: String,
    /// Job title.
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Department }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Department => Entity::belongs_to(branch_department::Entity).from(Column::DepartmentId).to(branch_department::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
