//! String-backed enum columns shared by several entities.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Operating status of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchStatus {
    #[default]
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
    #[sea_orm(string_value = "TEMPORARILY_CLOSED")]
    TemporarilyClosed,
    #[sea_orm(string_value = "UNDER_RENOVATION")]
    UnderRenovation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    #[default]
    #[sea_orm(string_value = "MONDAY")]
    Monday,
    #[sea_orm(string_value = "TUESDAY")]
    Tuesday,
    #[sea_orm(string_value = "WEDNESDAY")]
    Wednesday,
    #[sea_orm(string_value = "THURSDAY")]
    Thursday,
    #[sea_orm(string_value = "FRIDAY")]
    Friday,
    #[sea_orm(string_value = "SATURDAY")]
    Saturday,
    #[sea_orm(string_value = "SUNDAY")]
    Sunday,
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// What happened to the audited entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    #[default]
    #[sea_orm(string_value = "CREATED")]
    Created,
    #[sea_orm(string_value = "UPDATED")]
    Updated,
    #[sea_orm(string_value = "DELETED")]
    Deleted,
    #[sea_orm(string_value = "ACTIVATED")]
    Activated,
    #[sea_orm(string_value = "DEACTIVATED")]
    Deactivated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_maps_to_day_of_week() {
        assert_eq!(DayOfWeek::from(chrono::Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(chrono::Weekday::Sun), DayOfWeek::Sunday);
    }

    #[test]
    fn json_uses_db_spelling() {
        let json = serde_json::to_value(BranchStatus::TemporarilyClosed).unwrap();
        assert_eq!(json, serde_json::json!("TEMPORARILY_CLOSED"));
        assert_eq!(BranchStatus::TemporarilyClosed.to_value(), "TEMPORARILY_CLOSED");
        let action: AuditAction = serde_json::from_value(serde_json::json!("DEACTIVATED")).unwrap();
        assert_eq!(action, AuditAction::Deactivated);
    }
}
