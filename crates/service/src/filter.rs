//! Generic filter, sort and paging criteria.
//!
//! The same [`FilterCriteria`] drives both the SeaORM query builder
//! ([`apply`]) and the in-memory evaluation used by test repositories
//! ([`matches`], [`compare_records`]).
use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveTime};
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, ColumnType, EntityTrait, IdenStatic, Iterable, Order, QueryFilter, QueryOrder, Select, Value,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{ServiceError, ServiceResult};
use crate::pagination::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Case-insensitive substring match on text columns.
    Like,
    /// `value` must be an array.
    In,
    IsNull,
    IsNotNull,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterField {
    /// Column name in snake_case or camelCase.
    pub field: String,
    pub operator: FilterOperator,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SortField {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub filters: Vec<FilterField>,
    #[serde(default)]
    pub sort: Vec<SortField>,
    /// 0-based page index, defaults to 0.
    #[serde(default)]
    pub page: Option<u64>,
    /// Page size, clamped to 1..=100, defaults to 20.
    #[serde(default)]
    pub size: Option<u64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, operator: FilterOperator, value: impl Into<serde_json::Value>) -> Self {
        self.filters.push(FilterField { field: field.to_string(), operator, value: value.into() });
        self
    }

    pub fn where_eq(self, field: &str, value: impl Into<serde_json::Value>) -> Self {
        self.with(field, FilterOperator::Eq, value)
    }

    pub fn sorted_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort.push(SortField { field: field.to_string(), direction });
        self
    }

    pub fn paged(mut self, page: u64, size: u64) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// Adds the implicit parent filter used by nested endpoints.
    pub fn scoped_to(self, field: &str, parent_id: Uuid) -> Self {
        self.where_eq(field, parent_id.to_string())
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.size)
    }
}

/// `bankId` -> `bank_id`; snake_case input passes through.
pub fn to_snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn unknown_field(field: &str) -> ServiceError {
    ServiceError::Validation(format!("unknown filter field: {}", field))
}

fn invalid_value(field: &str, value: &serde_json::Value) -> ServiceError {
    ServiceError::Validation(format!("invalid value for field {}: {}", field, value))
}

pub fn resolve_column<E: EntityTrait>(field: &str) -> ServiceResult<E::Column> {
    let wanted = to_snake_case(field);
    E::Column::iter().find(|c| c.as_str() == wanted).ok_or_else(|| unknown_field(field))
}

fn is_text(ty: &ColumnType) -> bool {
    matches!(ty, ColumnType::String(_) | ColumnType::Text | ColumnType::Char(_))
}

/// Convert a JSON filter value into a typed SQL value for `col`.
fn coerce<C: ColumnTrait>(col: &C, field: &str, value: &serde_json::Value) -> ServiceResult<Value> {
    let bad = || invalid_value(field, value);
    let text = value.as_str();
    let coerced = match col.def().get_column_type() {
        ColumnType::Uuid => text.and_then(|s| Uuid::parse_str(s).ok()).map(Value::from),
        ColumnType::Boolean => value
            .as_bool()
            .or_else(|| text.and_then(|s| s.parse::<bool>().ok()))
            .map(Value::from),
        ColumnType::TinyInteger | ColumnType::SmallInteger | ColumnType::Integer | ColumnType::BigInteger => value
            .as_i64()
            .or_else(|| text.and_then(|s| s.parse::<i64>().ok()))
            .map(Value::from),
        ColumnType::Date => text.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()).map(Value::from),
        ColumnType::Time => text
            .and_then(|s| NaiveTime::parse_from_str(s, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M")).ok())
            .map(Value::from),
        ColumnType::TimestampWithTimeZone => text.and_then(|s| DateTime::parse_from_rfc3339(s).ok()).map(Value::from),
        ColumnType::Json | ColumnType::JsonBinary => Some(Value::from(value.clone())),
        ty if is_text(ty) => text.map(|s| Value::from(s.to_string())),
        _ => None,
    };
    coerced.ok_or_else(bad)
}

/// `%`, `_` and `\` in a LIKE needle match literally.
fn escape_like(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn condition<E: EntityTrait>(filter: &FilterField) -> ServiceResult<SimpleExpr> {
    let col = resolve_column::<E>(&filter.field)?;
    let value = &filter.value;
    let expr = match filter.operator {
        FilterOperator::IsNull => col.is_null(),
        FilterOperator::IsNotNull => col.is_not_null(),
        FilterOperator::Eq => col.eq(coerce(&col, &filter.field, value)?),
        FilterOperator::Ne => col.ne(coerce(&col, &filter.field, value)?),
        FilterOperator::Gt => col.gt(coerce(&col, &filter.field, value)?),
        FilterOperator::Gte => col.gte(coerce(&col, &filter.field, value)?),
        FilterOperator::Lt => col.lt(coerce(&col, &filter.field, value)?),
        FilterOperator::Lte => col.lte(coerce(&col, &filter.field, value)?),
        FilterOperator::In => {
            let items = value.as_array().ok_or_else(|| invalid_value(&filter.field, value))?;
            let values = items
                .iter()
                .map(|v| coerce(&col, &filter.field, v))
                .collect::<ServiceResult<Vec<Value>>>()?;
            col.is_in(values)
        }
        FilterOperator::Like => {
            if !is_text(col.def().get_column_type()) {
                return Err(ServiceError::Validation(format!("LIKE is only supported on text fields: {}", filter.field)));
            }
            let needle = value.as_str().ok_or_else(|| invalid_value(&filter.field, value))?;
            let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
            Expr::expr(Func::lower(Expr::col((E::default(), col)))).like(LikeExpr::new(pattern).escape('\\'))
        }
    };
    Ok(expr)
}

/// Apply filters and ordering. Paging is left to the caller.
pub fn apply<E: EntityTrait>(mut select: Select<E>, criteria: &FilterCriteria) -> ServiceResult<Select<E>> {
    for filter in &criteria.filters {
        select = select.filter(condition::<E>(filter)?);
    }
    if criteria.sort.is_empty() {
        if let Ok(created) = resolve_column::<E>("created_at") {
            select = select.order_by(created, Order::Desc);
        }
    } else {
        for sort in &criteria.sort {
            let col = resolve_column::<E>(&sort.field)?;
            let order = match sort.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            select = select.order_by(col, order);
        }
    }
    if let Ok(id) = resolve_column::<E>("id") {
        select = select.order_by(id, Order::Asc);
    }
    Ok(select)
}

/// Ordering between two JSON scalars of the same kind.
pub fn compare_json(a: &serde_json::Value, b: &serde_json::Value) -> Option<Ordering> {
    use serde_json::Value as J;
    match (a, b) {
        (J::Number(x), J::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (J::String(x), J::String(y)) => Some(x.cmp(y)),
        (J::Bool(x), J::Bool(y)) => Some(x.cmp(y)),
        (J::Null, J::Null) => Some(Ordering::Equal),
        (J::Null, _) => Some(Ordering::Less),
        (_, J::Null) => Some(Ordering::Greater),
        _ => None,
    }
}

fn json_eq(actual: &serde_json::Value, expected: &serde_json::Value) -> bool {
    match (actual, expected) {
        (serde_json::Value::String(a), serde_json::Value::String(b)) => match (Uuid::parse_str(a), Uuid::parse_str(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        },
        (serde_json::Value::Bool(a), serde_json::Value::String(b)) => b.parse::<bool>().map_or(false, |b| *a == b),
        _ => compare_json(actual, expected) == Some(Ordering::Equal),
    }
}

fn field_of<'a>(record: &'a serde_json::Value, field: &str) -> ServiceResult<&'a serde_json::Value> {
    record.get(to_snake_case(field)).ok_or_else(|| unknown_field(field))
}

/// Evaluate every filter against a serialized record.
pub fn matches(record: &serde_json::Value, filters: &[FilterField]) -> ServiceResult<bool> {
    for filter in filters {
        let actual = field_of(record, &filter.field)?;
        let value = &filter.value;
        let ordered = |want: &[Ordering]| {
            !actual.is_null() && compare_json(actual, value).map_or(false, |o| want.contains(&o))
        };
        let hit = match filter.operator {
            FilterOperator::IsNull => actual.is_null(),
            FilterOperator::IsNotNull => !actual.is_null(),
            FilterOperator::Eq => json_eq(actual, value),
            FilterOperator::Ne => !actual.is_null() && !json_eq(actual, value),
            FilterOperator::Gt => ordered(&[Ordering::Greater]),
            FilterOperator::Gte => ordered(&[Ordering::Greater, Ordering::Equal]),
            FilterOperator::Lt => ordered(&[Ordering::Less]),
            FilterOperator::Lte => ordered(&[Ordering::Less, Ordering::Equal]),
            FilterOperator::In => value
                .as_array()
                .ok_or_else(|| invalid_value(&filter.field, value))?
                .iter()
                .any(|v| json_eq(actual, v)),
            FilterOperator::Like => {
                let needle = value.as_str().ok_or_else(|| invalid_value(&filter.field, value))?;
                actual.as_str().map_or(false, |s| s.to_lowercase().contains(&needle.to_lowercase()))
            }
        };
        if !hit {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Record ordering matching [`apply`]: explicit sort or `created_at DESC`, then `id`.
pub fn compare_records(a: &serde_json::Value, b: &serde_json::Value, sort: &[SortField]) -> ServiceResult<Ordering> {
    let default_sort = [SortField { field: "created_at".into(), direction: SortDirection::Desc }];
    let keys = if sort.is_empty() { &default_sort[..] } else { sort };
    for key in keys {
        let (x, y) = (field_of(a, &key.field)?, field_of(b, &key.field)?);
        let ord = compare_json(x, y).unwrap_or(Ordering::Equal);
        let ord = match key.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    let id = |v: &serde_json::Value| v.get("id").and_then(|i| i.as_str()).map(str::to_string);
    Ok(id(a).cmp(&id(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};
    use serde_json::json;

    #[test]
    fn camel_case_fields_resolve() {
        assert_eq!(to_snake_case("bankId"), "bank_id");
        assert_eq!(to_snake_case("address_line1"), "address_line1");
        assert_eq!(to_snake_case("addressLine1"), "address_line1");
        assert!(resolve_column::<models::branch::Entity>("regionId").is_ok());
        assert!(matches!(
            resolve_column::<models::branch::Entity>("nope"),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn criteria_deserializes_from_wire_format() {
        let c: FilterCriteria = serde_json::from_value(json!({
            "filters": [{"field": "name", "operator": "LIKE", "value": "north"}],
            "sort": [{"field": "code", "direction": "desc"}],
            "page": 1,
            "size": 500
        }))
        .unwrap();
        assert_eq!(c.filters[0].operator, FilterOperator::Like);
        assert_eq!(c.sort[0].direction, SortDirection::Desc);
        assert_eq!(c.pagination().size, 100);
        let empty: FilterCriteria = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.pagination(), Pagination::default());
    }

    #[test]
    fn builds_sql_with_default_order() {
        let bank_id = Uuid::new_v4();
        let criteria = FilterCriteria::new()
            .scoped_to("bankId", bank_id)
            .with("name", FilterOperator::Like, "Main")
            .with("status", FilterOperator::In, json!(["OPEN", "CLOSED"]));
        let sql = apply(models::branch::Entity::find(), &criteria)
            .unwrap()
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(&bank_id.to_string()));
        assert!(sql.contains("LOWER("));
        assert!(sql.contains("LIKE '%main%'"));
        assert!(sql.contains("'OPEN'") && sql.contains("'CLOSED'"));
        let order = sql.split("ORDER BY").nth(1).expect("order clause");
        assert!(order.find("created_at").unwrap() < order.find("\"id\"").unwrap());
    }

    #[test]
    fn rejects_bad_values() {
        let bad_uuid = FilterCriteria::new().where_eq("bank_id", "not-a-uuid");
        assert!(matches!(apply(models::branch::Entity::find(), &bad_uuid), Err(ServiceError::Validation(_))));
        let like_on_bool = FilterCriteria::new().with("isActive", FilterOperator::Like, "t");
        assert!(apply(models::branch::Entity::find(), &like_on_bool).is_err());
        let bad_date = FilterCriteria::new().with("holidayDate", FilterOperator::Gte, "31/12/2024");
        assert!(apply(models::bank_holiday::Entity::find(), &bad_date).is_err());
    }

    #[test]
    fn in_memory_matching() {
        let record = json!({"id": "a", "name": "North Branch", "region_id": null, "is_active": true, "code": "B2"});
        let ok = |c: FilterCriteria| matches(&record, &c.filters).unwrap();
        assert!(ok(FilterCriteria::new().with("name", FilterOperator::Like, "north")));
        assert!(ok(FilterCriteria::new().with("regionId", FilterOperator::IsNull, json!(null))));
        assert!(ok(FilterCriteria::new().where_eq("isActive", true)));
        assert!(ok(FilterCriteria::new().with("code", FilterOperator::In, json!(["B1", "B2"]))));
        assert!(ok(FilterCriteria::new().with("code", FilterOperator::Gt, "B1")));
        assert!(!ok(FilterCriteria::new().with("code", FilterOperator::Ne, "B2")));
        assert!(matches(&record, &FilterCriteria::new().where_eq("missing", 1).filters).is_err());
    }

    #[test]
    fn equality_is_case_sensitive_except_for_uuids() {
        let id = Uuid::new_v4();
        let record = json!({"id": id.to_string(), "code": "ABC"});
        let ok = |c: FilterCriteria| matches(&record, &c.filters).unwrap();
        assert!(ok(FilterCriteria::new().where_eq("code", "ABC")));
        assert!(!ok(FilterCriteria::new().where_eq("code", "abc")));
        assert!(ok(FilterCriteria::new().with("code", FilterOperator::Ne, "abc")));
        assert!(!ok(FilterCriteria::new().with("code", FilterOperator::In, json!(["abc"]))));
        assert!(ok(FilterCriteria::new().where_eq("id", id.to_string().to_uppercase())));
    }

    #[test]
    fn like_wildcards_in_needle_are_literal() {
        let record = json!({"name": "Rate 50% off"});
        let like = |n: &str| matches(&record, &FilterCriteria::new().with("name", FilterOperator::Like, n).filters).unwrap();
        assert!(like("50%"));
        assert!(!like("5_%"));

        let criteria = FilterCriteria::new().with("name", FilterOperator::Like, "50%_");
        let sql = apply(models::branch::Entity::find(), &criteria)
            .unwrap()
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains("ESCAPE"));
        assert!(sql.contains(r"\%") && sql.contains(r"\_"), "{}", sql);
    }

    #[test]
    fn record_ordering_defaults_to_newest_first() {
        let old = json!({"id": "1", "created_at": "2024-01-01T00:00:00+00:00", "code": "Z"});
        let new = json!({"id": "2", "created_at": "2024-06-01T00:00:00+00:00", "code": "A"});
        assert_eq!(compare_records(&new, &old, &[]).unwrap(), Ordering::Less);
        let by_code = [SortField { field: "code".into(), direction: SortDirection::Asc }];
        assert_eq!(compare_records(&old, &new, &by_code).unwrap(), Ordering::Greater);
    }
}
