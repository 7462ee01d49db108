//! Persistence abstraction shared by every service.
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    PrimaryKeyTrait, QuerySelect,
};
use uuid::Uuid;

use sea_orm::prelude::DateTimeWithTimeZone;

use crate::errors::{ServiceError, ServiceResult};
use crate::filter::{self, FilterCriteria};
use crate::pagination::Page;

/// Identity and audit columns every stored row exposes.
pub trait Record: Clone + Send + Sync + 'static {
    fn record_id(&self) -> Uuid;
    fn created_at(&self) -> DateTimeWithTimeZone;
    fn created_by(&self) -> Option<String> {
        None
    }
}

macro_rules! audited_record {
    ($($module:ident),+ $(,)?) => {$(
        impl Record for models::$module::Model {
            fn record_id(&self) -> Uuid { self.id }
            fn created_at(&self) -> DateTimeWithTimeZone { self.created_at }
            fn created_by(&self) -> Option<String> { self.created_by.clone() }
        }
    )+};
}

audited_record!(
    bank,
    bank_division,
    bank_region,
    branch,
    branch_department,
    branch_position,
    branch_hours,
    bank_holiday,
    working_calendar,
    calendar_assignment,
);

impl Record for models::bank_audit_log::Model {
    fn record_id(&self) -> Uuid { self.id }
    fn created_at(&self) -> DateTimeWithTimeZone { self.created_at }
}

impl Record for models::branch_audit_log::Model {
    fn record_id(&self) -> Uuid { self.id }
    fn created_at(&self) -> DateTimeWithTimeZone { self.created_at }
}

/// Single-row persistence for one entity type.
#[async_trait]
pub trait Repository<M: Record>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<M>>;
    /// Every row matching the criteria filters, ordered, ignoring paging.
    async fn find_all(&self, criteria: &FilterCriteria) -> ServiceResult<Vec<M>>;
    async fn filter(&self, criteria: &FilterCriteria) -> ServiceResult<Page<M>>;
    async fn insert(&self, model: M) -> ServiceResult<M>;
    /// Overwrites every column of the row with `model.record_id()`.
    async fn update(&self, model: M) -> ServiceResult<M>;
    async fn delete_by_id(&self, id: Uuid) -> ServiceResult<bool>;
}

pub type SharedRepository<M> = Arc<dyn Repository<M>>;

/// SeaORM-backed repository implementation.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait]
impl<E> Repository<E::Model> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: Record + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self, criteria: &FilterCriteria) -> ServiceResult<Vec<E::Model>> {
        Ok(filter::apply(E::find(), criteria)?.all(&self.db).await?)
    }

    async fn filter(&self, criteria: &FilterCriteria) -> ServiceResult<Page<E::Model>> {
        let pagination = criteria.pagination();
        let select = filter::apply(E::find(), criteria)?;
        let total = select.clone().count(&self.db).await?;
        let content = select
            .offset(pagination.offset())
            .limit(pagination.size)
            .all(&self.db)
            .await?;
        Ok(Page::new(content, pagination, total))
    }

    async fn insert(&self, model: E::Model) -> ServiceResult<E::Model> {
        Ok(model.into_active_model().reset_all().insert(&self.db).await?)
    }

    async fn update(&self, model: E::Model) -> ServiceResult<E::Model> {
        Ok(model.into_active_model().reset_all().update(&self.db).await?)
    }

    async fn delete_by_id(&self, id: Uuid) -> ServiceResult<bool> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use serde::Serialize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    pub struct MemoryRepository<M> {
        rows: Mutex<HashMap<Uuid, M>>,
    }

    impl<M> Default for MemoryRepository<M> {
        fn default() -> Self {
            Self { rows: Mutex::new(HashMap::new()) }
        }
    }

    impl<M: Record + Serialize> MemoryRepository<M> {
        pub fn shared() -> SharedRepository<M> {
            Arc::new(Self::default())
        }

        fn lock(&self) -> ServiceResult<std::sync::MutexGuard<'_, HashMap<Uuid, M>>> {
            self.rows.lock().map_err(|_| ServiceError::Db("memory repository poisoned".into()))
        }

        fn matching(&self, criteria: &FilterCriteria) -> ServiceResult<Vec<M>> {
            let rows: Vec<M> = self.lock()?.values().cloned().collect();
            let mut keyed = Vec::with_capacity(rows.len());
            for row in rows {
                let json = serde_json::to_value(&row).map_err(|e| ServiceError::Db(e.to_string()))?;
                if filter::matches(&json, &criteria.filters)? {
                    keyed.push((json, row));
                }
            }
            // validate sort keys once so errors are not swallowed by sort_by
            if let (Some((a, _)), Some((b, _))) = (keyed.first(), keyed.last()) {
                filter::compare_records(a, b, &criteria.sort)?;
            }
            keyed.sort_by(|(a, _), (b, _)| {
                filter::compare_records(a, b, &criteria.sort).unwrap_or(std::cmp::Ordering::Equal)
            });
            Ok(keyed.into_iter().map(|(_, row)| row).collect())
        }
    }

    #[async_trait]
    impl<M: Record + Serialize> Repository<M> for MemoryRepository<M> {
        async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<M>> {
            Ok(self.lock()?.get(&id).cloned())
        }

        async fn find_all(&self, criteria: &FilterCriteria) -> ServiceResult<Vec<M>> {
            self.matching(criteria)
        }

        async fn filter(&self, criteria: &FilterCriteria) -> ServiceResult<Page<M>> {
            let pagination = criteria.pagination();
            let all = self.matching(criteria)?;
            let total = all.len() as u64;
            let content = all
                .into_iter()
                .skip(pagination.offset() as usize)
                .take(pagination.size as usize)
                .collect();
            Ok(Page::new(content, pagination, total))
        }

        async fn insert(&self, model: M) -> ServiceResult<M> {
            let mut rows = self.lock()?;
            if rows.contains_key(&model.record_id()) {
                return Err(ServiceError::Db(format!("duplicate key: {}", model.record_id())));
            }
            rows.insert(model.record_id(), model.clone());
            Ok(model)
        }

        async fn update(&self, model: M) -> ServiceResult<M> {
            let mut rows = self.lock()?;
            match rows.get_mut(&model.record_id()) {
                Some(row) => {
                    *row = model.clone();
                    Ok(model)
                }
                None => Err(ServiceError::Db("None of the records are updated".into())),
            }
        }

        async fn delete_by_id(&self, id: Uuid) -> ServiceResult<bool> {
            Ok(self.lock()?.remove(&id).is_some())
        }
    }
}
