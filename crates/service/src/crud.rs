//! Generic CRUD core that every entity service delegates to.
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{ServiceError, ServiceResult};
use crate::filter::FilterCriteria;
use crate::ownership::{verify_scoped_ownership, Ownership};
use crate::pagination::Page;
use crate::repository::{Record, SharedRepository};

/// Server-controlled columns applied when a DTO becomes a row.
#[derive(Debug, Clone)]
pub struct Stamp {
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    carried_created_by: Option<Option<String>>,
}

impl Stamp {
    /// Fresh id and timestamps for an insert.
    pub fn new() -> Self {
        let now = Utc::now().fixed_offset();
        Self { id: Uuid::new_v4(), created_at: now, updated_at: now, carried_created_by: None }
    }

    /// Keeps id and creation audit of `existing`, stamps `updated_at`.
    pub fn carry<R: Record>(existing: &R) -> Self {
        Self {
            id: existing.record_id(),
            created_at: existing.created_at(),
            updated_at: Utc::now().fixed_offset(),
            carried_created_by: Some(existing.created_by()),
        }
    }

    pub fn created_by(&self, requested: Option<String>) -> Option<String> {
        match &self.carried_created_by {
            Some(carried) => carried.clone(),
            None => requested,
        }
    }
}

impl Default for Stamp {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport shape of one entity.
pub trait Dto: Sized + Send + Sync + 'static {
    type Model: Record;

    /// Label used in error messages.
    const ENTITY: &'static str;

    fn from_model(model: Self::Model) -> Self;
    fn into_model(self, stamp: Stamp) -> ServiceResult<Self::Model>;

    fn validate(&self) -> ServiceResult<()> {
        Ok(())
    }
}

pub fn required<T>(value: Option<T>, field: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::required(field))
}

pub struct CrudService<D: Dto> {
    repo: SharedRepository<D::Model>,
}

impl<D: Dto> CrudService<D> {
    pub fn new(repo: SharedRepository<D::Model>) -> Self {
        Self { repo }
    }

    pub async fn find(&self, id: Uuid) -> ServiceResult<Option<D::Model>> {
        self.repo.find_by_id(id).await
    }

    /// Loads the row or fails with `"<Entity> not found with ID: <id>"`.
    pub async fn require(&self, id: Uuid) -> ServiceResult<D::Model> {
        self.find(id).await?.ok_or_else(|| ServiceError::not_found(D::ENTITY, id))
    }

    pub async fn find_all(&self, criteria: &FilterCriteria) -> ServiceResult<Vec<D::Model>> {
        self.repo.find_all(criteria).await
    }

    pub async fn filter(&self, criteria: &FilterCriteria) -> ServiceResult<Page<D>> {
        Ok(self.repo.filter(criteria).await?.map(D::from_model))
    }

    pub async fn get_by_id(&self, id: Uuid) -> ServiceResult<D> {
        self.require(id).await.map(D::from_model)
    }

    pub async fn create(&self, dto: D) -> ServiceResult<D> {
        dto.validate()?;
        let model = dto.into_model(Stamp::new())?;
        debug!(entity = D::ENTITY, id = %model.record_id(), "insert");
        self.repo.insert(model).await.map(D::from_model)
    }

    /// Full overwrite of an already loaded row; the stored id always wins.
    pub async fn replace(&self, existing: &D::Model, dto: D) -> ServiceResult<D> {
        dto.validate()?;
        let model = dto.into_model(Stamp::carry(existing))?;
        debug!(entity = D::ENTITY, id = %model.record_id(), "overwrite");
        self.repo.update(model).await.map(D::from_model)
    }

    /// Persists an already mapped row, skipping DTO validation.
    pub async fn overwrite(&self, model: D::Model) -> ServiceResult<D::Model> {
        self.repo.update(model).await
    }

    pub async fn update(&self, id: Uuid, dto: D) -> ServiceResult<D> {
        let existing = self.require(id).await?;
        self.replace(&existing, dto).await
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.require(id).await?;
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found(D::ENTITY, id));
        }
        Ok(())
    }

    /// Fails with `Conflict` when another row matches `criteria`.
    pub async fn ensure_unique(&self, criteria: FilterCriteria, exclude: Option<Uuid>, what: impl FnOnce() -> String) -> ServiceResult<()> {
        let clash = self
            .repo
            .find_all(&criteria)
            .await?
            .into_iter()
            .any(|row| Some(row.record_id()) != exclude);
        if clash {
            return Err(ServiceError::Conflict(what()));
        }
        Ok(())
    }

    /// Loads `child_id` and checks it belongs to `parent_id` of `parent`.
    pub async fn verify_owned_by<P: Dto>(
        &self,
        parent: &CrudService<P>,
        parent_id: Uuid,
        child_id: Uuid,
        parent_of: impl FnOnce(&D::Model) -> Option<Uuid>,
    ) -> ServiceResult<(P::Model, D::Model)> {
        verify_scoped_ownership(
            Ownership { child: D::ENTITY, parent: P::ENTITY },
            parent_id,
            child_id,
            |id| parent.find(id),
            |id| self.find(id),
            parent_of,
        )
        .await
    }
}
