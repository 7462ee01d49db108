//! Parent/child ownership checks for nested endpoints.
use std::future::Future;

use uuid::Uuid;

use crate::errors::{ServiceError, ServiceResult};

/// Display labels used in not-found messages, e.g. `Region` / `Division`.
#[derive(Debug, Clone, Copy)]
pub struct Ownership {
    pub child: &'static str,
    pub parent: &'static str,
}

/// Loads parent and child and checks that the child points at the parent.
///
/// 1. parent missing -> `"<Parent> not found with ID: <parent_id>"`
/// 2. child missing -> `"<Child> not found with ID: <child_id>"`
/// 3. child owned elsewhere -> `"<Child> not found for <parent> with ID: <parent_id>"`
///
/// # Examples
/// ```
/// use service::ownership::{verify_scoped_ownership, Ownership};
/// use uuid::Uuid;
///
/// let (bank, division) = (Uuid::new_v4(), Uuid::new_v4());
/// let other_bank = Uuid::new_v4();
/// let labels = Ownership { child: "Division", parent: "Bank" };
/// let res = tokio_test::block_on(verify_scoped_ownership(
///     labels,
///     bank,
///     division,
///     |id| async move { Ok(Some(id)) },
///     |id| async move { Ok(Some((id, other_bank))) },
///     |child: &(Uuid, Uuid)| Some(child.1),
/// ));
/// let err = res.unwrap_err().to_string();
/// assert_eq!(err, format!("Division not found for bank with ID: {}", bank));
/// ```
pub async fn verify_scoped_ownership<P, C, LP, FP, LC, FC, A>(
    labels: Ownership,
    parent_id: Uuid,
    child_id: Uuid,
    load_parent: LP,
    load_child: LC,
    parent_of: A,
) -> ServiceResult<(P, C)>
where
    LP: FnOnce(Uuid) -> FP,
    FP: Future<Output = ServiceResult<Option<P>>>,
    LC: FnOnce(Uuid) -> FC,
    FC: Future<Output = ServiceResult<Option<C>>>,
    A: FnOnce(&C) -> Option<Uuid>,
{
    let parent = load_parent(parent_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(labels.parent, parent_id))?;
    let child = load_child(child_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(labels.child, child_id))?;
    if parent_of(&child) != Some(parent_id) {
        return Err(ServiceError::not_found_for(labels.child, labels.parent, parent_id));
    }
    Ok((parent, child))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: Ownership = Ownership { child: "Region", parent: "Division" };

    async fn run(parent: Option<Uuid>, child: Option<(Uuid, Option<Uuid>)>, parent_id: Uuid, child_id: Uuid) -> ServiceResult<(Uuid, (Uuid, Option<Uuid>))> {
        verify_scoped_ownership(
            LABELS,
            parent_id,
            child_id,
            |_| async move { Ok(parent) },
            |_| async move { Ok(child) },
            |c: &(Uuid, Option<Uuid>)| c.1,
        )
        .await
    }

    #[tokio::test]
    async fn accepts_matching_parent() {
        let (p, c) = (Uuid::new_v4(), Uuid::new_v4());
        let (parent, child) = run(Some(p), Some((c, Some(p))), p, c).await.unwrap();
        assert_eq!(parent, p);
        assert_eq!(child.0, c);
    }

    #[tokio::test]
    async fn reports_each_failure_step() {
        let (p, c) = (Uuid::new_v4(), Uuid::new_v4());

        let err = run(None, Some((c, Some(p))), p, c).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Division not found with ID: {}", p));

        let err = run(Some(p), None, p, c).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Region not found with ID: {}", c));

        let err = run(Some(p), Some((c, Some(Uuid::new_v4()))), p, c).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Region not found for division with ID: {}", p));

        // an optional link that is unset never matches
        let err = run(Some(p), Some((c, None)), p, c).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
