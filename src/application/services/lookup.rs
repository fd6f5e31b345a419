//! Bulk resolution of related ids.

use super::CrudService;
use crate::error::AppError;

/// Resolves every id through `service.get_by_id`, in request order.
///
/// Ids that do not exist are collected and reported together as
/// `"{entity_name}s with these IDs don't exist: [1, 2]"`. Any other error is
/// returned immediately.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if at least one id is missing.
pub async fn fetch_by_ids<S: CrudService>(
    ids: &[i64],
    service: &S,
    entity_name: &str,
) -> Result<Vec<S::Entity>, AppError> {
    let mut found = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();

    for &id in ids {
        match service.get_by_id(id).await {
            Ok(entity) => found.push(entity),
            Err(AppError::NotFound(_)) => missing.push(id),
            Err(e) => return Err(e),
        }
    }

    if !missing.is_empty() {
        return Err(AppError::not_found(format!(
            "{entity_name}s with these IDs don't exist: {missing:?}"
        )));
    }

    Ok(found)
}
