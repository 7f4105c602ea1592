//! Business logic for the category resource.
//!
//! Each function validates its inputs, talks to the repository through the
//! reader/writer traits and maps repository failures into [`ServiceError`]
//! so that the HTTP routes can remain thin wrappers.

use crate::domain::types::CategoryId;
use crate::dto::categories::{CategoryDto, CategoryListDto, CategoryListItemDto};
use crate::forms::categories::{CreateCategoryPayload, UpdateCategoryPayload};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{CategoryListQuery, CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Return one page of non-archived categories.
///
/// `total_count` reflects the full filtered result set; out-of-range pages
/// yield an empty item list rather than an error.
pub fn list_categories<R>(
    search: Option<&str>,
    page: usize,
    repo: &R,
) -> ServiceResult<CategoryListDto>
where
    R: CategoryReader,
{
    // Pages are 1-based; clamp here so the echoed `current_page` matches
    // the window actually returned.
    let page = page.max(1);
    let mut query = CategoryListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
        query = query.search(search);
    }

    match repo.list_categories(query) {
        Ok((total, categories)) => Ok(CategoryListDto {
            total_count: total,
            current_page: page,
            items: categories
                .into_iter()
                .map(CategoryListItemDto::from)
                .collect(),
        }),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single non-archived category. Archived rows behave as missing.
pub fn get_category<R>(id: CategoryId, repo: &R) -> ServiceResult<CategoryListItemDto>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) if !category.is_archived => Ok(CategoryListItemDto::from(category)),
        Ok(_) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Persist a new category and return the stored entity with its id.
pub fn create_category<R>(payload: CreateCategoryPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    match repo.create_category(&payload.into_new_category()) {
        Ok(category) => Ok(CategoryDto::from(category)),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite name and archived flag of an existing category.
///
/// Lookups do not exclude archived rows, so archived categories stay
/// updatable. `updated_at` is refreshed by the repository.
pub fn update_category<R>(
    id: CategoryId,
    payload: UpdateCategoryPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.update_category(id, &payload.name, payload.is_archived) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Set the archived flag to exactly the supplied value.
pub fn change_category_status<R>(id: CategoryId, archived: bool, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.set_category_archived(id, archived) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to change category status: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Permanently remove a category. Archived rows can still be deleted.
pub fn delete_category<R>(id: CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_category(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
