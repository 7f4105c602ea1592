use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName};
use crate::pagination::Pagination;

pub mod category;
pub mod errors;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing categories.
///
/// Archived categories are always excluded from listings.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Case-insensitive substring filter on the category name.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List non-archived categories matching the supplied query options.
    ///
    /// Returns the total number of matching records before pagination
    /// together with the requested page of items.
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
    /// Retrieve a category by its identifier regardless of archived state.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return it with its store-assigned id.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Overwrite name and archived flag, refreshing `updated_at`.
    fn update_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
        is_archived: bool,
    ) -> RepositoryResult<usize>;
    /// Set only the archived flag.
    fn set_category_archived(&self, id: CategoryId, archived: bool) -> RepositoryResult<usize>;
    /// Permanently remove a category row.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}
