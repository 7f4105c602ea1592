use std::cell::{Cell, RefCell};

use chrono::Utc;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName};
use crate::repository::{CategoryListQuery, CategoryReader, CategoryWriter, RepositoryResult};

/// Simple in-memory repository used for unit tests.
pub struct TestRepository {
    categories: RefCell<Vec<Category>>,
    next_id: Cell<i32>,
}

impl TestRepository {
    pub fn new() -> Self {
        Self {
            categories: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        let next_id = categories.iter().map(|c| c.id.get()).max().unwrap_or(0) + 1;
        self.next_id.set(next_id);
        *self.categories.borrow_mut() = categories;
        self
    }
}

impl Default for TestRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        let mut items: Vec<Category> = self
            .categories
            .borrow()
            .iter()
            .filter(|c| !c.is_archived)
            .cloned()
            .collect();
        if let Some(search) = &query.search {
            let search = search.to_lowercase();
            items.retain(|c| c.name.to_lowercase().contains(&search));
        }
        items.sort_by_key(|c| c.id);
        let total = items.len();

        if let Some(pagination) = &query.pagination {
            items = items
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .collect();
        }

        Ok((total, items))
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = Category {
            id: CategoryId::new(id).expect("test repository ids start at 1"),
            name: category.name.clone(),
            is_archived: category.is_archived,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        self.categories.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
        is_archived: bool,
    ) -> RepositoryResult<usize> {
        let mut categories = self.categories.borrow_mut();
        match categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.name = name.clone();
                category.is_archived = is_archived;
                category.updated_at = Utc::now().naive_utc();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn set_category_archived(&self, id: CategoryId, archived: bool) -> RepositoryResult<usize> {
        let mut categories = self.categories.borrow_mut();
        match categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.is_archived = archived;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        let mut categories = self.categories.borrow_mut();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(before - categories.len())
    }
}
