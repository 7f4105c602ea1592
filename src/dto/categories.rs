use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::domain::category::Category;

/// Listing entry exposing only display fields; the id stays internal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryListItemDto {
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for CategoryListItemDto {
    fn from(value: Category) -> Self {
        Self {
            name: value.name.into_inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// One page of categories together with paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryListDto {
    pub total_count: usize,
    pub current_page: usize,
    pub items: Vec<CategoryListItemDto>,
}

/// Full persisted entity, returned from the create operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            is_archived: value.is_archived,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationFailureDto {
    pub field: String,
    pub message: String,
}

impl ValidationFailureDto {
    /// Flatten [`ValidationErrors`] into one failure per violated rule.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut failures = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                failures.push(Self {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                });
            }
        }
        failures
    }
}
