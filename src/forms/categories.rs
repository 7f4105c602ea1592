use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryName, TypeConstraintError};
use crate::dto::categories::ValidationFailureDto;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryForm {
    // The 50-character cap is enforced on the trimmed value by
    // `CategoryName::new`, so surrounding whitespace never counts.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub is_archived: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryPayload {
    pub name: CategoryName,
    pub is_archived: bool,
}

impl CreateCategoryPayload {
    pub fn into_new_category(self) -> NewCategory {
        let now = Utc::now().naive_utc();
        NewCategory {
            name: self.name,
            is_archived: self.is_archived,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateCategoryFormError {
    #[error("create category form validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("create category form contains invalid data: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
}

impl CreateCategoryFormError {
    /// Per-field failures suitable for a 400 response body.
    pub fn failures(&self) -> Vec<ValidationFailureDto> {
        match self {
            Self::Validation(errors) => ValidationFailureDto::from_validation_errors(errors),
            Self::TypeConstraint(error) => vec![ValidationFailureDto {
                field: "name".to_string(),
                message: error.to_string(),
            }],
        }
    }
}

impl TryFrom<CreateCategoryForm> for CreateCategoryPayload {
    type Error = CreateCategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
            is_archived: value.is_archived,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    // The 50-character cap is enforced on the trimmed value by
    // `CategoryName::new`, so surrounding whitespace never counts.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub is_archived: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryPayload {
    pub name: CategoryName,
    pub is_archived: bool,
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    #[error("update category form validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("update category form contains invalid data: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
}

impl UpdateCategoryFormError {
    /// Per-field failures suitable for a 400 response body.
    pub fn failures(&self) -> Vec<ValidationFailureDto> {
        match self {
            Self::Validation(errors) => ValidationFailureDto::from_validation_errors(errors),
            Self::TypeConstraint(error) => vec![ValidationFailureDto {
                field: "name".to_string(),
                message: error.to_string(),
            }],
        }
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryPayload {
    type Error = UpdateCategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
            is_archived: value.is_archived,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_trims_the_name() {
        let form = CreateCategoryForm {
            name: "  Books  ".to_string(),
            is_archived: false,
        };

        let payload: CreateCategoryPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Books");
        assert!(!payload.is_archived);
    }

    #[test]
    fn create_form_rejects_over_long_names() {
        let form = CreateCategoryForm {
            name: "x".repeat(51),
            is_archived: false,
        };

        let err = CreateCategoryPayload::try_from(form).unwrap_err();
        let failures = err.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "name");
    }

    #[test]
    fn create_form_ignores_surrounding_whitespace_when_measuring_length() {
        // 49 characters plus padding: over 50 raw, within the limit trimmed.
        let form = CreateCategoryForm {
            name: format!("  {}  ", "x".repeat(49)),
            is_archived: false,
        };

        let payload: CreateCategoryPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "x".repeat(49));
    }

    #[test]
    fn create_form_rejects_whitespace_only_names() {
        let form = CreateCategoryForm {
            name: "   ".to_string(),
            is_archived: false,
        };

        let err = CreateCategoryPayload::try_from(form).unwrap_err();
        assert!(matches!(err, CreateCategoryFormError::TypeConstraint(_)));
    }

    #[test]
    fn create_form_accepts_unarchived_categories() {
        let form = CreateCategoryForm {
            name: "Books".to_string(),
            is_archived: false,
        };

        let payload: CreateCategoryPayload = form.try_into().unwrap();
        let new_category = payload.into_new_category();
        assert!(!new_category.is_archived);
        assert_eq!(new_category.created_at, new_category.updated_at);
    }
}
