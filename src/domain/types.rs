//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and text constraints are enforced at the boundary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters allowed in a category name.
pub const CATEGORY_NAME_MAX_LENGTH: usize = 50;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum length.
    #[error("{0} must be at most {1} characters")]
    TooLong(&'static str, usize),
}

/// Unique identifier for a category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId("category_id"))
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for i32 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<i32> for CategoryId {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<CategoryId> for i32 {
    fn eq(&self, other: &CategoryId) -> bool {
        *self == other.0
    }
}

/// Category display name: trimmed, non-empty and at most
/// [`CATEGORY_NAME_MAX_LENGTH`] characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Constructs a trimmed name, rejecting empty and over-long inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString("category name"));
        }
        if trimmed.chars().count() > CATEGORY_NAME_MAX_LENGTH {
            return Err(TypeConstraintError::TooLong(
                "category name",
                CATEGORY_NAME_MAX_LENGTH,
            ));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for CategoryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CategoryName> for &str {
    fn eq(&self, other: &CategoryName) -> bool {
        *self == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_category_names() {
        let name = CategoryName::new("  Books  ").unwrap();
        assert_eq!(name.as_str(), "Books");
    }

    #[test]
    fn rejects_blank_names() {
        let err = CategoryName::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("category name"));
    }

    #[test]
    fn rejects_names_over_fifty_characters() {
        let err = CategoryName::new("x".repeat(51)).unwrap_err();
        assert_eq!(
            err,
            TypeConstraintError::TooLong("category name", CATEGORY_NAME_MAX_LENGTH)
        );
        assert!(CategoryName::new("x".repeat(50)).is_ok());
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = CategoryId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("category_id"));
    }
}
