//! Shared Error Types
//!
//! Field-level problems found while checking a client payload. They are
//! raised before any storage or hashing work and surface as 422 responses.
use thiserror::Error;

/// A payload field that failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("`{field}` is required")]
    MissingField { field: String },

    #[error("`{field}` must not be blank")]
    BlankField { field: String },
}

impl SharedError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn blank(field: impl Into<String>) -> Self {
        Self::BlankField {
            field: field.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::BlankField { field } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        assert_eq!(SharedError::missing("name").field(), "name");
        assert_eq!(SharedError::blank("tooth").field(), "tooth");
    }

    #[test]
    fn test_messages_name_the_field() {
        assert_eq!(SharedError::missing("date").to_string(), "`date` is required");
        assert_eq!(
            SharedError::blank("radiographs").to_string(),
            "`radiographs` must not be blank"
        );
    }
}
