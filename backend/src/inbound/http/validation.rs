//! Shared validation helpers for inbound HTTP adapters.
//!
//! Validation failures carry `{field, code}` details so clients can render
//! field-level messages without parsing human-readable text.

use serde_json::json;

use crate::domain::{Error, RecruitmentValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    TooLong,
    BlankEntry,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TooLong => "too_long",
            Self::BlankEntry => "blank_entry",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_index_error(
    field: FieldName,
    code: ErrorCode,
    index: usize,
    message: impl Into<String>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "index": index,
        "code": code.as_str(),
    }))
}

/// Translate a draft schema failure into a field-coded request error.
pub(crate) fn map_recruitment_validation_error(err: RecruitmentValidationError) -> Error {
    match err {
        RecruitmentValidationError::EmptyTitle => field_error(
            FieldName::new("title"),
            ErrorCode::MissingField,
            "title must not be empty",
        ),
        RecruitmentValidationError::TitleTooLong { max } => field_error(
            FieldName::new("title"),
            ErrorCode::TooLong,
            format!("title must be at most {max} characters"),
        ),
        RecruitmentValidationError::EmptyCategory => field_error(
            FieldName::new("category"),
            ErrorCode::MissingField,
            "category must not be empty",
        ),
        RecruitmentValidationError::BlankStackEntry { index } => field_index_error(
            FieldName::new("stack"),
            ErrorCode::BlankEntry,
            index,
            "stack entries must not be blank",
        ),
        // Timestamps are store-assigned; a client payload cannot produce this.
        RecruitmentValidationError::UpdatedBeforeCreated => {
            Error::internal("timestamp invariant violated")
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for validation error mapping.

    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::{ErrorCode as DomainErrorCode, TITLE_MAX};

    fn details(error: &Error) -> Value {
        error.details().expect("details present").clone()
    }

    #[rstest]
    fn empty_title_maps_to_missing_field() {
        let error = map_recruitment_validation_error(RecruitmentValidationError::EmptyTitle);
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        let details = details(&error);
        assert_eq!(details["field"], "title");
        assert_eq!(details["code"], "missing_field");
    }

    #[rstest]
    fn over_long_title_maps_to_too_long() {
        let error = map_recruitment_validation_error(RecruitmentValidationError::TitleTooLong {
            max: TITLE_MAX,
        });
        assert_eq!(details(&error)["code"], "too_long");
    }

    #[rstest]
    fn blank_stack_entry_carries_the_index() {
        let error = map_recruitment_validation_error(
            RecruitmentValidationError::BlankStackEntry { index: 2 },
        );
        assert_eq!(details(&error)["index"], 2);
        assert_eq!(details(&error)["field"], "stack");
    }
}
