use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by the campus core. Every operation validates before
/// mutating, so an `Err` always leaves the collections untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CampusError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },
}

impl CampusError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: &'static str, id: Uuid) -> Self {
        Self::NotFound { kind, id }
    }
}

/// Reject empty or whitespace-only text fields, returning the trimmed value.
pub(crate) fn required_text(field: &'static str, value: &str) -> Result<String, CampusError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CampusError::validation(field, "must not be blank"));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims() {
        assert_eq!(required_text("building", "  A ").unwrap(), "A");
    }

    #[test]
    fn required_text_rejects_blank() {
        let err = required_text("building", "   ").unwrap_err();
        assert_eq!(err.to_string(), "invalid building: must not be blank");
    }

    #[test]
    fn not_found_message_names_kind_and_id() {
        let id = Uuid::nil();
        let err = CampusError::not_found("alert", id);
        assert_eq!(err.to_string(), format!("alert not found: {id}"));
    }
}
