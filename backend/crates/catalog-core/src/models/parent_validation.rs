use serde::Serialize;

/// Outcome of checking a proposed `parentIds` list. Every failed check is
/// reported; callers decide whether to reject the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ParentValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ParentValidation {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
