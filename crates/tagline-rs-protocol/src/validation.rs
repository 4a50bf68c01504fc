//! Request validation rules applied before any upstream call.

use crate::{GenerateRequest, MAX_COUNT, MIN_COUNT};

/// Reasons a generation request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Product name was empty or whitespace.
    #[error("name is required")]
    EmptyName,
    /// Requested tagline count is outside the supported range.
    #[error("count must be between {min} and {max} (got {count})")]
    CountOutOfRange { count: u32, min: u32, max: u32 },
}

impl GenerateRequest {
    /// Check the request against the generation contract.
    ///
    /// Description and audience only need to be present; they may be empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.count) {
            return Err(ValidationError::CountOutOfRange {
                count: self.count,
                min: MIN_COUNT,
                max: MAX_COUNT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use crate::{GenerateRequest, Tone};
    use pretty_assertions::assert_eq;

    fn request(name: &str, count: u32) -> GenerateRequest {
        GenerateRequest {
            name: name.to_string(),
            description: String::new(),
            audience: String::new(),
            tone: Tone::Funny,
            count,
        }
    }

    #[test]
    fn accepts_bounds_of_count_range() {
        assert_eq!(request("Foo", 1).validate(), Ok(()));
        assert_eq!(request("Foo", 10).validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(request("   ", 3).validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn rejects_count_outside_range() {
        let err = request("Foo", 11).validate().unwrap_err();
        assert_eq!(err.to_string(), "count must be between 1 and 10 (got 11)");
        assert!(request("Foo", 0).validate().is_err());
    }
}
