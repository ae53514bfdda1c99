#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HabitError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("habit {0} not found")]
    NotFound(u64),
}

impl HabitError {
    /// Short classification string for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = HabitError::InvalidInput("name is required".into());
        assert_eq!(e.to_string(), "invalid input: name is required");

        let e = HabitError::NotFound(7);
        assert_eq!(e.to_string(), "habit 7 not found");
    }

    #[test]
    fn kind_strings() {
        assert_eq!(HabitError::InvalidInput("x".into()).kind(), "invalid_input");
        assert_eq!(HabitError::NotFound(1).kind(), "not_found");
    }
}
