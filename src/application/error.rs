use thiserror::Error;

use crate::domain::{Cents, format_money};

fn money(cents: &Cents) -> String {
    format_money(*cents)
}

/// Every ledger failure is recoverable: the operation is dropped and the
/// ledger is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid category name: {0:?}")]
    InvalidCategoryName(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid savings goal target for '{name}': {} (must be positive)", money(.target))]
    InvalidGoalTarget { name: String, target: Cents },

    #[error("Savings goal not found: {0}")]
    GoalNotFound(String),
}

impl AppError {
    /// Malformed or out-of-range input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCategoryName(_)
                | AppError::InvalidAmount(_)
                | AppError::InvalidGoalTarget { .. }
        )
    }

    /// A referenced category or goal does not exist.
    pub fn is_lookup(&self) -> bool {
        matches!(self, AppError::CategoryNotFound(_) | AppError::GoalNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(AppError::InvalidCategoryName(" ".into()).is_validation());
        assert!(AppError::InvalidAmount("negative".into()).is_validation());
        assert!(
            AppError::InvalidGoalTarget {
                name: "Car".into(),
                target: 0
            }
            .is_validation()
        );
        assert!(AppError::CategoryNotFound("Food".into()).is_lookup());
        assert!(AppError::GoalNotFound("Car".into()).is_lookup());
        assert!(!AppError::GoalNotFound("Car".into()).is_validation());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::CategoryNotFound("Food".into()).to_string(),
            "Category not found: Food"
        );
        assert_eq!(
            AppError::InvalidCategoryName("".into()).to_string(),
            "Invalid category name: \"\""
        );
    }
}
