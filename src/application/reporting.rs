use serde::{Deserialize, Serialize};

use crate::domain::{Cents, format_money};

/// Snapshot of the ledger: balance, net outflow per category, goal progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReport {
    pub balance: Cents,
    /// Ascending by category name
    pub categories: Vec<CategoryNet>,
    /// Insertion order
    pub goals: Vec<GoalProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNet {
    pub category: String,
    /// Expenses minus income; negative when a category brought money in
    pub net_spent: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub name: String,
    pub current: Cents,
    pub target: Cents,
}

impl LedgerReport {
    pub fn category(&self, name: &str) -> Option<&CategoryNet> {
        self.categories.iter().find(|c| c.category == name)
    }
}

impl std::fmt::Display for LedgerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Budget Report ===")?;
        writeln!(f, "Balance: {}", format_money(self.balance))?;
        writeln!(f)?;

        writeln!(f, "Spending by Category:")?;
        for entry in &self.categories {
            writeln!(f, "{}: {}", entry.category, format_money(entry.net_spent))?;
        }
        writeln!(f)?;

        writeln!(f, "Savings Goals:")?;
        for goal in &self.goals {
            writeln!(
                f,
                "{}: {} / {}",
                goal.name,
                format_money(goal.current),
                format_money(goal.target)
            )?;
        }
        Ok(())
    }
}
