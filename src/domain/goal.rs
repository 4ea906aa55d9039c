use serde::{Deserialize, Serialize};

use super::{Cents, format_money};

/// A named savings target funded by contributions drawn from the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub target_cents: Cents,
    pub current_cents: Cents,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_cents: Cents) -> Self {
        Self {
            name: name.into(),
            target_cents,
            current_cents: 0,
        }
    }

    /// Saved amount after contributing `amount_cents`, or `None` if it leaves the `Cents` range.
    pub fn checked_contribution(&self, amount_cents: Cents) -> Option<Cents> {
        self.current_cents.checked_add(amount_cents)
    }

    /// Add a contribution. The amount is applied as given, sign included.
    /// Returns the new saved amount; on overflow the goal is left unchanged.
    pub fn contribute(&mut self, amount_cents: Cents) -> Option<Cents> {
        let current = self.checked_contribution(amount_cents)?;
        self.current_cents = current;
        Some(current)
    }

    /// Amount still missing to reach the target; negative once it is exceeded.
    pub fn remaining(&self) -> Cents {
        self.target_cents.saturating_sub(self.current_cents)
    }

    pub fn is_reached(&self) -> bool {
        self.current_cents >= self.target_cents
    }

    /// Progress towards the target as a percentage (not clamped).
    pub fn progress_percentage(&self) -> f64 {
        if self.target_cents == 0 {
            return 0.0;
        }
        self.current_cents as f64 * 100.0 / self.target_cents as f64
    }
}

impl std::fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name,
            format_money(self.current_cents),
            format_money(self.target_cents)
        )
    }
}
