use serde::{Deserialize, Serialize};

use super::{Cents, format_money};

/// Default share of a cap, in percent, that spending must exceed to raise an alert.
pub const DEFAULT_ALERT_THRESHOLD_PERCENT: u8 = 90;

/// A spending cap on a single category. Caps only drive alerts; they never block
/// a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub cap_cents: Cents,
}

impl Budget {
    pub fn new(category: impl Into<String>, cap_cents: Cents) -> Self {
        Self {
            category: category.into(),
            cap_cents,
        }
    }

    /// True when `spent` is strictly above `threshold_percent` of the cap.
    pub fn is_alerting(&self, spent: Cents, threshold_percent: u8) -> bool {
        exceeds_threshold(spent, self.cap_cents, threshold_percent)
    }
}

/// Strict `spent > cap * percent / 100`, computed without rounding.
pub fn exceeds_threshold(spent: Cents, cap: Cents, threshold_percent: u8) -> bool {
    i128::from(spent) * 100 > i128::from(cap) * i128::from(threshold_percent)
}

/// A category whose expense total has crossed the alert threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAlert {
    pub category: String,
    pub spent: Cents,
    pub cap: Cents,
}

impl std::fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Alert: Spending in {} ({}) is nearing budget ({})",
            self.category,
            format_money(self.spent),
            format_money(self.cap)
        )
    }
}
