use serde::{Deserialize, Serialize};

use super::{Cents, format_money};

/// Whether a transaction brings money in or sends it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense entry. Transactions are never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-supplied identifier, not checked for uniqueness
    pub id: String,
    pub kind: TransactionKind,
    /// Amount in cents (never negative once accepted by the ledger)
    pub amount_cents: Cents,
    /// Caller-supplied date, kept verbatim
    pub date: String,
    pub category: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        id: impl Into<String>,
        amount_cents: Cents,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount_cents,
            date: date.into(),
            category: category.into(),
        }
    }

    pub fn income(
        id: impl Into<String>,
        amount_cents: Cents,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Income, id, amount_cents, date, category)
    }

    pub fn expense(
        id: impl Into<String>,
        amount_cents: Cents,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Expense, id, amount_cents, date, category)
    }

    /// Signed effect on the running balance.
    pub fn impact(&self) -> Cents {
        match self.kind {
            TransactionKind::Income => self.amount_cents,
            TransactionKind::Expense => -self.amount_cents,
        }
    }

    /// Contribution to a category's net outflow: expenses count up, income counts down.
    pub fn outflow(&self) -> Cents {
        -self.impact()
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [ID={}, Amount={}, Date={}, Category={}]",
            self.kind.label(),
            self.id,
            format_money(self.amount_cents),
            self.date,
            self.category
        )
    }
}
