use std::collections::{BTreeMap, HashMap};

use super::{Budget, BudgetAlert, Cents, Transaction};

/// Sum of every transaction's impact. Income adds, expense subtracts.
/// `None` if the total does not fit in `Cents`.
pub fn sum_impacts(transactions: &[Transaction]) -> Option<Cents> {
    transactions
        .iter()
        .try_fold(0, |total: Cents, t| total.checked_add(t.impact()))
}

/// Expense total and net outflow of one category, in insertion order.
/// `None` if either running sum leaves the `Cents` range.
pub fn category_totals<'a>(
    category: &str,
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Option<(Cents, Cents)> {
    transactions
        .into_iter()
        .filter(|t| t.category == category)
        .try_fold((0, 0), |(spent, net): (Cents, Cents), t| {
            let spent = if t.is_expense() {
                spent.checked_add(t.amount_cents)?
            } else {
                spent
            };
            Some((spent, net.checked_add(t.outflow())?))
        })
}

/// Expense totals per category. Income is ignored entirely.
pub fn expense_totals(transactions: &[Transaction]) -> HashMap<&str, Cents> {
    let mut totals: HashMap<&str, Cents> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let total = totals.entry(transaction.category.as_str()).or_insert(0);
        *total = total.saturating_add(transaction.amount_cents);
    }

    totals
}

/// Net outflow per category over all transactions (expenses minus income),
/// keyed in ascending category order.
pub fn net_outflow_by_category(transactions: &[Transaction]) -> BTreeMap<&str, Cents> {
    let mut outflows: BTreeMap<&str, Cents> = BTreeMap::new();

    for transaction in transactions {
        let net = outflows.entry(transaction.category.as_str()).or_insert(0);
        *net = net.saturating_add(transaction.outflow());
    }

    outflows
}

/// Alerts for every budgeted category whose expense total is strictly above
/// `threshold_percent` of its cap. Categories without a budget never alert.
pub fn budget_alerts<'a>(
    budgets: impl IntoIterator<Item = &'a Budget>,
    transactions: &[Transaction],
    threshold_percent: u8,
) -> Vec<BudgetAlert> {
    let spent = expense_totals(transactions);

    budgets
        .into_iter()
        .filter_map(|budget| {
            let spent = spent.get(budget.category.as_str()).copied().unwrap_or(0);
            budget
                .is_alerting(spent, threshold_percent)
                .then(|| BudgetAlert {
                    category: budget.category.clone(),
                    spent,
                    cap: budget.cap_cents,
                })
        })
        .collect()
}
