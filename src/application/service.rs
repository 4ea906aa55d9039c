use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use crate::domain::{
    Budget, BudgetAlert, Cents, SavingsGoal, Transaction, budget_alerts, category_totals,
    expense_totals, is_valid_category_name, net_outflow_by_category,
};

use super::{AppError, CategoryNet, GoalProgress, LedgerConfig, LedgerReport};

/// Application service holding the whole ledger in memory.
/// This is the only interface the shell (or any other client) talks to.
#[derive(Debug, Clone, Default)]
pub struct LedgerService {
    config: LedgerConfig,
    categories: BTreeSet<String>,
    budgets: BTreeMap<String, Budget>,
    transactions: Vec<Transaction>,
    goals: Vec<SavingsGoal>,
    /// Running accumulator, updated as operations are accepted
    balance: Cents,
}

/// Budget status information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub spent: Cents,
    pub remaining: Cents,
    pub alerting: bool,
}

impl LedgerService {
    /// Create an empty ledger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with the given settings.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ========================
    // Category operations
    // ========================

    /// Register a category. Registering an existing name is a no-op.
    pub fn register_category(&mut self, name: &str) -> Result<(), AppError> {
        if !is_valid_category_name(name) {
            warn!(name, "rejected blank category name");
            return Err(AppError::InvalidCategoryName(name.to_string()));
        }

        if self.categories.insert(name.to_string()) {
            debug!(name, "category registered");
        }
        Ok(())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    /// Registered categories in ascending order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    fn require_category(&self, name: &str) -> Result<(), AppError> {
        if self.has_category(name) {
            Ok(())
        } else {
            Err(AppError::CategoryNotFound(name.to_string()))
        }
    }

    // ========================
    // Transaction operations
    // ========================

    /// Record an income or expense. The category must already be registered.
    pub fn record_transaction(&mut self, transaction: Transaction) -> Result<(), AppError> {
        if let Err(err) = self.require_category(&transaction.category) {
            warn!(id = %transaction.id, category = %transaction.category, "transaction rejected: unknown category");
            return Err(err);
        }

        if transaction.amount_cents < 0 {
            warn!(id = %transaction.id, amount = transaction.amount_cents, "transaction rejected: negative amount");
            return Err(AppError::InvalidAmount(
                "Transaction amount must not be negative".to_string(),
            ));
        }

        let Some(balance) = self.balance.checked_add(transaction.impact()) else {
            warn!(id = %transaction.id, amount = transaction.amount_cents, "transaction rejected: balance out of range");
            return Err(amount_out_of_range());
        };
        let incoming = std::iter::once(&transaction);
        if category_totals(&transaction.category, self.transactions.iter().chain(incoming)).is_none() {
            warn!(id = %transaction.id, category = %transaction.category, "transaction rejected: category total out of range");
            return Err(amount_out_of_range());
        }

        self.balance = balance;
        debug!(
            id = %transaction.id,
            kind = %transaction.kind,
            amount = transaction.amount_cents,
            balance = self.balance,
            "transaction recorded"
        );
        self.transactions.push(transaction);
        Ok(())
    }

    /// All recorded transactions in insertion order.
    pub fn list_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Current running balance.
    pub fn balance(&self) -> Cents {
        self.balance
    }

    // ========================
    // Budget operations
    // ========================

    /// Set (or replace) the spending cap of a registered category.
    pub fn set_budget(&mut self, category: &str, cap_cents: Cents) -> Result<(), AppError> {
        if let Err(err) = self.require_category(category) {
            warn!(category, "budget rejected: unknown category");
            return Err(err);
        }

        if cap_cents < 0 {
            warn!(category, cap = cap_cents, "budget rejected: negative cap");
            return Err(AppError::InvalidAmount(
                "Budget amount must not be negative".to_string(),
            ));
        }

        self.budgets
            .insert(category.to_string(), Budget::new(category, cap_cents));
        debug!(category, cap = cap_cents, "budget set");
        Ok(())
    }

    /// Configured budgets ordered by category.
    pub fn budgets(&self) -> impl Iterator<Item = &Budget> {
        self.budgets.values()
    }

    pub fn get_budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.get(category)
    }

    /// Categories whose expense total is past the alert threshold, ordered by category.
    pub fn check_budget_alerts(&self) -> Vec<BudgetAlert> {
        let alerts = budget_alerts(
            self.budgets.values(),
            &self.transactions,
            self.config.alert_threshold_percent,
        );

        for alert in &alerts {
            info!(
                category = %alert.category,
                spent = alert.spent,
                cap = alert.cap,
                "budget alert"
            );
        }

        alerts
    }

    /// Spending against every configured budget.
    pub fn budget_statuses(&self) -> Vec<BudgetStatus> {
        let spent_by_category = expense_totals(&self.transactions);

        self.budgets
            .values()
            .map(|budget| {
                let spent = spent_by_category
                    .get(budget.category.as_str())
                    .copied()
                    .unwrap_or(0);
                BudgetStatus {
                    budget: budget.clone(),
                    spent,
                    remaining: budget.cap_cents - spent,
                    alerting: budget.is_alerting(spent, self.config.alert_threshold_percent),
                }
            })
            .collect()
    }

    // ========================
    // Savings goal operations
    // ========================

    /// Add a savings goal. The target must be positive; names need not be unique.
    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> Result<(), AppError> {
        if goal.target_cents <= 0 {
            warn!(name = %goal.name, target = goal.target_cents, "savings goal rejected");
            return Err(AppError::InvalidGoalTarget {
                name: goal.name,
                target: goal.target_cents,
            });
        }

        debug!(name = %goal.name, target = goal.target_cents, "savings goal added");
        self.goals.push(goal);
        Ok(())
    }

    /// Move `amount_cents` from the balance into the first goal named `goal_name`.
    ///
    /// The amount is applied as given: there is no positivity or solvency check,
    /// so the balance may go negative. An amount that would push the balance or
    /// the goal outside the `Cents` range is rejected and nothing changes.
    pub fn contribute_to_goal(
        &mut self,
        goal_name: &str,
        amount_cents: Cents,
    ) -> Result<&SavingsGoal, AppError> {
        let Some(index) = self.goals.iter().position(|g| g.name == goal_name) else {
            warn!(goal = goal_name, "contribution rejected: goal not found");
            return Err(AppError::GoalNotFound(goal_name.to_string()));
        };

        let goal = &mut self.goals[index];
        let balance = match self.balance.checked_sub(amount_cents) {
            // `contribute` leaves the goal untouched when it returns `None`
            Some(balance) if goal.contribute(amount_cents).is_some() => balance,
            _ => {
                warn!(goal = goal_name, amount = amount_cents, "contribution rejected: amount out of range");
                return Err(amount_out_of_range());
            }
        };
        self.balance = balance;
        debug!(
            goal = goal_name,
            amount = amount_cents,
            balance = self.balance,
            "contributed to savings goal"
        );
        Ok(goal)
    }

    /// Savings goals in insertion order.
    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    /// First goal with exactly this name.
    pub fn find_goal(&self, name: &str) -> Option<&SavingsGoal> {
        self.goals.iter().find(|g| g.name == name)
    }

    // ========================
    // Reporting
    // ========================

    /// Summarize balance, net outflow per category and savings goals.
    pub fn generate_report(&self) -> LedgerReport {
        let categories = net_outflow_by_category(&self.transactions)
            .into_iter()
            .map(|(category, net_spent)| CategoryNet {
                category: category.to_string(),
                net_spent,
            })
            .collect();

        let goals = self
            .goals
            .iter()
            .map(|goal| GoalProgress {
                name: goal.name.clone(),
                current: goal.current_cents,
                target: goal.target_cents,
            })
            .collect();

        LedgerReport {
            balance: self.balance,
            categories,
            goals,
        }
    }
}

fn amount_out_of_range() -> AppError {
    AppError::InvalidAmount("amount out of range".to_string())
}
