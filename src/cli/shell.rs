use anyhow::{Context, Result};
use chrono::Local;
use std::io::{BufRead, Write};
use thiserror::Error;
use uuid::Uuid;

use crate::application::{AppError, LedgerService};
use crate::domain::{
    Cents, SavingsGoal, Transaction, TransactionKind, format_cents, format_money, parse_cents,
};
use crate::io::Exporter;

const MENU: &str = "\
=== Budget Tracker Menu ===
1. Add Category
2. Add Income
3. Add Expense
4. Set Budget
5. Add Savings Goal
6. Contribute to Savings Goal
7. Check Budget Alerts
8. Generate Report
9. Display Transactions
10. Budget Status
11. Export Transactions
12. Export Report (JSON)
0. Exit";

/// Raised when the input stream ends in the middle of the session.
#[derive(Debug, Error)]
#[error("input closed")]
struct InputClosed;

enum Step {
    Continue,
    Exit,
}

/// Interactive menu driving a [`LedgerService`].
///
/// The shell owns all text handling: it reads one line per prompt, parses
/// numbers itself and prints whatever the ledger returns.
pub struct Shell<R, W> {
    service: LedgerService,
    input: R,
    output: W,
    repeat_menu: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(service: LedgerService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            repeat_menu: true,
        }
    }

    /// Reprint the menu before every choice (default) or only at startup.
    pub fn set_repeat_menu(&mut self, repeat: bool) {
        self.repeat_menu = repeat;
    }

    pub fn into_parts(self) -> (LedgerService, W) {
        (self.service, self.output)
    }

    /// Run until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut first = true;
        loop {
            if first || self.repeat_menu {
                writeln!(self.output, "\n{MENU}")?;
            }
            first = false;

            let step = match self.prompt("Choose an option: ") {
                Ok(line) => self.dispatch(&line),
                Err(err) => Err(err),
            };

            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => break,
                Err(err) if err.is::<InputClosed>() => {
                    writeln!(self.output)?;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<Step> {
        let Ok(choice) = line.parse::<u32>() else {
            writeln!(self.output, "Invalid input. Please enter a number.")?;
            return Ok(Step::Continue);
        };

        match choice {
            1 => self.add_category()?,
            2 => self.add_transaction(TransactionKind::Income)?,
            3 => self.add_transaction(TransactionKind::Expense)?,
            4 => self.set_budget()?,
            5 => self.add_savings_goal()?,
            6 => self.contribute_to_goal()?,
            7 => self.check_budget_alerts()?,
            8 => self.generate_report()?,
            9 => self.display_transactions()?,
            10 => self.budget_status()?,
            11 => self.export_transactions()?,
            12 => self.export_report()?,
            0 => {
                writeln!(self.output, "Exiting...")?;
                return Ok(Step::Exit);
            }
            _ => writeln!(self.output, "Invalid option. Try again.")?,
        }

        Ok(Step::Continue)
    }

    // ========================
    // Menu actions
    // ========================

    fn add_category(&mut self) -> Result<()> {
        let name = self.prompt("Enter category name: ")?;
        match self.service.register_category(&name) {
            Ok(()) => writeln!(self.output, "Category added: {}", name)?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(())
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> Result<()> {
        let id = self.prompt(&format!("Enter {} ID (blank to generate): ", kind))?;
        let Some(amount) = self.prompt_amount("Enter amount: ")? else {
            return Ok(());
        };
        let date = self.prompt("Enter date (YYYY-MM-DD, blank for today): ")?;
        let category = self.prompt("Enter category: ")?;

        let id = if id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            id
        };
        let date = if date.is_empty() {
            Local::now().format("%Y-%m-%d").to_string()
        } else {
            date
        };

        let transaction = Transaction::new(kind, id, amount, date, category);
        let summary = transaction.to_string();
        match self.service.record_transaction(transaction) {
            Ok(()) => writeln!(self.output, "Transaction added: {}", summary)?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(())
    }

    fn set_budget(&mut self) -> Result<()> {
        let category = self.prompt("Enter category: ")?;
        let Some(amount) = self.prompt_amount("Enter budget amount: ")? else {
            return Ok(());
        };

        match self.service.set_budget(&category, amount) {
            Ok(()) => writeln!(
                self.output,
                "Budget set for {}: {}",
                category,
                format_money(amount)
            )?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(())
    }

    fn add_savings_goal(&mut self) -> Result<()> {
        let name = self.prompt("Enter savings goal name: ")?;
        let Some(target) = self.prompt_amount("Enter target amount: ")? else {
            return Ok(());
        };

        let goal = SavingsGoal::new(name, target);
        let summary = goal.to_string();
        match self.service.add_savings_goal(goal) {
            Ok(()) => writeln!(self.output, "Savings goal added: {}", summary)?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(())
    }

    fn contribute_to_goal(&mut self) -> Result<()> {
        let name = self.prompt("Enter savings goal name: ")?;
        let Some(amount) = self.prompt_amount("Enter contribution amount: ")? else {
            return Ok(());
        };

        let result = self
            .service
            .contribute_to_goal(&name, amount)
            .map(|goal| (goal.to_string(), goal.progress_percentage(), goal.remaining()));
        match result {
            Ok((summary, percent, remaining)) => {
                writeln!(
                    self.output,
                    "Contributed {} to {} ({}, {:.1}%, {} to go)",
                    format_money(amount),
                    name,
                    summary,
                    percent,
                    format_money(remaining)
                )?;
            }
            Err(err) => self.report_error(&err)?,
        }
        Ok(())
    }

    fn check_budget_alerts(&mut self) -> Result<()> {
        let alerts = self.service.check_budget_alerts();
        if alerts.is_empty() {
            writeln!(self.output, "No budget alerts.")?;
        }
        for alert in alerts {
            writeln!(self.output, "{}", alert)?;
        }
        Ok(())
    }

    fn generate_report(&mut self) -> Result<()> {
        let report = self.service.generate_report();
        writeln!(self.output, "{}", report)?;
        Ok(())
    }

    fn display_transactions(&mut self) -> Result<()> {
        writeln!(self.output, "=== Transactions ===")?;
        let transactions = self.service.list_transactions();
        if transactions.is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
        }
        for transaction in transactions {
            writeln!(self.output, "{}", transaction)?;
        }
        Ok(())
    }

    fn budget_status(&mut self) -> Result<()> {
        let statuses = self.service.budget_statuses();
        if statuses.is_empty() {
            writeln!(self.output, "No budgets set.")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "Alert threshold: {}%",
            self.service.config().alert_threshold_percent
        )?;
        writeln!(
            self.output,
            "{:<20} {:>12} {:>12} {:>12}  {}",
            "CATEGORY", "CAP", "SPENT", "REMAINING", "STATUS"
        )?;
        writeln!(self.output, "{}", "-".repeat(68))?;
        for status in statuses {
            writeln!(
                self.output,
                "{:<20} {:>12} {:>12} {:>12}  {}",
                truncate(&status.budget.category, 20),
                format_cents(status.budget.cap_cents),
                format_cents(status.spent),
                format_cents(status.remaining),
                if status.alerting { "ALERT" } else { "ok" }
            )?;
        }
        Ok(())
    }

    fn export_transactions(&mut self) -> Result<()> {
        let format = self.prompt("Format (csv/json) [csv]: ")?;
        let exporter = Exporter::new(&self.service);

        match format.to_lowercase().as_str() {
            "" | "csv" => {
                exporter
                    .export_transactions_csv(&mut self.output)
                    .context("Failed to export transactions as CSV")?;
            }
            "json" => {
                exporter
                    .export_transactions_json(&mut self.output)
                    .context("Failed to export transactions as JSON")?;
            }
            other => writeln!(
                self.output,
                "Invalid export format '{}'. Valid formats: csv, json",
                other
            )?,
        }
        Ok(())
    }

    fn export_report(&mut self) -> Result<()> {
        Exporter::new(&self.service)
            .export_report_json(&mut self.output)
            .context("Failed to export report as JSON")?;
        Ok(())
    }

    // ========================
    // Input helpers
    // ========================

    /// Print `label` and read one trimmed line.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    /// Read an amount; `None` means the text was rejected and the action is abandoned.
    fn prompt_amount(&mut self, label: &str) -> Result<Option<Cents>> {
        let raw = self.prompt(label)?;
        match parse_cents(&raw) {
            Ok(cents) => Ok(Some(cents)),
            Err(err) => {
                writeln!(self.output, "Invalid amount: {}", err)?;
                Ok(None)
            }
        }
    }

    fn report_error(&mut self, err: &AppError) -> Result<()> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Food", 20), "Food");
        assert_eq!(truncate("Entertainment and leisure", 10), "Enterta...");
    }
}
