// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use budget_tracker::application::{LedgerConfig, LedgerService};
use budget_tracker::cli::Shell;
use budget_tracker::domain::{Cents, Transaction};

/// Helper to create a ledger with the standard categories registered
pub fn test_service() -> Result<LedgerService> {
    let mut service = LedgerService::new();
    StandardCategories::register(&mut service)?;
    Ok(service)
}

/// Helper to create a ledger with a custom configuration and the standard categories
pub fn test_service_with(config: LedgerConfig) -> Result<LedgerService> {
    let mut service = LedgerService::with_config(config);
    StandardCategories::register(&mut service)?;
    Ok(service)
}

/// Test fixture: Standard category setup
pub struct StandardCategories;

impl StandardCategories {
    pub const ALL: [&'static str; 4] = ["Food", "Rent", "Salary", "Transport"];

    pub fn register(service: &mut LedgerService) -> Result<()> {
        for name in Self::ALL {
            service.register_category(name)?;
        }
        Ok(())
    }
}

pub fn expense(service: &mut LedgerService, id: &str, amount: Cents, category: &str) -> Result<()> {
    service.record_transaction(Transaction::expense(id, amount, "2024-03-01", category))?;
    Ok(())
}

pub fn income(service: &mut LedgerService, id: &str, amount: Cents, category: &str) -> Result<()> {
    service.record_transaction(Transaction::income(id, amount, "2024-03-01", category))?;
    Ok(())
}

/// Feed `lines` to a fresh shell and return the final ledger plus everything printed.
pub fn run_shell(lines: &[&str]) -> Result<(LedgerService, String)> {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut shell = Shell::new(LedgerService::new(), Cursor::new(input), Vec::new());
    shell.set_repeat_menu(false);
    shell.run()?;

    let (service, output) = shell.into_parts();
    Ok((service, String::from_utf8(output)?))
}
