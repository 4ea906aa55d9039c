mod shell;

pub use shell::*;

use anyhow::Result;
use clap::Parser;

use crate::application::{LedgerConfig, LedgerService};
use crate::domain::DEFAULT_ALERT_THRESHOLD_PERCENT;
use crate::logging;

/// Budget Tracker - Personal Budget Ledger
#[derive(Parser, Debug)]
#[command(name = "budget-tracker")]
#[command(about = "Track income, expenses, category budgets and savings goals for one session")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Percentage of a budget cap that spending must exceed to raise an alert
    #[arg(
        long,
        default_value_t = DEFAULT_ALERT_THRESHOLD_PERCENT,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub alert_threshold: u8,

    /// Only print the menu once, at startup (useful when piping commands in)
    #[arg(long)]
    pub quiet_menu: bool,
}

impl Cli {
    pub fn config(&self) -> LedgerConfig {
        LedgerConfig::default().with_alert_threshold(self.alert_threshold)
    }

    pub fn run(self) -> Result<()> {
        logging::init_tracing(self.verbose);
        tracing::debug!(alert_threshold = self.alert_threshold, "starting shell");

        let service = LedgerService::with_config(self.config());
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();

        let mut shell = Shell::new(service, stdin.lock(), stdout.lock());
        shell.set_repeat_menu(!self.quiet_menu);
        shell.run()
    }
}
