use anyhow::Result;
use std::io::Write;

use crate::application::{LedgerReport, LedgerService};
use crate::domain::format_cents;

/// Exporter for writing ledger data to CSV or JSON
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export transactions to CSV format, in insertion order
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let transactions = self.service.list_transactions();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "kind", "amount", "date", "category"])?;

        for transaction in transactions {
            let amount = format_cents(transaction.amount_cents);
            csv_writer.write_record([
                transaction.id.as_str(),
                transaction.kind.as_str(),
                amount.as_str(),
                transaction.date.as_str(),
                transaction.category.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(transactions.len())
    }

    /// Export transactions as a JSON array
    pub fn export_transactions_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let transactions = self.service.list_transactions();

        serde_json::to_writer_pretty(&mut writer, transactions)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(transactions.len())
    }

    /// Export the ledger report as JSON
    pub fn export_report_json<W: Write>(&self, mut writer: W) -> Result<LedgerReport> {
        let report = self.service.generate_report();

        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SavingsGoal, Transaction};

    fn sample_service() -> LedgerService {
        let mut service = LedgerService::new();
        service.register_category("Food").unwrap();
        service
            .record_transaction(Transaction::expense("e1", 5000, "2024-03-01", "Food"))
            .unwrap();
        service
            .record_transaction(Transaction::income("i1", 2050, "2024-03-02", "Food"))
            .unwrap();
        service
            .add_savings_goal(SavingsGoal::new("Car", 100000))
            .unwrap();
        service
    }

    #[test]
    fn test_export_transactions_csv() {
        let service = sample_service();
        let mut out = Vec::new();

        let count = Exporter::new(&service)
            .export_transactions_csv(&mut out)
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,kind,amount,date,category\n\
             e1,expense,50.00,2024-03-01,Food\n\
             i1,income,20.50,2024-03-02,Food\n"
        );
    }

    #[test]
    fn test_export_transactions_json() {
        let service = sample_service();
        let mut out = Vec::new();

        Exporter::new(&service)
            .export_transactions_json(&mut out)
            .unwrap();

        let parsed: Vec<Transaction> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, service.list_transactions());
    }

    #[test]
    fn test_export_report_json() {
        let service = sample_service();
        let mut out = Vec::new();

        let report = Exporter::new(&service).export_report_json(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["balance"], -2950);
        assert_eq!(value["categories"][0]["category"], "Food");
        assert_eq!(value["categories"][0]["net_spent"], 2950);
        assert_eq!(value["goals"][0]["target"], 100000);
        assert_eq!(report.balance, -2950);
    }
}
