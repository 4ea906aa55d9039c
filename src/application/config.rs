use crate::domain::DEFAULT_ALERT_THRESHOLD_PERCENT;

/// Tunables for a ledger session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Share of a budget cap, in percent, that expense spending must exceed
    /// before an alert is raised.
    pub alert_threshold_percent: u8,
}

impl LedgerConfig {
    pub fn with_alert_threshold(mut self, percent: u8) -> Self {
        self.alert_threshold_percent = percent;
        self
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            alert_threshold_percent: DEFAULT_ALERT_THRESHOLD_PERCENT,
        }
    }
}
