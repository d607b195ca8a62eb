//! Alert feedback — the only in-core path by which an alert's status changes.

use super::DeskStore;
use crate::error::{DeskError, DeskResult};
use crate::feedback::advance_status;
use crate::model::{Alert, FeedbackAction, TransactionStatus};

impl DeskStore {
    /// Apply auditor feedback to an alert.
    ///
    /// Records the action, advances the status per the monotonic
    /// transition rule, and marks the alert's related transactions
    /// flagged (investigate) or cleared (legitimate). Re-applying the
    /// same action is a no-op on state; callers re-emit notifications
    /// deliberately, matching an auditor re-confirming.
    pub fn apply_alert_feedback(
        &mut self,
        alert_id: &str,
        action: FeedbackAction,
    ) -> DeskResult<&Alert> {
        let idx = self
            .alerts
            .iter()
            .position(|a| a.id == alert_id)
            .ok_or_else(|| DeskError::not_found("alert", alert_id))?;

        let new_status = advance_status(self.alerts[idx].status, action);
        self.alerts[idx].feedback = Some(action);
        self.alerts[idx].status = new_status;

        let related = self.alerts[idx].related_transactions.clone();
        match action {
            FeedbackAction::Investigate => {
                self.set_transaction_statuses(&related, TransactionStatus::Flagged)
            }
            FeedbackAction::Legitimate => {
                self.set_transaction_statuses(&related, TransactionStatus::Cleared)
            }
            FeedbackAction::Monitor => {}
        }

        log::info!(
            "alert {alert_id}: feedback {} -> status {:?}",
            action.name(),
            new_status
        );
        Ok(&self.alerts[idx])
    }

    /// Related-transaction ids may point outside the loaded window;
    /// missing ids are skipped rather than treated as errors.
    fn set_transaction_statuses(&mut self, ids: &[String], status: TransactionStatus) {
        for txn in self.transactions.iter_mut().filter(|t| ids.contains(&t.id)) {
            txn.status = status;
        }
    }
}
