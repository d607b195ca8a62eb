//! Feedback processing: the fixed action → label mapping and the status
//! advance rule applied when an auditor responds to an alert.

use crate::model::{AlertStatus, FeedbackAction};

/// Human-visible label for each feedback action. This table is part of
/// the notification-sink contract and must not change per call site.
pub fn action_label(action: FeedbackAction) -> &'static str {
    match action {
        FeedbackAction::Legitimate => "Marked as legitimate",
        FeedbackAction::Monitor => "Added to monitoring",
        FeedbackAction::Investigate => "Escalated for investigation",
    }
}

/// Compute the status an alert moves to when `action` is applied.
///
/// Transitions are monotonic: a status never moves earlier in the
/// New → Acknowledged/Investigating → Resolved chain.
///   - legitimate: resolve from any state
///   - investigate: advance to Investigating unless already Resolved
///   - monitor: record feedback only, status untouched
pub fn advance_status(current: AlertStatus, action: FeedbackAction) -> AlertStatus {
    match action {
        FeedbackAction::Legitimate => AlertStatus::Resolved,
        FeedbackAction::Investigate => {
            if current.rank() >= AlertStatus::Resolved.rank() {
                current
            } else {
                AlertStatus::Investigating
            }
        }
        FeedbackAction::Monitor => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AlertStatus::*;
    use FeedbackAction::*;

    #[test]
    fn legitimate_resolves_from_any_state() {
        for s in [New, Acknowledged, Investigating, Resolved] {
            assert_eq!(advance_status(s, Legitimate), Resolved);
        }
    }

    #[test]
    fn investigate_never_unresolves() {
        assert_eq!(advance_status(New, Investigate), Investigating);
        assert_eq!(advance_status(Acknowledged, Investigate), Investigating);
        assert_eq!(advance_status(Investigating, Investigate), Investigating);
        assert_eq!(advance_status(Resolved, Investigate), Resolved);
    }

    #[test]
    fn monitor_leaves_status_alone() {
        for s in [New, Acknowledged, Investigating, Resolved] {
            assert_eq!(advance_status(s, Monitor), s);
        }
    }
}
