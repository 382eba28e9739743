//! Per-process submission bookkeeping.
//!
//! Tracks the single in-flight submission and the count of successful ones.
//! The welcome banner is dismissed for good on the third success.

/// Successful submissions after which the welcome banner is dismissed.
pub const WELCOME_DISMISS_AFTER: u32 = 3;

/// Submission state owned by the dispatcher side of the state machine.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    submissions: u32,
    hide_welcome: bool,
    submitting: bool,
}

impl SessionState {
    /// Creates session state from the persisted welcome flag.
    #[must_use]
    pub const fn new(hide_welcome: bool) -> Self {
        Self {
            submissions: 0,
            hide_welcome,
            submitting: false,
        }
    }

    /// Marks a submission as in flight.
    ///
    /// Returns `false` if one is already pending, in which case the caller must
    /// not dispatch again.
    pub fn begin_submission(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Records a successful submission.
    ///
    /// Returns `true` exactly once, when this success should dismiss the
    /// welcome banner and persist that choice.
    pub fn submission_succeeded(&mut self) -> bool {
        self.submitting = false;
        self.submissions += 1;
        if self.submissions == WELCOME_DISMISS_AFTER && !self.hide_welcome {
            self.hide_welcome = true;
            return true;
        }
        false
    }

    pub fn submission_failed(&mut self) {
        self.submitting = false;
    }

    #[must_use]
    pub const fn submissions(&self) -> u32 {
        self.submissions
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn show_welcome(&self) -> bool {
        !self.hide_welcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_success_dismisses_welcome_once() {
        let mut session = SessionState::new(false);
        let dismissals: Vec<bool> = (0..5)
            .map(|_| {
                assert!(session.begin_submission());
                session.submission_succeeded()
            })
            .collect();

        assert_eq!(dismissals, vec![false, false, true, false, false]);
        assert!(!session.show_welcome());
        assert_eq!(session.submissions(), 5);
    }

    #[test]
    fn failures_do_not_count() {
        let mut session = SessionState::new(false);
        for _ in 0..3 {
            session.begin_submission();
            session.submission_failed();
        }
        assert_eq!(session.submissions(), 0);
        assert!(session.show_welcome());
    }

    #[test]
    fn already_dismissed_is_not_persisted_again() {
        let mut session = SessionState::new(true);
        for _ in 0..3 {
            session.begin_submission();
            assert!(!session.submission_succeeded());
        }
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut session = SessionState::new(false);
        assert!(session.begin_submission());
        assert!(!session.begin_submission());
        session.submission_failed();
        assert!(session.begin_submission());
    }
}
