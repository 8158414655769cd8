//! The milestone snapshot the resolver decides from.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMilestoneError;

/// The independently-completable milestones of the flow.
///
/// Each milestone maps to one completion flag on [`FlowState`]. They are
/// independent by design: completing a later one never implies an earlier
/// one, since each is persisted by its own store (auth session, onboarding
/// stores, notification setup record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    Authentication,
    NotificationSetup,
    NathJourneyOnboarding,
    LegacyOnboarding,
    NathIaOnboarding,
}

impl Milestone {
    /// All milestones in gate order.
    pub const ALL: [Milestone; 5] = [
        Milestone::Authentication,
        Milestone::NotificationSetup,
        Milestone::NathJourneyOnboarding,
        Milestone::LegacyOnboarding,
        Milestone::NathIaOnboarding,
    ];
}

impl std::fmt::Display for Milestone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Authentication => "authentication",
            Self::NotificationSetup => "notification_setup",
            Self::NathJourneyOnboarding => "nath_journey_onboarding",
            Self::LegacyOnboarding => "legacy_onboarding",
            Self::NathIaOnboarding => "nath_ia_onboarding",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Milestone {
    type Err = ParseMilestoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authentication" => Ok(Self::Authentication),
            "notification_setup" => Ok(Self::NotificationSetup),
            "nath_journey_onboarding" => Ok(Self::NathJourneyOnboarding),
            "legacy_onboarding" => Ok(Self::LegacyOnboarding),
            "nath_ia_onboarding" => Ok(Self::NathIaOnboarding),
            other => Err(ParseMilestoneError(other.to_string())),
        }
    }
}

/// Snapshot of the five completion flags, taken fresh on every resolution.
///
/// The fields are independent — a later flag being true never implies an
/// earlier one is. Resolution enforces ordering by evaluation priority, not
/// by requiring upstream consistency, so a race between flag sources can
/// transiently produce any combination and the snapshot stays legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowState {
    /// User is logged in.
    pub is_authenticated: bool,
    /// User has completed notification setup (asked or skipped).
    pub notification_setup_done: bool,
    /// User has completed Nath Journey stories onboarding.
    pub is_nath_journey_onboarding_complete: bool,
    /// User has completed legacy onboarding (name, stage, interests).
    pub is_onboarding_complete: bool,
    /// User has completed NathIA personalization.
    pub is_nath_ia_onboarding_complete: bool,
}

impl FlowState {
    /// Read the completion flag for a milestone.
    pub fn is_complete(&self, milestone: Milestone) -> bool {
        match milestone {
            Milestone::Authentication => self.is_authenticated,
            Milestone::NotificationSetup => self.notification_setup_done,
            Milestone::NathJourneyOnboarding => self.is_nath_journey_onboarding_complete,
            Milestone::LegacyOnboarding => self.is_onboarding_complete,
            Milestone::NathIaOnboarding => self.is_nath_ia_onboarding_complete,
        }
    }

    /// Set the completion flag for a milestone.
    pub fn set(&mut self, milestone: Milestone, done: bool) {
        match milestone {
            Milestone::Authentication => self.is_authenticated = done,
            Milestone::NotificationSetup => self.notification_setup_done = done,
            Milestone::NathJourneyOnboarding => self.is_nath_journey_onboarding_complete = done,
            Milestone::LegacyOnboarding => self.is_onboarding_complete = done,
            Milestone::NathIaOnboarding => self.is_nath_ia_onboarding_complete = done,
        }
    }

    /// Builder-style flag setter, mostly for tests and fixtures.
    pub fn with(mut self, milestone: Milestone, done: bool) -> Self {
        self.set(milestone, done);
        self
    }

    /// Human-readable trace of the snapshot, for logging.
    ///
    /// Fixed token order: authentication, notifications, nathJourney,
    /// onboard, nathIA.
    pub fn describe(&self) -> String {
        fn done_or_pending(flag: bool) -> &'static str {
            if flag { "done" } else { "pending" }
        }

        let parts = [
            format!("auth:{}", if self.is_authenticated { "yes" } else { "no" }),
            format!("notif:{}", done_or_pending(self.notification_setup_done)),
            format!(
                "nathJourney:{}",
                done_or_pending(self.is_nath_journey_onboarding_complete)
            ),
            format!("onboard:{}", done_or_pending(self.is_onboarding_complete)),
            format!(
                "nathIA:{}",
                done_or_pending(self.is_nath_ia_onboarding_complete)
            ),
        ];

        parts.join(" | ")
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_nothing_complete() {
        let state = FlowState::default();
        for milestone in Milestone::ALL {
            assert!(!state.is_complete(milestone), "{milestone} should start incomplete");
        }
    }

    #[test]
    fn set_and_read_every_milestone() {
        for milestone in Milestone::ALL {
            let mut state = FlowState::default();
            state.set(milestone, true);
            assert!(state.is_complete(milestone));

            // Only the one flag moved
            for other in Milestone::ALL {
                if other != milestone {
                    assert!(!state.is_complete(other), "{other} leaked from {milestone}");
                }
            }

            state.set(milestone, false);
            assert_eq!(state, FlowState::default());
        }
    }

    #[test]
    fn with_builds_incrementally() {
        let state = FlowState::default()
            .with(Milestone::Authentication, true)
            .with(Milestone::NotificationSetup, true);
        assert!(state.is_authenticated);
        assert!(state.notification_setup_done);
        assert!(!state.is_nath_journey_onboarding_complete);
    }

    #[test]
    fn milestone_display_matches_serde() {
        for milestone in Milestone::ALL {
            let display = format!("{milestone}");
            let json = serde_json::to_string(&milestone).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }

    #[test]
    fn milestone_parse_roundtrip() {
        for milestone in Milestone::ALL {
            let parsed: Milestone = milestone.to_string().parse().unwrap();
            assert_eq!(parsed, milestone);
        }
    }

    #[test]
    fn milestone_parse_rejects_unknown_names() {
        let err = "haptics".parse::<Milestone>().unwrap_err();
        assert!(err.to_string().contains("haptics"));
    }

    #[test]
    fn describe_reports_fresh_state() {
        let description = FlowState::default().describe();
        assert_eq!(
            description,
            "auth:no | notif:pending | nathJourney:pending | onboard:pending | nathIA:pending"
        );
    }

    #[test]
    fn describe_keeps_fixed_token_order() {
        let state = FlowState::default()
            .with(Milestone::Authentication, true)
            .with(Milestone::NathIaOnboarding, true);
        let description = state.describe();
        assert_eq!(
            description,
            "auth:yes | notif:pending | nathJourney:pending | onboard:pending | nathIA:done"
        );
    }

    #[test]
    fn display_delegates_to_describe() {
        let state = FlowState::default().with(Milestone::Authentication, true);
        assert_eq!(format!("{state}"), state.describe());
    }

    #[test]
    fn state_serde_roundtrip() {
        let state = FlowState::default()
            .with(Milestone::Authentication, true)
            .with(Milestone::LegacyOnboarding, true);
        let json = serde_json::to_string(&state).unwrap();
        let parsed: FlowState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
