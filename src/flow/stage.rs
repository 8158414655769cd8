//! Navigation stages and their one-hot rendering flags.

use serde::{Deserialize, Serialize};

/// The stage of the auth/onboarding flow a user should currently see.
///
/// Stages are totally ordered — `Login` is the sole entry stage, `MainApp`
/// the sole terminal stage — and mutually exclusive: resolution picks
/// exactly one for any snapshot. The derived `Ord` follows the flow order,
/// so `Login < NotificationPermission < ... < MainApp`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStage {
    /// User is not logged in.
    Login,
    /// Logged in but hasn't completed notification setup (asked or skipped).
    NotificationPermission,
    /// Nath Journey stories onboarding (new user journey).
    NathJourneyOnboarding,
    /// Legacy onboarding (name, stage, interests).
    Onboarding,
    /// NathIA personalization.
    NathIaOnboarding,
    /// Fully onboarded, authenticated user.
    MainApp,
}

impl NavigationStage {
    /// All stages in flow order. Adding a variant without updating this
    /// list is a compile error.
    pub const ALL: [NavigationStage; 6] = [
        NavigationStage::Login,
        NavigationStage::NotificationPermission,
        NavigationStage::NathJourneyOnboarding,
        NavigationStage::Onboarding,
        NavigationStage::NathIaOnboarding,
        NavigationStage::MainApp,
    ];

    /// Whether this stage is terminal (the flow has nothing left to gate).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::MainApp)
    }
}

impl std::fmt::Display for NavigationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Login => "login",
            Self::NotificationPermission => "notification_permission",
            Self::NathJourneyOnboarding => "nath_journey_onboarding",
            Self::Onboarding => "onboarding",
            Self::NathIaOnboarding => "nath_ia_onboarding",
            Self::MainApp => "main_app",
        };
        write!(f, "{s}")
    }
}

/// One-hot visibility flags for callers that render stages as
/// mutually-exclusive conditional branches instead of matching on
/// [`NavigationStage`].
///
/// Exactly one field is true. Only constructed from an already-resolved
/// stage, so the two encodings cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFlags {
    pub should_show_login: bool,
    pub should_show_notification_permission: bool,
    pub should_show_nath_journey_onboarding: bool,
    pub should_show_onboarding: bool,
    pub should_show_nath_ia_onboarding: bool,
    pub should_show_main_app: bool,
}

impl NavigationFlags {
    /// One-hot encode a resolved stage.
    pub fn for_stage(stage: NavigationStage) -> Self {
        Self {
            should_show_login: stage == NavigationStage::Login,
            should_show_notification_permission: stage == NavigationStage::NotificationPermission,
            should_show_nath_journey_onboarding: stage == NavigationStage::NathJourneyOnboarding,
            should_show_onboarding: stage == NavigationStage::Onboarding,
            should_show_nath_ia_onboarding: stage == NavigationStage::NathIaOnboarding,
            should_show_main_app: stage == NavigationStage::MainApp,
        }
    }

    /// The flags paired with the stage each one renders, in flow order.
    pub fn by_stage(&self) -> [(NavigationStage, bool); 6] {
        [
            (NavigationStage::Login, self.should_show_login),
            (
                NavigationStage::NotificationPermission,
                self.should_show_notification_permission,
            ),
            (
                NavigationStage::NathJourneyOnboarding,
                self.should_show_nath_journey_onboarding,
            ),
            (NavigationStage::Onboarding, self.should_show_onboarding),
            (
                NavigationStage::NathIaOnboarding,
                self.should_show_nath_ia_onboarding,
            ),
            (NavigationStage::MainApp, self.should_show_main_app),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered_by_flow_position() {
        for pair in NavigationStage::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn only_main_app_is_terminal() {
        for stage in NavigationStage::ALL {
            assert_eq!(
                stage.is_terminal(),
                stage == NavigationStage::MainApp,
                "terminal check wrong for {stage}"
            );
        }
    }

    #[test]
    fn display_matches_serde() {
        for stage in NavigationStage::ALL {
            let display = format!("{stage}");
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }

    #[test]
    fn stage_serde_roundtrip() {
        for stage in NavigationStage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            let parsed: NavigationStage = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, stage);
        }
    }

    #[test]
    fn flags_are_one_hot_for_every_stage() {
        for stage in NavigationStage::ALL {
            let flags = NavigationFlags::for_stage(stage);
            for (flag_stage, set) in flags.by_stage() {
                assert_eq!(
                    set,
                    flag_stage == stage,
                    "flag for {flag_stage} wrong when encoding {stage}"
                );
            }
        }
    }
}
