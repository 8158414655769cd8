//! Screen route table — what a UI router mounts for each stage.
//!
//! Data only: route names and presentation hints, never UI. The groups are
//! mutually exclusive; together with the one-hot rendering flags this means
//! a router mounts exactly one group for any snapshot.

use crate::flow::stage::NavigationStage;

/// How a screen is presented when pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Regular stack push.
    Card,
    /// Modal sheet.
    Modal,
}

/// Transition animation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Fade,
    SlideFromRight,
    SlideFromBottom,
}

/// One mountable screen route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRoute {
    pub name: &'static str,
    pub presentation: Presentation,
    pub animation: Animation,
    /// Back-swipe enabled. Disabled on entry/paywall screens so the user
    /// can't swipe out of the flow.
    pub gesture_enabled: bool,
}

impl ScreenRoute {
    const fn push(name: &'static str, animation: Animation) -> Self {
        Self {
            name,
            presentation: Presentation::Card,
            animation,
            gesture_enabled: true,
        }
    }

    const fn modal(name: &'static str) -> Self {
        Self {
            name,
            presentation: Presentation::Modal,
            animation: Animation::SlideFromBottom,
            gesture_enabled: true,
        }
    }

    const fn locked(name: &'static str, animation: Animation) -> Self {
        Self {
            name,
            presentation: Presentation::Card,
            animation,
            gesture_enabled: false,
        }
    }
}

const LOGIN_SCREENS: &[ScreenRoute] = &[
    ScreenRoute::push("AuthLanding", Animation::Fade),
    ScreenRoute::modal("EmailAuth"),
    ScreenRoute::modal("ForgotPassword"),
];

const NOTIFICATION_SCREENS: &[ScreenRoute] =
    &[ScreenRoute::push("NotificationPermission", Animation::Fade)];

const NATH_JOURNEY_SCREENS: &[ScreenRoute] = &[
    ScreenRoute::locked("OnboardingWelcome", Animation::Fade),
    ScreenRoute::push("OnboardingJourneySelect", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingMaternityStage", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingStage", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingDate", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingConcerns", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingEmotionalState", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingCheckIn", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingSeason", Animation::SlideFromRight),
    ScreenRoute::push("OnboardingSummary", Animation::SlideFromRight),
    ScreenRoute::locked("OnboardingPaywall", Animation::SlideFromRight),
];

const LEGACY_ONBOARDING_SCREENS: &[ScreenRoute] =
    &[ScreenRoute::push("LegacyOnboarding", Animation::Fade)];

const NATH_IA_SCREENS: &[ScreenRoute] =
    &[ScreenRoute::push("NathIAOnboarding", Animation::Fade)];

const MAIN_APP_SCREENS: &[ScreenRoute] = &[
    ScreenRoute::push("MainTabs", Animation::SlideFromRight),
    ScreenRoute::push("PostDetail", Animation::SlideFromRight),
    ScreenRoute::modal("NewPost"),
    ScreenRoute::push("MyPosts", Animation::SlideFromRight),
    ScreenRoute::modal("DailyLog"),
    ScreenRoute::push("Affirmations", Animation::Fade),
    ScreenRoute::push("Habits", Animation::SlideFromRight),
    ScreenRoute::push("EditProfile", Animation::SlideFromRight),
    ScreenRoute::modal("ComingSoon"),
    ScreenRoute::modal("DesignSystem"),
    ScreenRoute::push("NotificationPreferences", Animation::SlideFromRight),
    ScreenRoute::modal("BreathingExercise"),
    ScreenRoute::modal("RestSounds"),
    ScreenRoute::push("HabitsEnhanced", Animation::SlideFromRight),
    ScreenRoute::push("MaeValenteProgress", Animation::SlideFromRight),
    ScreenRoute::modal("Paywall"),
    ScreenRoute::push("MundoDaNath", Animation::SlideFromRight),
    ScreenRoute::modal("AdminDashboard"),
    ScreenRoute::modal("Moderation"),
    ScreenRoute::push("AdminPostsList", Animation::SlideFromRight),
    ScreenRoute::push("PrivacyPolicy", Animation::SlideFromRight),
    ScreenRoute::push("TermsOfService", Animation::SlideFromRight),
];

/// The screen group a router mounts for a stage.
pub fn screen_group(stage: NavigationStage) -> &'static [ScreenRoute] {
    match stage {
        NavigationStage::Login => LOGIN_SCREENS,
        NavigationStage::NotificationPermission => NOTIFICATION_SCREENS,
        NavigationStage::NathJourneyOnboarding => NATH_JOURNEY_SCREENS,
        NavigationStage::Onboarding => LEGACY_ONBOARDING_SCREENS,
        NavigationStage::NathIaOnboarding => NATH_IA_SCREENS,
        NavigationStage::MainApp => MAIN_APP_SCREENS,
    }
}

/// The route shown first when a stage's group mounts.
pub fn initial_route(stage: NavigationStage) -> &'static str {
    screen_group(stage)[0].name
}
