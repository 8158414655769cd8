//! Deterministic stage resolution.
//!
//! Pure functions over a [`FlowState`] snapshot. The decision is recomputed
//! from scratch on every call — there is no transition history to corrupt
//! and nothing to poll. Callers re-resolve whenever a flag source changes.

use super::stage::{NavigationFlags, NavigationStage};
use super::state::FlowState;

/// Resolve which stage the user should see.
///
/// Ordered short-circuit chain; the first unmet gate wins. An earlier,
/// incomplete milestone masks every later flag regardless of its value, so
/// a snapshot like "NathIA done but notifications pending" still lands on
/// `NotificationPermission`.
///
/// `bypass` skips all gating and reports `MainApp`. It is checked before
/// any flag inspection — a hard short-circuit, not a sixth gate.
///
/// Total over its input space: any flag combination is legal, including
/// ones a race between flag sources can transiently produce.
pub fn resolve_stage(state: FlowState, bypass: bool) -> NavigationStage {
    if bypass {
        return NavigationStage::MainApp;
    }

    if !state.is_authenticated {
        return NavigationStage::Login;
    }

    if !state.notification_setup_done {
        return NavigationStage::NotificationPermission;
    }

    if !state.is_nath_journey_onboarding_complete {
        return NavigationStage::NathJourneyOnboarding;
    }

    if !state.is_onboarding_complete {
        return NavigationStage::Onboarding;
    }

    if !state.is_nath_ia_onboarding_complete {
        return NavigationStage::NathIaOnboarding;
    }

    NavigationStage::MainApp
}

/// Resolve the one-hot rendering flags for conditional-rendering callers.
///
/// Delegates to [`resolve_stage`] and encodes the result; stage membership
/// is never computed a second way, so the two outputs cannot disagree.
pub fn resolve_flags(state: FlowState, bypass: bool) -> NavigationFlags {
    NavigationFlags::for_stage(resolve_stage(state, bypass))
}

/// True iff every milestone is complete.
///
/// Agrees with `resolve_stage(state, false) == MainApp` by construction:
/// both are the same five-way conjunction.
pub fn is_fully_resolved(state: FlowState) -> bool {
    state.is_authenticated
        && state.notification_setup_done
        && state.is_nath_journey_onboarding_complete
        && state.is_onboarding_complete
        && state.is_nath_ia_onboarding_complete
}

/// The next stage still to complete, or `None` when nothing is left.
///
/// Callers asking "what's left to do" have no use for a next stage of
/// `MainApp`, so the terminal case maps to `None`.
pub fn next_incomplete_stage(state: FlowState) -> Option<NavigationStage> {
    match resolve_stage(state, false) {
        NavigationStage::MainApp => None,
        stage => Some(stage),
    }
}

/// Onboarding progress in percent.
///
/// Authentication is worth a fixed 20; each of the four post-auth
/// milestones adds 20 more, counted in any order. Looser than
/// [`resolve_stage`] on purpose: progress is a motivational number,
/// stage resolution is the routing contract.
pub fn progress_percent(state: FlowState) -> u8 {
    if !state.is_authenticated {
        return 0;
    }

    let completed = [
        state.notification_setup_done,
        state.is_nath_journey_onboarding_complete,
        state.is_onboarding_complete,
        state.is_nath_ia_onboarding_complete,
    ]
    .iter()
    .filter(|&&done| done)
    .count() as u8;

    20 + completed * 20
}
