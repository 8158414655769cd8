//! Configuration — developer bypasses and server settings.

use crate::flow::state::FlowState;

/// Developer bypasses for skipping flow stages while testing.
///
/// `all` short-circuits resolution straight to the main app. The granular
/// switches only force their own milestone flags true before resolution,
/// so an earlier unmet gate still masks later stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BypassConfig {
    /// Skip every gate and show the main app.
    pub all: bool,
    /// Treat the user as authenticated.
    pub login: bool,
    /// Treat notification setup as done.
    pub notifications: bool,
    /// Treat all three onboarding milestones as complete.
    pub onboarding: bool,
}

impl BypassConfig {
    /// Read bypasses from the environment.
    ///
    /// Unset or unrecognized values mean "off".
    pub fn from_env() -> Self {
        Self {
            all: env_flag("MATERNA_BYPASS_ALL"),
            login: env_flag("MATERNA_BYPASS_LOGIN"),
            notifications: env_flag("MATERNA_BYPASS_NOTIFICATIONS"),
            onboarding: env_flag("MATERNA_BYPASS_ONBOARDING"),
        }
    }

    /// Whether any bypass is active (surfaced in the startup banner).
    pub fn any_active(&self) -> bool {
        self.all || self.login || self.notifications || self.onboarding
    }

    /// Overlay the granular bypasses onto a snapshot.
    ///
    /// Pure — the stored snapshot is never mutated, only the copy handed to
    /// the resolver. The `all` switch is not applied here; it is passed to
    /// the resolver as its bypass argument.
    pub fn apply(&self, mut state: FlowState) -> FlowState {
        if self.login {
            state.is_authenticated = true;
        }
        if self.notifications {
            state.notification_setup_done = true;
        }
        if self.onboarding {
            state.is_nath_journey_onboarding_complete = true;
            state.is_onboarding_complete = true;
            state.is_nath_ia_onboarding_complete = true;
        }
        state
    }
}

/// REST server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the status API.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl ServerConfig {
    /// Read server settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("MATERNA_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        Self { port }
    }
}

fn env_flag(key: &str) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(
            value.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::resolver::resolve_stage;
    use crate::flow::stage::NavigationStage;

    #[test]
    fn default_config_bypasses_nothing() {
        let bypass = BypassConfig::default();
        assert!(!bypass.any_active());
        assert_eq!(bypass.apply(FlowState::default()), FlowState::default());
    }

    #[test]
    fn login_bypass_only_forces_authentication() {
        let bypass = BypassConfig {
            login: true,
            ..Default::default()
        };
        let state = bypass.apply(FlowState::default());
        assert!(state.is_authenticated);
        assert!(!state.notification_setup_done);
        // The next gate still applies — granular bypasses don't skip ahead.
        assert_eq!(
            resolve_stage(state, false),
            NavigationStage::NotificationPermission
        );
    }

    #[test]
    fn onboarding_bypass_forces_all_three_onboarding_flags() {
        let bypass = BypassConfig {
            onboarding: true,
            ..Default::default()
        };
        let state = bypass.apply(FlowState::default());
        assert!(state.is_nath_journey_onboarding_complete);
        assert!(state.is_onboarding_complete);
        assert!(state.is_nath_ia_onboarding_complete);
        // Still gated on auth: the earlier gate masks the forced flags.
        assert_eq!(resolve_stage(state, false), NavigationStage::Login);
    }

    #[test]
    fn combined_granular_bypasses_reach_main_app() {
        let bypass = BypassConfig {
            login: true,
            notifications: true,
            onboarding: true,
            ..Default::default()
        };
        let state = bypass.apply(FlowState::default());
        assert_eq!(resolve_stage(state, false), NavigationStage::MainApp);
    }

    #[test]
    fn config_from_env_reads_truthy_values() {
        // SAFETY: this test is the only writer of these vars; no other
        // thread reads them concurrently.
        unsafe {
            std::env::set_var("MATERNA_BYPASS_ALL", "1");
            std::env::set_var("MATERNA_BYPASS_LOGIN", "true");
            std::env::set_var("MATERNA_BYPASS_NOTIFICATIONS", "YES");
            std::env::set_var("MATERNA_BYPASS_ONBOARDING", "off");
        }

        let bypass = BypassConfig::from_env();
        assert!(bypass.all);
        assert!(bypass.login);
        assert!(bypass.notifications);
        assert!(!bypass.onboarding, "unrecognized value must mean off");

        // SAFETY: see above.
        unsafe {
            std::env::remove_var("MATERNA_BYPASS_ALL");
            std::env::remove_var("MATERNA_BYPASS_LOGIN");
            std::env::remove_var("MATERNA_BYPASS_NOTIFICATIONS");
            std::env::remove_var("MATERNA_BYPASS_ONBOARDING");
        }
    }

    #[test]
    fn server_config_defaults() {
        assert_eq!(ServerConfig::default().port, 8080);
    }
}
