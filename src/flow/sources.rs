//! Seams for reading persisted milestone flags.
//!
//! Each milestone is owned by a different store in the app (auth session,
//! onboarding stores, notification setup record). A source is read once
//! when the [`FlowManager`](super::manager::FlowManager) boots; later
//! changes go through the manager's setters.

use async_trait::async_trait;

use crate::error::SourceError;

use super::state::Milestone;

/// A source of one persisted milestone flag.
///
/// A source that fails to load defaults its milestone to incomplete: the
/// resolver accepts any flag combination, so a partial read resolves to an
/// earlier stage and the flow keeps working.
#[async_trait]
pub trait MilestoneSource: Send + Sync {
    /// Which milestone this source reports.
    fn milestone(&self) -> Milestone;

    /// Read the persisted completion flag.
    async fn load(&self) -> Result<bool, SourceError>;
}
