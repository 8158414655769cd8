//! FlowManager — owns the milestone snapshot and publishes stage changes.
//!
//! The resolver stays pure; this is the one stateful piece. Flag updates
//! come in through the setters, the stage is re-resolved on every change,
//! and subscribers see the new stage on a watch channel instead of polling.
//! There is no atomicity guarantee across independently-updated flags
//! beyond the snapshot lock itself — transiently "impossible" combinations
//! resolve to an earlier stage and settle on the next update.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{RwLock, watch};

use crate::config::BypassConfig;

use super::resolver::{is_fully_resolved, next_incomplete_stage, progress_percent, resolve_stage};
use super::sources::MilestoneSource;
use super::stage::{NavigationFlags, NavigationStage};
use super::state::{FlowState, Milestone};

/// Cap on retained transition history.
const MAX_TRANSITIONS: usize = 200;

/// A resolved stage change.
#[derive(Debug, Clone, Serialize)]
pub struct StageTransition {
    /// Stage before the flag update.
    pub from: NavigationStage,
    /// Stage after the flag update.
    pub to: NavigationStage,
    /// When the change was observed.
    pub timestamp: DateTime<Utc>,
}

/// Everything a status caller wants in one snapshot.
///
/// `stage` and `flags` reflect the effective snapshot (granular bypasses
/// applied, global bypass honored); the derived fields ignore the global
/// bypass, so a bypassed session still reports its real progress.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStatus {
    pub stage: NavigationStage,
    pub flags: NavigationFlags,
    pub progress_percent: u8,
    pub fully_resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_stage: Option<NavigationStage>,
    pub description: String,
}

/// Coordinates the milestone snapshot, bypass overlay, and stage fan-out.
pub struct FlowManager {
    state: RwLock<FlowState>,
    bypass: BypassConfig,
    stage_tx: watch::Sender<NavigationStage>,
    transitions: RwLock<Vec<StageTransition>>,
}

impl FlowManager {
    /// Create a manager over an initial snapshot.
    pub fn new(initial: FlowState, bypass: BypassConfig) -> Self {
        let stage = resolve_stage(bypass.apply(initial), bypass.all);
        let (stage_tx, _) = watch::channel(stage);
        Self {
            state: RwLock::new(initial),
            bypass,
            stage_tx,
            transitions: RwLock::new(Vec::new()),
        }
    }

    /// Build the initial snapshot by reading each milestone source once.
    ///
    /// A failing source leaves its milestone incomplete; the flow lands on
    /// an earlier stage and the user completes the step again.
    pub async fn from_sources(
        sources: &[Arc<dyn MilestoneSource>],
        bypass: BypassConfig,
    ) -> Self {
        let mut initial = FlowState::default();
        for source in sources {
            let milestone = source.milestone();
            match source.load().await {
                Ok(done) => initial.set(milestone, done),
                Err(e) => {
                    tracing::warn!(%milestone, "Failed to load milestone flag, assuming incomplete: {}", e);
                }
            }
        }
        tracing::debug!(state = %initial, "Initial flow snapshot loaded");
        Self::new(initial, bypass)
    }

    fn resolve(&self, state: FlowState) -> NavigationStage {
        resolve_stage(self.bypass.apply(state), self.bypass.all)
    }

    /// Mark a milestone complete.
    pub async fn complete(&self, milestone: Milestone) {
        self.set(milestone, true).await;
    }

    /// Set a milestone's completion flag.
    pub async fn set(&self, milestone: Milestone, done: bool) {
        self.mutate(|state| state.set(milestone, done)).await;
    }

    /// Clear every milestone (sign-out path).
    pub async fn reset(&self) {
        self.mutate(|state| *state = FlowState::default()).await;
    }

    async fn mutate(&self, update: impl FnOnce(&mut FlowState)) {
        // The snapshot lock is held through the publish so concurrent
        // updates cannot reorder what subscribers observe.
        let mut state = self.state.write().await;
        let from = self.resolve(*state);
        update(&mut *state);
        let to = self.resolve(*state);

        if from == to {
            return;
        }

        tracing::info!(%from, %to, "Navigation stage changed");
        {
            let mut transitions = self.transitions.write().await;
            transitions.push(StageTransition {
                from,
                to,
                timestamp: Utc::now(),
            });
            if transitions.len() > MAX_TRANSITIONS {
                let drain_count = transitions.len() - MAX_TRANSITIONS;
                transitions.drain(..drain_count);
            }
        }
        self.stage_tx.send_replace(to);
    }

    /// The raw milestone snapshot (no bypasses applied).
    pub async fn snapshot(&self) -> FlowState {
        *self.state.read().await
    }

    /// The currently resolved stage.
    pub async fn current_stage(&self) -> NavigationStage {
        self.resolve(*self.state.read().await)
    }

    /// Subscribe to stage changes. The receiver starts at the current
    /// stage and wakes only when the resolved stage actually moves.
    pub fn subscribe(&self) -> watch::Receiver<NavigationStage> {
        self.stage_tx.subscribe()
    }

    /// Recent stage transitions, oldest first.
    pub async fn recent_transitions(&self) -> Vec<StageTransition> {
        self.transitions.read().await.clone()
    }

    /// Build the full status view for the REST surface.
    pub async fn status(&self) -> FlowStatus {
        let state = *self.state.read().await;
        let effective = self.bypass.apply(state);
        let stage = resolve_stage(effective, self.bypass.all);
        FlowStatus {
            stage,
            flags: NavigationFlags::for_stage(stage),
            progress_percent: progress_percent(effective),
            fully_resolved: is_fully_resolved(effective),
            next_stage: next_incomplete_stage(effective),
            description: effective.describe(),
        }
    }
}
