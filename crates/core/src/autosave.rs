//! Auto-save decision policy and debounced save trigger.
//!
//! Every draft mutation flows through [`AutoSaver::notify_change`], which
//! evaluates the [`AutoSaveContext`] (passed explicitly at call time, never
//! held as ambient mutable state) and either schedules a debounced write or
//! skips. Writes go through the [`RosterWriter`] seam so the policy and
//! timing can be unit-tested without any network or database.
//!
//! Auto-save is an optimization, not a correctness guarantee: any failure
//! on this path is logged and swallowed, and never blocks further edits.
//! The explicit submit path does not use this module.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::error::CoreError;
use crate::roster::{DraftSlot, RosterDraft};

/// Default quiet period before a pending auto-save fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

/// Immutable per-call context for the auto-save decision.
#[derive(Debug, Clone, Default)]
pub struct AutoSaveContext {
    /// This player already has an `is_complete = true` roster stored.
    pub has_submitted_roster: bool,
    /// The user explicitly opened an edit session on a submitted roster;
    /// changes must only persist through an explicit re-submit.
    pub is_editing_roster: bool,
    /// The game has passed its roster-lock instant.
    pub locked: bool,
    /// Session token, required non-empty to persist.
    pub session_token: Option<String>,
}

/// Why an auto-save was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Locked,
    SubmittedRoster,
    EditingSession,
    MissingSession,
}

/// Outcome of the auto-save decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDecision {
    Persist,
    Skip(SkipReason),
}

/// Evaluate the auto-save policy. Precedence, highest first:
///
/// 1. Game locked.
/// 2. Roster already submitted, or an explicit edit session is open.
/// 3. No usable session token.
/// 4. Otherwise persist.
pub fn decide(ctx: &AutoSaveContext) -> SaveDecision {
    if ctx.locked {
        return SaveDecision::Skip(SkipReason::Locked);
    }
    if ctx.has_submitted_roster {
        return SaveDecision::Skip(SkipReason::SubmittedRoster);
    }
    if ctx.is_editing_roster {
        return SaveDecision::Skip(SkipReason::EditingSession);
    }
    match &ctx.session_token {
        Some(token) if !token.is_empty() => SaveDecision::Persist,
        _ => SaveDecision::Skip(SkipReason::MissingSession),
    }
}

/// Destination for partial-roster writes.
///
/// The production implementation posts to the auto-save endpoint; tests
/// substitute a recorder.
#[async_trait]
pub trait RosterWriter: Send + Sync + 'static {
    /// Persist the full slot set as a partial (not complete) roster.
    async fn save_partial(&self, slots: Vec<DraftSlot>) -> Result<(), CoreError>;
}

/// A cancellable single-shot timer: `schedule` aborts any pending action
/// and restarts the delay, so at most one action fires per quiet period.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer { delay, pending: None }
    }

    /// Cancel any pending action and schedule `action` to run after the
    /// configured delay.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Abort the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Wires draft-change notifications to debounced [`RosterWriter`] calls.
pub struct AutoSaver<W: RosterWriter> {
    writer: Arc<W>,
    debouncer: Debouncer,
    baseline_seen: bool,
}

impl<W: RosterWriter> AutoSaver<W> {
    pub fn new(writer: Arc<W>, delay: Duration) -> Self {
        AutoSaver {
            writer,
            debouncer: Debouncer::new(delay),
            baseline_seen: false,
        }
    }

    /// Handle one draft-state change.
    ///
    /// The very first observation after construction is the restored
    /// baseline from a page/session load and is never saved. On a skip
    /// decision any pending timer is cancelled too, so a save scheduled
    /// just before a lock or submit cannot fire afterwards.
    pub fn notify_change(&mut self, draft: &RosterDraft, ctx: &AutoSaveContext) {
        if !self.baseline_seen {
            self.baseline_seen = true;
            return;
        }

        match decide(ctx) {
            SaveDecision::Skip(reason) => {
                tracing::debug!(?reason, "auto-save skipped");
                self.debouncer.cancel();
            }
            SaveDecision::Persist => {
                let writer = Arc::clone(&self.writer);
                let slots = draft.slots().to_vec();
                self.debouncer.schedule(async move {
                    if let Err(err) = writer.save_partial(slots).await {
                        // Best-effort path: log and swallow.
                        tracing::warn!(error = %err, "auto-save failed");
                    }
                });
            }
        }
    }
}
