//! Plan Session
//!
//! Presentation-side state: the brief being edited, the plans on display and
//! whether a generation is in flight. Generation itself is pure; the session
//! only adds the loading delay and last-write-wins publication.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};

use reelplan_lib::core::brief::CreativeBrief;
use reelplan_lib::core::planner::{generate, VideoPlan};
use reelplan_lib::core::settings::AppSettings;
use reelplan_lib::core::CoreResult;

use crate::events::{SessionEvent, EVENT_CHANNEL_CAPACITY};

/// How a generation request ended
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationOutcome {
    /// Plans were stored and are now displayed
    Published(Vec<VideoPlan>),
    /// A newer request or a reset replaced this one; nothing was stored
    Superseded,
}

#[derive(Debug)]
struct SessionState {
    brief: CreativeBrief,
    default_brief: CreativeBrief,
    plans: Option<Vec<VideoPlan>>,
}

/// Marks a ticket as settled when its request ends, however it ends.
///
/// Dropping a pending `generate` future settles its ticket too.
struct SettleOnDrop<'a> {
    settled: &'a AtomicU64,
    ticket: u64,
}

impl Drop for SettleOnDrop<'_> {
    fn drop(&mut self) {
        self.settled.fetch_max(self.ticket, Ordering::SeqCst);
    }
}

/// Owner of the currently displayed plans
pub struct PlanSession {
    state: Mutex<SessionState>,
    /// Ticket of the newest request; older requests never publish
    latest_ticket: AtomicU64,
    /// Highest ticket that has finished; generating while behind `latest_ticket`
    settled_ticket: AtomicU64,
    render_delay: Duration,
    events: broadcast::Sender<SessionEvent>,
}

impl PlanSession {
    /// Creates a session using the configured delay and brief defaults
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_defaults(
            settings.default_brief(),
            Duration::from_millis(settings.generation.render_delay_ms),
        )
    }

    /// Creates a session with an explicit default brief and render delay
    pub fn with_defaults(default_brief: CreativeBrief, render_delay: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Mutex::new(SessionState {
                brief: default_brief.clone(),
                default_brief,
                plans: None,
            }),
            latest_ticket: AtomicU64::new(0),
            settled_ticket: AtomicU64::new(0),
            render_delay,
            events,
        }
    }

    /// Subscribes to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: SessionEvent) {
        // No receivers is fine; events are advisory.
        let _ = self.events.send(event);
    }

    /// Replaces the brief being edited. Displayed plans are kept.
    pub async fn update_brief(&self, brief: CreativeBrief) {
        self.state.lock().await.brief = brief;
    }

    pub async fn brief(&self) -> CreativeBrief {
        self.state.lock().await.brief.clone()
    }

    pub async fn plans(&self) -> Option<Vec<VideoPlan>> {
        self.state.lock().await.plans.clone()
    }

    pub fn is_generating(&self) -> bool {
        self.settled_ticket.load(Ordering::SeqCst) < self.latest_ticket.load(Ordering::SeqCst)
    }

    /// Generates plans for a snapshot of the current brief.
    ///
    /// Fails without touching state when the brief does not pass the gate.
    /// After the render delay the plans are published, unless a newer
    /// request or a reset happened meanwhile.
    pub async fn generate(&self) -> CoreResult<GenerationOutcome> {
        let (brief, ticket) = {
            let mut state = self.state.lock().await;
            state.brief.validate()?;
            let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
            (state.brief.clone(), ticket)
        };
        let settle = SettleOnDrop {
            settled: &self.settled_ticket,
            ticket,
        };

        self.emit(SessionEvent::GenerationStarted { ticket });
        debug!(ticket, "Generation started");

        let plans = generate(&brief);

        if !self.render_delay.is_zero() {
            tokio::time::sleep(self.render_delay).await;
        }

        let mut state = self.state.lock().await;
        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            drop(state);
            debug!(ticket, "Generation superseded");
            self.emit(SessionEvent::GenerationSuperseded { ticket });
            return Ok(GenerationOutcome::Superseded);
        }

        state.plans = Some(plans.clone());
        drop(settle);
        drop(state);

        info!(ticket, brand = %brief.brand, "Published {} video plans", plans.len());
        self.emit(SessionEvent::PlansUpdated {
            ticket,
            plans: plans.clone(),
        });
        Ok(GenerationOutcome::Published(plans))
    }

    /// Restores the default brief and clears displayed plans.
    ///
    /// Any in-flight request is invalidated.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        self.settled_ticket.fetch_max(ticket, Ordering::SeqCst);
        state.brief = state.default_brief.clone();
        state.plans = None;
        drop(state);

        info!("Session reset");
        self.emit(SessionEvent::SessionReset);
    }
}
