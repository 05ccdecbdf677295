//! irome-session: real-time edit session coordination.
//!
//! An [`EditSession`] owns one decoded source image and accepts a live
//! stream of [`AdjustmentParams`] snapshots for it. Snapshots are
//! coalesced last-write-wins into a single-slot "latest pending" register
//! (a [`tokio::sync::watch`] channel), and at most one render runs at a
//! time on the blocking thread pool.
//!
//! Supersession is advisory: an in-flight render is never preempted, but
//! its result is dropped without delivery when a newer snapshot has
//! arrived by the time it finishes. A monotonically increasing sequence
//! number per session guarantees results are delivered in snapshot order --
//! a result for an older snapshot is never delivered after a newer one,
//! and the client always eventually sees the result for its most recent
//! input.
//!
//! Debounce timing (the original client waited ~300 ms of slider
//! quiescence before submitting) belongs to the caller; the session
//! accepts whatever update cadence arrives.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, trace};

use irome_pipeline::{
    AdjustmentParams, Dimensions, EncodedImage, OutputFormat, PipelineError, PixelBuffer, codec,
    pipeline,
};

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session has been closed; no further updates are accepted.
    #[error("edit session is closed")]
    Closed,

    /// The pipeline rejected the input (validation, decode, or encode).
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Observable lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SessionState {
    /// Source decoded; no render in flight.
    Ready = 0,
    /// A render is in flight (possibly already superseded).
    Computing = 1,
    /// Terminal: the session was closed or its event receiver dropped.
    Closed = 2,
}

impl SessionState {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Ready,
            1 => Self::Computing,
            _ => Self::Closed,
        }
    }
}

/// One delivered render outcome.
///
/// Events arrive in strictly increasing `seq` order. Sequence numbers for
/// superseded snapshots are skipped, never reordered.
#[derive(Debug)]
pub struct RenderEvent {
    /// Sequence number of the snapshot this result belongs to.
    pub seq: u64,
    /// The encoded render, or the error that ended this snapshot.
    /// An error never poisons the session; the next update starts fresh.
    pub result: Result<EncodedImage, PipelineError>,
}

/// The latest-pending register's contents: one parameter snapshot tagged
/// with its sequence number.
#[derive(Debug, Clone)]
struct Snapshot {
    seq: u64,
    params: AdjustmentParams,
}

/// A live editing session over one decoded source image.
///
/// Created by [`EditSession::open`]; choosing a new image means opening a
/// new session (new identity), not mutating this one. The source buffer is
/// immutable once decoded and shared read-only with render tasks.
pub struct EditSession {
    params_tx: std::sync::Mutex<Option<watch::Sender<Option<Snapshot>>>>,
    next_seq: AtomicU64,
    state: Arc<AtomicU8>,
    dimensions: Dimensions,
}

impl EditSession {
    /// Decode `source_bytes` and start the session's coordinator task.
    ///
    /// Returns the session handle and the receiver its [`RenderEvent`]s
    /// are delivered on. Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInput`] or [`PipelineError::Decode`]
    /// when the source bytes are unusable; no session is created.
    pub fn open(
        source_bytes: &[u8],
    ) -> Result<(Self, mpsc::UnboundedReceiver<RenderEvent>), PipelineError> {
        let source = Arc::new(codec::decode(source_bytes)?);
        let dimensions = source.dimensions();

        let (params_tx, params_rx) = watch::channel(None::<Snapshot>);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let state = Arc::new(AtomicU8::new(SessionState::Ready as u8));

        debug!(?dimensions, "opening edit session");
        tokio::spawn(run_loop(source, params_rx, events_tx, Arc::clone(&state)));

        Ok((
            Self {
                params_tx: std::sync::Mutex::new(Some(params_tx)),
                next_seq: AtomicU64::new(0),
                state,
                dimensions,
            },
            events_rx,
        ))
    }

    /// Submit a new parameter snapshot, returning its sequence number.
    ///
    /// Never blocks on rendering: the snapshot atomically replaces any
    /// pending one (last-write-wins -- there is never a backlog). If a
    /// render is in flight its result will be dropped on completion and
    /// recomputation starts immediately with this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Pipeline`] wrapping
    /// [`PipelineError::InvalidParameter`] when a field is out of range --
    /// rejected here, before anything is enqueued, so an invalid snapshot
    /// neither renders nor poisons the session. Returns
    /// [`SessionError::Closed`] after [`close`](Self::close).
    pub fn update(&self, params: AdjustmentParams) -> Result<u64, SessionError> {
        params.validate()?;

        let guard = self.params_tx.lock().map_err(|_| SessionError::Closed)?;
        let Some(tx) = guard.as_ref() else {
            return Err(SessionError::Closed);
        };

        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(seq, "submitting parameter snapshot");
        tx.send(Some(Snapshot { seq, params }))
            .map_err(|_| SessionError::Closed)?;
        Ok(seq)
    }

    /// Close the session.
    ///
    /// Terminal: the coordinator task finishes its current render (whose
    /// result is discarded once the event receiver observes the closed
    /// channel end) and exits; subsequent [`update`](Self::update) calls
    /// fail with [`SessionError::Closed`].
    pub fn close(&self) {
        if let Ok(mut guard) = self.params_tx.lock() {
            guard.take();
        }
        self.state
            .store(SessionState::Closed as u8, Ordering::SeqCst);
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Dimensions of the decoded source image.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

/// Coordinator task: waits for the latest-pending register to change,
/// renders the newest snapshot, and delivers non-superseded results.
async fn run_loop(
    source: Arc<PixelBuffer>,
    mut params_rx: watch::Receiver<Option<Snapshot>>,
    events_tx: mpsc::UnboundedSender<RenderEvent>,
    state: Arc<AtomicU8>,
) {
    while params_rx.changed().await.is_ok() {
        let Some(snapshot) = params_rx.borrow_and_update().clone() else {
            continue;
        };
        state.store(SessionState::Computing as u8, Ordering::SeqCst);
        let seq = snapshot.seq;
        let params = snapshot.params;
        let buffer = Arc::clone(&source);

        let outcome = tokio::task::spawn_blocking(
            move || -> Result<EncodedImage, PipelineError> {
                let rendered = pipeline::render(&buffer, &params)?;
                let format = OutputFormat::for_layout(rendered.layout());
                let bytes = codec::encode(&rendered, format)?;
                Ok(EncodedImage { bytes, format })
            },
        )
        .await;

        let result = match outcome {
            Ok(result) => result,
            Err(join_error) => {
                error!(seq, %join_error, "render task did not complete");
                state.store(SessionState::Ready as u8, Ordering::SeqCst);
                continue;
            }
        };

        // Advisory cancellation: the render ran to completion, but a newer
        // snapshot arrived while it did. Drop the stale result; the next
        // loop iteration picks up the newest snapshot immediately.
        if params_rx.has_changed().unwrap_or(false) {
            debug!(seq, "dropping superseded render result");
            continue;
        }

        state.store(SessionState::Ready as u8, Ordering::SeqCst);
        if events_tx.send(RenderEvent { seq, result }).is_err() {
            debug!(seq, "event receiver dropped; ending session loop");
            break;
        }
    }
    state.store(SessionState::Closed as u8, Ordering::SeqCst);
}
