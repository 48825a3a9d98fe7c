//! Chunked playback with cooperative cancellation.
//!
//! [`PlaybackController`] owns a single worker thread at a time. The worker
//! opens a sink through the controller's [`AudioOutput`], streams the PCM
//! frames in fixed chunks, and checks a [`CancelToken`] between chunks, so
//! a stop request takes effect within one chunk of audio. The sink lives on
//! the worker's stack and is dropped on every exit path, releasing the
//! device whether playback finished, was stopped, or failed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::device::{AudioOutput, CpalOutput};

/// Frames per playback chunk.
///
/// Small enough that cancellation latency stays under ~25 ms at typical
/// rates, large enough to keep per-chunk overhead negligible.
pub const CHUNK_FRAMES: usize = 1024;

/// Cooperative cancellation handle shared between the controller and its
/// worker thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clears a previous cancellation so the token can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Terminal outcome of a playback run, reported asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// All frames were written and drained.
    Finished,
    /// Playback was cancelled before the final chunk.
    Stopped,
    /// The device failed to open or errored mid-stream.
    Failed(String),
}

/// Plays PCM buffers on a background worker, one run at a time.
pub struct PlaybackController {
    output: Arc<dyn AudioOutput>,
    playing: Arc<AtomicBool>,
    cancel: CancelToken,
    status_tx: Sender<PlaybackStatus>,
    status_rx: Receiver<PlaybackStatus>,
}

impl PlaybackController {
    /// Creates a controller backed by the system's default output device.
    pub fn new() -> Self {
        Self::with_output(Arc::new(CpalOutput))
    }

    /// Creates a controller backed by an arbitrary output.
    pub fn with_output(output: Arc<dyn AudioOutput>) -> Self {
        let (status_tx, status_rx) = unbounded();
        Self {
            output,
            playing: Arc::new(AtomicBool::new(false)),
            cancel: CancelToken::new(),
            status_tx,
            status_rx,
        }
    }

    /// Starts playing `frames` at `sample_rate` on a worker thread.
    ///
    /// Returns `false` without side effects if a run is already in progress.
    /// The run's outcome arrives on [`status`](Self::status).
    pub fn start(&self, frames: Vec<i16>, sample_rate: u32) -> bool {
        if self.playing.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.cancel.reset();

        let output = Arc::clone(&self.output);
        let playing = Arc::clone(&self.playing);
        let cancel = self.cancel.clone();
        let status_tx = self.status_tx.clone();

        thread::spawn(move || {
            let status = run_worker(output.as_ref(), frames, sample_rate, &cancel);
            playing.store(false, Ordering::SeqCst);
            // The controller may have been dropped; a dead channel is fine
            let _ = status_tx.send(status);
        });

        true
    }

    /// Requests that the current run stop. Harmless when idle.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Whether a run is in progress.
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Channel carrying one [`PlaybackStatus`] per completed run.
    pub fn status(&self) -> Receiver<PlaybackStatus> {
        self.status_rx.clone()
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

/// The worker body. The sink drops at the end of every return path.
fn run_worker(
    output: &dyn AudioOutput,
    frames: Vec<i16>,
    sample_rate: u32,
    cancel: &CancelToken,
) -> PlaybackStatus {
    let mut sink = match output.open(sample_rate) {
        Ok(sink) => sink,
        Err(e) => return PlaybackStatus::Failed(e.to_string()),
    };

    for chunk in frames.chunks(CHUNK_FRAMES) {
        if cancel.is_cancelled() {
            return PlaybackStatus::Stopped;
        }
        if let Err(e) = sink.write(chunk) {
            return PlaybackStatus::Failed(e.to_string());
        }
    }

    match sink.drain() {
        Ok(()) => PlaybackStatus::Finished,
        Err(e) => PlaybackStatus::Failed(e.to_string()),
    }
}
