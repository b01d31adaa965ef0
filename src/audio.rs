//! Sound playback seam
//!
//! The sim emits `GameEvent`s; an adapter-side sink turns them into actual
//! playback. Implementations are expected to load each asset once at
//! startup and play by reference - events are fire-and-forget and carry no
//! result back into the simulation.

use crate::sim::GameEvent;

/// Fire-and-forget playback interface implemented by the audio adapter
pub trait AudioSink {
    fn play(&mut self, event: GameEvent);
}

/// Sink that drops every event (tests, benchmarks)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: GameEvent) {}
}

/// Sink that logs playback instead of producing sound, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, event: GameEvent) {
        log::debug!("play sound: {event:?}");
    }
}
