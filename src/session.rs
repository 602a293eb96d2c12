//! A single game session
//!
//! `Session` owns the game state, its lock, the input queue and the
//! viewport. The main loop blocks on the queue, mutates the state inside the
//! lock and asks the viewport for a frame; the viewport's render thread
//! draws under the same lock.
//!
//! Teardown order matters: the viewport is unregistered (its thread joined)
//! before the state and lock are released, so the draw callback can never run
//! against a dead session.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, anyhow};

use crate::consts::{EVENT_QUEUE_CAPACITY, MAX_PLACEMENT_ATTEMPTS};
use crate::platform::ViewPort;
use crate::renderer::{self, Framebuffer, SceneOptions};
use crate::sim::{Dispatch, GameState, InputEvent, Layout, accepts, dispatch};

/// Counters for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Events taken off the queue
    pub events: u64,
    /// Redraws requested by handled events
    pub redraws: u64,
}

pub struct Session {
    // Declared first so it is dropped first
    viewport: Option<ViewPort>,
    state: Arc<Mutex<GameState>>,
    events: Receiver<InputEvent>,
    input: Option<SyncSender<InputEvent>>,
}

fn lock(state: &Mutex<GameState>) -> anyhow::Result<MutexGuard<'_, GameState>> {
    state.lock().map_err(|_| anyhow!("game state lock poisoned"))
}

impl Session {
    /// Build the game and register the viewport
    ///
    /// `present` receives every finished frame on the render thread. The stock
    /// pig layout retries placement forever; any other layout gives up after
    /// `MAX_PLACEMENT_ATTEMPTS` and fails the session.
    pub fn new<P>(
        seed: u64,
        layout: &Layout,
        options: SceneOptions,
        mut present: P,
    ) -> anyhow::Result<Self>
    where
        P: FnMut(&Framebuffer) + Send + 'static,
    {
        let state = if *layout == Layout::default() {
            GameState::with_layout(seed, layout)
        } else {
            GameState::try_with_layout(seed, layout, MAX_PLACEMENT_ATTEMPTS)
                .context("placing targets")?
        };
        log::info!(
            "New game: seed {}, {} targets, angle {}",
            seed,
            state.targets.len(),
            state.aim.angle()
        );
        let state = Arc::new(Mutex::new(state));
        let (tx, rx) = mpsc::sync_channel(EVENT_QUEUE_CAPACITY);

        let shared = Arc::clone(&state);
        let mut frame = Framebuffer::default();
        let viewport = ViewPort::register(move || {
            {
                let Ok(state) = shared.lock() else {
                    log::error!("Skipping frame: game state lock poisoned");
                    return;
                };
                renderer::draw(&mut frame, &state.snapshot(), options);
            }
            present(&frame);
        })
        .context("registering viewport")?;

        Ok(Self {
            viewport: Some(viewport),
            state,
            events: rx,
            input: Some(tx),
        })
    }

    /// Producer handle for the input queue
    ///
    /// The session keeps no producer of its own once `run` starts, so the
    /// loop fails instead of hanging if every producer goes away.
    pub fn input(&self) -> Option<SyncSender<InputEvent>> {
        self.input.clone()
    }

    /// Copy of the current state, taken under the lock
    pub fn state(&self) -> anyhow::Result<GameState> {
        Ok(lock(&self.state)?.clone())
    }

    /// Run until an exit request, then tear down
    pub fn run(&mut self) -> anyhow::Result<RunStats> {
        self.input.take();
        let mut stats = RunStats::default();

        loop {
            let event = self
                .events
                .recv()
                .context("input queue closed without an exit request")?;
            stats.events += 1;

            if !accepts(&event) {
                log::trace!("Dropped {:?}", event);
                continue;
            }

            let mut state = lock(&self.state)?;
            let outcome = dispatch(&mut state, &event);
            if outcome != Dispatch::Ignored {
                if let Some(viewport) = &self.viewport {
                    viewport.update();
                }
                stats.redraws += 1;
            }
            drop(state);

            if outcome == Dispatch::RedrawAndExit {
                break;
            }
        }

        self.shutdown()?;
        log::info!(
            "Session over: {} events, {} redraws",
            stats.events,
            stats.redraws
        );
        Ok(stats)
    }

    /// Unregister the viewport; the state is released when the session drops
    pub fn shutdown(&mut self) -> anyhow::Result<()> {
        if let Some(mut viewport) = self.viewport.take() {
            viewport
                .unregister()
                .map_err(|_| anyhow!("viewport render thread panicked"))?;
        }
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::error!("Session teardown failed: {:#}", e);
        }
    }
}
