//! Viewport: a draw callback driven by its own render thread
//!
//! Plays the role of the display compositor. `update` asks for a frame; the
//! render thread runs the callback on its own schedule. Requests made while
//! one is already pending are merged into it.

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

/// Owns the render thread; dropping it unregisters the callback and joins
pub struct ViewPort {
    requests: Option<SyncSender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ViewPort {
    /// Start the render thread and request the first frame
    pub fn register<F>(mut draw: F) -> io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx): (SyncSender<()>, Receiver<()>) = mpsc::sync_channel(1);
        let thread = thread::Builder::new()
            .name("viewport".into())
            .spawn(move || {
                while rx.recv().is_ok() {
                    draw();
                }
                log::debug!("Viewport render thread stopped");
            })?;

        let viewport = Self {
            requests: Some(tx),
            thread: Some(thread),
        };
        viewport.update();
        Ok(viewport)
    }

    /// Ask for a redraw
    pub fn update(&self) {
        if let Some(tx) = &self.requests {
            match tx.try_send(()) {
                Ok(()) | Err(TrySendError::Full(())) => {}
                Err(TrySendError::Disconnected(())) => {
                    log::warn!("Viewport render thread is gone");
                }
            }
        }
    }

    /// Unregister: stop taking requests, let the pending frame finish, join
    pub fn unregister(&mut self) -> thread::Result<()> {
        self.requests.take();
        match self.thread.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }
}

impl Drop for ViewPort {
    fn drop(&mut self) {
        if self.unregister().is_err() {
            log::error!("Viewport render thread panicked");
        }
    }
}
