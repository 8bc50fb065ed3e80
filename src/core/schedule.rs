//! Periodic refresh task with explicit cancellation.

use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Runs a task immediately and then once per interval on a worker thread,
/// until cancelled, dropped, or the task asks to stop.
pub struct Ticker {
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start<F>(interval: Duration, mut task: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();

        let worker = thread::spawn(move || {
            loop {
                if task().is_break() {
                    break;
                }
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    // explicit stop, or the handle went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            stop: Some(tx),
            worker: Some(worker),
        }
    }

    /// Stop the loop without waiting out the current interval.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.stop.take() {
            tx.send(()).ok();
        }
        self.join_worker();
    }

    /// Wait until the task stops by itself.
    pub fn join(mut self) {
        self.join_worker();
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(|w| w.is_finished())
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.join().ok();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
