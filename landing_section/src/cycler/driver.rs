//! Timer driving a mounted [`WordCycler`].

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::WordCycler;

/// A mounted word cycler.
///
/// Owns the single timer task that ticks the cycler and publishes its display
/// text. The task is released when the handle is stopped or dropped, so no
/// text is published after unmount.
#[derive(Debug)]
pub struct CyclerHandle {
    text: watch::Receiver<String>,
    task: Option<JoinHandle<()>>,
}

impl CyclerHandle {
    /// Reset `cycler` to its initial state and arm its timer.
    ///
    /// A cycler with nothing to animate (`next_delay() == None`) is mounted
    /// without a timer; its text stays at the initial display.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn start<C: WordCycler>(mut cycler: C) -> Self {
        cycler.reset();
        let (tx, rx) = watch::channel(cycler.display().to_owned());
        let task = cycler
            .next_delay()
            .is_some()
            .then(|| tokio::spawn(run(cycler, tx)));
        debug!(armed = task.is_some(), "word cycler mounted");
        Self { text: rx, task }
    }

    /// Text currently on display.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Receiver notified whenever the display text changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.clone()
    }

    /// Whether the timer task is still armed.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Unmount and wait until the timer task is gone.
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // Cancellation is the expected outcome; a panic inside the cycler
            // has nothing left to clean up either.
            let _ = task.await;
        }
        debug!("word cycler unmounted");
    }
}

impl Drop for CyclerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("word cycler dropped while armed");
        }
    }
}

async fn run<C: WordCycler>(mut cycler: C, tx: watch::Sender<String>) {
    while let Some(delay) = cycler.next_delay() {
        tokio::time::sleep(delay).await;
        cycler.tick();
        let display = cycler.display();
        tx.send_if_modified(|text| {
            if text.as_str() == display {
                return false;
            }
            display.clone_into(text);
            true
        });
    }
}
