//! The antagonist ticker.
//!
//! Once the antagonist wakes, a background task narrates its approach every
//! period until the player kills it. The task stops on either of two
//! signals: the defeated flag, checked under the same lock that guards each
//! emission, and a [`CancellationToken`] that wakes the task out of its
//! sleep.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::sink::OutputSink;

/// Time between two warnings.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10);

/// Warnings emitted in a loop while the antagonist lives.
pub const WARNINGS: [&str; 3] = [
    "!!QUELLA COSA si sta avvicinando a te… {Se non agisco adesso, sarà la mia fine…}!!",
    "!!Man mano che si avvicina, il ringhio della COSA si fa sempre più intenso e crudele…{Devo fare qualcosa!!!}!!",
    "!!Vedi la bava gocciolare dalle sue fauci aperte. {Devo usare la pistola!!!}!!",
];

/// Handle to a running ticker task.
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct Ticker {
    cancel: CancellationToken,
    defeated: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the ticker on the given runtime.
    #[must_use]
    pub fn spawn(runtime: &Handle, sink: OutputSink, period: Duration) -> Self {
        let cancel = CancellationToken::new();
        let defeated = Arc::new(Mutex::new(false));
        let task = runtime.spawn(run(sink, period, Arc::clone(&defeated), cancel.clone()));
        info!(?period, "antagonist ticker started");
        Self {
            cancel,
            defeated,
            task: Some(task),
        }
    }

    /// Marks the antagonist dead and stops the task.
    ///
    /// After this returns no warning can be emitted.
    pub fn defeat(&self) {
        *self.defeated.lock().unwrap_or_else(PoisonError::into_inner) = true;
        self.cancel();
    }

    /// Stops the task. Idempotent.
    pub fn cancel(&self) {
        if !self.cancel.is_cancelled() {
            debug!("cancelling antagonist ticker");
            self.cancel.cancel();
        }
    }

    /// Whether the ticker has been neither cancelled nor defeated.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Whether the antagonist has been marked dead.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        *self.defeated.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cancels and waits for the task to finish.
    pub async fn join(mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            // A cancelled or panicked task has nothing left to say.
            let _ = task.await;
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run(
    sink: OutputSink,
    period: Duration,
    defeated: Arc<Mutex<bool>>,
    cancel: CancellationToken,
) {
    let mut warnings = WARNINGS.iter().cycle();
    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!("antagonist ticker stopped");
                break;
            }
            () = tokio::time::sleep(period) => {
                let Some(warning) = warnings.next() else { break };
                if !warn_unless_defeated(&sink, &defeated, warning) {
                    break;
                }
            }
        }
    }
}

/// Emits one warning while holding the defeated lock.
///
/// Returns `false` when the ticker should stop.
fn warn_unless_defeated(sink: &OutputSink, defeated: &Mutex<bool>, warning: &str) -> bool {
    let dead = defeated.lock().unwrap_or_else(PoisonError::into_inner);
    if *dead {
        return false;
    }
    debug!(warning, "antagonist approaches");
    sink.emit(warning)
}
