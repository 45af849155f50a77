use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        mpsc::{self, Receiver, RecvTimeoutError, Sender, TrySendError},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, warn};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Callback invoked from the tick thread after every tick, typically to wake
/// up the UI so it drains the tick on its own thread.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Handle to a running periodic task.
///
/// Ticks are only counted here; the owner decides what to do with them when it
/// calls [`TickTask::drain`]. Once [`TickTask::cancel`] returns no further tick
/// can be observed.
pub trait TickTask {
    /// Returns the number of ticks pending since the previous call. Ticks may
    /// be coalesced, so only zero versus non-zero is meaningful.
    fn drain(&mut self) -> usize;
    fn cancel(self);
}

pub trait TickScheduler {
    type Task: TickTask;

    fn schedule(&mut self, interval: Duration) -> Self::Task;
}

/// Runs each task on a dedicated thread that signals every `interval`.
///
/// Ticks coalesce: at most one is pending until the owner drains it, so a
/// window that stops drawing frames does not pile up messages.
#[derive(Clone, Default)]
pub struct ThreadScheduler {
    waker: Option<Waker>,
}

impl ThreadScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_waker(waker: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            waker: Some(Arc::new(waker)),
        }
    }
}

impl TickScheduler for ThreadScheduler {
    type Task = ThreadTickTask;

    fn schedule(&mut self, interval: Duration) -> ThreadTickTask {
        let (tick_tx, tick_rx) = mpsc::sync_channel::<()>(1);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let waker = self.waker.clone();

        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        match tick_tx.try_send(()) {
                            Ok(()) => {
                                if let Some(waker) = &waker {
                                    waker();
                                }
                            }
                            // a tick is already pending, the owner has been woken for it
                            Err(TrySendError::Full(())) => {}
                            // the receiving side is gone, nobody is listening anymore
                            Err(TrySendError::Disconnected(())) => break,
                        }
                    }
                    // either an explicit stop or the task handle was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        debug!("Tick thread started with interval {:?}", interval);

        ThreadTickTask {
            tick_rx,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }
}

pub struct ThreadTickTask {
    tick_rx: Receiver<()>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ThreadTickTask {
    fn stop(&mut self) {
        let Some(stop_tx) = self.stop_tx.take() else {
            return;
        };
        // dropping the sender wakes the thread immediately
        drop(stop_tx);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Tick thread panicked before it could be stopped");
            }
        }
        // ticks sent before the thread noticed the stop are discarded
        while self.tick_rx.try_recv().is_ok() {}
        debug!("Tick thread stopped");
    }
}

impl TickTask for ThreadTickTask {
    fn drain(&mut self) -> usize {
        if self.stop_tx.is_none() {
            return 0;
        }
        self.tick_rx.try_iter().count()
    }

    fn cancel(mut self) {
        self.stop();
    }
}

impl Drop for ThreadTickTask {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug, Default)]
struct ManualTicks {
    next_id: u64,
    pending: HashMap<u64, usize>,
    scheduled: usize,
    cancelled: usize,
    last_interval: Option<Duration>,
}

/// Scheduler whose ticks are fired by hand. Clones share the same bookkeeping,
/// which lets a test keep a handle on a scheduler the stopwatch owns.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    ticks: Arc<Mutex<ManualTicks>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualTicks> {
        self.ticks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fires one tick on every active task.
    pub fn fire(&self) {
        self.lock().pending.values_mut().for_each(|p| *p += 1);
    }

    pub fn active_tasks(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn scheduled_count(&self) -> usize {
        self.lock().scheduled
    }

    pub fn cancelled_count(&self) -> usize {
        self.lock().cancelled
    }

    pub fn last_interval(&self) -> Option<Duration> {
        self.lock().last_interval
    }
}

impl TickScheduler for ManualScheduler {
    type Task = ManualTickTask;

    fn schedule(&mut self, interval: Duration) -> ManualTickTask {
        let mut ticks = self.lock();
        let id = ticks.next_id;
        ticks.next_id += 1;
        ticks.pending.insert(id, 0);
        ticks.scheduled += 1;
        ticks.last_interval = Some(interval);

        ManualTickTask {
            id,
            ticks: self.ticks.clone(),
        }
    }
}

pub struct ManualTickTask {
    id: u64,
    ticks: Arc<Mutex<ManualTicks>>,
}

impl TickTask for ManualTickTask {
    fn drain(&mut self) -> usize {
        let mut ticks = self.ticks.lock().unwrap_or_else(PoisonError::into_inner);
        ticks
            .pending
            .get_mut(&self.id)
            .map(std::mem::take)
            .unwrap_or(0)
    }

    fn cancel(self) {
        drop(self);
    }
}

impl Drop for ManualTickTask {
    fn drop(&mut self) {
        let mut ticks = self.ticks.lock().unwrap_or_else(PoisonError::into_inner);
        if ticks.pending.remove(&self.id).is_some() {
            ticks.cancelled += 1;
        }
    }
}
