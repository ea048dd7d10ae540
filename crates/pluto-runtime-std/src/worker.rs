//! Background thread that keeps timer deadlines.
//!
//! The worker never runs slider code. When a deadline passes it sends the
//! timer id to the owner thread and pokes the registered waker; the owner
//! looks the callback up and runs it during its next drain.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::{mpsc, Arc, Condvar, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use pluto_core::collections::map::HashMap;
use pluto_core::{TimerId, TimerRequest};
use smallvec::SmallVec;

pub(crate) type Waker = Arc<dyn Fn() + Send + Sync + 'static>;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Deadline {
    at: Instant,
    id: TimerId,
}

#[derive(Default)]
struct WorkerState {
    queue: BinaryHeap<Reverse<Deadline>>,
    /// Armed timers and their period. Cancelled ids are removed here and
    /// their heap entries are skipped lazily.
    schedules: HashMap<TimerId, Option<Duration>>,
    shutdown: bool,
}

struct WorkerShared {
    state: Mutex<WorkerState>,
    wakeup: Condvar,
    waker: RwLock<Option<Waker>>,
}

impl WorkerShared {
    fn lock(&self) -> MutexGuard<'_, WorkerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wake_owner(&self) {
        let waker = self
            .waker
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(waker) = waker {
            waker();
        }
    }
}

pub(crate) struct TimerWorker {
    shared: Arc<WorkerShared>,
    handle: Option<JoinHandle<()>>,
}

impl TimerWorker {
    pub(crate) fn spawn(fired: mpsc::Sender<TimerId>) -> Self {
        let shared = Arc::new(WorkerShared {
            state: Mutex::new(WorkerState::default()),
            wakeup: Condvar::new(),
            waker: RwLock::new(None),
        });
        let handle = {
            let shared = Arc::clone(&shared);
            thread::Builder::new()
                .name("pluto-timers".into())
                .spawn(move || run(shared, fired))
        };
        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::error!("failed to spawn timer thread: {err}");
                None
            }
        };
        Self { shared, handle }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub(crate) fn schedule(&self, id: TimerId, request: TimerRequest) {
        let mut state = self.shared.lock();
        let interval = request.interval.map(|period| period.max(MIN_PERIOD));
        state.schedules.insert(id, interval);
        state.queue.push(Reverse(Deadline {
            at: Instant::now() + request.delay,
            id,
        }));
        drop(state);
        self.shared.wakeup.notify_one();
    }

    pub(crate) fn cancel(&self, id: TimerId) {
        self.shared.lock().schedules.remove(&id);
    }

    pub(crate) fn set_waker(&self, waker: Option<Waker>) {
        *self
            .shared
            .waker
            .write()
            .unwrap_or_else(PoisonError::into_inner) = waker;
    }
}

impl Drop for TimerWorker {
    fn drop(&mut self) {
        self.shared.lock().shutdown = true;
        self.shared.wakeup.notify_one();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("timer thread panicked");
            }
        }
    }
}

fn run(shared: Arc<WorkerShared>, fired: mpsc::Sender<TimerId>) {
    let mut state = shared.lock();
    loop {
        if state.shutdown {
            return;
        }

        let now = Instant::now();
        let mut due: SmallVec<[TimerId; 4]> = SmallVec::new();
        while let Some(Reverse(deadline)) = state.queue.peek().copied() {
            if deadline.at > now {
                break;
            }
            state.queue.pop();
            let Some(interval) = state.schedules.get(&deadline.id).copied() else {
                continue;
            };
            match interval {
                // Fixed-delay: a slow owner never causes a burst of catch-up ticks.
                Some(interval) => state.queue.push(Reverse(Deadline {
                    at: now + interval,
                    id: deadline.id,
                })),
                None => {
                    state.schedules.remove(&deadline.id);
                }
            }
            due.push(deadline.id);
        }

        if !due.is_empty() {
            drop(state);
            for id in due {
                if fired.send(id).is_err() {
                    // Owner is gone.
                    return;
                }
            }
            shared.wake_owner();
            state = shared.lock();
            continue;
        }

        let next_at = state.queue.peek().map(|Reverse(next)| next.at);
        state = match next_at {
            Some(at) => {
                let timeout = at.saturating_duration_since(now);
                shared
                    .wakeup
                    .wait_timeout(state, timeout)
                    .map(|(guard, _)| guard)
                    .unwrap_or_else(|err| err.into_inner().0)
            }
            None => shared
                .wakeup
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner),
        };
    }
}
