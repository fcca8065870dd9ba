use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::event::Event;

// Sleep in short slices so stop() never waits on a long timer.
const STOP_POLL: Duration = Duration::from_millis(10);

/// Periodic tick source for one session: a single worker thread multiplexes
/// the spawn and update deadlines and sends them into the app's event
/// channel. `stop` joins the thread, so once it returns no further tick can
/// be sent.
pub struct Scheduler {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn start(
        tx: mpsc::Sender<Event>,
        spawn_every: Duration,
        update_every: Duration,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let mut next_spawn = Instant::now() + spawn_every;
            let mut next_update = Instant::now() + update_every;

            while !stop_flag.load(Ordering::Relaxed) {
                let now = Instant::now();
                if now >= next_update {
                    if tx.send(Event::Update).is_err() {
                        return;
                    }
                    next_update += update_every;
                    continue;
                }
                if now >= next_spawn {
                    if tx.send(Event::Spawn).is_err() {
                        return;
                    }
                    next_spawn += spawn_every;
                    continue;
                }
                let next = next_update.min(next_spawn);
                thread::sleep(next.saturating_duration_since(now).min(STOP_POLL));
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Synchronous cancellation: flags the worker and joins it.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
