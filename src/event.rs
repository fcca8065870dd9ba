use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

pub enum Event {
    Key(KeyEvent),
    /// Slow-cadence timer: drop a new item in.
    Spawn,
    /// Fast-cadence timer: advance and resolve the field.
    Update,
}

/// Owns the event channel. Keyboard input is read on a dedicated thread;
/// the session scheduler sends its ticks through a cloned sender.
pub struct Events {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
}

impl Events {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let key_tx = tx.clone();

        thread::spawn(move || loop {
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(crossterm::event::Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && key_tx.send(Event::Key(key)).is_err() {
                        return;
                    }
                }
            }
        });

        Self { tx, rx }
    }

    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}
