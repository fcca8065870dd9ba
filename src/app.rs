use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::Event;
use crate::game::{GameState, Phase, Scheduler};
use crate::scores::ScoreStore;

const SPAWN_EVERY: Duration = Duration::from_millis(800);
const UPDATE_EVERY: Duration = Duration::from_millis(50);

pub struct App {
    pub should_quit: bool,
    pub state: GameState,
    scheduler: Option<Scheduler>,
    tx: mpsc::Sender<Event>,
    store: Box<dyn ScoreStore>,
}

impl App {
    pub fn new(tx: mpsc::Sender<Event>, store: Box<dyn ScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            should_quit: false,
            state: GameState::new(high_score),
            scheduler: None,
            tx,
            store,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.state.phase == Phase::Running {
                    self.close_session();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.state.phase != Phase::Running {
                    self.start_session();
                }
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.state.move_left();
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.state.move_right();
            }
            _ => {}
        }
    }

    pub fn on_spawn(&mut self) {
        let mut rng = rand::thread_rng();
        self.state.spawn_tick(&mut rng);
    }

    pub fn on_update(&mut self) {
        let was_running = self.state.phase == Phase::Running;
        self.state.update_tick();

        if was_running && self.state.phase == Phase::Ended {
            // Session over: no further ticks may mutate state
            if let Some(scheduler) = self.scheduler.take() {
                scheduler.stop();
            }
            if self.state.new_high {
                self.store.save(self.state.high_score);
            }
        }
    }

    fn start_session(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.stop();
        }
        self.state.start();
        self.scheduler = Some(Scheduler::start(self.tx.clone(), SPAWN_EVERY, UPDATE_EVERY));
    }

    /// Close a running session without persisting anything: timers stop,
    /// session state is discarded, only the in-memory high score survives.
    fn close_session(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.stop();
        }
        self.state = GameState::new(self.state.high_score);
    }

    pub fn shutdown(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.stop();
        }
    }
}
