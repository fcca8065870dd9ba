use rand::Rng;

/// Play field coordinates are percentages: 0..100 on both axes. Items spawn
/// slightly above the visible field and are culled once they pass the bottom.
pub const FIELD_BOTTOM: f32 = 100.0;
pub const SPAWN_Y: f32 = -5.0;
pub const SPAWN_X_MAX: f32 = 90.0;
pub const ITEM_SIZE: f32 = 5.0;
pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 3.0;

pub const CATCHER_MIN_X: f32 = 5.0;
pub const CATCHER_MAX_X: f32 = 95.0;
pub const CATCHER_STEP: f32 = 5.0;
pub const CATCHER_HALF_WIDTH: f32 = 4.0;
pub const CATCHER_TOP: f32 = 85.0;
pub const CATCHER_BOTTOM: f32 = 95.0;

pub const START_LIVES: u32 = 3;
pub const LEVEL_STEP: u32 = 50;

// Transient timers, counted in update ticks (one tick = 50ms).
pub const CATCH_FLASH_TICKS: u8 = 6;
pub const NOTICE_TICKS: u8 = 40;
pub const END_DELAY_TICKS: u8 = 2;

pub const LEVEL_NAMES: [&str; 9] = [
    "Toilet Rookie",
    "Poop Pro",
    "Flush Master",
    "Bathroom Boss",
    "Digestive Deity",
    "Toilet Titan",
    "Poop Legend",
    "Flush God",
    "Ultimate Toilet Master",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ItemKind {
    Poop,
    Paper,
    Toilet,
    Pill,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Poop,
        ItemKind::Paper,
        ItemKind::Toilet,
        ItemKind::Pill,
    ];

    pub fn points(&self) -> u32 {
        match self {
            ItemKind::Poop => 10,
            ItemKind::Paper => 20,
            ItemKind::Toilet => 30,
            ItemKind::Pill => 50,
        }
    }

    /// Only plain poop costs a life when it hits the floor uncaught.
    /// The other kinds are optional upside, not required catches.
    pub fn is_penalty(&self) -> bool {
        matches!(self, ItemKind::Poop)
    }
}

#[derive(Clone, Debug)]
pub struct FallingItem {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub kind: ItemKind,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

/// Session state for one run of the game. All mutation happens through
/// `start`, the two tick operations, and the move commands; none of them can
/// fail — out-of-range or out-of-phase input clamps or does nothing.
pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub items: Vec<FallingItem>,
    pub catcher_x: f32,
    pub next_id: u32,
    pub high_score: u32,
    pub new_high: bool,
    pub catch_flash: u8,
    pub notice: Option<&'static str>,
    pub notice_ticks: u8,
    pub end_delay: Option<u8>,
}

impl GameState {
    pub fn new(high_score: u32) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            lives: START_LIVES,
            level: 0,
            items: Vec::new(),
            catcher_x: 50.0,
            next_id: 0,
            high_score,
            new_high: false,
            catch_flash: 0,
            notice: None,
            notice_ticks: 0,
            end_delay: None,
        }
    }

    /// Begin a session. Legal from `Idle` and `Ended`; a running session
    /// cannot be restarted underneath itself.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.phase = Phase::Running;
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 0;
        self.items.clear();
        self.catcher_x = 50.0;
        self.new_high = false;
        self.catch_flash = 0;
        self.notice = None;
        self.notice_ticks = 0;
        self.end_delay = None;
    }

    /// One firing of the slow timer: drop a random item in at the top.
    pub fn spawn_tick(&mut self, rng: &mut impl Rng) {
        if self.phase != Phase::Running {
            return;
        }
        let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
        let item = FallingItem {
            id: self.next_id,
            x: rng.gen_range(0.0..SPAWN_X_MAX),
            y: SPAWN_Y,
            speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
            kind,
        };
        self.next_id += 1;
        self.items.push(item);
    }

    /// One firing of the fast timer: advance every item, resolve catches and
    /// misses in insertion order, then settle level and end-of-session.
    pub fn update_tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        if self.catch_flash > 0 {
            self.catch_flash -= 1;
        }
        if self.notice_ticks > 0 {
            self.notice_ticks -= 1;
            if self.notice_ticks == 0 {
                self.notice = None;
            }
        }

        let catcher_left = self.catcher_x - CATCHER_HALF_WIDTH;
        let catcher_right = self.catcher_x + CATCHER_HALF_WIDTH;

        let mut remaining = Vec::with_capacity(self.items.len());
        for mut item in self.items.drain(..) {
            item.y += item.speed;

            let left = item.x;
            let right = item.x + ITEM_SIZE;
            let top = item.y;
            let bottom = item.y + ITEM_SIZE;

            // AABB overlap against the catcher box
            if left < catcher_right
                && right > catcher_left
                && top < CATCHER_BOTTOM
                && bottom > CATCHER_TOP
            {
                self.score += item.kind.points();
                self.catch_flash = CATCH_FLASH_TICKS;
            } else if item.y > FIELD_BOTTOM {
                if item.kind.is_penalty() {
                    self.lives = self.lives.saturating_sub(1);
                }
            } else {
                remaining.push(item);
            }
        }
        self.items = remaining;

        let new_level = self.score / LEVEL_STEP;
        if new_level > self.level {
            self.level = new_level;
            let idx = ((new_level - 1) as usize).min(LEVEL_NAMES.len() - 1);
            self.notice = Some(LEVEL_NAMES[idx]);
            self.notice_ticks = NOTICE_TICKS;
        }

        if let Some(ticks) = self.end_delay.as_mut() {
            *ticks -= 1;
            if *ticks == 0 {
                self.end_delay = None;
                self.phase = Phase::Ended;
                if self.score > self.high_score {
                    self.high_score = self.score;
                    self.new_high = true;
                }
            }
        } else if self.lives == 0 {
            self.end_delay = Some(END_DELAY_TICKS);
        }
    }

    pub fn move_left(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.catcher_x = (self.catcher_x - CATCHER_STEP).clamp(CATCHER_MIN_X, CATCHER_MAX_X);
    }

    pub fn move_right(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.catcher_x = (self.catcher_x + CATCHER_STEP).clamp(CATCHER_MIN_X, CATCHER_MAX_X);
    }
}
