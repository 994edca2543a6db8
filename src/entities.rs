/// All game entity types — pure data, no logic.

use crate::config::GameConfig;
use crate::pool::Pool;

// ── Pooled bodies ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Projectile,
    Asteroid,
}

/// A projectile or asteroid slot.  Only meaningful while `active`.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Rotation in degrees.
    pub angle: f32,
    /// Degrees per second.
    pub angular_velocity: f32,
    pub scale: f32,
    /// Body extent (width, height) in world units, centred on (x, y).
    pub size: (f32, f32),
    /// Milliseconds since the slot was last acquired.
    pub age_ms: u64,
    pub active: bool,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            angle: 0.0,
            angular_velocity: 0.0,
            scale: 1.0,
            size: (0.0, 0.0),
            age_ms: 0,
            active: false,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity; always one of `-speed`, `0`, `+speed`.
    pub vx: f32,
    pub size: (f32, f32),
    pub alive: bool,
}

// ── Input & output signals ───────────────────────────────────────────────────

/// Buttons held during one tick.  Edge detection happens in the core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Sound requests raised by the core for the host to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    /// Looping background music.
    StartMusic,
    StopMusic,
    Shoot,
    Hit,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Timeout,
    Win,
    PlayerHit,
}

impl Outcome {
    /// Timeout and player-hit both end on the game-over screen.
    pub fn is_win(self) -> bool {
        self == Outcome::Win
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Everything owned by one run of the gameplay scene.  Cloneable so the
/// per-tick update can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct Session {
    pub config: GameConfig,
    pub player: Player,
    pub projectiles: Pool,
    pub asteroids: Pool,
    pub score: u32,
    pub elapsed_ms: u64,
    /// Time accumulated towards the next asteroid spawn.
    pub spawn_timer_ms: u64,
    /// Fire button state seen on the previous tick.
    pub fire_latch: bool,
    /// Set exactly once; a session with an outcome no longer changes.
    pub outcome: Option<Outcome>,
    /// Cues raised during the most recent tick.
    pub cues: Vec<AudioCue>,
}

impl Session {
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
