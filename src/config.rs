/// Fixed gameplay constants.
///
/// Nothing reads these from disk; `GameConfig::default()` is the game.  Tests
/// build variants with struct update syntax, e.g. a session without a win
/// condition or with an empty asteroid pool.

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    // ── Playfield ────────────────────────────────────────────────────────────
    /// World width in world units.
    pub world_width: f32,
    /// World height in world units.
    pub world_height: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_start: (f32, f32),
    /// Body size (width, height) used for bounds clamping and collisions.
    pub player_size: (f32, f32),
    /// Magnitude of the horizontal velocity while a direction is held.
    pub player_speed: f32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub projectile_pool_size: usize,
    pub projectile_size: (f32, f32),
    /// Upward speed; applied as a negative y velocity.
    pub projectile_speed: f32,
    /// Projectiles are recycled after this long even if still on screen.
    pub projectile_lifetime_ms: Option<u64>,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_pool_size: usize,
    pub spawn_interval_ms: u64,
    /// Inclusive range of spawn x positions.
    pub spawn_x_range: (i32, i32),
    /// Inclusive range of scales; equal bounds give a fixed scale.
    pub asteroid_scale_range: (f32, f32),
    /// Side of the unscaled asteroid texture; body side = base * scale.
    pub asteroid_base_size: f32,
    /// Spin is drawn from `-max..=max` degrees per second.
    pub asteroid_max_spin: f32,
    pub asteroid_fall_speed: f32,
    /// World-bounds contact is ignored for this long after spawning.
    pub asteroid_grace_ms: u64,
    /// Asteroids are recycled after this long regardless of position.
    pub asteroid_max_lifetime_ms: u64,

    // ── Simulation ───────────────────────────────────────────────────────────
    /// Motion and collisions advance in steps no longer than this, so fast
    /// bodies cannot pass through each other within one long tick.
    pub max_substep_ms: u64,

    // ── Session ──────────────────────────────────────────────────────────────
    pub score_per_hit: u32,
    pub time_limit_secs: u64,
    /// `None` disables the win condition.
    pub win_score: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,

            player_start: (400.0, 550.0),
            player_size: (48.0, 40.0),
            player_speed: 300.0,

            projectile_pool_size: 20,
            projectile_size: (6.0, 18.0),
            projectile_speed: 400.0,
            projectile_lifetime_ms: Some(2000),

            asteroid_pool_size: 20,
            spawn_interval_ms: 1000,
            spawn_x_range: (50, 750),
            asteroid_scale_range: (0.04, 0.07),
            asteroid_base_size: 640.0,
            asteroid_max_spin: 180.0,
            asteroid_fall_speed: 200.0,
            asteroid_grace_ms: 400,
            asteroid_max_lifetime_ms: 5000,

            max_substep_ms: 16,

            score_per_hit: 10,
            time_limit_secs: 120,
            win_score: Some(200),
        }
    }
}
