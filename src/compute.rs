/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `Session` (and, where needed, an RNG handle) and returns a brand-new
/// `Session`.  Side effects are limited to the injected RNG and log output.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{AudioCue, Entity, EntityKind, Input, Outcome, Player, Session};
use crate::pool::Pool;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session: player at its start position, empty pools, zero
/// score and clock.
pub fn init_session(config: &GameConfig) -> Session {
    let (x, y) = config.player_start;
    Session {
        config: config.clone(),
        player: Player {
            x,
            y,
            vx: 0.0,
            size: config.player_size,
            alive: true,
        },
        projectiles: Pool::new(EntityKind::Projectile, config.projectile_pool_size),
        asteroids: Pool::new(EntityKind::Asteroid, config.asteroid_pool_size),
        score: 0,
        elapsed_ms: 0,
        spawn_timer_ms: 0,
        fire_latch: false,
        outcome: None,
        cues: Vec::new(),
    }
}

// ── Player controller ───────────────────────────────────────────────────────

/// Resolve horizontal velocity from held directions.  Left is checked first
/// and wins when both are held.
pub fn steer_player(state: &Session, input: &Input) -> Session {
    let speed = state.config.player_speed;
    let vx = if input.left {
        -speed
    } else if input.right {
        speed
    } else {
        0.0
    };
    Session {
        player: Player {
            vx,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire once on each not-pressed → pressed transition of the fire button.
pub fn handle_fire(state: &Session, input: &Input) -> Session {
    let just_pressed = input.fire && !state.fire_latch;
    let latched = Session {
        fire_latch: input.fire,
        ..state.clone()
    };
    if just_pressed {
        fire_projectile(&latched)
    } else {
        latched
    }
}

// ── Weapon ───────────────────────────────────────────────────────────────────

/// Launch a projectile from the player's position.  Silently dropped when
/// the projectile pool is full.
pub fn fire_projectile(state: &Session) -> Session {
    if state.projectiles.is_exhausted() {
        debug!("fire dropped: no free {:?}", state.projectiles.kind());
        return state.clone();
    }
    let mut next = state.clone();
    let speed = state.config.projectile_speed;
    let size = state.config.projectile_size;

    let Some(handle) = next.projectiles.acquire(state.player.x, state.player.y) else {
        return next;
    };
    if let Some(projectile) = next.projectiles.get_mut(handle) {
        projectile.vy = -speed;
        projectile.size = size;
    }
    next.cues.push(AudioCue::Shoot);
    next
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Acquire one asteroid at a random x on the top edge with random scale and
/// spin.  Silently dropped when the asteroid pool is full.
pub fn spawn_asteroid(state: &Session, rng: &mut impl Rng) -> Session {
    let cfg = &state.config;
    let (x_min, x_max) = cfg.spawn_x_range;
    let (scale_min, scale_max) = cfg.asteroid_scale_range;

    let x = rng.gen_range(x_min..=x_max) as f32;
    let scale = rng.gen_range(scale_min..=scale_max);
    let spin = rng.gen_range(-cfg.asteroid_max_spin..=cfg.asteroid_max_spin);

    if state.asteroids.is_exhausted() {
        debug!("spawn dropped: no free {:?}", state.asteroids.kind());
        return state.clone();
    }
    let mut next = state.clone();
    let Some(handle) = next.asteroids.acquire(x, 0.0) else {
        return next;
    };
    if let Some(asteroid) = next.asteroids.get_mut(handle) {
        let side = cfg.asteroid_base_size * scale;
        asteroid.scale = scale;
        asteroid.size = (side, side);
        asteroid.angular_velocity = spin;
        asteroid.vy = cfg.asteroid_fall_speed;
    }
    debug!("asteroid spawned at x={x} scale={scale:.3}");
    next
}

/// Advance the spawn timer; one spawn per full interval elapsed.
pub fn run_spawner(state: &Session, dt_ms: u64, rng: &mut impl Rng) -> Session {
    let interval = state.config.spawn_interval_ms;
    if interval == 0 {
        return state.clone();
    }
    let mut next = Session {
        spawn_timer_ms: state.spawn_timer_ms + dt_ms,
        ..state.clone()
    };
    while next.spawn_timer_ms >= interval {
        next.spawn_timer_ms -= interval;
        next = spawn_asteroid(&next, rng);
    }
    next
}

// ── Motion & world bounds ───────────────────────────────────────────────────

fn touches_bounds(e: &Entity, cfg: &GameConfig) -> bool {
    let (hw, hh) = (e.size.0 / 2.0, e.size.1 / 2.0);
    e.x - hw <= 0.0
        || e.x + hw >= cfg.world_width
        || e.y - hh <= 0.0
        || e.y + hh >= cfg.world_height
}

fn outside_world(e: &Entity, cfg: &GameConfig) -> bool {
    let (hw, hh) = (e.size.0 / 2.0, e.size.1 / 2.0);
    e.x + hw < 0.0 || e.x - hw > cfg.world_width || e.y + hh < 0.0 || e.y - hh > cfg.world_height
}

/// Integrate velocities over `dt_ms`, clamp the player to the playfield and
/// recycle projectiles and asteroids whose time or space has run out.
pub fn advance_bodies(state: &Session, dt_ms: u64) -> Session {
    let cfg = &state.config;
    let dt = dt_ms as f32 / 1000.0;
    let mut next = state.clone();

    // Player: world-bounds collision keeps the whole body on screen
    let half_w = next.player.size.0 / 2.0;
    next.player.x = (next.player.x + next.player.vx * dt)
        .clamp(half_w, (cfg.world_width - half_w).max(half_w));

    // Projectiles leave through the top or expire
    let mut spent = Vec::new();
    for (handle, p) in next.projectiles.iter_active_mut() {
        p.x += p.vx * dt;
        p.y += p.vy * dt;
        p.age_ms += dt_ms;
        let expired = cfg
            .projectile_lifetime_ms
            .is_some_and(|limit| p.age_ms >= limit);
        if expired || outside_world(p, cfg) {
            spent.push(handle);
        }
    }
    for handle in spent {
        next.projectiles.release(handle);
    }

    // Asteroids: bounds contact only counts after the grace period
    let mut spent = Vec::new();
    for (handle, a) in next.asteroids.iter_active_mut() {
        a.x += a.vx * dt;
        a.y += a.vy * dt;
        a.angle = (a.angle + a.angular_velocity * dt).rem_euclid(360.0);
        a.age_ms += dt_ms;
        let expired = a.age_ms >= cfg.asteroid_max_lifetime_ms;
        let past_grace = a.age_ms >= cfg.asteroid_grace_ms;
        if expired || (past_grace && touches_bounds(a, cfg)) {
            spent.push(handle);
        }
    }
    for handle in spent {
        next.asteroids.release(handle);
    }

    next
}

// ── Collisions ───────────────────────────────────────────────────────────────

fn overlaps(ax: f32, ay: f32, a_size: (f32, f32), bx: f32, by: f32, b_size: (f32, f32)) -> bool {
    (ax - bx).abs() * 2.0 < a_size.0 + b_size.0 && (ay - by).abs() * 2.0 < a_size.1 + b_size.1
}

fn bodies_overlap(a: &Entity, b: &Entity) -> bool {
    a.active && b.active && overlaps(a.x, a.y, a.size, b.x, b.y, b.size)
}

fn player_overlaps(player: &Player, e: &Entity) -> bool {
    e.active && overlaps(player.x, player.y, player.size, e.x, e.y, e.size)
}

/// Apply the two contact rules.  Projectile × asteroid releases both and
/// scores; player × asteroid ends the session on the spot.  Asteroids never
/// destroy each other.
pub fn resolve_collisions(state: &Session) -> Session {
    if state.is_over() {
        return state.clone();
    }
    let mut next = state.clone();
    let score_per_hit = state.config.score_per_hit;

    // ── 1. Projectiles ↔ asteroids ───────────────────────────────────────────
    for handle in next.projectiles.handles() {
        let Some(projectile) = next.projectiles.get(handle).cloned() else {
            continue;
        };
        let target = next
            .asteroids
            .iter_active()
            .find(|(_, asteroid)| bodies_overlap(&projectile, asteroid))
            .map(|(h, _)| h);
        if let Some(target) = target {
            next.projectiles.release(handle);
            next.asteroids.release(target);
            next.score += score_per_hit;
            next.cues.push(AudioCue::Hit);
        }
    }

    // ── 2. Player ↔ asteroids ────────────────────────────────────────────────
    let player_hit = next.player.alive
        && next
            .asteroids
            .iter_active()
            .any(|(_, asteroid)| player_overlaps(&next.player, asteroid));
    if player_hit {
        info!("player hit at {}s, final score {}", next.elapsed_secs(), next.score);
        next.player.alive = false;
        next.player.vx = 0.0;
        next.outcome = Some(Outcome::PlayerHit);
        next.cues.push(AudioCue::StopMusic);
    }

    next
}

// ── Session clock ────────────────────────────────────────────────────────────

pub fn advance_clock(state: &Session, dt_ms: u64) -> Session {
    Session {
        elapsed_ms: state.elapsed_ms + dt_ms,
        ..state.clone()
    }
}

/// Timeout first, then the win threshold.  No-op once an outcome is set.
pub fn evaluate_termination(state: &Session) -> Session {
    if state.is_over() {
        return state.clone();
    }
    let cfg = &state.config;
    let outcome = if state.elapsed_secs() >= cfg.time_limit_secs {
        Some(Outcome::Timeout)
    } else if cfg.win_score.is_some_and(|target| state.score >= target) {
        Some(Outcome::Win)
    } else {
        None
    };

    let Some(outcome) = outcome else {
        return state.clone();
    };
    info!("session ended: {outcome:?} at {}s with score {}", state.elapsed_secs(), state.score);
    let mut next = state.clone();
    next.outcome = Some(outcome);
    next.cues.push(AudioCue::StopMusic);
    next
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the session by `dt_ms`.  All randomness comes through `rng` so
/// callers control determinism.  A finished session is returned unchanged.
pub fn tick(state: &Session, input: &Input, dt_ms: u64, rng: &mut impl Rng) -> Session {
    if state.is_over() {
        return state.clone();
    }
    let next = Session {
        cues: Vec::new(),
        ..state.clone()
    };
    let next = advance_clock(&next, dt_ms);
    let next = steer_player(&next, input);
    let next = handle_fire(&next, input);
    let next = run_spawner(&next, dt_ms, rng);
    let next = move_and_collide(&next, dt_ms);
    evaluate_termination(&next)
}

/// Motion and contact resolution in sub-steps of at most `max_substep_ms`.
/// Stops early once a contact ends the session.
pub fn move_and_collide(state: &Session, dt_ms: u64) -> Session {
    let substep = match state.config.max_substep_ms {
        0 => dt_ms.max(1),
        ms => ms,
    };
    let mut next = state.clone();
    let mut remaining = dt_ms;
    loop {
        let step = remaining.min(substep);
        next = resolve_collisions(&advance_bodies(&next, step));
        remaining -= step;
        if remaining == 0 || next.is_over() {
            return next;
        }
    }
}
