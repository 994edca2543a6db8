use space_shooter::compute::init_session;
use space_shooter::config::GameConfig;
use space_shooter::entities::*;
use space_shooter::scene::{Scene, SceneEvent, SceneKind};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn quiet_config() -> GameConfig {
    GameConfig {
        asteroid_pool_size: 0,
        ..GameConfig::default()
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn title(config: &GameConfig) -> Scene {
    Scene::default().handle(SceneEvent::AssetsLoaded, config).0
}

// ── transitions ───────────────────────────────────────────────────────────────

#[test]
fn starts_in_boot() {
    assert_eq!(Scene::default().kind(), SceneKind::Boot);
}

#[test]
fn boot_waits_for_assets() {
    let config = GameConfig::default();
    let (scene, cues) = Scene::default().handle(SceneEvent::Activate, &config);
    assert_eq!(scene.kind(), SceneKind::Boot);
    assert!(cues.is_empty());

    let (scene, _) = scene.handle(SceneEvent::AssetsLoaded, &config);
    assert_eq!(scene.kind(), SceneKind::Title);
}

#[test]
fn title_activate_starts_fresh_gameplay() {
    let config = GameConfig::default();
    let (scene, cues) = title(&config).handle(SceneEvent::Activate, &config);
    assert_eq!(scene.kind(), SceneKind::Gameplay);
    assert_eq!(cues, vec![AudioCue::StartMusic]);
    let session = scene.session().unwrap();
    assert_eq!(session.score, 0);
    assert_eq!(session.elapsed_ms, 0);
}

#[test]
fn assets_loaded_outside_boot_is_ignored() {
    let config = GameConfig::default();
    let (scene, _) = title(&config).handle(SceneEvent::AssetsLoaded, &config);
    assert_eq!(scene.kind(), SceneKind::Title);
}

#[test]
fn activate_during_gameplay_is_ignored() {
    let config = GameConfig::default();
    let (scene, _) = title(&config).handle(SceneEvent::Activate, &config);
    let (scene, _) = scene.update(&Input::default(), 500, &mut seeded_rng());
    let (scene, cues) = scene.handle(SceneEvent::Activate, &config);
    assert_eq!(scene.kind(), SceneKind::Gameplay);
    assert!(cues.is_empty());
    assert_eq!(scene.session().unwrap().elapsed_ms, 500);
}

#[test]
fn menus_have_no_per_tick_work() {
    let config = GameConfig::default();
    let (scene, cues) = title(&config).update(&Input::default(), 1000, &mut seeded_rng());
    assert_eq!(scene.kind(), SceneKind::Title);
    assert!(cues.is_empty());
}

// ── terminal scenes ───────────────────────────────────────────────────────────

#[test]
fn idle_run_ends_in_game_over_with_zero() {
    let config = quiet_config();
    let mut rng = seeded_rng();
    let (mut scene, _) = title(&config).handle(SceneEvent::Activate, &config);
    let mut last_cues = Vec::new();
    for _ in 0..120 {
        let (next, cues) = scene.update(&Input::default(), 1000, &mut rng);
        scene = next;
        last_cues = cues;
    }
    assert_eq!(scene.kind(), SceneKind::GameOver);
    assert_eq!(scene.score(), Some(0));
    assert!(scene.session().is_none());
    assert_eq!(last_cues, vec![AudioCue::StopMusic]);
}

#[test]
fn reaching_threshold_shows_win() {
    let mut session = init_session(&GameConfig::default());
    session.score = 190;
    let p = session.projectiles.acquire(200.0, 300.0).unwrap();
    session.projectiles.get_mut(p).unwrap().size = (6.0, 18.0);
    let a = session.asteroids.acquire(200.0, 300.0).unwrap();
    session.asteroids.get_mut(a).unwrap().size = (32.0, 32.0);

    let scene = Scene::Gameplay(Box::new(session));
    let (scene, cues) = scene.update(&Input::default(), 16, &mut seeded_rng());
    assert_eq!(scene.kind(), SceneKind::Win);
    assert_eq!(scene.score(), Some(200));
    assert!(cues.contains(&AudioCue::Hit));
}

#[test]
fn player_hit_shows_game_over_with_score() {
    let mut session = init_session(&GameConfig::default());
    session.score = 70;
    let a = session.asteroids.acquire(400.0, 550.0).unwrap();
    session.asteroids.get_mut(a).unwrap().size = (32.0, 32.0);

    let (scene, _) = Scene::Gameplay(Box::new(session)).update(&Input::default(), 16, &mut seeded_rng());
    assert_eq!(scene.kind(), SceneKind::GameOver);
    assert_eq!(scene.score(), Some(70));
}

#[test]
fn finish_defaults_missing_score_to_zero() {
    let scene = Scene::finish(Outcome::Timeout, None);
    assert_eq!(scene.kind(), SceneKind::GameOver);
    assert_eq!(scene.score(), Some(0));
}

#[test]
fn finish_routes_outcomes() {
    assert_eq!(Scene::finish(Outcome::Win, Some(210)).kind(), SceneKind::Win);
    assert_eq!(Scene::finish(Outcome::PlayerHit, Some(10)).kind(), SceneKind::GameOver);
    assert_eq!(Scene::finish(Outcome::Timeout, Some(10)).kind(), SceneKind::GameOver);
}

// ── restart ───────────────────────────────────────────────────────────────────

#[test]
fn restart_from_game_over_starts_clean() {
    let config = GameConfig::default();
    let (scene, cues) = Scene::GameOver { score: 30 }.handle(SceneEvent::Activate, &config);
    assert_eq!(cues, vec![AudioCue::StartMusic]);
    let session = scene.session().unwrap();
    assert_eq!(session.score, 0);
    assert_eq!(session.elapsed_ms, 0);
    assert_eq!(session.projectiles.active_count(), 0);
    assert_eq!(session.asteroids.active_count(), 0);
    assert!(session.player.alive);
}

#[test]
fn restart_from_win() {
    let config = GameConfig::default();
    let (scene, _) = Scene::Win { score: 200 }.handle(SceneEvent::Activate, &config);
    assert_eq!(scene.kind(), SceneKind::Gameplay);
    assert_eq!(scene.score(), Some(0));
}
