/// Scene state machine: Boot → Title → Gameplay → {GameOver | Win} → Gameplay.
///
/// Each scene owns its data.  Leaving Gameplay drops the session and with it
/// every pool, the player and all pending timers; only the score crosses
/// into the terminal scene.

use log::{debug, info, warn};
use rand::Rng;

use crate::compute::{init_session, tick};
use crate::config::GameConfig;
use crate::entities::{AudioCue, Input, Outcome, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Boot,
    Title,
    Gameplay,
    GameOver,
    Win,
}

#[derive(Clone, Debug, Default)]
pub enum Scene {
    #[default]
    Boot,
    Title,
    Gameplay(Box<Session>),
    GameOver { score: u32 },
    Win { score: u32 },
}

/// Host signals that move between scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    AssetsLoaded,
    /// Generic click / confirm.
    Activate,
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Boot => SceneKind::Boot,
            Scene::Title => SceneKind::Title,
            Scene::Gameplay(_) => SceneKind::Gameplay,
            Scene::GameOver { .. } => SceneKind::GameOver,
            Scene::Win { .. } => SceneKind::Win,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Scene::Gameplay(session) => Some(session),
            _ => None,
        }
    }

    /// Live score during play, final score on the terminal screens.
    pub fn score(&self) -> Option<u32> {
        match self {
            Scene::Gameplay(session) => Some(session.score),
            Scene::GameOver { score } | Scene::Win { score } => Some(*score),
            Scene::Boot | Scene::Title => None,
        }
    }

    /// A fresh gameplay scene.  Nothing from an earlier run carries over.
    pub fn start_gameplay(config: &GameConfig) -> (Scene, Vec<AudioCue>) {
        info!("entering gameplay");
        let session = init_session(config);
        (Scene::Gameplay(Box::new(session)), vec![AudioCue::StartMusic])
    }

    /// The terminal scene for `outcome`.  A missing score falls back to 0.
    pub fn finish(outcome: Outcome, score: Option<u32>) -> Scene {
        let score = score.unwrap_or_else(|| {
            warn!("terminal scene entered without a score; showing 0");
            0
        });
        info!("entering {} with score {score}", if outcome.is_win() { "win" } else { "game over" });
        if outcome.is_win() {
            Scene::Win { score }
        } else {
            Scene::GameOver { score }
        }
    }

    /// Apply a host event.  Events that mean nothing in the current scene
    /// leave it untouched.
    pub fn handle(self, event: SceneEvent, config: &GameConfig) -> (Scene, Vec<AudioCue>) {
        match (self, event) {
            (Scene::Boot, SceneEvent::AssetsLoaded) => {
                info!("assets loaded; showing title");
                (Scene::Title, Vec::new())
            }
            (Scene::Title | Scene::GameOver { .. } | Scene::Win { .. }, SceneEvent::Activate) => {
                Scene::start_gameplay(config)
            }
            (scene, event) => {
                debug!("{event:?} ignored in {:?}", scene.kind());
                (scene, Vec::new())
            }
        }
    }

    /// Advance one tick.  Only gameplay has per-tick work; when its session
    /// ends the scene is replaced by GameOver or Win.
    pub fn update(self, input: &Input, dt_ms: u64, rng: &mut impl Rng) -> (Scene, Vec<AudioCue>) {
        let session = match self {
            Scene::Gameplay(session) => session,
            other => return (other, Vec::new()),
        };
        let next = tick(&session, input, dt_ms, rng);
        let cues = next.cues.clone();
        match next.outcome {
            Some(outcome) => (Scene::finish(outcome, Some(next.score)), cues),
            None => (Scene::Gameplay(Box::new(next)), cues),
        }
    }
}
