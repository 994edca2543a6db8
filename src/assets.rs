/// Asset manifest consumed by the boot scene.
///
/// The core never loads bytes; it only checks that every named resource the
/// game refers to is declared with the right kind, and hands the host a
/// typed lookup for them.

use log::info;

use crate::entities::{AudioCue, EntityKind};
use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetEntry {
    pub key: String,
    pub kind: AssetKind,
    pub path: String,
}

#[derive(Clone, Debug, Default)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    /// The resources the game ships with.
    pub fn standard() -> Self {
        Self::default()
            .image("player", "./assets/player/player.png")
            .image("projectile", "./assets/objects/projectile.png")
            .image("asteroid", "./assets/objects/asteroid.png")
            .audio("bgMusic", "./assets/audio/bgmusic.mp3")
            .audio("shootSound", "./assets/audio/shootSound.mp3")
            .audio("hitSound", "./assets/audio/hitSound.mp3")
    }

    pub fn image(self, key: &str, path: &str) -> Self {
        self.with(key, AssetKind::Image, path)
    }

    pub fn audio(self, key: &str, path: &str) -> Self {
        self.with(key, AssetKind::Audio, path)
    }

    fn with(mut self, key: &str, kind: AssetKind, path: &str) -> Self {
        self.entries.push(AssetEntry {
            key: key.to_string(),
            kind,
            path: path.to_string(),
        });
        self
    }

    pub fn get(&self, key: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn require(&self, key: &str, expected: AssetKind) -> Result<AssetEntry, GameError> {
        let entry = self.get(key).ok_or_else(|| GameError::MissingAsset {
            key: key.to_string(),
        })?;
        if entry.kind != expected {
            return Err(GameError::WrongAssetKind {
                key: key.to_string(),
                expected,
                found: entry.kind,
            });
        }
        Ok(entry.clone())
    }

    /// Check every required key.  The first missing or mistyped entry is
    /// returned as an error; a failed boot is fatal to the host.
    pub fn resolve(&self) -> Result<Assets, GameError> {
        let assets = Assets {
            player: self.require("player", AssetKind::Image)?,
            projectile: self.require("projectile", AssetKind::Image)?,
            asteroid: self.require("asteroid", AssetKind::Image)?,
            music: self.require("bgMusic", AssetKind::Audio)?,
            shoot: self.require("shootSound", AssetKind::Audio)?,
            hit: self.require("hitSound", AssetKind::Audio)?,
        };
        info!("resolved {} assets", self.len());
        Ok(assets)
    }
}

/// Resolved resources, one field per role.
#[derive(Clone, Debug)]
pub struct Assets {
    pub player: AssetEntry,
    pub projectile: AssetEntry,
    pub asteroid: AssetEntry,
    pub music: AssetEntry,
    pub shoot: AssetEntry,
    pub hit: AssetEntry,
}

impl Assets {
    pub fn sprite(&self, kind: EntityKind) -> &AssetEntry {
        match kind {
            EntityKind::Projectile => &self.projectile,
            EntityKind::Asteroid => &self.asteroid,
        }
    }

    /// The sound a cue plays.  Starting and stopping both refer to the music.
    pub fn sound(&self, cue: AudioCue) -> &AssetEntry {
        match cue {
            AudioCue::StartMusic | AudioCue::StopMusic => &self.music,
            AudioCue::Shoot => &self.shoot,
            AudioCue::Hit => &self.hit,
        }
    }
}
