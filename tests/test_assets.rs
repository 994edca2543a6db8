use space_shooter::assets::{AssetKind, AssetManifest};
use space_shooter::entities::{AudioCue, EntityKind};
use space_shooter::error::GameError;

#[test]
fn standard_manifest_resolves() {
    let manifest = AssetManifest::standard();
    assert_eq!(manifest.len(), 6);
    let assets = manifest.resolve().unwrap();
    assert_eq!(assets.player.path, "./assets/player/player.png");
    assert_eq!(assets.music.kind, AssetKind::Audio);
}

#[test]
fn cues_and_sprites_map_to_entries() {
    let assets = AssetManifest::standard().resolve().unwrap();
    assert_eq!(assets.sound(AudioCue::Shoot).key, "shootSound");
    assert_eq!(assets.sound(AudioCue::Hit).key, "hitSound");
    assert_eq!(assets.sound(AudioCue::StartMusic).key, "bgMusic");
    assert_eq!(assets.sound(AudioCue::StopMusic).key, "bgMusic");
    assert_eq!(assets.sprite(EntityKind::Asteroid).key, "asteroid");
    assert_eq!(assets.sprite(EntityKind::Projectile).key, "projectile");
}

#[test]
fn missing_asset_is_an_error() {
    let manifest = AssetManifest::default()
        .image("player", "p.png")
        .image("projectile", "b.png")
        .image("asteroid", "a.png")
        .audio("bgMusic", "m.mp3")
        .audio("shootSound", "s.mp3");
    let err = manifest.resolve().unwrap_err();
    assert!(matches!(err, GameError::MissingAsset { ref key } if key == "hitSound"));
    assert_eq!(err.to_string(), "asset `hitSound` is missing from the manifest");
}

#[test]
fn wrong_kind_is_an_error() {
    let manifest = AssetManifest::default()
        .audio("player", "p.mp3")
        .image("projectile", "b.png");
    let err = manifest.resolve().unwrap_err();
    assert!(matches!(
        err,
        GameError::WrongAssetKind {
            expected: AssetKind::Image,
            found: AssetKind::Audio,
            ..
        }
    ));
}

#[test]
fn empty_manifest_fails_on_first_key() {
    let manifest = AssetManifest::default();
    assert!(manifest.is_empty());
    assert!(matches!(
        manifest.resolve(),
        Err(GameError::MissingAsset { key }) if key == "player"
    ));
}
