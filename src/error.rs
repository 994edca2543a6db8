use thiserror::Error;

use crate::assets::AssetKind;

/// Failures the host cannot recover from.  Gameplay itself never errors.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("asset `{key}` is missing from the manifest")]
    MissingAsset { key: String },

    #[error("asset `{key}` should be {expected:?} but the manifest lists {found:?}")]
    WrongAssetKind {
        key: String,
        expected: AssetKind,
        found: AssetKind,
    },
}
