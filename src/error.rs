//! Errors raised while setting up a game
//!
//! The simulation tick itself never fails; only loading tuning data and
//! building the initial body set from scene geometry can.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a [`crate::Tuning`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// A game could not be built from the given scene and tuning
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene has no body with the player id `{0}`")]
    MissingPlayer(String),
    #[error("scene has more than one body with the player id `{0}`")]
    DuplicatePlayer(String),
    #[error("scene body `{id}` has non-positive dimensions ({width}, {height})")]
    BadDimensions { id: String, width: f32, height: f32 },
    #[error(transparent)]
    Tuning(#[from] ConfigError),
}
