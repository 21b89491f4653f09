use thiserror::Error;

use crate::track::TrackId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("track id {0} already exists in the track set")]
    DuplicateTrackId(TrackId),

    #[error("track id {0} not found")]
    TrackNotFound(TrackId),

    #[error("index {index} out of range for track of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("track id {0} is not active")]
    NotActive(TrackId),

    #[error("invalid observation: {0}")]
    InvalidObservation(String),

    #[error("track {0} has no states to duplicate")]
    EmptyTrack(TrackId),

    #[error("Config Error: {0}")]
    Config(#[from] serde_json::Error),
}
