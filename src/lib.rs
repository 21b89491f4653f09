//! Per-identity observation histories for multi-object video tracking.
//!
//! A [`TrackSet`] owns one [`Track`] per identity; each track is an
//! append-only list of [`TrackState`]s with motion derived on insert.
//! Detection and association live outside this crate: the caller decides
//! which id a detection belongs to and records it here.

pub mod bbox;
pub mod config;
pub mod detection;
pub mod error;
pub mod state;
pub mod track;
pub mod track_set;

pub use config::Config;
pub use detection::Detection;
pub use error::Error;
pub use state::TrackState;
pub use track::{Track, TrackId, DEFAULT_TIMESTEP_LEN};
pub use track_set::TrackSet;
