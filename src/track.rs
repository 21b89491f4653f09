use nalgebra as na;
use tracing::{trace, warn};

use crate::error::Error;
use crate::state::TrackState;

pub type TrackId = i64;

/// Window length fixed-window models consume by default.
pub const DEFAULT_TIMESTEP_LEN: usize = 6;

/// Time-ordered history of states for one identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    track_id: TrackId,
    states: Vec<TrackState>,
    max_conf: f32,
}

impl Track {
    pub fn new(track_id: TrackId) -> Self {
        Self {
            track_id,
            states: Vec::new(),
            max_conf: 0.0,
        }
    }

    #[inline]
    pub fn track_id(&self) -> TrackId {
        self.track_id
    }

    #[inline]
    pub fn max_conf(&self) -> f32 {
        self.max_conf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&TrackState, Error> {
        self.states.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.states.len(),
        })
    }

    #[inline]
    pub fn first(&self) -> Option<&TrackState> {
        self.states.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&TrackState> {
        self.states.last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TrackState> {
        self.states.iter()
    }

    /// Appends `state` to the history.
    ///
    /// Motion is the displacement of the reference point since the previous
    /// state, zero for the first one. The state is stamped with this track's id.
    /// A state whose reference point is not 2-D is rejected and the track is
    /// left untouched.
    pub fn append(&mut self, mut state: TrackState) -> Result<(), Error> {
        let cur = state.ref_vector().map_err(|err| {
            warn!(track_id = self.track_id, "rejected state: {}", err);
            err
        })?;

        let motion = match self.states.last() {
            Some(prev) => cur - prev.ref_vector()?,
            None => na::Vector2::zeros(),
        };

        state.set_motion_feature(motion);
        state.set_track_id(self.track_id);
        self.max_conf = self.max_conf.max(state.conf());
        self.states.push(state);

        trace!(track_id = self.track_id, len = self.states.len(), "state appended");

        Ok(())
    }

    /// Returns an independent copy whose history is left-padded with the
    /// first state until it holds `timestep_len` states. Longer histories are
    /// copied whole, not truncated.
    pub fn duplicate_track_state(&self, timestep_len: usize) -> Result<Track, Error> {
        let first = self.states.first().ok_or(Error::EmptyTrack(self.track_id))?;
        let padding = timestep_len.saturating_sub(self.states.len());

        let mut states = Vec::with_capacity(padding + self.states.len());
        states.extend(std::iter::repeat(first).take(padding).cloned());
        states.extend(self.states.iter().cloned());

        Ok(Track {
            track_id: self.track_id,
            states,
            max_conf: self.max_conf,
        })
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackState;
    type IntoIter = std::slice::Iter<'a, TrackState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
