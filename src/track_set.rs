use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Error;
use crate::state::TrackState;
use crate::track::{Track, TrackId};

/// Owns every track of a tracking run and knows which of them are active.
///
/// Tracks are never removed, only deactivated; a dormant identity comes back
/// through `make_track(id, true)`. Active ids are kept in the order they were
/// (re)activated.
#[derive(Debug, Clone, Default)]
pub struct TrackSet {
    config: Config,
    tracks: IndexMap<TrackId, Track>,
    active: IndexSet<TrackId>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            tracks: IndexMap::new(),
            active: IndexSet::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn contains(&self, track_id: TrackId) -> bool {
        self.tracks.contains_key(&track_id)
    }

    #[inline]
    pub fn is_active(&self, track_id: TrackId) -> bool {
        self.active.contains(&track_id)
    }

    pub fn get(&self, track_id: TrackId) -> Result<&Track, Error> {
        self.tracks
            .get(&track_id)
            .ok_or(Error::TrackNotFound(track_id))
    }

    pub fn get_mut(&mut self, track_id: TrackId) -> Result<&mut Track, Error> {
        self.tracks
            .get_mut(&track_id)
            .ok_or(Error::TrackNotFound(track_id))
    }

    /// All known ids, active or not, in ascending order.
    pub fn get_all_track_id(&self) -> Vec<TrackId> {
        let mut ids: Vec<_> = self.tracks.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Largest id ever allocated, 0 for an empty set.
    pub fn get_max_track_id(&self) -> TrackId {
        self.tracks.keys().copied().max().unwrap_or(0)
    }

    /// Creates an empty track with `track_id`, marks it active and returns it.
    ///
    /// If the id is already known the call fails with `DuplicateTrackId`,
    /// unless `exist_ok` is set, in which case the existing track is marked
    /// active again and returned with its history untouched.
    pub fn make_track(&mut self, track_id: TrackId, exist_ok: bool) -> Result<&mut Track, Error> {
        if self.tracks.contains_key(&track_id) {
            if !exist_ok {
                warn!(track_id, "track id already exists");
                return Err(Error::DuplicateTrackId(track_id));
            }

            if !self.active.contains(&track_id) {
                debug!(track_id, "track reactivated");
            }
        } else {
            self.tracks.insert(track_id, Track::new(track_id));
            debug!(track_id, "track created");
        }

        // re-inserting an active id keeps its position
        self.active.insert(track_id);

        self.get_mut(track_id)
    }

    pub fn deactivate_track(&mut self, track_id: TrackId) -> Result<(), Error> {
        if !self.active.shift_remove(&track_id) {
            return Err(Error::NotActive(track_id));
        }

        debug!(track_id, "track deactivated");
        Ok(())
    }

    pub fn deactivate_all_tracks(&mut self) {
        debug!(count = self.active.len(), "all tracks deactivated");
        self.active.clear();
    }

    /// Drops every track, for starting an independent run with the same config.
    pub fn reset(&mut self) {
        debug!(count = self.tracks.len(), "track set reset");
        self.tracks.clear();
        self.active.clear();
    }

    /// Records `state` as the next observation of `track_id`, creating or
    /// reactivating the track as needed. Nothing changes if the state is
    /// malformed.
    pub fn observe(&mut self, track_id: TrackId, mut state: TrackState) -> Result<&Track, Error> {
        if let Err(err) = state.ref_vector() {
            warn!(track_id, "rejected state: {}", err);
            return Err(err);
        }

        if self.config.use_detection_confidence {
            let conf = state.detected_object().confidence;
            state.set_conf(conf);
        }

        let track = self.make_track(track_id, true)?;
        track.append(state)?;

        Ok(&*track)
    }

    /// Padded copy of the track's history, sized to the configured window.
    pub fn duplicate_track_state(&self, track_id: TrackId) -> Result<Track, Error> {
        self.get(track_id)?
            .duplicate_track_state(self.config.timestep_len)
    }

    /// Every track in creation order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Values<'_, TrackId, Track> {
        self.tracks.values()
    }

    /// Active tracks in activation order.
    pub fn iter_active(&self) -> impl Iterator<Item = &Track> + '_ {
        self.active.iter().filter_map(move |id| self.tracks.get(id))
    }
}

impl<'a> IntoIterator for &'a TrackSet {
    type Item = &'a Track;
    type IntoIter = indexmap::map::Values<'a, TrackId, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(tracks: impl Iterator<Item = &'a Track>) -> Vec<TrackId> {
        tracks.map(|t| t.track_id()).collect()
    }

    #[test]
    fn empty_set() {
        let set = TrackSet::new();

        assert!(set.is_empty());
        assert_eq!(set.get_max_track_id(), 0);
        assert!(set.get_all_track_id().is_empty());
        assert_eq!(set.active_count(), 0);
        assert!(matches!(set.get(1), Err(Error::TrackNotFound(1))));
    }

    #[test]
    fn ids_sorted_and_max() {
        let mut set = TrackSet::new();
        for id in [3, 7, 1] {
            set.make_track(id, false).unwrap();
        }

        assert_eq!(set.get_max_track_id(), 7);
        assert_eq!(set.get_all_track_id(), vec![1, 3, 7]);
        assert_eq!(ids(set.iter()), vec![3, 7, 1]);
    }

    #[test]
    fn duplicate_id() {
        let mut set = TrackSet::new();
        set.make_track(1, false).unwrap();
        set.deactivate_track(1).unwrap();

        assert!(matches!(
            set.make_track(1, false),
            Err(Error::DuplicateTrackId(1))
        ));
        // refused call leaves the id dormant
        assert!(!set.is_active(1));
        assert_eq!(set.len(), 1);

        set.make_track(1, true).unwrap();
        assert!(set.is_active(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn activation_order() {
        let mut set = TrackSet::new();
        for id in [1, 2, 3] {
            set.make_track(id, false).unwrap();
        }

        set.deactivate_track(1).unwrap();
        set.make_track(2, true).unwrap();
        set.make_track(1, true).unwrap();

        assert_eq!(ids(set.iter_active()), vec![2, 3, 1]);
        assert_eq!(ids(set.iter()), vec![1, 2, 3]);
    }

    #[test]
    fn deactivate() {
        let mut set = TrackSet::new();
        set.make_track(1, false).unwrap();
        set.make_track(2, false).unwrap();

        set.deactivate_track(1).unwrap();
        assert_eq!(set.active_count(), 1);
        assert!(matches!(set.deactivate_track(1), Err(Error::NotActive(1))));
        assert!(matches!(set.deactivate_track(9), Err(Error::NotActive(9))));
        assert!(set.get(1).is_ok());

        set.deactivate_all_tracks();
        assert_eq!(set.active_count(), 0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut set = TrackSet::new();
        set.make_track(4, false).unwrap();
        set.reset();

        assert!(set.is_empty());
        assert_eq!(set.active_count(), 0);
        set.make_track(4, false).unwrap();
    }
}
