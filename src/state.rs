use nalgebra as na;
use ndarray::{arr1, Array1};
use std::sync::Arc;

use crate::bbox::{BBox, Ltwh};
use crate::track::TrackId;
use crate::Detection;

/// One frame's worth of data for one track.
///
/// Built once from detector and feature extractor output and stored as is.
/// `motion_feature` and `track_id` are filled in by [`crate::Track::append`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackState {
    frame_id: i64,
    sys_frame_id: i64,
    // in seconds
    sys_frame_time: f64,

    bbox_center: Array1<f32>,
    ref_point: Array1<f32>,

    bbox: BBox<Ltwh>,
    ref_bbox: BBox<Ltwh>,

    app_feature: Array1<f32>,
    interaction_feature: Array1<f32>,
    motion_feature: na::Vector2<f32>,
    bbar_feature: na::Vector2<f32>,

    conf: f32,
    detected_object: Arc<Detection>,
    track_id: Option<TrackId>,
}

impl TrackState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        frame_id: i64,
        bbox_center: Array1<f32>,
        ref_point: Array1<f32>,
        interaction_feature: Array1<f32>,
        app_feature: Array1<f32>,
        bbox: BBox<Ltwh>,
        ref_bbox: BBox<Ltwh>,
        detected_object: Arc<Detection>,
        sys_frame_id: i64,
        sys_frame_time: f64,
    ) -> Self {
        Self {
            frame_id,
            sys_frame_id,
            sys_frame_time,
            bbox_center,
            ref_point,
            bbox,
            ref_bbox,
            app_feature,
            interaction_feature,
            motion_feature: na::Vector2::zeros(),
            bbar_feature: na::Vector2::zeros(),
            // upstream confidence is not wired through yet
            conf: 1.0,
            detected_object,
            track_id: None,
        }
    }

    /// Builds a state straight from a detection, using the box center and
    /// the ground-contact point as reference. Both boxes are the detection box.
    pub fn from_detection(
        frame_id: i64,
        detection: Arc<Detection>,
        interaction_feature: Array1<f32>,
        app_feature: Array1<f32>,
        sys_frame_id: i64,
        sys_frame_time: f64,
    ) -> Self {
        let bbox = detection.bbox();
        let center = bbox.center();
        let ground = bbox.bottom_center();

        Self::new(
            frame_id,
            arr1(&[center.x, center.y]),
            arr1(&[ground.x, ground.y]),
            interaction_feature,
            app_feature,
            bbox,
            bbox,
            detection,
            sys_frame_id,
            sys_frame_time,
        )
    }

    #[inline]
    pub fn with_confidence(mut self, conf: f32) -> Self {
        self.conf = conf;
        self
    }

    #[inline]
    pub fn frame_id(&self) -> i64 {
        self.frame_id
    }

    #[inline]
    pub fn sys_frame_id(&self) -> i64 {
        self.sys_frame_id
    }

    #[inline]
    pub fn sys_frame_time(&self) -> f64 {
        self.sys_frame_time
    }

    #[inline]
    pub fn bbox_center(&self) -> &Array1<f32> {
        &self.bbox_center
    }

    #[inline]
    pub fn ref_point(&self) -> &Array1<f32> {
        &self.ref_point
    }

    #[inline]
    pub fn bbox(&self) -> &BBox<Ltwh> {
        &self.bbox
    }

    #[inline]
    pub fn ref_bbox(&self) -> &BBox<Ltwh> {
        &self.ref_bbox
    }

    #[inline]
    pub fn app_feature(&self) -> &Array1<f32> {
        &self.app_feature
    }

    #[inline]
    pub fn interaction_feature(&self) -> &Array1<f32> {
        &self.interaction_feature
    }

    #[inline]
    pub fn motion_feature(&self) -> &na::Vector2<f32> {
        &self.motion_feature
    }

    #[inline]
    pub fn bbar_feature(&self) -> &na::Vector2<f32> {
        &self.bbar_feature
    }

    #[inline]
    pub fn conf(&self) -> f32 {
        self.conf
    }

    #[inline]
    pub fn detected_object(&self) -> &Arc<Detection> {
        &self.detected_object
    }

    #[inline]
    pub fn track_id(&self) -> Option<TrackId> {
        self.track_id
    }

    /// Reference point as a fixed 2-vector, or an error when it does not
    /// hold exactly two coordinates.
    pub(crate) fn ref_vector(&self) -> Result<na::Vector2<f32>, crate::Error> {
        if self.ref_point.len() != 2 {
            return Err(crate::Error::InvalidObservation(format!(
                "reference point must have 2 coordinates, got {}",
                self.ref_point.len()
            )));
        }

        Ok(na::Vector2::new(self.ref_point[0], self.ref_point[1]))
    }

    #[inline]
    pub(crate) fn set_motion_feature(&mut self, motion: na::Vector2<f32>) {
        self.motion_feature = motion;
    }

    #[inline]
    pub(crate) fn set_track_id(&mut self, track_id: TrackId) {
        self.track_id = Some(track_id);
    }

    #[inline]
    pub(crate) fn set_conf(&mut self, conf: f32) {
        self.conf = conf;
    }
}
