//! Common helpers for track set integration tests

#![allow(dead_code)]

use ndarray::arr1;
use std::sync::Arc;
use trackstate::bbox::BBox;
use trackstate::{Detection, TrackState};

/// Detection centered at (x, y) with a unit box
pub fn make_detection(x: f32, y: f32, confidence: f32) -> Arc<Detection> {
    Arc::new(Detection {
        x,
        y,
        w: 1.0,
        h: 1.0,
        confidence,
        class: 0,
    })
}

/// State whose reference point is exactly (x, y)
pub fn make_state(frame_id: i64, x: f32, y: f32) -> TrackState {
    TrackState::new(
        frame_id,
        arr1(&[x, y]),
        arr1(&[x, y]),
        arr1(&[0.0; 4]),
        arr1(&[frame_id as f32; 8]),
        BBox::ltwh(x - 0.5, y - 0.5, 1.0, 1.0),
        BBox::ltwh(x - 0.5, y - 0.5, 1.0, 1.0),
        make_detection(x, y, 0.7),
        1000 + frame_id,
        frame_id as f64 / 25.0,
    )
}
