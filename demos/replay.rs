//! Replays a JSON-lines file of already associated detections through a
//! `TrackSet` and prints each active track's padded motion window.
//!
//! One line per frame:
//! `{"frame": 0, "time": 0.0, "objects": [{"id": 1, "det": {"x":..,"y":..,"w":..,"h":..,"p":..,"c":..}}]}`

use ndarray::Array1;
use serde_derive::Deserialize;
use std::io::BufRead;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trackstate::{Config, Detection, TrackId, TrackSet, TrackState};

#[derive(Deserialize)]
struct FrameRecord {
    frame: i64,
    time: f64,
    objects: Vec<AssociatedDetection>,
}

#[derive(Deserialize)]
struct AssociatedDetection {
    id: TrackId,
    det: Detection,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let in_file_name = args.next().ok_or("expected detections file name")?;
    let config = match args.next() {
        Some(path) => Config::from_json_str(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    let reader = std::io::BufReader::new(std::fs::File::open(in_file_name)?);
    let mut tracks = TrackSet::with_config(config);

    for (seq, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: FrameRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(err) => {
                warn!(line = seq + 1, "wrong file format: {}", err);
                continue;
            }
        };

        // only ids seen in this frame stay active
        tracks.deactivate_all_tracks();

        for obj in record.objects {
            let state = TrackState::from_detection(
                seq as i64,
                Arc::new(obj.det),
                Array1::zeros(0),
                Array1::zeros(0),
                record.frame,
                record.time,
            );

            if let Err(err) = tracks.observe(obj.id, state) {
                warn!(track_id = obj.id, "skipped detection: {}", err);
            }
        }

        for track in tracks.iter_active() {
            let window = tracks.duplicate_track_state(track.track_id())?;
            let motion: Vec<_> = window
                .iter()
                .map(|s| (s.motion_feature().x, s.motion_feature().y))
                .collect();

            println!("{} {} {:?}", record.frame, track.track_id(), motion);
        }
    }

    info!(
        tracks = tracks.len(),
        max_id = tracks.get_max_track_id(),
        "replay finished"
    );

    Ok(())
}
